use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactError;
use crate::modules::contact::domain::ContactForm;
use crate::AppState;

pub const CONTACT_PATH: &str = "/api/contact";
pub const CONTACT_BODY_LIMIT: usize = 16 * 1024;

const THANK_YOU: &str = "Thank you for your message. I will get back to you within 24-48 hours.";
const INTERNAL_ERROR: &str = "Internal server error. Please try again later.";

/// Contact form fields. Missing or non-string fields are treated as empty.
#[derive(Serialize, ToSchema)]
pub struct ContactRequestDto {
    /// At least 2 characters
    #[schema(example = "Bob Smith")]
    pub name: String,

    #[schema(example = "bob@example.com")]
    pub email: String,

    /// Must not be empty
    #[schema(example = "Consulting enquiry")]
    pub subject: String,

    /// At least 10 characters
    #[schema(example = "Could we talk about a Rust migration next month?")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactAcceptedResponse {
    #[schema(example = true)]
    pub success: bool,

    #[schema(example = "Thank you for your message. I will get back to you within 24-48 hours.")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactErrorResponse {
    #[schema(example = "Validation failed")]
    pub error: String,

    /// Present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ContactErrorResponse {
    fn new(error: &str) -> Self {
        Self {
            error: error.to_string(),
            details: None,
        }
    }
}

/// `/api/contact` accepts POST only. Every other method gets 405.
/// Bodies over [`CONTACT_BODY_LIMIT`] get 413.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource(CONTACT_PATH)
            .app_data(web::PayloadConfig::new(CONTACT_BODY_LIMIT))
            .route(web::post().to(submit_contact_handler))
            .default_service(web::to(method_not_allowed)),
    );
}

async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().json(ContactErrorResponse::new("Method not allowed"))
}

fn is_json(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("application/json"))
}

/// Submit the contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequestDto,
    responses(
        (status = 200, description = "Submission accepted", body = ContactAcceptedResponse),
        (status = 400, description = "Wrong content type or invalid fields", body = ContactErrorResponse),
        (status = 405, description = "Any method other than POST", body = ContactErrorResponse),
        (status = 413, description = "Body larger than 16 KiB", body = ContactErrorResponse),
        (status = 500, description = "Unreadable body or delivery failure", body = ContactErrorResponse),
    )
)]
pub async fn submit_contact_handler(
    req: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let body = match body {
        Ok(body) => body,
        Err(e) => {
            let status = e.as_response_error().status_code();
            warn!(error = %e, status = status.as_u16(), "Contact form body could not be read");
            let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
                "Request body too large"
            } else {
                INTERNAL_ERROR
            };
            return HttpResponse::build(status).json(ContactErrorResponse::new(message));
        }
    };

    if !is_json(&req) {
        return HttpResponse::BadRequest().json(ContactErrorResponse::new(
            "Content-Type must be application/json",
        ));
    }

    let json: Value = match serde_json::from_slice(&body) {
        Ok(json) => json,
        Err(e) => {
            error!(error = %e, "Contact form body is not valid JSON");
            return HttpResponse::InternalServerError()
                .json(ContactErrorResponse::new(INTERNAL_ERROR));
        }
    };

    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    match data
        .submit_contact_use_case
        .execute(ContactForm::from_json(&json), user_agent)
        .await
    {
        Ok(_) => HttpResponse::Ok().json(ContactAcceptedResponse {
            success: true,
            message: THANK_YOU.to_string(),
        }),
        Err(SubmitContactError::Validation(details)) => {
            warn!(problems = details.len(), "Contact form rejected");
            HttpResponse::BadRequest().json(ContactErrorResponse {
                error: "Validation failed".to_string(),
                details: Some(details),
            })
        }
        Err(SubmitContactError::Delivery(msg)) => {
            error!(error = %msg, "Contact form could not be delivered");
            HttpResponse::InternalServerError().json(ContactErrorResponse::new(INTERNAL_ERROR))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::json;

    use crate::modules::contact::application::services::SubmitContactService;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{FailingContactNotifier, RecordingContactNotifier};

    fn valid_body() -> Value {
        json!({
            "name": "Bob",
            "email": "bob@example.com",
            "subject": "Consulting",
            "message": "Can we talk about a Rust migration?"
        })
    }

    #[actix_web::test]
    async fn test_get_is_method_not_allowed() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/contact").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }

    #[actix_web::test]
    async fn test_short_message_and_missing_subject_in_one_response() {
        let notifier = RecordingContactNotifier::default();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_submit_contact(SubmitContactService::new(notifier.clone()))
                        .build(),
                )
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(json!({
                "name": "Bob",
                "email": "bob@example.com",
                "message": "Hello"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "error": "Validation failed",
                "details": [
                    "Subject is required",
                    "Message must be at least 10 characters"
                ]
            })
        );
        assert!(notifier.submissions().is_empty());
    }

    #[actix_web::test]
    async fn test_oversized_body_keeps_json_error_shape() {
        let notifier = RecordingContactNotifier::default();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_submit_contact(SubmitContactService::new(notifier.clone()))
                        .build(),
                )
                .configure(configure),
        )
        .await;

        let mut body = valid_body();
        body["message"] = json!("x".repeat(CONTACT_BODY_LIMIT + 1));

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Request body too large" }));
        assert!(notifier.submissions().is_empty());
    }

    #[actix_web::test]
    async fn test_wrong_content_type() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .insert_header((header::CONTENT_TYPE, "text/plain"))
            .set_payload(valid_body().to_string())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "error": "Content-Type must be application/json" })
        );
    }

    #[actix_web::test]
    async fn test_missing_content_type() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_payload(valid_body().to_string())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_internal_error() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .insert_header((header::CONTENT_TYPE, "application/json; charset=utf-8"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], INTERNAL_ERROR);
    }

    #[actix_web::test]
    async fn test_success_hands_sanitized_submission_to_notifier() {
        let notifier = RecordingContactNotifier::default();
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_submit_contact(SubmitContactService::new(notifier.clone()))
                        .build(),
                )
                .configure(configure),
        )
        .await;

        let mut body = valid_body();
        body["subject"] = json!("  <Consulting>  ");

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .insert_header((header::USER_AGENT, "Firefox/125.0"))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "success": true, "message": THANK_YOU }));

        let submissions = notifier.submissions();
        assert_eq!(submissions.len(), 1);
        assert_eq!(submissions[0].subject, "&lt;Consulting&gt;");
        assert_eq!(submissions[0].user_agent, "Firefox/125.0");
    }

    #[actix_web::test]
    async fn test_notifier_failure_is_internal_error() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_submit_contact(SubmitContactService::new(FailingContactNotifier))
                        .build(),
                )
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/contact")
            .set_json(valid_body())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": INTERNAL_ERROR }));
    }
}

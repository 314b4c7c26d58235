use actix_web::{get, web, Responder};

use super::load_site_or_response;
use crate::api::schemas::ErrorResponse;
use crate::modules::structured_data::json_ld::{person_json_ld, website_json_ld};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Person JSON-LD
///
/// Schema.org `Person` for the site owner, endorsed by every testimonial.
#[utoipa::path(
    get,
    path = "/api/structured-data/person",
    tag = "structured-data",
    responses(
        (status = 200, description = "Person JSON-LD inside the success envelope"),
        (status = 500, description = "Content could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/structured-data/person")]
pub async fn get_person_structured_data_handler(data: web::Data<AppState>) -> impl Responder {
    let site = match load_site_or_response(&data).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    ApiResponse::success(person_json_ld(
        &site.profile,
        &site.testimonials,
        &data.site,
    ))
}

/// WebSite JSON-LD
#[utoipa::path(
    get,
    path = "/api/structured-data/website",
    tag = "structured-data",
    responses(
        (status = 200, description = "WebSite JSON-LD inside the success envelope"),
        (status = 500, description = "Content could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/structured-data/website")]
pub async fn get_website_structured_data_handler(data: web::Data<AppState>) -> impl Responder {
    let site = match load_site_or_response(&data).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    ApiResponse::success(website_json_ld(&site.profile, &data.site))
}

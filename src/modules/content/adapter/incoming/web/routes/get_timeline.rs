use actix_web::{get, web, Responder};
use chrono::Utc;

use super::load_site_or_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::views::{timeline, TimelineYear};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Project timeline
///
/// Non-draft project cards grouped by start year, newest year first.
#[utoipa::path(
    get,
    path = "/api/projects/timeline",
    tag = "content",
    responses(
        (status = 200, description = "Projects grouped by year", body = inline(SuccessResponse<Vec<TimelineYear>>)),
        (status = 500, description = "Content could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/projects/timeline")]
pub async fn get_timeline_handler(data: web::Data<AppState>) -> impl Responder {
    let site = match load_site_or_response(&data).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    ApiResponse::success(timeline(&site, Utc::now().date_naive()))
}

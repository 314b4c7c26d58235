use actix_web::{get, web, Responder};
use chrono::Utc;

use super::load_site_or_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::views::{project_cards, ProjectCard};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Project cards
///
/// Every non-draft project, newest start first.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "content",
    responses(
        (status = 200, description = "Project cards", body = inline(SuccessResponse<Vec<ProjectCard>>)),
        (status = 500, description = "Content could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    let site = match load_site_or_response(&data).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    ApiResponse::success(project_cards(&site, Utc::now().date_naive()))
}

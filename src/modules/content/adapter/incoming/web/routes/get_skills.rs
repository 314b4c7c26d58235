use actix_web::{get, web, Responder};

use super::load_site_or_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::structured_data::display::{aggregate_skills, AggregatedSkill};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Skill matrix
///
/// Skills across non-draft projects with their best rating and usage count.
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "content",
    responses(
        (status = 200, description = "Aggregated skills", body = inline(SuccessResponse<Vec<AggregatedSkill>>)),
        (status = 500, description = "Content could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    let site = match load_site_or_response(&data).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    ApiResponse::success(aggregate_skills(site.public_projects()))
}

use actix_web::{get, web, Responder};
use chrono::Utc;

use super::load_site_or_response;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::content::application::views::ProfileView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public profile
///
/// Profile with a masked email, availability badge and years of experience.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "content",
    responses(
        (status = 200, description = "Profile view", body = inline(SuccessResponse<ProfileView>)),
        (status = 500, description = "Content could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    let site = match load_site_or_response(&data).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    ApiResponse::success(ProfileView::build(&site, Utc::now().date_naive()))
}

pub mod get_blog_structured_data;
pub mod get_profile;
pub mod get_projects;
pub mod get_skills;
pub mod get_structured_data;
pub mod get_timeline;

pub use get_blog_structured_data::get_blog_structured_data_handler;
pub use get_profile::get_profile_handler;
pub use get_projects::get_projects_handler;
pub use get_skills::get_skills_handler;
pub use get_structured_data::{get_person_structured_data_handler, get_website_structured_data_handler};
pub use get_timeline::get_timeline_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::modules::content::application::ports::incoming::use_cases::LoadSiteContentError;
use crate::modules::content::application::site_content::SiteContent;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Loads the site for one request, or the response to send instead.
pub(crate) async fn load_site_or_response(data: &AppState) -> Result<SiteContent, HttpResponse> {
    match data.load_site_content_use_case.execute().await {
        Ok(site) => Ok(site),
        Err(LoadSiteContentError::InvalidProfile(e)) => {
            error!(error = %e, "Profile failed validation");
            Err(ApiResponse::internal_error())
        }
        Err(LoadSiteContentError::StoreFailed(msg)) => {
            error!(error = %msg, "Failed to load site content");
            Err(ApiResponse::internal_error())
        }
    }
}

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::modules::contact::adapter::incoming::web::routes::submit_contact::{
    ContactAcceptedResponse, ContactErrorResponse, ContactRequestDto,
};
use crate::modules::content::application::views::{ProfileView, ProjectCard, TimelineYear};
use crate::modules::content::domain::{
    Aspiration, AspirationTimeline, AvailabilityStatus, EngagementType, OpenTo, SkillRating,
    SocialLinks, WorkMode,
};
use crate::modules::structured_data::display::{AggregatedSkill, AvailabilityDisplay};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read-only portfolio content, Schema.org structured data and the contact form",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Content endpoints
        crate::modules::content::adapter::incoming::web::routes::get_profile::get_profile_handler,
        crate::modules::content::adapter::incoming::web::routes::get_projects::get_projects_handler,
        crate::modules::content::adapter::incoming::web::routes::get_timeline::get_timeline_handler,
        crate::modules::content::adapter::incoming::web::routes::get_skills::get_skills_handler,

        // Structured data endpoints
        crate::modules::content::adapter::incoming::web::routes::get_structured_data::get_person_structured_data_handler,
        crate::modules::content::adapter::incoming::web::routes::get_structured_data::get_website_structured_data_handler,
        crate::modules::content::adapter::incoming::web::routes::get_blog_structured_data::get_blog_structured_data_handler,

        // Contact endpoint
        crate::modules::contact::adapter::incoming::web::routes::submit_contact::submit_contact_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Content views
            ProfileView,
            ProjectCard,
            TimelineYear,
            AggregatedSkill,
            AvailabilityDisplay,
            SocialLinks,
            Aspiration,
            SkillRating,
            AvailabilityStatus,
            AspirationTimeline,
            OpenTo,
            WorkMode,
            EngagementType,

            // Contact DTOs
            ContactRequestDto,
            ContactAcceptedResponse,
            ContactErrorResponse,
        )
    ),
    tags(
        (name = "content", description = "Profile, projects and skills"),
        (name = "structured-data", description = "Schema.org JSON-LD"),
        (name = "contact", description = "Contact form intake"),
    )
)]
pub struct ApiDoc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::dates::{ProjectEnd, YearMonth};
use super::enums::{
    AspirationTimeline, AvailabilityStatus, BlogCategory, BlogStatus, EngagementType, OpenTo,
    WorkMode,
};

// Entities are only built by the schema validators; field invariants hold for
// every value of these types.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_image: Option<String>,
    pub location: String,
    pub timezone: String,
    pub availability_status: AvailabilityStatus,
    pub open_to: Vec<OpenTo>,
    pub work_modes: Vec<WorkMode>,
    pub social_links: SocialLinks,
    pub aspirations: Vec<Aspiration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
}

impl SocialLinks {
    /// Present links in canonical order: linkedin, github, twitter, medium.
    pub fn present(&self) -> Vec<&str> {
        [&self.linkedin, &self.github, &self.twitter, &self.medium]
            .into_iter()
            .filter_map(|link| link.as_deref())
            .collect()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct Aspiration {
    pub goal: String,
    pub timeline: AspirationTimeline,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub slug: String,
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub role: String,
    pub start_date: YearMonth,
    pub end_date: ProjectEnd,
    pub engagement_type: EngagementType,
    pub work_mode: WorkMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub is_confidential: bool,
    pub is_featured: bool,
    pub is_draft: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    pub tech_stack: Vec<String>,
    pub skills: Vec<SkillRating>,
    pub achievements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_reference: Option<String>,
    /// Weak reference to a testimonial slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_testimonial: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SkillRating {
    pub name: String,
    pub rating: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub slug: String,
    pub screenshot: String,
    pub author_name: String,
    pub author_role: String,
    pub author_company: String,
    pub date: NaiveDate,
    /// Transcription of the screenshot. Only feeds structured data.
    pub text_content: String,
    /// Weak reference to a project slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_project: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub publish_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<NaiveDate>,
    pub seo_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    pub category: BlogCategory,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Series>,
    pub status: BlogStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time: Option<u32>,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub series_name: String,
    pub part_number: u32,
}

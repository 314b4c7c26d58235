use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::application::site_content::SiteContent;
use crate::modules::content::domain::{
    Aspiration, AvailabilityStatus, EngagementType, OpenTo, Project, SkillRating, SocialLinks,
    WorkMode,
};
use crate::modules::structured_data::display::{
    availability_display, calculate_duration, calculate_total_experience, format_date_range,
    format_duration, group_projects_by_year, obfuscate_email, project_display_name,
    AvailabilityDisplay,
};

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    #[schema(example = "Jane Doe")]
    pub name: String,
    pub title: String,
    pub tagline: String,
    /// Masked as `jane[at]example[dot]com`.
    #[schema(example = "jane[at]example[dot]com")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_image: Option<String>,
    pub location: String,
    pub timezone: String,
    pub availability_status: AvailabilityStatus,
    pub availability: AvailabilityDisplay,
    pub open_to: Vec<OpenTo>,
    pub work_modes: Vec<WorkMode>,
    pub social_links: SocialLinks,
    pub aspirations: Vec<Aspiration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Counted over published projects.
    pub total_experience_years: u32,
}

impl ProfileView {
    pub fn build(site: &SiteContent, today: NaiveDate) -> Self {
        let profile = &site.profile;
        Self {
            name: profile.name.clone(),
            title: profile.title.clone(),
            tagline: profile.tagline.clone(),
            email: obfuscate_email(&profile.email),
            phone: profile.phone.clone(),
            avatar_image: profile.avatar_image.clone(),
            location: profile.location.clone(),
            timezone: profile.timezone.clone(),
            availability_status: profile.availability_status,
            availability: availability_display(profile.availability_status),
            open_to: profile.open_to.clone(),
            work_modes: profile.work_modes.clone(),
            social_links: profile.social_links.clone(),
            aspirations: profile.aspirations.clone(),
            bio: profile.bio.clone(),
            total_experience_years: calculate_total_experience(site.public_projects(), today),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCard {
    #[schema(example = "acme-platform")]
    pub slug: String,
    /// Alias for confidential clients, client name otherwise.
    #[schema(example = "Acme Corp")]
    pub display_name: String,
    pub role: String,
    #[schema(example = "2021-03")]
    pub start_date: String,
    #[schema(example = "Mar 2021 – Present")]
    pub date_range: String,
    pub duration_months: u32,
    #[schema(example = "1 yr 6 mo")]
    pub duration_label: String,
    pub engagement_type: EngagementType,
    pub work_mode: WorkMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub is_confidential: bool,
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_description: Option<String>,
    pub tech_stack: Vec<String>,
    pub skills: Vec<SkillRating>,
    pub achievements: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_reference: Option<String>,
    /// Only set when the referenced testimonial exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonial_slug: Option<String>,
}

impl ProjectCard {
    pub fn build(project: &Project, site: &SiteContent, today: NaiveDate) -> Self {
        let duration_months = calculate_duration(project.start_date, project.end_date, today);
        Self {
            slug: project.slug.clone(),
            display_name: project_display_name(project).to_string(),
            role: project.role.clone(),
            start_date: project.start_date.to_string(),
            date_range: format_date_range(project.start_date, project.end_date),
            duration_months,
            duration_label: format_duration(duration_months),
            engagement_type: project.engagement_type,
            work_mode: project.work_mode,
            team_size: project.team_size,
            location: project.location.clone(),
            is_confidential: project.is_confidential,
            is_featured: project.is_featured,
            company_description: project.company_description.clone(),
            tech_stack: project.tech_stack.clone(),
            skills: project.skills.clone(),
            achievements: project.achievements.clone(),
            impact: project.impact.clone(),
            project_reference: project.project_reference.clone(),
            testimonial_slug: site
                .related_testimonial(project)
                .map(|testimonial| testimonial.slug.clone()),
        }
    }
}

#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct TimelineYear {
    #[schema(example = 2023)]
    pub year: i32,
    pub projects: Vec<ProjectCard>,
}

/// Non-draft projects, newest start first.
pub fn project_cards(site: &SiteContent, today: NaiveDate) -> Vec<ProjectCard> {
    timeline(site, today)
        .into_iter()
        .flat_map(|year| year.projects)
        .collect()
}

pub fn timeline(site: &SiteContent, today: NaiveDate) -> Vec<TimelineYear> {
    group_projects_by_year(site.public_projects())
        .into_iter()
        .map(|group| TimelineYear {
            year: group.year,
            projects: group
                .projects
                .into_iter()
                .map(|project| ProjectCard::build(project, site, today))
                .collect(),
        })
        .collect()
}

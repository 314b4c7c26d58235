use serde_json::Value;

use super::record::{Record, Violations};
use super::violations::{Bounds, ContentKind, ValidationError};
use crate::modules::content::domain::{EngagementType, Project, SkillRating, WorkMode};

pub fn validate_project(raw: &Value) -> Result<Project, ValidationError> {
    let mut v = Violations::new();
    let project = Record::root(raw, &mut v).and_then(|record| read_project(&record, &mut v));
    v.finish(ContentKind::Project, project)
}

fn read_project(r: &Record<'_>, v: &mut Violations) -> Option<Project> {
    let slug = r.slug(v, "slug");
    let client_name = r.text(v, "clientName", Bounds::between(1, 150));
    let display_name = r.optional_text(v, "displayName", None);
    let role = r.text(v, "role", Bounds::between(1, 100));
    let start_date = r.year_month(v, "startDate");
    let end_date = r.project_end(v, "endDate");
    let engagement_type = r.choice::<EngagementType>(v, "engagementType");
    let work_mode = r.choice::<WorkMode>(v, "workMode");
    let team_size = r.optional_integer(v, "teamSize", 1, Some(i64::from(u32::MAX)));
    let location = r.optional_text(v, "location", None);
    let is_confidential = r.flag(v, "isConfidential");
    let is_featured = r.flag(v, "isFeatured");
    let is_draft = r.flag(v, "isDraft");
    let company_description = r.optional_text(v, "companyDescription", None);
    let tech_stack = r.strings(v, "techStack", Bounds::at_least(1));
    let skills = r.records(v, "skills", Bounds::at_least(1)).and_then(|items| {
        let parsed: Vec<_> = items.iter().map(|item| read_skill(item, v)).collect();
        parsed.into_iter().collect::<Option<Vec<_>>>()
    });
    let achievements = r.optional_strings(v, "achievements");
    let impact = r.optional_text(v, "impact", None);
    let project_reference = r.optional_url(v, "projectReference");
    let related_testimonial = r.optional_text(v, "relatedTestimonial", None);

    Some(Project {
        slug: slug?,
        client_name: client_name?,
        display_name,
        role: role?,
        start_date: start_date?,
        end_date: end_date?,
        engagement_type: engagement_type?,
        work_mode: work_mode?,
        team_size: team_size.and_then(|n| u32::try_from(n).ok()),
        location,
        is_confidential,
        is_featured,
        is_draft,
        company_description,
        tech_stack: tech_stack?,
        skills: skills?,
        achievements: achievements?,
        impact,
        project_reference,
        related_testimonial,
    })
}

fn read_skill(r: &Record<'_>, v: &mut Violations) -> Option<SkillRating> {
    let name = r.text(v, "name", Bounds::between(1, 50));
    let rating = r.integer(v, "rating", 0, Some(10));

    Some(SkillRating {
        name: name?,
        rating: u8::try_from(rating?).ok()?,
    })
}

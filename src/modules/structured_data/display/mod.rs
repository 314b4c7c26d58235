//! Values derived from validated content for page rendering.

pub mod availability;
pub mod contact_info;
pub mod dates;
pub mod projects;
pub mod skills;

pub use availability::{availability_display, availability_display_for, AvailabilityDisplay};
pub use contact_info::{deobfuscate_email, obfuscate_email};
pub use dates::{calculate_duration, format_date_range, format_duration, format_month};
pub use projects::{
    calculate_total_experience, group_projects_by_year, project_display_name, YearGroup,
};
pub use skills::{aggregate_skills, AggregatedSkill};

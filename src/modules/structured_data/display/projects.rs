use chrono::NaiveDate;

use crate::modules::content::domain::{Project, YearMonth};

/// Confidential projects show their alias when one is set.
pub fn project_display_name(project: &Project) -> &str {
    match (&project.display_name, project.is_confidential) {
        (Some(alias), true) => alias,
        _ => &project.client_name,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct YearGroup<'a> {
    pub year: i32,
    pub projects: Vec<&'a Project>,
}

/// Newest start first. Projects sharing a start month keep their input order.
pub fn group_projects_by_year<'a, I>(projects: I) -> Vec<YearGroup<'a>>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut sorted: Vec<&Project> = projects.into_iter().collect();
    sorted.sort_by(|a, b| b.start_date.cmp(&a.start_date));

    let mut groups: Vec<YearGroup<'a>> = Vec::new();
    for project in sorted {
        let year = project.start_date.year();
        match groups.last_mut() {
            Some(group) if group.year == year => group.projects.push(project),
            _ => groups.push(YearGroup {
                year,
                projects: vec![project],
            }),
        }
    }
    groups
}

/// Whole years since the earliest project start, rounded half up.
pub fn calculate_total_experience<'a, I>(projects: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = &'a Project>,
{
    let Some(earliest) = projects.into_iter().map(|p| p.start_date).min() else {
        return 0;
    };

    let months = earliest.months_until(YearMonth::of(today));
    let years = (months as f64 / 12.0).round();
    if years <= 0.0 {
        0
    } else {
        years as u32
    }
}

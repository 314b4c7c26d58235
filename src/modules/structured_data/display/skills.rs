use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::content::domain::Project;

#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedSkill {
    #[schema(example = "Rust")]
    pub name: String,
    #[schema(example = 9)]
    pub max_rating: u8,
    #[schema(example = 3)]
    pub project_count: u32,
}

/// One entry per distinct skill name across `projects`. Ordered by highest
/// rating, then by how many projects used it, then by first appearance.
pub fn aggregate_skills<'a, I>(projects: I) -> Vec<AggregatedSkill>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut skills: Vec<AggregatedSkill> = Vec::new();

    for skill in projects.into_iter().flat_map(|p| &p.skills) {
        match skills.iter_mut().find(|s| s.name == skill.name) {
            Some(existing) => {
                existing.max_rating = existing.max_rating.max(skill.rating);
                existing.project_count += 1;
            }
            None => skills.push(AggregatedSkill {
                name: skill.name.clone(),
                max_rating: skill.rating,
                project_count: 1,
            }),
        }
    }

    // Stable sort keeps first-appearance order among ties.
    skills.sort_by(|a, b| {
        b.max_rating
            .cmp(&a.max_rating)
            .then(b.project_count.cmp(&a.project_count))
    });
    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::content::domain::SkillRating;
    use crate::tests::support::content_fixtures::sample_project;

    fn project_with(slug: &str, skills: &[(&str, u8)]) -> Project {
        let mut project = sample_project(slug, "2021-01", "2021-06");
        project.skills = skills
            .iter()
            .map(|(name, rating)| SkillRating {
                name: name.to_string(),
                rating: *rating,
            })
            .collect();
        project
    }

    #[test]
    fn test_same_skill_keeps_max_rating_and_counts_projects() {
        let projects = vec![project_with("a", &[("Go", 7)]), project_with("b", &[("Go", 9)])];

        assert_eq!(
            aggregate_skills(&projects),
            vec![AggregatedSkill {
                name: "Go".to_string(),
                max_rating: 9,
                project_count: 2,
            }]
        );
    }

    #[test]
    fn test_ordering_rating_then_count_then_first_seen() {
        let projects = vec![
            project_with("a", &[("Python", 6), ("Docker", 8), ("SQL", 8)]),
            project_with("b", &[("Rust", 9), ("SQL", 5)]),
            project_with("c", &[("Kafka", 6)]),
        ];

        let names: Vec<_> = aggregate_skills(&projects)
            .into_iter()
            .map(|s| s.name)
            .collect();

        assert_eq!(names, vec!["Rust", "SQL", "Docker", "Python", "Kafka"]);
    }

    #[test]
    fn test_no_projects() {
        let none: Vec<Project> = Vec::new();
        assert!(aggregate_skills(&none).is_empty());
    }
}

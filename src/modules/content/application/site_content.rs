use serde::Serialize;

use crate::modules::content::application::schema::{ContentKind, FieldViolation};
use crate::modules::content::domain::{BlogPost, BlogStatus, Profile, Project, Testimonial};

/// Records keyed by slug within their collection.
pub trait Slugged {
    fn slug(&self) -> &str;
}

impl Slugged for Project {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for Testimonial {
    fn slug(&self) -> &str {
        &self.slug
    }
}

impl Slugged for BlogPost {
    fn slug(&self) -> &str {
        &self.slug
    }
}

/// A collection record left out of the loaded site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedEntry {
    pub kind: ContentKind,
    pub slug: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub violations: Vec<FieldViolation>,
}

/// Every validated record of the site, plus what was turned away.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub blog_posts: Vec<BlogPost>,
    pub rejected: Vec<RejectedEntry>,
}

impl SiteContent {
    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.slug == slug)
    }

    pub fn testimonial(&self, slug: &str) -> Option<&Testimonial> {
        self.testimonials.iter().find(|t| t.slug == slug)
    }

    /// A dangling slug resolves to `None`.
    pub fn related_testimonial(&self, project: &Project) -> Option<&Testimonial> {
        project
            .related_testimonial
            .as_deref()
            .and_then(|slug| self.testimonial(slug))
    }

    pub fn related_project(&self, testimonial: &Testimonial) -> Option<&Project> {
        testimonial
            .related_project
            .as_deref()
            .and_then(|slug| self.project(slug))
    }

    pub fn public_projects(&self) -> Vec<&Project> {
        self.projects.iter().filter(|p| !p.is_draft).collect()
    }

    /// Published posts, newest first.
    pub fn published_posts(&self) -> Vec<&BlogPost> {
        let mut posts: Vec<&BlogPost> = self
            .blog_posts
            .iter()
            .filter(|p| p.status == BlogStatus::Published)
            .collect();
        posts.sort_by(|a, b| b.publish_date.cmp(&a.publish_date));
        posts
    }

    pub fn post(&self, slug: &str) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|p| p.slug == slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::{
        sample_blog_post, sample_profile, sample_project, sample_testimonial,
    };
    use chrono::NaiveDate;

    fn site() -> SiteContent {
        let mut acme = sample_project("acme", "2021-03", "2022-01");
        acme.related_testimonial = Some("bob".to_string());
        let mut draft = sample_project("secret", "2023-01", "Present");
        draft.is_draft = true;
        draft.related_testimonial = Some("nobody".to_string());

        let mut older = sample_blog_post("older", "2023-05-01");
        older.status = BlogStatus::Published;
        let mut newer = sample_blog_post("newer", "2024-02-10");
        newer.status = BlogStatus::Published;
        let pending = sample_blog_post("pending", "2024-06-01");

        SiteContent {
            profile: sample_profile(),
            projects: vec![acme, draft],
            testimonials: vec![sample_testimonial("bob", Some("acme"))],
            blog_posts: vec![older, pending, newer],
            rejected: vec![],
        }
    }

    #[test]
    fn test_related_lookups_follow_slugs() {
        let site = site();
        let acme = site.project("acme").unwrap();
        let bob = site.testimonial("bob").unwrap();

        assert_eq!(site.related_testimonial(acme).map(|t| t.slug.as_str()), Some("bob"));
        assert_eq!(site.related_project(bob).map(|p| p.slug.as_str()), Some("acme"));
    }

    #[test]
    fn test_dangling_reference_resolves_to_none() {
        let site = site();
        let secret = site.project("secret").unwrap();
        assert!(site.related_testimonial(secret).is_none());
    }

    #[test]
    fn test_public_projects_skip_drafts() {
        let site = site();
        let slugs: Vec<_> = site.public_projects().iter().map(|p| p.slug.clone()).collect();
        assert_eq!(slugs, vec!["acme"]);
    }

    #[test]
    fn test_published_posts_newest_first() {
        let site = site();
        let posts = site.published_posts();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].slug, "newer");
        assert_eq!(
            posts[1].publish_date,
            NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
        );
    }

    #[test]
    fn test_post_lookup_includes_drafts() {
        assert!(site().post("pending").is_some());
        assert!(site().post("missing").is_none());
    }
}

use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::modules::content::application::ports::incoming::use_cases::{
    LoadSiteContentError, LoadSiteContentUseCase,
};
use crate::modules::content::application::ports::outgoing::{
    CollectionKind, ContentStore, RawEntry,
};
use crate::modules::content::application::schema::{
    validate_blog_post, validate_profile, validate_project, validate_testimonial, Constraint,
    FieldViolation, ValidationError,
};
use crate::modules::content::application::site_content::{RejectedEntry, SiteContent, Slugged};

#[derive(Debug, Clone)]
pub struct LoadSiteContentService<S>
where
    S: ContentStore + Send + Sync,
{
    store: S,
}

impl<S> LoadSiteContentService<S>
where
    S: ContentStore + Send + Sync,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates every entry of one collection. Failures and repeated slugs
    /// go to `rejected`; the first record with a slug keeps it.
    async fn load_valid<T: Slugged>(
        &self,
        kind: CollectionKind,
        validate: fn(&Value) -> Result<T, ValidationError>,
        rejected: &mut Vec<RejectedEntry>,
    ) -> Result<Vec<T>, LoadSiteContentError> {
        let entries = self
            .store
            .load_collection(kind)
            .await
            .map_err(|e| LoadSiteContentError::StoreFailed(e.to_string()))?;

        let mut accepted: Vec<T> = Vec::with_capacity(entries.len());
        let mut seen = HashSet::new();
        for RawEntry { slug, data } in entries {
            let outcome = match data {
                Ok(value) => validate(&value)
                    .map_err(|e| RejectedEntry {
                        kind: kind.content_kind(),
                        slug: slug.clone(),
                        reason: e.to_string(),
                        violations: e.violations,
                    })
                    .and_then(|entity| {
                        if seen.insert(entity.slug().to_string()) {
                            Ok(entity)
                        } else {
                            Err(RejectedEntry {
                                kind: kind.content_kind(),
                                slug: slug.clone(),
                                reason: format!(
                                    "{} slug '{}' is already taken",
                                    kind.content_kind(),
                                    entity.slug()
                                ),
                                violations: vec![FieldViolation {
                                    field: "slug".to_string(),
                                    constraint: Constraint::Unique,
                                    actual: Some(Value::String(entity.slug().to_string())),
                                }],
                            })
                        }
                    }),
                Err(e) => Err(RejectedEntry {
                    kind: kind.content_kind(),
                    slug: slug.clone(),
                    reason: e.to_string(),
                    violations: Vec::new(),
                }),
            };

            match outcome {
                Ok(entity) => accepted.push(entity),
                Err(entry) => {
                    warn!(
                        kind = %entry.kind,
                        slug = %entry.slug,
                        reason = %entry.reason,
                        "Skipping invalid content entry"
                    );
                    rejected.push(entry);
                }
            }
        }
        Ok(accepted)
    }
}

#[async_trait]
impl<S> LoadSiteContentUseCase for LoadSiteContentService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self) -> Result<SiteContent, LoadSiteContentError> {
        let raw_profile = self
            .store
            .load_profile()
            .await
            .map_err(|e| LoadSiteContentError::StoreFailed(e.to_string()))?;
        let profile = validate_profile(&raw_profile).map_err(LoadSiteContentError::InvalidProfile)?;

        let mut rejected = Vec::new();
        let projects = self
            .load_valid(CollectionKind::Projects, validate_project, &mut rejected)
            .await?;
        let testimonials = self
            .load_valid(CollectionKind::Testimonials, validate_testimonial, &mut rejected)
            .await?;
        let blog_posts = self
            .load_valid(CollectionKind::BlogPosts, validate_blog_post, &mut rejected)
            .await?;

        info!(
            projects = projects.len(),
            testimonials = testimonials.len(),
            blog_posts = blog_posts.len(),
            rejected = rejected.len(),
            "Site content loaded"
        );

        Ok(SiteContent {
            profile,
            projects,
            testimonials,
            blog_posts,
            rejected,
        })
    }
}

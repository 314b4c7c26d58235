use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use strum::{AsRefStr, Display};

use crate::modules::content::application::schema::ContentKind;

/// The three collection directories the CMS writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum CollectionKind {
    Projects,
    Testimonials,
    #[strum(serialize = "blogs")]
    BlogPosts,
}

impl CollectionKind {
    pub fn content_kind(self) -> ContentKind {
        match self {
            CollectionKind::Projects => ContentKind::Project,
            CollectionKind::Testimonials => ContentKind::Testimonial,
            CollectionKind::BlogPosts => ContentKind::BlogPost,
        }
    }
}

/// One unvalidated collection record. `data` is `Err` when the file could not
/// be parsed; the rest of the collection still loads.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub slug: String,
    pub data: Result<Value, ContentStoreError>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Content not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Invalid JSON in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn load_profile(&self) -> Result<Value, ContentStoreError>;

    async fn load_collection(
        &self,
        kind: CollectionKind,
    ) -> Result<Vec<RawEntry>, ContentStoreError>;
}

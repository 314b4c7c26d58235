use async_trait::async_trait;

use crate::modules::content::application::schema::ValidationError;
use crate::modules::content::application::site_content::SiteContent;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadSiteContentError {
    #[error("Failed to read content: {0}")]
    StoreFailed(String),

    #[error("Profile is invalid: {0}")]
    InvalidProfile(ValidationError),
}

#[async_trait]
pub trait LoadSiteContentUseCase: Send + Sync {
    async fn execute(&self) -> Result<SiteContent, LoadSiteContentError>;
}

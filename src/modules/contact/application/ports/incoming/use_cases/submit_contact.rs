use async_trait::async_trait;

use crate::modules::contact::domain::{ContactForm, ContactSubmission};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(
        &self,
        form: ContactForm,
        user_agent: Option<String>,
    ) -> Result<ContactSubmission, SubmitContactError>;
}

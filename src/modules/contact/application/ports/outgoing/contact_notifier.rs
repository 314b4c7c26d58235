use async_trait::async_trait;

use crate::modules::contact::domain::ContactSubmission;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactNotifierError {
    #[error("Notification delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Where accepted submissions go.
#[async_trait]
pub trait ContactNotifier: Send + Sync {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), ContactNotifierError>;
}

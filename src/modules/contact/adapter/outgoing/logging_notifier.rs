use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::ports::outgoing::{
    ContactNotifier, ContactNotifierError,
};
use crate::modules::contact::domain::ContactSubmission;

/// Emits each submission as one structured log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingContactNotifier;

#[async_trait]
impl ContactNotifier for LoggingContactNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), ContactNotifierError> {
        info!(
            name = %submission.name,
            email = %submission.email,
            subject = %submission.subject,
            message = %submission.message,
            timestamp = %submission.timestamp,
            user_agent = %submission.user_agent,
            "Contact form submission"
        );
        Ok(())
    }
}

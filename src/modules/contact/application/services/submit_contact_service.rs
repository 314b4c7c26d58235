use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

use crate::modules::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactNotifier;
use crate::modules::contact::domain::{ContactForm, ContactSubmission};

#[derive(Debug, Clone)]
pub struct SubmitContactService<N>
where
    N: ContactNotifier + Send + Sync,
{
    notifier: N,
}

impl<N> SubmitContactService<N>
where
    N: ContactNotifier + Send + Sync,
{
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }
}

#[async_trait]
impl<N> SubmitContactUseCase for SubmitContactService<N>
where
    N: ContactNotifier + Send + Sync,
{
    async fn execute(
        &self,
        form: ContactForm,
        user_agent: Option<String>,
    ) -> Result<ContactSubmission, SubmitContactError> {
        form.validate().map_err(SubmitContactError::Validation)?;

        let submission = ContactSubmission::new(&form, Utc::now(), user_agent.as_deref());

        self.notifier.notify(&submission).await.map_err(|e| {
            error!(error = %e, subject = %submission.subject, "Contact notification failed");
            SubmitContactError::Delivery(e.to_string())
        })?;

        info!(subject = %submission.subject, "Contact submission accepted");
        Ok(submission)
    }
}

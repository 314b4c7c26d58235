use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::{
    ContactNotifier, ContactNotifierError,
};
use crate::modules::contact::domain::ContactSubmission;
use crate::modules::email::application::ports::outgoing::EmailSender;

/// Forwards submissions to the site owner's inbox.
pub struct EmailContactNotifier {
    sender: Arc<dyn EmailSender + Send + Sync>,
    inbox: String,
}

impl EmailContactNotifier {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, inbox: impl Into<String>) -> Self {
        Self {
            sender,
            inbox: inbox.into(),
        }
    }
}

pub fn email_subject(submission: &ContactSubmission) -> String {
    format!("Portfolio Contact: {}", submission.subject)
}

/// Submission fields are already escaped, so they go into the markup as is.
pub fn email_body(submission: &ContactSubmission) -> String {
    format!(
        r#"<h2>New contact form submission</h2>
<p><strong>Name:</strong> {name}</p>
<p><strong>Email:</strong> {email}</p>
<p><strong>Subject:</strong> {subject}</p>
<p><strong>Message:</strong></p>
<p style="white-space: pre-wrap">{message}</p>
<hr>
<p><small>Received {timestamp} from {user_agent}</small></p>"#,
        name = submission.name,
        email = submission.email,
        subject = submission.subject,
        message = submission.message,
        timestamp = submission.timestamp,
        user_agent = submission.user_agent,
    )
}

#[async_trait]
impl ContactNotifier for EmailContactNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), ContactNotifierError> {
        self.sender
            .send_email(&self.inbox, &email_subject(submission), &email_body(submission))
            .await
            .map_err(|e| ContactNotifierError::DeliveryFailed(e.to_string()))
    }
}

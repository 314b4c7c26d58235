use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::{
    ContactNotifier, ContactNotifierError,
};
use crate::modules::contact::domain::ContactSubmission;
use crate::modules::content::application::ports::incoming::use_cases::{
    LoadSiteContentError, LoadSiteContentUseCase,
};
use crate::modules::content::application::site_content::SiteContent;

//
// ──────────────────────────────────────────────────────────
// Content
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct StubLoadSiteContentUseCase {
    result: Result<SiteContent, LoadSiteContentError>,
}

impl StubLoadSiteContentUseCase {
    pub fn success(site: SiteContent) -> Self {
        Self { result: Ok(site) }
    }

    pub fn store_failed(msg: &str) -> Self {
        Self {
            result: Err(LoadSiteContentError::StoreFailed(msg.into())),
        }
    }
}

#[async_trait]
impl LoadSiteContentUseCase for StubLoadSiteContentUseCase {
    async fn execute(&self) -> Result<SiteContent, LoadSiteContentError> {
        self.result.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Contact
// ──────────────────────────────────────────────────────────
//

/// Accepts everything and remembers it. Clones share one list.
#[derive(Clone, Default)]
pub struct RecordingContactNotifier {
    submissions: Arc<Mutex<Vec<ContactSubmission>>>,
}

impl RecordingContactNotifier {
    pub fn submissions(&self) -> Vec<ContactSubmission> {
        self.submissions.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactNotifier for RecordingContactNotifier {
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), ContactNotifierError> {
        self.submissions.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

#[derive(Clone, Copy, Default)]
pub struct FailingContactNotifier;

#[async_trait]
impl ContactNotifier for FailingContactNotifier {
    async fn notify(&self, _submission: &ContactSubmission) -> Result<(), ContactNotifierError> {
        Err(ContactNotifierError::DeliveryFailed(
            "inbox unreachable".to_string(),
        ))
    }
}

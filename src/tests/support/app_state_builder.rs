use crate::modules::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::modules::contact::application::services::SubmitContactService;
use crate::modules::content::application::ports::incoming::use_cases::LoadSiteContentUseCase;
use crate::modules::structured_data::json_ld::SiteIdentity;
use crate::tests::support::content_fixtures::sample_site;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    load_site_content: Arc<dyn LoadSiteContentUseCase + Send + Sync>,
    submit_contact: Arc<dyn SubmitContactUseCase + Send + Sync>,
    site: SiteIdentity,
    author_name: Option<String>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            load_site_content: Arc::new(StubLoadSiteContentUseCase::success(sample_site())),
            submit_contact: Arc::new(SubmitContactService::new(
                RecordingContactNotifier::default(),
            )),
            site: SiteIdentity::default(),
            author_name: None,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_load_site_content(
        mut self,
        uc: impl LoadSiteContentUseCase + Send + Sync + 'static,
    ) -> Self {
        self.load_site_content = Arc::new(uc);
        self
    }

    pub fn with_submit_contact(
        mut self,
        uc: impl SubmitContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit_contact = Arc::new(uc);
        self
    }

    pub fn with_site(mut self, site: SiteIdentity) -> Self {
        self.site = site;
        self
    }

    pub fn with_author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            load_site_content_use_case: self.load_site_content,
            submit_contact_use_case: self.submit_contact,
            site: self.site,
            author_name: self.author_name,
        })
    }
}

use serde::Serialize;

pub const SCHEMA_ORG_CONTEXT: &str = "https://schema.org";

/// A `Person` node nested inside another node (author, publisher, reviewer).
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonRef {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl PersonRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            node_type: "Person",
            name: name.into(),
            job_title: None,
            url: None,
        }
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

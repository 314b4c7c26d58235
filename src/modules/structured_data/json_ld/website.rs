use serde::Serialize;

use super::site::SiteIdentity;
use super::types::{PersonRef, SCHEMA_ORG_CONTEXT};
use crate::modules::content::domain::Profile;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WebSiteJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub author: PersonRef,
}

pub fn website_json_ld(profile: &Profile, site: &SiteIdentity) -> WebSiteJsonLd {
    WebSiteJsonLd {
        context: SCHEMA_ORG_CONTEXT,
        node_type: "WebSite",
        name: format!("{} - {}", profile.name, profile.title),
        description: profile.tagline.clone(),
        url: site.base_url().to_string(),
        author: PersonRef::named(&profile.name),
    }
}

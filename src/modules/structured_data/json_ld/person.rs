use chrono::NaiveDate;
use serde::Serialize;

use super::site::SiteIdentity;
use super::types::{PersonRef, SCHEMA_ORG_CONTEXT};
use crate::modules::content::domain::{Profile, Testimonial};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub name: String,
    pub job_title: String,
    pub description: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub url: String,
    pub same_as: Vec<String>,
    pub address: PostalAddress,
    pub makes_offer: Vec<Offer>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub endorsement: Vec<Review>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub address_locality: String,
    pub address_country: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub item_offered: Service,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Service {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub author: PersonRef,
    pub review_body: String,
    pub date_published: NaiveDate,
}

pub fn person_json_ld(
    profile: &Profile,
    testimonials: &[Testimonial],
    site: &SiteIdentity,
) -> PersonJsonLd {
    let makes_offer = profile
        .open_to
        .iter()
        .map(|engagement| Offer {
            node_type: "Offer",
            item_offered: Service {
                node_type: "Service",
                name: format!("{engagement} Engagement"),
            },
        })
        .collect();

    let endorsement = testimonials
        .iter()
        .map(|t| Review {
            node_type: "Review",
            author: PersonRef::named(&t.author_name).with_job_title(&t.author_role),
            review_body: t.text_content.clone(),
            date_published: t.date,
        })
        .collect();

    PersonJsonLd {
        context: SCHEMA_ORG_CONTEXT,
        node_type: "Person",
        name: profile.name.clone(),
        job_title: profile.title.clone(),
        description: profile.tagline.clone(),
        email: format!("mailto:{}", profile.email),
        telephone: profile.phone.clone(),
        image: profile.avatar_image.as_deref().map(|path| site.absolute(path)),
        url: site.base_url().to_string(),
        same_as: profile
            .social_links
            .present()
            .into_iter()
            .map(str::to_string)
            .collect(),
        address: postal_address(&profile.location, site.fallback_country()),
        makes_offer,
        endorsement,
    }
}

/// `"City, Country"` splits on the first comma. Without a comma the whole
/// string is the locality and the country falls back.
pub fn postal_address(location: &str, fallback_country: &str) -> PostalAddress {
    let (locality, country) = match location.split_once(',') {
        Some((before, after)) => {
            let before = before.trim();
            let after = after.trim();
            (
                if before.is_empty() { location } else { before },
                if after.is_empty() { fallback_country } else { after },
            )
        }
        None => (location, fallback_country),
    };

    PostalAddress {
        node_type: "PostalAddress",
        address_locality: locality.to_string(),
        address_country: country.to_string(),
    }
}

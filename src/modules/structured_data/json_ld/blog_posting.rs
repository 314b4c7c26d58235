use chrono::NaiveDate;
use serde::Serialize;

use super::site::SiteIdentity;
use super::types::{PersonRef, SCHEMA_ORG_CONTEXT};
use crate::modules::content::domain::BlogPost;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostingJsonLd {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    pub headline: String,
    pub description: String,
    pub date_published: NaiveDate,
    pub date_modified: NaiveDate,
    pub author: PersonRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub publisher: PersonRef,
    pub main_entity_of_page: WebPageRef,
    pub keywords: String,
    pub article_section: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub node_type: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

pub fn blog_post_path(slug: &str) -> String {
    format!("/blog/{slug}")
}

pub fn blog_posting_json_ld(
    post: &BlogPost,
    author_name: &str,
    site: &SiteIdentity,
) -> BlogPostingJsonLd {
    let author = PersonRef::named(author_name).with_url(site.base_url());

    BlogPostingJsonLd {
        context: SCHEMA_ORG_CONTEXT,
        node_type: "BlogPosting",
        headline: post.title.clone(),
        description: post.seo_description.clone(),
        date_published: post.publish_date,
        date_modified: post.updated_date.unwrap_or(post.publish_date),
        publisher: author.clone(),
        author,
        image: post.cover_image.as_deref().map(|path| site.absolute(path)),
        main_entity_of_page: WebPageRef {
            node_type: "WebPage",
            id: site.absolute(&blog_post_path(&post.slug)),
        },
        keywords: post.tags.join(", "),
        article_section: post.category.to_string(),
    }
}

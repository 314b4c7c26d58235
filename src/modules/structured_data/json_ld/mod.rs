//! Schema.org JSON-LD payloads for search engines.

pub mod blog_posting;
pub mod breadcrumb;
pub mod person;
pub mod site;
pub mod types;
pub mod website;

pub use blog_posting::{blog_post_path, blog_posting_json_ld, BlogPostingJsonLd};
pub use breadcrumb::{breadcrumb_json_ld, BreadcrumbListJsonLd, Crumb};
pub use person::{person_json_ld, PersonJsonLd};
pub use site::SiteIdentity;
pub use website::{website_json_ld, WebSiteJsonLd};

use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::warn;

use super::load_site_or_response;
use crate::api::schemas::ErrorResponse;
use crate::modules::content::domain::BlogStatus;
use crate::modules::structured_data::json_ld::{
    blog_post_path, blog_posting_json_ld, breadcrumb_json_ld, BlogPostingJsonLd,
    BreadcrumbListJsonLd, Crumb,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Both nodes serialize side by side as a JSON array.
#[derive(Serialize)]
#[serde(untagged)]
enum BlogPageNode {
    Posting(BlogPostingJsonLd),
    Breadcrumbs(BreadcrumbListJsonLd),
}

/// Blog post JSON-LD
///
/// `BlogPosting` plus the `Home › Blog › <title>` breadcrumb trail for a
/// published post.
#[utoipa::path(
    get,
    path = "/api/blog/{slug}/structured-data",
    tag = "structured-data",
    params(("slug" = String, Path, description = "Blog post slug")),
    responses(
        (status = 200, description = "[BlogPosting, BreadcrumbList] inside the success envelope"),
        (status = 404, description = "No published post with this slug", body = ErrorResponse),
        (status = 500, description = "Content could not be loaded", body = ErrorResponse),
    )
)]
#[get("/api/blog/{slug}/structured-data")]
pub async fn get_blog_structured_data_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    let site = match load_site_or_response(&data).await {
        Ok(site) => site,
        Err(resp) => return resp,
    };

    let Some(post) = site
        .post(&slug)
        .filter(|post| post.status == BlogStatus::Published)
    else {
        warn!(slug = %slug, "Structured data requested for unpublished or unknown post");
        return ApiResponse::not_found("POST_NOT_FOUND", "Blog post not found");
    };

    let author_name = data
        .author_name
        .as_deref()
        .unwrap_or(&site.profile.name);

    let crumbs = [
        Crumb::new("Home", "/"),
        Crumb::new("Blog", "/blog"),
        Crumb::new(post.title.clone(), blog_post_path(&post.slug)),
    ];

    ApiResponse::success(vec![
        BlogPageNode::Posting(blog_posting_json_ld(post, author_name, &data.site)),
        BlogPageNode::Breadcrumbs(breadcrumb_json_ld(&crumbs, &data.site)),
    ])
}

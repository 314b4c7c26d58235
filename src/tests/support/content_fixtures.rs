use serde_json::{json, Value};

use crate::modules::content::application::schema::{
    validate_blog_post, validate_profile, validate_project, validate_testimonial,
};
use crate::modules::content::application::site_content::SiteContent;
use crate::modules::content::domain::{
    BlogPost, BlogStatus, Profile, Project, SkillRating, Testimonial,
};

//
// ──────────────────────────────────────────────────────────
// Raw records, shaped like the files the CMS writes
// ──────────────────────────────────────────────────────────
//

pub fn profile_json() -> Value {
    json!({
        "name": "Jane Doe",
        "title": "Staff Software Engineer",
        "tagline": "Building reliable AI systems in Rust",
        "email": "jane@example.com",
        "phone": "+351 912 345 678",
        "avatarImage": "/images/avatar.jpg",
        "location": "Lisbon",
        "timezone": "Europe/Lisbon",
        "availabilityStatus": "Open to Discuss",
        "openTo": ["Contract", "Advisory"],
        "workModes": ["Remote"],
        "socialLinks": {
            "github": "https://github.com/janedoe"
        },
        "aspirations": [
            { "goal": "Lead an applied AI platform team", "timeline": "Immediate" },
            { "goal": "Write a book on LLM systems", "timeline": "Strategic", "icon": "book" }
        ],
        "bio": "Fifteen years of backend work, the last five on retrieval systems."
    })
}

pub fn project_json(slug: &str, start: &str, end: &str) -> Value {
    json!({
        "slug": slug,
        "clientName": "Acme Corp",
        "role": "Lead Backend Engineer",
        "startDate": start,
        "endDate": end,
        "engagementType": "Contract",
        "workMode": "Remote",
        "teamSize": 6,
        "isConfidential": false,
        "isFeatured": false,
        "isDraft": false,
        "techStack": ["Rust", "PostgreSQL", "Kafka"],
        "skills": [
            { "name": "Rust", "rating": 8 },
            { "name": "PostgreSQL", "rating": 7 }
        ],
        "achievements": ["Cut p99 ingestion latency by 40%"],
        "impact": "Moved nightly batch jobs to streaming"
    })
}

pub fn testimonial_json(slug: &str, related_project: Option<&str>) -> Value {
    let mut raw = json!({
        "slug": slug,
        "screenshot": format!("/images/testimonials/{slug}.png"),
        "authorName": "Bob Smith",
        "authorRole": "VP Engineering",
        "authorCompany": "Acme Corp",
        "date": "2023-05-17",
        "textContent": "Jane rebuilt our ingestion pipeline and mentored the whole team along the way."
    });
    if let Some(project) = related_project {
        raw["relatedProject"] = json!(project);
    }
    raw
}

pub fn blog_post_json(slug: &str, publish_date: &str) -> Value {
    json!({
        "slug": slug,
        "title": "RAG in Practice",
        "publishDate": publish_date,
        "seoDescription": "A practical walkthrough of retrieval-augmented generation pipelines built in Rust.",
        "category": "AI Engineering",
        "tags": ["rust", "llm"],
        "status": "draft",
        "readingTime": 8,
        "content": "Retrieval is the hard part."
    })
}

//
// ──────────────────────────────────────────────────────────
// Validated entities
// ──────────────────────────────────────────────────────────
//

pub fn sample_profile() -> Profile {
    validate_profile(&profile_json()).expect("profile fixture must validate")
}

pub fn sample_project(slug: &str, start: &str, end: &str) -> Project {
    validate_project(&project_json(slug, start, end)).expect("project fixture must validate")
}

pub fn sample_testimonial(slug: &str, related_project: Option<&str>) -> Testimonial {
    validate_testimonial(&testimonial_json(slug, related_project))
        .expect("testimonial fixture must validate")
}

/// Status is draft until a test says otherwise.
pub fn sample_blog_post(slug: &str, publish_date: &str) -> BlogPost {
    validate_blog_post(&blog_post_json(slug, publish_date)).expect("blog fixture must validate")
}

/// A small but complete site:
/// - `acme` (Mar 2021 – Jan 2022) linked to testimonial `bob`
/// - `globex` (Feb 2022 – Present), confidential, shown as "Stealth Fintech"
/// - `skunkworks`, a draft with its own skill
/// - published post `rag-in-practice` and draft post `draft-notes`
pub fn sample_site() -> SiteContent {
    let mut acme = sample_project("acme", "2021-03", "2022-01");
    acme.related_testimonial = Some("bob".to_string());

    let mut globex = sample_project("globex", "2022-02", "Present");
    globex.client_name = "Globex".to_string();
    globex.is_confidential = true;
    globex.display_name = Some("Stealth Fintech".to_string());
    globex.skills = vec![
        SkillRating {
            name: "Rust".to_string(),
            rating: 6,
        },
        SkillRating {
            name: "PostgreSQL".to_string(),
            rating: 5,
        },
    ];

    let mut skunkworks = sample_project("skunkworks", "2023-05", "Present");
    skunkworks.is_draft = true;
    skunkworks.skills = vec![SkillRating {
        name: "Go".to_string(),
        rating: 9,
    }];

    let mut published = sample_blog_post("rag-in-practice", "2024-03-01");
    published.status = BlogStatus::Published;
    let mut draft = sample_blog_post("draft-notes", "2024-04-01");
    draft.title = "Draft Notes".to_string();

    SiteContent {
        profile: sample_profile(),
        projects: vec![acme, globex, skunkworks],
        testimonials: vec![sample_testimonial("bob", Some("acme"))],
        blog_posts: vec![published, draft],
        rejected: vec![],
    }
}

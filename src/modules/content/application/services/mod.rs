pub mod load_site_content_service;

pub use load_site_content_service::LoadSiteContentService;

pub mod load_site_content;

pub use load_site_content::{LoadSiteContentError, LoadSiteContentUseCase};

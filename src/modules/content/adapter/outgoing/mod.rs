pub mod content_store_fs;

pub use content_store_fs::FsContentStore;

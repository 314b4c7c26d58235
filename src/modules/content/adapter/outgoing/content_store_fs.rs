use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use crate::modules::content::application::ports::outgoing::{
    CollectionKind, ContentStore, ContentStoreError, RawEntry,
};

const PROFILE_FILE: &str = "profile/main.json";

/// Reads the JSON files the CMS writes under one content directory:
///
/// ```text
/// <root>/profile/main.json
/// <root>/projects/<slug>.json
/// <root>/testimonials/<slug>.json
/// <root>/blogs/<slug>.json
/// ```
#[derive(Debug, Clone)]
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn read_json(path: &Path) -> Result<Value, ContentStoreError> {
        let raw = fs::read_to_string(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ContentStoreError::NotFound(path.to_path_buf()),
            _ => ContentStoreError::Io {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        serde_json::from_str(&raw).map_err(|e| ContentStoreError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    async fn entry_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, ContentStoreError> {
        let io_error = |e: std::io::Error| ContentStoreError::Io {
            path: dir.to_path_buf(),
            message: e.to_string(),
        };

        let mut read_dir = match fs::read_dir(dir).await {
            Ok(read_dir) => read_dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(e)),
        };

        let mut files = Vec::new();
        while let Some(entry) = read_dir.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(slug) = path.file_stem().and_then(|stem| stem.to_str()) {
                files.push((slug.to_string(), path.clone()));
            }
        }
        files.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(files)
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn load_profile(&self) -> Result<Value, ContentStoreError> {
        Self::read_json(&self.root.join(PROFILE_FILE)).await
    }

    async fn load_collection(
        &self,
        kind: CollectionKind,
    ) -> Result<Vec<RawEntry>, ContentStoreError> {
        let files = Self::entry_files(&self.root.join(kind.as_ref())).await?;

        let mut entries = Vec::with_capacity(files.len());
        for (slug, path) in files {
            let data = Self::read_json(&path).await.map(|mut value| {
                // The file name is the slug unless the record names its own.
                if let Some(object) = value.as_object_mut() {
                    object
                        .entry("slug")
                        .or_insert_with(|| Value::String(slug.clone()));
                }
                value
            });
            entries.push(RawEntry { slug, data });
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs as std_fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, contents: &str) {
        let path = root.join(relative);
        std_fs::create_dir_all(path.parent().unwrap()).unwrap();
        std_fs::write(path, contents).unwrap();
    }

    #[tokio::test]
    async fn test_load_profile() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "profile/main.json", r#"{ "name": "Jane Doe" }"#);

        let store = FsContentStore::new(dir.path());
        let profile = store.load_profile().await.unwrap();

        assert_eq!(profile["name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = FsContentStore::new(dir.path());

        let err = store.load_profile().await.unwrap_err();
        assert_eq!(
            err,
            ContentStoreError::NotFound(dir.path().join("profile/main.json"))
        );
    }

    #[tokio::test]
    async fn test_collection_entries_sorted_with_injected_slug() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "projects/zeta.json", r#"{ "role": "Lead" }"#);
        write(
            dir.path(),
            "projects/alpha.json",
            r#"{ "slug": "alpha-renamed", "role": "Architect" }"#,
        );
        write(dir.path(), "projects/notes.txt", "not content");

        let store = FsContentStore::new(dir.path());
        let entries = store
            .load_collection(CollectionKind::Projects)
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].slug, "alpha");
        assert_eq!(
            entries[0].data.as_ref().unwrap()["slug"],
            json!("alpha-renamed")
        );
        assert_eq!(entries[1].slug, "zeta");
        assert_eq!(entries[1].data.as_ref().unwrap()["slug"], json!("zeta"));
    }

    #[tokio::test]
    async fn test_missing_collection_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FsContentStore::new(dir.path());

        let entries = store
            .load_collection(CollectionKind::Testimonials)
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_unparseable_file_is_kept_as_failed_entry() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "blogs/broken.json", "{ not json");
        write(dir.path(), "blogs/fine.json", r#"{ "title": "Fine" }"#);

        let store = FsContentStore::new(dir.path());
        let entries = store
            .load_collection(CollectionKind::BlogPosts)
            .await
            .unwrap();

        assert_eq!(entries.len(), 2);
        assert!(matches!(
            entries[0].data,
            Err(ContentStoreError::Parse { .. })
        ));
        assert!(entries[1].data.is_ok());
    }
}

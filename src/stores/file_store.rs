use chrono::Utc;
use std::path::{Path, PathBuf};

use crate::errors::InternalError;

/// FileStore writes uploaded images under a configured directory
///
/// Stored names are prefixed with a millisecond timestamp so concurrent
/// uploads of identically-named files do not collide.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a new FileStore rooted at the given directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Store the given bytes and return the generated file name
    pub async fn store(&self, bytes: &[u8], suggested_name: &str) -> Result<String, InternalError> {
        tokio::fs::create_dir_all(&self.base_dir)
            .await
            .map_err(|e| InternalError::file_storage("create_upload_dir", e))?;

        // keep only the final path component of the client-supplied name
        let base_name = Path::new(suggested_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload");

        let file_name = format!("{}-{}", Utc::now().timestamp_millis(), base_name);

        tokio::fs::write(self.base_dir.join(&file_name), bytes)
            .await
            .map_err(|e| InternalError::file_storage("write_upload", e))?;

        Ok(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_writes_file_and_returns_prefixed_name() {
        let dir = std::env::temp_dir().join("logistics-backend-file-store-test");
        let store = FileStore::new(&dir);

        let name = store.store(b"image-bytes", "container.jpg").await.unwrap();

        assert!(name.ends_with("-container.jpg"));
        let written = tokio::fs::read(dir.join(&name)).await.unwrap();
        assert_eq!(written, b"image-bytes");

        tokio::fs::remove_dir_all(&dir).await.ok();
    }

    #[tokio::test]
    async fn test_store_strips_path_components_from_suggested_name() {
        let dir = std::env::temp_dir().join("logistics-backend-file-store-path-test");
        let store = FileStore::new(&dir);

        let name = store.store(b"x", "../../etc/passwd").await.unwrap();

        assert!(name.ends_with("-passwd"));
        assert!(!name.contains(".."));

        tokio::fs::remove_dir_all(&dir).await.ok();
    }
}

//! Directory-backed store for incident attachments.
//!
//! Files live flat under a single root directory, keyed by their sanitised
//! client filename. A later upload with the same sanitised name replaces
//! the earlier file. There is no size limit or content-type allow-list.

use std::path::{Path, PathBuf};

use relief_core::error::CoreError;
use relief_core::media::{is_sanitized, sanitize_filename};

use crate::error::{AppError, AppResult};

/// Entity name used in not-found errors for stored media.
const MEDIA_ENTITY: &str = "Media";

/// A file read back from the store.
#[derive(Debug, Clone)]
pub struct StoredMedia {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct MediaStore {
    root: PathBuf,
}

impl MediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist.
    pub async fn ensure_root(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Whether the root exists and is a directory.
    pub async fn is_ready(&self) -> bool {
        tokio::fs::metadata(&self.root)
            .await
            .is_ok_and(|meta| meta.is_dir())
    }

    /// Store `data` under the sanitised form of `client_filename`.
    ///
    /// Returns the stored filename, or `None` (nothing written) when the
    /// client name sanitises to nothing.
    pub async fn save(
        &self,
        client_filename: &str,
        data: &[u8],
    ) -> std::io::Result<Option<String>> {
        let Some(filename) = sanitize_filename(client_filename) else {
            tracing::warn!(client_filename, "Upload filename sanitised to nothing, skipping");
            return Ok(None);
        };

        self.ensure_root().await?;
        tokio::fs::write(self.root.join(&filename), data).await?;

        tracing::info!(%filename, bytes = data.len(), "Stored media upload");
        Ok(Some(filename))
    }

    /// Read a stored file by its sanitised filename.
    ///
    /// Names that are not in sanitised form are rejected as not found, so
    /// a request can never address anything outside the root.
    pub async fn open(&self, filename: &str) -> AppResult<StoredMedia> {
        let not_found = || {
            AppError::Core(CoreError::NotFound {
                entity: MEDIA_ENTITY,
                key: filename.to_string(),
            })
        };

        if !is_sanitized(filename) {
            return Err(not_found());
        }

        let bytes = match tokio::fs::read(self.root.join(filename)).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
            Err(err) => return Err(err.into()),
        };

        let content_type = mime_guess::from_path(filename)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(StoredMedia {
            filename: filename.to_string(),
            content_type,
            bytes,
        })
    }
}

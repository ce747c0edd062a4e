//! On-disk persistence for post records and their media.

use std::path::{Path, PathBuf};

use vendorscope_core::PostRecord;

use crate::error::StoreError;

/// Directory pair for per-post JSON documents and downloaded media.
#[derive(Debug, Clone)]
pub struct RecordStore {
    data_dir: PathBuf,
    media_dir: PathBuf,
}

impl RecordStore {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>, media_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            media_dir: media_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn media_dir(&self) -> &Path {
        &self.media_dir
    }

    /// Creates both directories if they do not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if either directory cannot be created.
    pub async fn ensure_dirs(&self) -> Result<(), StoreError> {
        for dir in [&self.data_dir, &self.media_dir] {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::Io {
                    path: dir.display().to_string(),
                    source: e,
                })?;
        }
        Ok(())
    }

    /// Destination for a media artifact named `file_name`.
    #[must_use]
    pub fn media_path(&self, file_name: &str) -> PathBuf {
        self.media_dir.join(file_name)
    }

    /// Path of the JSON document for `record`: `{channel}_{message_id}.json`.
    #[must_use]
    pub fn record_path(&self, record: &PostRecord) -> PathBuf {
        self.data_dir
            .join(format!("{}_{}.json", record.channel, record.message_id))
    }

    /// Writes `record` as pretty-printed UTF-8 JSON, overwriting any
    /// previous document for the same post.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Json`] if serialization fails or
    /// [`StoreError::Io`] if the file cannot be written.
    pub async fn save_record(&self, record: &PostRecord) -> Result<PathBuf, StoreError> {
        let path = self.record_path(record);
        let body = serde_json::to_string_pretty(record)?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| StoreError::Io {
                path: path.display().to_string(),
                source: e,
            })?;
        Ok(path)
    }
}

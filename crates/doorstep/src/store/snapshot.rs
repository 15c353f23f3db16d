//! Camera snapshot captures.
//!
//! Every upload is written to its own second-stamped file and kept
//! forever; only the filename of the most recent capture is tracked,
//! in process memory. The pointer is lost on restart and clearing it
//! never deletes a file.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Local;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;

use doorstep_common::Error;
use doorstep_common::constants::{JPEG_DATA_URI_PREFIX, SNAPSHOT_NAME_FORMAT};

/// A freshly saved capture, ready for inline transport
#[derive(Debug, Clone)]
pub struct SavedSnapshot {
    pub file: String,
    pub data_uri: String,
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
    /// Filename of the most recent capture, shared across requests
    latest: Arc<RwLock<Option<String>>>,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            latest: Arc::new(RwLock::new(None)),
        }
    }

    /// Write a capture to disk and point at it.
    ///
    /// An empty payload is rejected without touching the pointer.
    pub async fn save(&self, bytes: &[u8]) -> Result<SavedSnapshot, Error> {
        if bytes.is_empty() {
            return Err(Error::NoData);
        }

        let file = Local::now().format(SNAPSHOT_NAME_FORMAT).to_string();
        tokio::fs::write(self.dir.join(&file), bytes).await?;
        *self.latest.write().await = Some(file.clone());

        tracing::debug!(file = %file, size = bytes.len(), "Snapshot saved");

        Ok(SavedSnapshot {
            file,
            data_uri: format!("{JPEG_DATA_URI_PREFIX}{}", STANDARD.encode(bytes)),
        })
    }

    /// The most recent capture, re-encoded for transport.
    ///
    /// `None` when no pointer is set or the referenced file is gone.
    pub async fn latest(&self) -> Option<SavedSnapshot> {
        let file = self.latest.read().await.clone()?;
        let bytes = tokio::fs::read(self.dir.join(&file)).await.ok()?;
        Some(SavedSnapshot {
            file,
            data_uri: format!("{JPEG_DATA_URI_PREFIX}{}", STANDARD.encode(&bytes)),
        })
    }

    /// Forget the latest pointer; files are never deleted
    pub async fn forget(&self) {
        *self.latest.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_payload_rejected_pointer_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let snaps = SnapshotStore::new(dir.path());

        snaps.save(b"earlier").await.unwrap();
        let err = snaps.save(b"").await.unwrap_err();
        assert!(matches!(err, Error::NoData));

        // Pointer still refers to the earlier capture
        assert!(snaps.latest().await.is_some());
    }

    #[tokio::test]
    async fn test_save_then_latest() {
        let dir = tempfile::tempdir().unwrap();
        let snaps = SnapshotStore::new(dir.path());

        let saved = snaps.save(b"jpegbytes").await.unwrap();
        assert!(saved.data_uri.starts_with(JPEG_DATA_URI_PREFIX));
        assert!(dir.path().join(&saved.file).exists());

        let latest = snaps.latest().await.unwrap();
        assert_eq!(latest.file, saved.file);
        assert_eq!(latest.data_uri, saved.data_uri);
    }

    #[tokio::test]
    async fn test_forget_keeps_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let snaps = SnapshotStore::new(dir.path());

        let saved = snaps.save(b"jpegbytes").await.unwrap();
        snaps.forget().await;

        assert!(snaps.latest().await.is_none());
        assert!(dir.path().join(&saved.file).exists());
    }

    #[tokio::test]
    async fn test_latest_none_when_file_removed() {
        let dir = tempfile::tempdir().unwrap();
        let snaps = SnapshotStore::new(dir.path());

        let saved = snaps.save(b"jpegbytes").await.unwrap();
        tokio::fs::remove_file(dir.path().join(&saved.file))
            .await
            .unwrap();

        assert!(snaps.latest().await.is_none());
    }

    #[tokio::test]
    async fn test_no_pointer_before_first_save() {
        let dir = tempfile::tempdir().unwrap();
        let snaps = SnapshotStore::new(dir.path());
        assert!(snaps.latest().await.is_none());
    }
}

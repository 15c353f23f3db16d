//! Named JSON documents on the local filesystem.
//!
//! The tiny {get, put, delete} surface keeps the file-as-database
//! pattern in one place. A document that is missing or unparsable reads
//! as absent - callers decide what the empty state means.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

use doorstep_common::Error;

/// Typed access to JSON documents under a single directory
#[derive(Debug, Clone)]
pub struct JsonStore {
    dir: PathBuf,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Read and parse a document. Missing or corrupt documents read as
    /// `None`; corruption is logged but never surfaced.
    pub async fn get<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let bytes = tokio::fs::read(self.path(name)).await.ok()?;
        match serde_json::from_slice(&bytes) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(document = name, error = %err, "Unparsable document, treating as absent");
                None
            }
        }
    }

    /// Serialize and persist a document, replacing any previous content
    pub async fn put<T: Serialize>(&self, name: &str, value: &T) -> Result<(), Error> {
        let bytes = serde_json::to_vec_pretty(value)?;
        tokio::fs::write(self.path(name), bytes).await?;
        Ok(())
    }

    /// Remove a document; removing an absent document is not an error
    pub async fn delete(&self, name: &str) -> Result<(), Error> {
        match tokio::fs::remove_file(self.path(name)).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

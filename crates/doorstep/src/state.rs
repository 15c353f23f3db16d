//! Application state and shared resources.

use anyhow::{Context, Result};
use std::path::Path;

use doorstep_common::constants::SNAPSHOT_DIR;
use doorstep_common::{LogEntry, VerifyOutcome};

use crate::config::AppConfig;
use crate::store::{
    AlertStore, CodeStore, JsonStore, SnapshotStore, VerificationLog, display_now,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Active verification code
    pub codes: CodeStore,

    /// Pending visitor alert
    pub alerts: AlertStore,

    /// Camera snapshot captures
    pub snapshots: SnapshotStore,

    /// Bounded verification log
    pub log: VerificationLog,
}

impl AppState {
    /// Create new application state, preparing the data directories
    pub async fn new(config: AppConfig) -> Result<Self> {
        let data_dir = Path::new(&config.data_dir);
        let snapshot_dir = data_dir.join(SNAPSHOT_DIR);

        tokio::fs::create_dir_all(&snapshot_dir)
            .await
            .context("Failed to create data directories")?;

        let docs = JsonStore::new(data_dir);

        Ok(Self {
            codes: CodeStore::new(docs.clone(), config.code.expiry_secs),
            alerts: AlertStore::new(docs.clone()),
            snapshots: SnapshotStore::new(snapshot_dir),
            log: VerificationLog::new(docs, config.log.max_entries),
            config,
        })
    }

    /// Verify an entered code and record the attempt.
    ///
    /// Every call appends exactly one log entry, whatever the outcome,
    /// carrying the latest snapshot when one is resolvable. Recording is
    /// a side effect of verification, not a separate step the caller
    /// can skip.
    pub async fn verify_code(&self, entered: &str) -> VerifyOutcome {
        let result = self.codes.check(entered).await;
        let img = self.snapshots.latest().await.map(|s| s.data_uri);

        let entry = LogEntry {
            time: display_now(),
            result,
            img,
        };
        if let Err(err) = self.log.append(entry).await {
            tracing::warn!(error = %err, "Failed to record verification attempt");
        }

        tracing::info!(result = ?result, "Verification attempt");
        result
    }
}

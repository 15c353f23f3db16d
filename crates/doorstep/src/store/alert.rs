//! The pending visitor alert.
//!
//! A singleton document: raising overwrites, clearing removes the file.
//! Absence is the cleared state.

use doorstep_common::constants::documents;
use doorstep_common::{AlertState, Error};

use super::{JsonStore, display_now};

#[derive(Debug, Clone)]
pub struct AlertStore {
    docs: JsonStore,
}

impl AlertStore {
    pub fn new(docs: JsonStore) -> Self {
        Self { docs }
    }

    /// Record that a visitor wants attention, returning the formatted time
    pub async fn raise(&self) -> Result<String, Error> {
        let time = display_now();
        let state = AlertState {
            pending: true,
            time: time.clone(),
        };
        self.docs.put(documents::ALERT, &state).await?;
        tracing::info!("Visitor alert raised");
        Ok(time)
    }

    /// Current alert state, cleared when no document exists
    pub async fn check(&self) -> AlertState {
        self.docs
            .get(documents::ALERT)
            .await
            .unwrap_or_else(AlertState::cleared)
    }

    /// Remove the alert entirely
    pub async fn clear(&self) -> Result<(), Error> {
        self.docs.delete(documents::ALERT).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_raise_then_check() {
        let dir = tempfile::tempdir().unwrap();
        let alerts = AlertStore::new(JsonStore::new(dir.path()));

        let time = alerts.raise().await.unwrap();
        let state = alerts.check().await;
        assert!(state.pending);
        assert_eq!(state.time, time);
    }

    #[tokio::test]
    async fn test_clear_then_check_is_cleared_default() {
        let dir = tempfile::tempdir().unwrap();
        let alerts = AlertStore::new(JsonStore::new(dir.path()));

        alerts.raise().await.unwrap();
        alerts.clear().await.unwrap();

        let state = alerts.check().await;
        assert!(!state.pending);
        assert_eq!(state.time, "");
    }

    #[tokio::test]
    async fn test_check_without_raise() {
        let dir = tempfile::tempdir().unwrap();
        let alerts = AlertStore::new(JsonStore::new(dir.path()));

        let state = alerts.check().await;
        assert!(!state.pending);
        assert_eq!(state.time, "");
    }
}

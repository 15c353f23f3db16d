//! The bounded verification log.
//!
//! Newest-first JSON array, truncated to a fixed number of entries on
//! every append. A missing or corrupt file reads as empty and is
//! rebuilt on the next append.

use doorstep_common::constants::documents;
use doorstep_common::{Error, LogEntry};

use super::JsonStore;

#[derive(Debug, Clone)]
pub struct VerificationLog {
    docs: JsonStore,
    max_entries: usize,
}

impl VerificationLog {
    pub fn new(docs: JsonStore, max_entries: usize) -> Self {
        Self { docs, max_entries }
    }

    /// Prepend an entry, truncate to the cap, persist
    pub async fn append(&self, entry: LogEntry) -> Result<(), Error> {
        let mut entries: Vec<LogEntry> = self.docs.get(documents::LOG).await.unwrap_or_default();
        entries.insert(0, entry);
        entries.truncate(self.max_entries);
        self.docs.put(documents::LOG, &entries).await
    }

    /// All stored entries, newest first
    pub async fn entries(&self) -> Vec<LogEntry> {
        self.docs.get(documents::LOG).await.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doorstep_common::VerifyOutcome;

    fn entry(tag: &str) -> LogEntry {
        LogEntry {
            time: tag.to_string(),
            result: VerifyOutcome::Success,
            img: None,
        }
    }

    #[tokio::test]
    async fn test_append_is_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let log = VerificationLog::new(JsonStore::new(dir.path()), 100);

        log.append(entry("first")).await.unwrap();
        log.append(entry("second")).await.unwrap();

        let entries = log.entries().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].time, "second");
        assert_eq!(entries[1].time, "first");
    }

    #[tokio::test]
    async fn test_log_never_exceeds_cap() {
        let dir = tempfile::tempdir().unwrap();
        let log = VerificationLog::new(JsonStore::new(dir.path()), 5);

        for i in 0..8 {
            log.append(entry(&i.to_string())).await.unwrap();
        }

        let entries = log.entries().await;
        assert_eq!(entries.len(), 5);
        // Oldest entries fell off the end
        assert_eq!(entries[0].time, "7");
        assert_eq!(entries[4].time, "3");
    }

    #[tokio::test]
    async fn test_corrupt_log_reads_empty_and_recovers() {
        let dir = tempfile::tempdir().unwrap();
        let log = VerificationLog::new(JsonStore::new(dir.path()), 100);

        tokio::fs::write(dir.path().join(documents::LOG), b"[{broken")
            .await
            .unwrap();
        assert!(log.entries().await.is_empty());

        log.append(entry("fresh")).await.unwrap();
        assert_eq!(log.entries().await.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_log_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = VerificationLog::new(JsonStore::new(dir.path()), 100);
        assert!(log.entries().await.is_empty());
    }
}

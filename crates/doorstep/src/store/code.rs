//! The active verification code.
//!
//! A single code exists at a time; issuing a new one replaces it. The
//! code expires a fixed number of seconds after creation, checked
//! lazily on every read - an expired code and a never-issued code look
//! identical to callers.

use chrono::Utc;
use rand::Rng;

use doorstep_common::constants::{CODE_MAX, CODE_MIN, documents};
use doorstep_common::{Error, StoredCode, VerifyOutcome};

use super::JsonStore;

#[derive(Debug, Clone)]
pub struct CodeStore {
    docs: JsonStore,
    expiry_secs: u64,
}

impl CodeStore {
    pub fn new(docs: JsonStore, expiry_secs: u64) -> Self {
        Self { docs, expiry_secs }
    }

    /// Issue a fresh 6-digit code, replacing any existing one.
    ///
    /// No uniqueness check against prior codes - collisions are harmless
    /// since only the latest code is ever active.
    pub async fn issue(&self) -> Result<String, Error> {
        let code = rand::rng().random_range(CODE_MIN..=CODE_MAX).to_string();
        let stored = StoredCode {
            code: code.clone(),
            created: Utc::now().timestamp(),
        };
        self.docs.put(documents::CODE, &stored).await?;
        tracing::info!("Verification code issued");
        Ok(code)
    }

    /// The active code, or `None` if absent or expired
    pub async fn current(&self) -> Option<String> {
        let stored: StoredCode = self.docs.get(documents::CODE).await?;
        if stored.is_expired(Utc::now().timestamp(), self.expiry_secs) {
            return None;
        }
        Some(stored.code)
    }

    /// Check an entered code against the active one.
    ///
    /// The entered string is trimmed before comparison. Codes stay valid
    /// for repeated checks until replaced or expired.
    pub async fn check(&self, entered: &str) -> VerifyOutcome {
        let entered = entered.trim();
        let stored: Option<StoredCode> = self.docs.get(documents::CODE).await;

        match stored {
            Some(stored) if !stored.is_expired(Utc::now().timestamp(), self.expiry_secs) => {
                if entered == stored.code {
                    VerifyOutcome::Success
                } else {
                    VerifyOutcome::Fail
                }
            }
            _ => VerifyOutcome::Expired,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &std::path::Path) -> CodeStore {
        CodeStore::new(JsonStore::new(dir), 180)
    }

    #[tokio::test]
    async fn test_issued_codes_are_six_decimal_digits() {
        let dir = tempfile::tempdir().unwrap();
        let codes = store(dir.path());

        for _ in 0..50 {
            let code = codes.issue().await.unwrap();
            assert_eq!(code.len(), 6);
            let value: u32 = code.parse().unwrap();
            assert!((CODE_MIN..=CODE_MAX).contains(&value));
        }
    }

    #[tokio::test]
    async fn test_verify_right_and_wrong_code() {
        let dir = tempfile::tempdir().unwrap();
        let codes = store(dir.path());

        let code = codes.issue().await.unwrap();
        assert_eq!(codes.check(&code).await, VerifyOutcome::Success);
        assert_eq!(codes.check("000000").await, VerifyOutcome::Fail);

        // Codes are reusable until replaced or expired
        assert_eq!(codes.check(&code).await, VerifyOutcome::Success);
    }

    #[tokio::test]
    async fn test_entered_code_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let codes = store(dir.path());

        let code = codes.issue().await.unwrap();
        let padded = format!("  {code} ");
        assert_eq!(codes.check(&padded).await, VerifyOutcome::Success);
    }

    #[tokio::test]
    async fn test_missing_code_is_expired() {
        let dir = tempfile::tempdir().unwrap();
        let codes = store(dir.path());

        assert_eq!(codes.current().await, None);
        assert_eq!(codes.check("123456").await, VerifyOutcome::Expired);
    }

    #[tokio::test]
    async fn test_stale_code_is_expired() {
        let dir = tempfile::tempdir().unwrap();
        let docs = JsonStore::new(dir.path());
        let codes = CodeStore::new(docs.clone(), 180);

        // Backdate a code past the expiry window
        let stale = StoredCode {
            code: "482913".to_string(),
            created: Utc::now().timestamp() - 181,
        };
        docs.put(documents::CODE, &stale).await.unwrap();

        assert_eq!(codes.current().await, None);
        assert_eq!(codes.check("482913").await, VerifyOutcome::Expired);
    }

    #[tokio::test]
    async fn test_new_code_replaces_old() {
        let dir = tempfile::tempdir().unwrap();
        let codes = store(dir.path());

        let first = codes.issue().await.unwrap();
        let second = codes.issue().await.unwrap();
        assert_eq!(codes.current().await, Some(second.clone()));
        if first != second {
            assert_eq!(codes.check(&first).await, VerifyOutcome::Fail);
        }
    }
}

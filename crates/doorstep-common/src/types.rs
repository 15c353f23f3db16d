//! Core types shared across Doorstep components.

use serde::{Deserialize, Serialize};

/// Outcome of a verification attempt at the door.
///
/// `Expired` covers both "the code timed out" and "no code was ever
/// issued" - the two are indistinguishable to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyOutcome {
    /// Entered code matched the active code
    Success,
    /// Entered code did not match
    Fail,
    /// No active code, or the active code timed out
    Expired,
}

/// The single active verification code, as persisted.
///
/// Exactly one instance exists at a time; issuing a new code overwrites
/// the previous one. Expiry is evaluated lazily on read - there is no
/// background sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCode {
    /// 6-digit decimal code as a string
    pub code: String,

    /// Creation timestamp (Unix epoch seconds)
    pub created: i64,
}

impl StoredCode {
    /// Check whether this code has outlived its validity window
    pub fn is_expired(&self, now: i64, expiry_secs: u64) -> bool {
        now - self.created > expiry_secs as i64
    }
}

/// Singleton "visitor wants attention" flag.
///
/// Overwritten on each new visitor request; the document is removed
/// entirely when the owner clears it, so absence means cleared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertState {
    pub pending: bool,

    /// Human-readable local time of the request
    pub time: String,
}

impl AlertState {
    /// The state reported when no alert document exists
    pub fn cleared() -> Self {
        Self {
            pending: false,
            time: String::new(),
        }
    }
}

/// One verification attempt in the access log.
///
/// Entries are immutable once appended; the log is only ever
/// prepended-to and truncated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// Human-readable local time of the attempt
    pub time: String,

    /// Verification outcome
    pub result: VerifyOutcome,

    /// Snapshot at the time of the attempt, as a data URI
    pub img: Option<String>,
}

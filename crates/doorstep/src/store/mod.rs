//! File-backed stores for Doorstep state.
//!
//! Everything the service remembers lives here: the active verification
//! code, the pending-alert flag, the snapshot captures, and the access
//! log. JSON singletons go through [`JsonStore`]; snapshots are raw
//! files. Last write wins - there is no cross-request atomicity, which
//! is acceptable for the single-instance deployment this targets.

mod alert;
mod code;
mod docs;
mod log;
mod snapshot;

pub use alert::AlertStore;
pub use code::CodeStore;
pub use docs::JsonStore;
pub use log::VerificationLog;
pub use snapshot::{SavedSnapshot, SnapshotStore};

use chrono::Local;
use doorstep_common::constants::DISPLAY_TIME_FORMAT;

/// Current local time in the human-readable format used by alerts and
/// log entries.
pub fn display_now() -> String {
    Local::now().format(DISPLAY_TIME_FORMAT).to_string()
}

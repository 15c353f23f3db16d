//! Shared constants for Doorstep components.

/// Default HTTP listen address
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8777";

/// Default data directory (JSON documents + snapshots)
pub const DEFAULT_DATA_DIR: &str = "data";

/// Default static frontend directory
pub const DEFAULT_STATIC_DIR: &str = "frontend";

/// Verification code validity (3 minutes)
pub const DEFAULT_CODE_EXPIRY_SECS: u64 = 180;

/// Maximum retained verification log entries
pub const DEFAULT_LOG_MAX_ENTRIES: usize = 100;

/// Inclusive range for generated verification codes (always 6 digits)
pub const CODE_MIN: u32 = 100_000;
pub const CODE_MAX: u32 = 999_999;

/// Human-readable timestamp format used in alerts and log entries
pub const DISPLAY_TIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";

/// Data-URI prefix for inline snapshot transport
pub const JPEG_DATA_URI_PREFIX: &str = "data:image/jpeg;base64,";

/// JSON document names under the data directory
pub mod documents {
    /// Active verification code: {code, created}
    pub const CODE: &str = "code_data.json";

    /// Pending visitor alert: {pending, time}
    pub const ALERT: &str = "alert.json";

    /// Verification log: newest-first array of entries
    pub const LOG: &str = "access_log.json";
}

/// Subdirectory of the data directory holding snapshot captures
pub const SNAPSHOT_DIR: &str = "snapshots";

/// Filename pattern for snapshot captures (second resolution)
pub const SNAPSHOT_NAME_FORMAT: &str = "snapshot_%Y%m%d_%H%M%S.jpg";

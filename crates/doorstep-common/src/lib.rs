//! # Doorstep Common
//!
//! Shared types and utilities used across Doorstep components.
//!
//! ## Modules
//! - `types` - Core data structures (StoredCode, AlertState, LogEntry, ...)
//! - `error` - Common error types
//! - `constants` - Shared configuration constants

pub mod constants;
pub mod error;
pub mod types;

pub use error::Error;
pub use types::*;

//! Error handling and probe statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, probe target validation, settings)
//! - Network error categorization
//! - Thread-safe counters of network failures per category

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, update_error_stats};
pub use stats::ProbeStats;
pub use types::{ConnectionErrorKind, InitializationError, ProbeError, SettingsError};

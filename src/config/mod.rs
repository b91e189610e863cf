//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, report text, column widths)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ErrorMode, LogFormat, LogLevel, Opt};

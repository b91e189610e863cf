//! Probe statistics tracking.
//!
//! This module provides thread-safe counters for the network failures seen
//! while probing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::ConnectionErrorKind;

/// Thread-safe network failure counters.
///
/// Every `ConnectionErrorKind` is initialized to zero on creation, so the
/// counters can be shared across concurrent site probes using `Arc`.
pub struct ProbeStats {
    errors: HashMap<ConnectionErrorKind, AtomicUsize>,
}

impl ProbeStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for kind in ConnectionErrorKind::iter() {
            errors.insert(kind, AtomicUsize::new(0));
        }

        ProbeStats { errors }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, kind: ConnectionErrorKind) {
        if let Some(counter) = self.errors.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProbeStats initialization.",
                kind
            );
        }
    }

    /// Get the count for an error kind.
    pub fn get_error_count(&self, kind: ConnectionErrorKind) -> usize {
        self.errors
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Sum of all error counters.
    pub fn total_errors(&self) -> usize {
        self.errors.values().map(|c| c.load(Ordering::SeqCst)).sum()
    }
}

impl Default for ProbeStats {
    fn default() -> Self {
        Self::new()
    }
}

//! Run statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ConnectionErrorKind, ProbeStats};

/// Logs the network failure counts per category.
///
/// Nothing is logged when every request succeeded.
pub fn print_error_statistics(stats: &ProbeStats) {
    let total_errors = stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Connection error counts ({} total):", total_errors);
    for kind in ConnectionErrorKind::iter() {
        let count = stats.get_error_count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_statistics_no_errors() {
        let stats = ProbeStats::new();
        print_error_statistics(&stats);
    }

    #[test]
    fn test_print_error_statistics_with_errors() {
        let stats = ProbeStats::new();
        stats.increment_error(ConnectionErrorKind::Timeout);
        stats.increment_error(ConnectionErrorKind::Connect);
        print_error_statistics(&stats);
    }
}

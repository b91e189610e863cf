//! Progress logging utilities.

use log::info;

/// Logs progress after a site has been probed.
///
/// # Arguments
///
/// * `start_time` - The start time of the run
/// * `completed` - Sites finished so far
/// * `total` - Sites configured
pub fn log_progress(start_time: std::time::Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Probed {}/{} sites in {:.2} seconds (~{:.2} sites/sec)",
        completed, total, elapsed_secs, rate
    );
}

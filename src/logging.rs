// refsweep/src/logging.rs

use tracing::Level;

/// Diagnostics go to stderr with a fixed WARN ceiling, so the stdout report
/// stays clean. Safe to call more than once (later calls are no-ops).
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

//! Utility functions for the standoff server

use std::fs;
use std::path::Path;

use anyhow::Result;
use log::{info, LevelFilter};

/// Route `log` output to stderr and a log file (truncated each session).
/// Stdout stays reserved for JSON-RPC responses.
pub fn init_logger(level_filter: LevelFilter, log_file_path: &Path) -> Result<()> {
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let _ = fs::remove_file(log_file_path);

    let start = std::time::Instant::now();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            let elapsed = start.elapsed();
            out.finish(format_args!(
                "[{}] [{:>8.3}s] {}",
                record.level(),
                elapsed.as_secs_f64(),
                message
            ))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .chain(fern::log_file(log_file_path)?)
        .apply()?;
    info!("[Server] Logging to {}", log_file_path.display());
    Ok(())
}

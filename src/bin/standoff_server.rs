use standoff::consts::{LOG_FILE_PATH, LOG_LEVEL_FILTER_DEBUG, LOG_LEVEL_FILTER_RELEASE};
use standoff::server::util::init_logger;
use standoff::server::{handle_line, ServerState};
use std::io::{self, BufRead, Write};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    let level = if cfg!(debug_assertions) {
        LOG_LEVEL_FILTER_DEBUG
    } else {
        LOG_LEVEL_FILTER_RELEASE
    };
    init_logger(level, Path::new(LOG_FILE_PATH))?;

    log::info!("[Server] Starting standoff server...");
    let mut state = ServerState::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log::error!("[Server] Error reading stdin: {}", e);
                continue;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        let (response, shutdown) = handle_line(&mut state, &line);
        if response.is_error() {
            log::debug!("[Server] Request failed: {:?}", response.error);
        }
        writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
        stdout.flush()?;

        if shutdown {
            log::info!("[Server] Shutdown requested");
            break;
        }
    }

    Ok(())
}

// src/log.rs
//
// tracing setup. The GUI appends to `.store/debug.log`; the CLI writes to stderr.
// Timestamps are time since start, like a stopwatch. `RUST_LOG` overrides the
// default filter in both cases.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt::time::Uptime, EnvFilter};

use crate::config::consts::{LOG_FILE, STORE_DIR};

const CRATE: &str = env!("CARGO_CRATE_NAME");

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{CRATE}={default_level}")))
}

/// Log file for the GUI. Returns the file path.
pub fn init_file() -> io::Result<PathBuf> {
    let dir = Path::new(STORE_DIR);
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    // A second init (tests, re-entry) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("debug"))
        .with_timer(Uptime::default())
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(path)
}

/// stderr logging for the CLI; `verbosity` counts `-v` flags.
pub fn init_stderr(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(level))
        .with_timer(Uptime::default())
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

//! Tracing setup.
//!
//! - `DSA_COMPANION_LOG` sets the filter (default "info").
//! - `LOG_FORMAT=json` switches to JSON lines.
//!
//! The interactive UI owns the terminal, so it logs to a file. One-shot
//! commands log to stderr.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env("DSA_COMPANION_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
}

fn json_format() -> bool {
    matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"))
}

pub fn init_stderr() {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_writer(std::io::stderr);

    if json_format() {
        builder.json().init();
    } else {
        builder.init();
    }
}

pub fn init_file(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    if json_format() {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

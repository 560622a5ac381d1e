//! File-backed `tracing` setup. The terminal belongs to the UI, so nothing is logged to it.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{self, LogConfig};

pub const LOG_ENV: &str = "LEANVISION_LOG";

/// Installs the global subscriber and returns the log file path, if one could be resolved.
pub fn init(log: &LogConfig) -> Result<Option<PathBuf>> {
    let Some(path) = config::log_path(log) else {
        return Ok(None);
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log dir {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(log))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("install tracing subscriber")?;

    Ok(Some(path))
}

/// `LEANVISION_LOG` when set and valid, otherwise `log.level`
fn env_filter(log: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&log.level))
}

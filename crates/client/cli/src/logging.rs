//! Tracing setup: a session log file, optionally mirrored to stderr.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::HarnessConfig;

/// Installs the global subscriber. Keep the returned guard alive until exit
/// so buffered log lines are flushed.
pub fn setup_logging(config: &HarnessConfig) -> Result<WorkerGuard> {
    let log_dir = config.log_dir.clone().unwrap_or_else(default_log_dir);
    let session_dir = session_dir(&log_dir);
    std::fs::create_dir_all(&session_dir)
        .with_context(|| format!("failed to create log directory {}", session_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_dir, "banqi.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = config.log_stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(log_file = %session_dir.join("banqi.log").display(), "logging initialized");
    Ok(guard)
}

/// Platform cache directory for banqi logs.
///
/// - macOS: `~/Library/Caches/banqi/logs`
/// - Linux: `~/.cache/banqi/logs` (or `$XDG_CACHE_HOME/banqi/logs`)
/// - Windows: `%LOCALAPPDATA%\banqi\cache\logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "banqi")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("banqi"))
        .join("logs")
}

fn session_dir(log_dir: &Path) -> PathBuf {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    log_dir.join(format!("session_{timestamp}"))
}

//! File-only tracing setup.
//!
//! Stdout carries the game, so logs go to a per-session file under the
//! platform cache directory (e.g. `~/.cache/duel/logs/<session>/duel.log`).
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "duel.log";

/// Platform-specific log directory.
///
/// - macOS: `~/Library/Caches/duel/logs`
/// - Linux: `~/.cache/duel/logs` (or `$XDG_CACHE_HOME/duel/logs`)
/// - Windows: `%LOCALAPPDATA%\duel\cache\logs`
/// - Fallback: `/tmp/duel/logs`
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "duel")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/duel"))
        .join("logs")
}

/// Session name used when none is configured.
pub fn generated_session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}

/// Installs the global subscriber and returns the log file path.
///
/// Filtering follows `RUST_LOG`, with `info` as the floor.
pub fn setup_logging(log_dir: Option<&Path>, session_id: Option<&str>) -> Result<PathBuf> {
    let base_dir = log_dir.map_or_else(default_log_dir, Path::to_path_buf);
    let session_id = session_id.map_or_else(generated_session_id, str::to_owned);

    let session_log_dir = base_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory: {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    // The writer must outlive every log call.
    std::mem::forget(guard);

    let log_file = session_log_dir.join(LOG_FILE);
    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file.display());

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dir_ends_in_logs() {
        assert!(default_log_dir().ends_with("logs"));
    }

    #[test]
    fn generated_sessions_are_prefixed() {
        let id = generated_session_id();
        assert!(id.starts_with("session_"));
        assert!(id["session_".len()..].parse::<u64>().is_ok());
    }
}

//! Tracing setup for the CLI: compact stderr output plus an optional JSON log file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "garden.log";

/// Filter used when `RUST_LOG` is unset. Other crates stay silent.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("garden={}", level)
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Splits `log_path` into the directory to rotate in and the file name prefix.
fn log_location(log_path: &Path) -> (PathBuf, OsString) {
    let dir = log_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = log_path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from(DEFAULT_LOG_FILE));
    (dir, file_name)
}

fn file_appender(log_path: &Path) -> RollingFileAppender {
    let (dir, file_name) = log_location(log_path);
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("warning: cannot create log directory {}: {}", dir.display(), e);
    }
    tracing_appender::rolling::daily(dir, file_name)
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();
    let subscriber = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(stderr_layer);

    let installed = match log_file {
        Some(log_path) => {
            let file_layer = fmt::layer()
                .with_writer(file_appender(&log_path))
                .with_ansi(false)
                .json();
            subscriber.with(file_layer).try_init()
        }
        None => subscriber.try_init(),
    };
    if installed.is_err() {
        tracing::trace!("Logging already initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_directive_targets_garden() {
        assert_eq!(default_directive(false), "garden=info");
        assert_eq!(default_directive(true), "garden=debug");
        assert!(EnvFilter::try_new(default_directive(true)).is_ok());
    }

    #[test]
    fn test_log_location_splits_path() {
        let (dir, file_name) = log_location(Path::new(".garden/logs/garden.log"));
        assert_eq!(dir, PathBuf::from(".garden/logs"));
        assert_eq!(file_name, OsString::from("garden.log"));
    }

    #[test]
    fn test_log_location_bare_file_uses_current_dir() {
        let (dir, file_name) = log_location(Path::new("plants.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file_name, OsString::from("plants.log"));
    }

    #[test]
    fn test_file_appender_creates_log_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("logs").join("garden.log");

        let _appender = file_appender(&log_path);

        assert!(temp_dir.path().join("logs").is_dir());
    }
}

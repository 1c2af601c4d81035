//! Subscriber setup for hosts embedding ScreenShield
//!
//! The crate itself only emits `tracing` events under the `screenshield` target.
//! Hosts that have no subscriber of their own can call `init_logging` for console
//! output, an optional daily rolled file and a level that can be changed later.

use crate::config;
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::{Duration, SystemTime};
use tracing::level_filters::LevelFilter;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

const SECS_PER_DAY: u64 = 24 * 60 * 60;

lazy_static! {
    // Set once the global subscriber is installed
    static ref FILTER_HANDLE: Mutex<Option<reload::Handle<EnvFilter, Registry>>> = Mutex::new(None);
}

/// `EnvFilter` directive limiting this crate's events to `level`
pub fn filter_directive(level: LevelFilter) -> String {
    if level == LevelFilter::OFF {
        "off".to_string()
    } else {
        format!("screenshield={}", level.to_string().to_lowercase())
    }
}

/// Conventional log location for the host OS; not created here
///
/// - macOS: `~/Library/Logs/ScreenShield`
/// - Windows: `%LOCALAPPDATA%\ScreenShield\logs`
/// - Linux: `~/.local/share/ScreenShield/logs`
pub fn default_logs_dir() -> Option<PathBuf> {
    if cfg!(target_os = "macos") {
        dirs::home_dir().map(|home| {
            home.join("Library")
                .join("Logs")
                .join(config::logging::LOG_DIR_NAME)
        })
    } else {
        dirs::data_local_dir().map(|data| data.join(config::logging::LOG_DIR_NAME).join("logs"))
    }
}

/// Install the global subscriber, or change its level if already installed
///
/// With `log_dir`, events are also written to a daily rolled file there and rolled
/// files older than `LOG_RETENTION_DAYS` are removed in the background. The file
/// layer is only decided by the first call.
pub fn init_logging(level: LevelFilter, log_dir: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::new(filter_directive(level));

    let mut installed = FILTER_HANDLE
        .lock()
        .map_err(|_| anyhow!("Log filter handle lock poisoned"))?;
    if let Some(handle) = installed.as_ref() {
        handle.reload(filter).context("Failed to reload log filter")?;
        tracing::debug!(%level, "Log level changed");
        return Ok(());
    }

    let (filter_layer, handle) = reload::Layer::new(filter);
    let console_layer = fmt::layer().with_target(true).with_thread_ids(true);

    let file_layer = match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create logs directory {}", dir.display()))?;
            let appender =
                RollingFileAppender::new(Rotation::DAILY, dir, config::logging::LOG_FILE_NAME);
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(appender)
                    .with_target(true)
                    .with_thread_ids(true),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("A global tracing subscriber is already installed")?;
    *installed = Some(handle);

    if let Some(dir) = log_dir {
        spawn_log_cleanup(dir.to_path_buf(), config::logging::LOG_RETENTION_DAYS);
    }
    Ok(())
}

/// Remove rolled log files older than `keep_days`, returning how many went
///
/// Only files named after `LOG_FILE_NAME` are considered.
pub fn cleanup_old_logs(logs_dir: &Path, keep_days: u32) -> Result<usize> {
    let max_age = Duration::from_secs(u64::from(keep_days) * SECS_PER_DAY);
    let now = SystemTime::now();
    let entries = fs::read_dir(logs_dir)
        .with_context(|| format!("Failed to read logs directory {}", logs_dir.display()))?;

    let mut removed = 0;
    for entry in entries.filter_map(|entry| entry.ok()) {
        let path = entry.path();
        if !is_rolled_log(&path) {
            continue;
        }

        let age = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .ok()
            .and_then(|modified| now.duration_since(modified).ok());
        let Some(age) = age.filter(|age| *age > max_age) else {
            continue;
        };

        match fs::remove_file(&path) {
            Ok(()) => {
                removed += 1;
                tracing::debug!(
                    file = %path.display(),
                    age_days = age.as_secs() / SECS_PER_DAY,
                    "Removed expired log file"
                );
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "Could not remove log file");
            }
        }
    }

    Ok(removed)
}

/// Run `cleanup_old_logs` on a background thread
pub fn spawn_log_cleanup(logs_dir: PathBuf, keep_days: u32) -> JoinHandle<Result<usize>> {
    std::thread::spawn(move || {
        let result = cleanup_old_logs(&logs_dir, keep_days);
        match &result {
            Ok(0) => {}
            Ok(count) => tracing::info!(removed = count, "Cleaned up old log files"),
            Err(e) => tracing::warn!(error = %e, "Log cleanup failed"),
        }
        result
    })
}

fn is_rolled_log(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(config::logging::LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(LevelFilter::OFF), "off");
        assert_eq!(filter_directive(LevelFilter::WARN), "screenshield=warn");
        assert_eq!(filter_directive(LevelFilter::TRACE), "screenshield=trace");
    }

    #[test]
    fn test_directive_from_parsed_level() {
        let level: LevelFilter = "Debug".parse().unwrap();
        assert_eq!(filter_directive(level), "screenshield=debug");
    }

    #[test]
    fn test_rolled_log_names() {
        let temp = tempfile::tempdir().unwrap();
        let rolled = temp.path().join("screenshield.log.2024-05-01");
        let other = temp.path().join("other.log");
        fs::write(&rolled, "").unwrap();
        fs::write(&other, "").unwrap();

        assert!(is_rolled_log(&rolled));
        assert!(!is_rolled_log(&other));
        assert!(!is_rolled_log(&temp.path().join("screenshield.log.missing")));
    }
}

//! Tracing setup for the server and the developer CLI.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::OnceLock,
    time::SystemTime,
};

use time::{OffsetDateTime, UtcOffset, format_description::FormatItem, macros::format_description};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Log files kept in the logs directory after startup.
const MAX_LOG_FILES: usize = 10;
const LOG_FILE_PREFIX: &str = "strokerisk";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Where log lines go.
#[derive(Debug, Clone)]
pub enum LogTarget {
    /// Server: stdout plus `strokerisk_<timestamp>.log` in the given directory.
    StdoutAndFile(PathBuf),
    /// CLI: stderr only, keeping stdout machine readable.
    Stderr,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to create log file in {dir}: {source}")]
    CreateLogFile { dir: PathBuf, source: InitError },
    #[error("Failed to prune old logs in {dir}: {source}")]
    Prune {
        dir: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to format log filename time: {0}")]
    FormatTime(#[from] time::error::Format),
    #[error("Failed to install global tracing subscriber: {0}")]
    SetGlobal(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install the global subscriber. Returns the log file path, if any.
///
/// `RUST_LOG` selects the filter; the default is `info`.
pub fn init(target: LogTarget) -> Result<Option<PathBuf>, LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match target {
        LogTarget::Stderr => {
            let layer = fmt::layer().with_timer(timer()).with_writer(std::io::stderr);
            tracing::subscriber::set_global_default(Registry::default().with(filter).with(layer))?;
            Ok(None)
        }
        LogTarget::StdoutAndFile(dir) => {
            let stem = log_file_stem(now_local_or_utc())?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(&stem)
                .filename_suffix("log")
                .build(&dir)
                .map_err(|source| LoggingError::CreateLogFile {
                    dir: dir.clone(),
                    source,
                })?;
            prune_old_logs(&dir, MAX_LOG_FILES)
                .map_err(|source| LoggingError::Prune {
                    dir: dir.clone(),
                    source,
                })?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let subscriber = Registry::default()
                .with(filter)
                .with(fmt::layer().with_timer(timer()).with_writer(std::io::stdout))
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_timer(timer())
                        .with_writer(writer),
                );
            tracing::subscriber::set_global_default(subscriber)?;
            let _ = LOG_GUARD.set(guard);
            let path = dir.join(format!("{stem}.log"));
            tracing::info!("Logging to {}", path.display());
            Ok(Some(path))
        }
    }
}

/// Delete the oldest `*.log` files until at most `keep` remain.
fn prune_old_logs(dir: &Path, keep: usize) -> std::io::Result<()> {
    let mut logs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "log") {
            let modified = fs::metadata(&path)
                .and_then(|meta| meta.modified())
                .unwrap_or(SystemTime::UNIX_EPOCH);
            logs.push((modified, path));
        }
    }
    logs.sort();
    let excess = logs.len().saturating_sub(keep);
    for (_, path) in logs.drain(..excess) {
        fs::remove_file(path)?;
    }
    Ok(())
}

fn log_file_stem(now: OffsetDateTime) -> Result<String, time::error::Format> {
    const STAMP: &[FormatItem<'_>] =
        format_description!("[year]-[month]-[day]_[hour]-[minute]-[second]");
    Ok(format!("{LOG_FILE_PREFIX}_{}", now.format(STAMP)?))
}

fn timer() -> fmt::time::OffsetTime<time::format_description::BorrowedFormatItem<'static>> {
    const DISPLAY: &[FormatItem<'static>] =
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    fmt::time::OffsetTime::new(offset, DISPLAY.into())
}

fn now_local_or_utc() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

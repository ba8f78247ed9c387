//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr. When a log directory is writable, a
//! JSON-lines file with daily rotation is written alongside.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "TEXT_PARSER_LOG_PATH";
const LOG_DIR_ENV: &str = "TEXT_PARSER_LOG_DIR";
const LOG_FILE_PREFIX: &str = "text-parser";

/// Where log files are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Explicit log file; takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Resolve log locations from the environment, then `config_log_dir`,
    /// then the platform data directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = non_empty_env(LOG_PATH_ENV).map(PathBuf::from);
        let log_dir = non_empty_env(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(|| {
                text_parser_core::config::user_data_local_dir()
                    .map(|dir| dir.join("logs").into_std_path_buf())
            });
        Self { log_path, log_dir }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Build the log filter.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` limits output to errors,
/// each `-v` raises verbosity one step, and the configured level applies
/// when neither flag is given.
pub fn env_filter(quiet: bool, verbose: u8, default_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => default_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Keeps the background log writer alive; drop it to flush.
#[derive(Debug)]
pub struct ObservabilityGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<ObservabilityGuard> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    let (file_layer, guard) = match file_appender(config) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_writer(writer)
                .with_ansi(false)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(ObservabilityGuard { _file: guard })
}

/// Open the log file appender, or `None` when no location is usable.
fn file_appender(config: &ObservabilityConfig) -> Option<RollingFileAppender> {
    if let Some(path) = &config.log_path {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let name = path.file_name()?.to_str()?;
        return build_appender(dir, Rotation::NEVER, name, None);
    }
    let dir = config.log_dir.as_deref()?;
    build_appender(dir, Rotation::DAILY, LOG_FILE_PREFIX, Some("jsonl"))
}

fn build_appender(
    dir: &Path,
    rotation: Rotation,
    prefix: &str,
    suffix: Option<&str>,
) -> Option<RollingFileAppender> {
    std::fs::create_dir_all(dir).ok()?;
    let mut builder = RollingFileAppender::builder()
        .rotation(rotation)
        .filename_prefix(prefix);
    if let Some(suffix) = suffix {
        builder = builder.filename_suffix(suffix);
    }
    builder.build(dir).ok()
}

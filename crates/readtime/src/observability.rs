//! Logging and tracing setup.
//!
//! Human-readable output goes to stderr so it never mixes with command
//! output on stdout. When a log path or directory is configured, a JSONL
//! file layer is added via a non-blocking appender; the returned guard
//! must be held for the life of the process to flush it.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Where file logging should go, if anywhere.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Explicit log file path (appended to).
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated JSONL logs.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Build from environment variables, with the config file's log_dir
    /// as a fallback. `READTIME_LOG_PATH` beats `READTIME_LOG_DIR`,
    /// which beats the config value.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self {
            log_path: std::env::var_os("READTIME_LOG_PATH").map(PathBuf::from),
            log_dir: std::env::var_os("READTIME_LOG_DIR")
                .map(PathBuf::from)
                .or(config_log_dir),
        }
    }
}

/// Build the log filter from CLI flags and the configured level.
///
/// `RUST_LOG` wins outright when set; otherwise `--quiet` forces errors
/// only and `-v`/`-vv` raise the level to debug/trace.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber: stderr layer plus an optional JSONL
/// file layer. Returns the appender guard when file logging is active.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = match file_writer(config)? {
        Some((writer, guard)) => {
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Open the configured log destination, if any.
fn file_writer(config: &ObservabilityConfig) -> anyhow::Result<Option<(NonBlocking, WorkerGuard)>> {
    if let Some(ref path) = config.log_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create log directory {}", parent.display()))?;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
        Ok(Some(tracing_appender::non_blocking(file)))
    } else if let Some(ref dir) = config.log_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::daily(dir, "readtime.jsonl");
        Ok(Some(tracing_appender::non_blocking(appender)))
    } else {
        Ok(None)
    }
}

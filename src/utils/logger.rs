use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{
    fmt::{self, time::UtcTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

use crate::utils::{AppError, Result};

const APP_DIR_NAME: &str = "blossom-picture";

// Keeps the non-blocking file writer alive for the life of the process.
static WORKER_GUARD: OnceCell<WorkerGuard> = OnceCell::new();
static LOG_CONFIG: OnceCell<LogConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq)]
pub enum LogRotation {
    Never,
    Hourly,
    Daily,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: String,
    pub log_dir: PathBuf,
    pub console_output: bool,
    pub file_output: bool,
    pub rotation: LogRotation,
    pub max_files: Option<usize>,
    pub file_prefix: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        let log_dir = dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR_NAME)
            .join("logs");

        // Debug builds log to the console, release builds to JSON files
        let debug = cfg!(debug_assertions);

        Self {
            level: if debug { "debug" } else { "info" }.to_string(),
            log_dir,
            console_output: debug,
            file_output: !debug,
            rotation: LogRotation::Daily,
            max_files: Some(30),
            file_prefix: APP_DIR_NAME.to_string(),
        }
    }
}

fn env_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| AppError::InvalidInput(format!("Invalid log level: {}", e)))
}

/// Installs the global tracing subscriber. Only the first call has an effect,
/// and nothing is installed when the host app already set its own.
pub fn init_logger(config: Option<LogConfig>) -> Result<()> {
    if LOG_CONFIG.get().is_none() && tracing::dispatcher::has_been_set() {
        debug!("Global subscriber already installed, keeping it");
        return Ok(());
    }

    LOG_CONFIG.get_or_try_init(|| install(config.unwrap_or_default()))?;
    Ok(())
}

fn install(config: LogConfig) -> Result<LogConfig> {
    let mut layers = Vec::new();

    if config.console_output {
        let layer = if cfg!(debug_assertions) {
            fmt::layer()
                .with_target(false)
                .with_ansi(true)
                .with_file(true)
                .with_line_number(true)
                .compact()
                .with_filter(env_filter(&config.level)?)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(false)
                .with_filter(env_filter(&config.level)?)
                .boxed()
        };
        layers.push(layer);
    }

    if config.file_output {
        fs::create_dir_all(&config.log_dir)?;

        let appender = match config.rotation {
            LogRotation::Never => {
                rolling::never(&config.log_dir, format!("{}.log", config.file_prefix))
            }
            LogRotation::Hourly => rolling::hourly(&config.log_dir, &config.file_prefix),
            LogRotation::Daily => rolling::daily(&config.log_dir, &config.file_prefix),
        };
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let _ = WORKER_GUARD.set(guard);

        layers.push(
            fmt::layer()
                .with_writer(writer)
                .with_target(true)
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(false)
                .json()
                .with_filter(env_filter(&config.level)?)
                .boxed(),
        );
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| {
            AppError::InvalidInput(format!("Failed to initialize tracing subscriber: {}", e))
        })?;

    info!(?config, "Logger initialized");

    if config.file_output {
        if let Some(max_files) = config.max_files {
            if let Err(e) = cleanup_old_logs(&config.log_dir, &config.file_prefix, max_files) {
                warn!("Failed to cleanup old log files: {}", e);
            }
        }
    }

    Ok(config)
}

/// Config the logger was installed with, if any.
pub fn log_config() -> Option<&'static LogConfig> {
    LOG_CONFIG.get()
}

/// Removes the oldest `<prefix>*.log` files beyond `max_files`.
/// Returns how many files were removed.
pub fn cleanup_old_logs(log_dir: &Path, file_prefix: &str, max_files: usize) -> Result<usize> {
    let mut log_files: Vec<(PathBuf, SystemTime)> = Vec::new();

    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_log = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(|name| name.starts_with(file_prefix) && name.ends_with(".log"))
            .unwrap_or(false);

        if path.is_file() && is_log {
            let modified = entry.metadata()?.modified().unwrap_or(SystemTime::UNIX_EPOCH);
            log_files.push((path, modified));
        }
    }

    // Newest first
    log_files.sort_by(|a, b| b.1.cmp(&a.1));

    let mut removed = 0;
    for (path, _) in log_files.into_iter().skip(max_files) {
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed old log file: {:?}", path);
                removed += 1;
            }
            Err(e) => warn!("Failed to remove old log file {:?}: {}", path, e),
        }
    }

    Ok(removed)
}

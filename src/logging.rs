//! Logging setup.
//!
//! The assistant's protocol layer owns stdout, so diagnostics go to
//! stderr by default, with an optional daily-rolling file in an
//! XDG-compliant location for post-hoc inspection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Log file name; rotated daily by the appender.
const LOG_FILE_NAME: &str = "dirward.log";

/// Configuration for crate logging.
///
/// # Example
///
/// ```rust
/// use dirward::logging::{LoggingConfig, LogLevel};
///
/// // stderr only, at the default level
/// let config = LoggingConfig::default();
///
/// // stderr plus a daily-rolling file under ~/.local/share/dirward/logs
/// let config = LoggingConfig::new()
///     .with_level(LogLevel::Debug)
///     .with_file_logging(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether logging is enabled at all.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Log level filter.
    #[serde(default)]
    pub level: LogLevel,
    /// Whether to also write a daily-rolling log file.
    #[serde(default)]
    pub log_to_file: bool,
    /// Custom log directory. If None, uses XDG data dir + "dirward/logs".
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_enabled() -> bool {
    true
}

impl LoggingConfig {
    /// Creates a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a disabled logging configuration.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Sets the log level filter.
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Enables or disables the rolling log file.
    #[must_use]
    pub fn with_file_logging(mut self, enabled: bool) -> Self {
        self.log_to_file = enabled;
        self
    }

    /// Sets a custom log directory.
    #[must_use]
    pub fn with_log_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(path.into());
        self
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LogLevel::default(),
            log_to_file: false,
            log_dir: None,
        }
    }
}

/// Log level filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level - most verbose.
    Trace,
    /// Debug level.
    Debug,
    /// Info level - default.
    #[default]
    Info,
    /// Warn level.
    Warn,
    /// Error level - least verbose.
    Error,
}

impl LogLevel {
    /// Converts to a tracing_subscriber level filter.
    #[must_use]
    pub fn to_filter(self) -> tracing_subscriber::filter::LevelFilter {
        match self {
            Self::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
            Self::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
            Self::Info => tracing_subscriber::filter::LevelFilter::INFO,
            Self::Warn => tracing_subscriber::filter::LevelFilter::WARN,
            Self::Error => tracing_subscriber::filter::LevelFilter::ERROR,
        }
    }
}

/// Guard that must be held to keep file logging flushing.
///
/// When dropped, flushes pending file logs. Not needed when only stderr
/// logging is active.
pub struct LoggingGuard {
    _guard: tracing_appender::non_blocking::WorkerGuard,
}

impl fmt::Debug for LoggingGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingGuard").finish_non_exhaustive()
    }
}

/// Global storage for the logging guard, held for the process lifetime.
static LOGGING_GUARD: std::sync::OnceLock<LoggingGuard> = std::sync::OnceLock::new();

/// Errors that can occur during logging initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingError {
    /// Failed to determine the XDG data directory.
    NoDataDir,
    /// Failed to create the log directory.
    CreateDirFailed {
        /// The path that could not be created.
        path: PathBuf,
        /// The reason for failure.
        reason: String,
    },
    /// Subscriber initialization failed.
    SubscriberInitFailed {
        /// The reason for failure.
        reason: String,
    },
}

impl fmt::Display for LoggingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDataDir => {
                write!(
                    f,
                    "could not determine XDG data directory; \
                     set XDG_DATA_HOME or use a custom log_dir"
                )
            }
            Self::CreateDirFailed { path, reason } => {
                write!(
                    f,
                    "failed to create log directory '{}': {}; check permissions",
                    path.display(),
                    reason
                )
            }
            Self::SubscriberInitFailed { reason } => {
                write!(
                    f,
                    "failed to initialize tracing subscriber: {}; \
                     a subscriber may already be set",
                    reason
                )
            }
        }
    }
}

impl std::error::Error for LoggingError {}

/// Resolves the log directory from configuration.
fn resolve_log_dir(config: &LoggingConfig) -> Result<PathBuf, LoggingError> {
    if let Some(ref custom_dir) = config.log_dir {
        return Ok(custom_dir.clone());
    }

    dirs::data_local_dir()
        .map(|dir| dir.join("dirward").join("logs"))
        .ok_or(LoggingError::NoDataDir)
}

/// Initializes logging with the given configuration.
///
/// Installs a stderr subscriber, plus a daily-rolling file layer when
/// `log_to_file` is set.
///
/// # Returns
///
/// `Ok(Some(LoggingGuard))` when a file layer was installed — hold the
/// guard for the process lifetime (or use [`init_and_store_logging`]).
/// `Ok(None)` when logging is disabled or stderr-only.
///
/// # Errors
///
/// Returns `LoggingError` if the log directory cannot be created or a
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<LoggingGuard>, LoggingError> {
    if !config.enabled {
        return Ok(None);
    }

    let (file_layer, guard) = if config.log_to_file {
        let log_dir = resolve_log_dir(config)?;
        std::fs::create_dir_all(&log_dir).map_err(|e| LoggingError::CreateDirFailed {
            path: log_dir.clone(),
            reason: e.to_string(),
        })?;

        let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(false);
        (Some(layer), Some(LoggingGuard { _guard: guard }))
    } else {
        (None, None)
    };

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false),
        )
        .with(file_layer)
        .with(config.level.to_filter())
        .try_init();

    match result {
        Ok(()) => Ok(guard),
        Err(e) => Err(LoggingError::SubscriberInitFailed {
            reason: e.to_string(),
        }),
    }
}

/// Initializes logging and stores any file guard globally.
///
/// # Returns
///
/// `Ok(true)` if logging was initialized, `Ok(false)` if disabled or
/// already initialized.
///
/// # Errors
///
/// Propagates [`init_logging`] failures.
pub fn init_and_store_logging(config: &LoggingConfig) -> Result<bool, LoggingError> {
    if LOGGING_GUARD.get().is_some() {
        return Ok(false);
    }

    if !config.enabled {
        return Ok(false);
    }

    match init_logging(config)? {
        Some(guard) => {
            let _ = LOGGING_GUARD.set(guard);
            Ok(true)
        }
        None => Ok(true),
    }
}

/// Returns the resolved log directory for the given configuration.
///
/// Useful for telling the user where logs are being written.
///
/// # Errors
///
/// Returns an error if no XDG data directory can be determined.
pub fn log_dir(config: &LoggingConfig) -> Result<PathBuf, LoggingError> {
    resolve_log_dir(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = LoggingConfig::default();
        assert!(config.enabled);
        assert!(!config.log_to_file);
        assert!(config.log_dir.is_none());
        assert_eq!(config.level, LogLevel::Info);
    }

    #[test]
    fn config_builder_pattern() {
        let config = LoggingConfig::new()
            .with_level(LogLevel::Debug)
            .with_file_logging(true)
            .with_log_dir("/tmp/logs");

        assert_eq!(config.level, LogLevel::Debug);
        assert!(config.log_to_file);
        assert_eq!(config.log_dir, Some(PathBuf::from("/tmp/logs")));
    }

    #[test]
    fn config_disabled() {
        let config = LoggingConfig::disabled();
        assert!(!config.enabled);
    }

    #[test]
    fn log_level_to_filter_mapping() {
        use tracing_subscriber::filter::LevelFilter;

        assert_eq!(LogLevel::Trace.to_filter(), LevelFilter::TRACE);
        assert_eq!(LogLevel::Debug.to_filter(), LevelFilter::DEBUG);
        assert_eq!(LogLevel::Info.to_filter(), LevelFilter::INFO);
        assert_eq!(LogLevel::Warn.to_filter(), LevelFilter::WARN);
        assert_eq!(LogLevel::Error.to_filter(), LevelFilter::ERROR);
    }

    #[test]
    fn log_level_parses_lowercase_in_config_files() {
        let config: LoggingConfig = toml::from_str("level = \"debug\"").unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert!(config.enabled, "missing fields take their defaults");
    }

    #[test]
    fn init_is_a_no_op_when_disabled() {
        let config = LoggingConfig::disabled();
        let result = init_logging(&config);
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn resolve_log_dir_prefers_custom() {
        let config = LoggingConfig::default().with_log_dir("/custom/logs");
        let resolved = resolve_log_dir(&config).unwrap();
        assert_eq!(resolved, PathBuf::from("/custom/logs"));
    }

    #[test]
    fn resolve_log_dir_uses_xdg_otherwise() {
        let config = LoggingConfig::default();
        if let Ok(resolved) = resolve_log_dir(&config) {
            assert!(resolved.to_string_lossy().contains("dirward"));
            assert!(resolved.to_string_lossy().contains("logs"));
        }
    }

    #[test]
    fn error_display_create_dir_failed() {
        let error = LoggingError::CreateDirFailed {
            path: PathBuf::from("/nonexistent/path"),
            reason: "permission denied".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("/nonexistent/path"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn config_serialization_roundtrip() {
        let config = LoggingConfig::new()
            .with_level(LogLevel::Warn)
            .with_file_logging(true);

        let serialized = serde_json::to_string(&config).unwrap();
        let deserialized: LoggingConfig = serde_json::from_str(&serialized).unwrap();
        assert_eq!(config, deserialized);
    }
}

//! Application configuration.
//!
//! Defaults are overridden by environment variables, which are in turn
//! overridden by command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use crate::adapters::DEFAULT_ENDPOINT;
use crate::format::NumberFormat;

/// Environment variable overriding the listing endpoint.
pub const ENV_API_URL: &str = "COINPAGE_API_URL";
/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "COINPAGE_TIMEOUT_SECS";
/// Environment variable overriding the supply group separator.
pub const ENV_GROUP_SEPARATOR: &str = "COINPAGE_GROUP_SEPARATOR";
/// Environment variable overriding the log file path.
pub const ENV_LOG_FILE: &str = "COINPAGE_LOG_FILE";

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration.
///
/// # Example
///
/// ```
/// use coinpage::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_endpoint("http://localhost:8080/api/tickers/")
///     .with_timeout_secs(5);
/// assert_eq!(config.timeout_secs, 5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Ticker listing endpoint
    pub endpoint: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Separators used for total supply
    pub number_format: NumberFormat,
    /// Log file path; `None` falls back to [`default_log_file`]
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            number_format: NumberFormat::default(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the listing endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the number format used for total supply.
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Set the log file path.
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolved log file path.
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(default_log_file)
    }

    /// Create config from the `COINPAGE_*` environment variables.
    ///
    /// Unparseable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            config = config.with_endpoint(url.trim());
        }

        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout_secs(secs),
                _ => tracing::warn!("Ignoring invalid {}={:?}", ENV_TIMEOUT_SECS, raw),
            }
        }

        if let Some(raw) = lookup(ENV_GROUP_SEPARATOR) {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(sep), None) => {
                    let decimal = if sep == '.' { ',' } else { '.' };
                    config = config.with_number_format(NumberFormat::new(sep, decimal));
                }
                _ => tracing::warn!("Ignoring invalid {}={:?}", ENV_GROUP_SEPARATOR, raw),
            }
        }

        if let Some(path) = lookup(ENV_LOG_FILE).filter(|v| !v.is_empty()) {
            config = config.with_log_file(path);
        }

        config
    }
}

/// Default log location: `<cache dir>/coinpage/coinpage.log`.
///
/// Falls back to the system temp directory when no cache dir is known.
pub fn default_log_file() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("coinpage")
        .join("coinpage.log")
}

mod error;
#[cfg(test)]
mod tests;
mod validate;

pub use error::ConfigError;
pub use validate::{compile_filter, validate_base_url};

use crate::replay::FilterMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Optional TOML file carrying the same settings as the command line.
///
/// Every key is optional; command-line values take precedence.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ReplayFileConfig {
    pub base_url: Option<String>,
    pub log_file_path: Option<PathBuf>,
    pub dry_run: Option<bool>,
    pub include_timestamp: Option<bool>,
    pub regex_filter: Option<String>,
    pub regex_exclude: Option<String>,
    pub output_dir: Option<PathBuf>,
    /// Per-request timeout in seconds. `0` disables the timeout.
    pub timeout_secs: Option<u64>,
}

impl ReplayFileConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::parse(path, e))
    }
}

/// Raw, unvalidated replay options.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplayOptions {
    pub base_url: Option<String>,
    pub log_file_path: Option<PathBuf>,
    pub dry_run: bool,
    pub include_timestamp: bool,
    pub regex_filter: Option<String>,
    pub regex_exclude: Option<String>,
    pub output_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

impl ReplayOptions {
    /// Fill unset options from a config file. Values already present win.
    pub fn merge_file(mut self, file: ReplayFileConfig) -> Self {
        self.base_url = self.base_url.or(file.base_url);
        self.log_file_path = self.log_file_path.or(file.log_file_path);
        self.dry_run |= file.dry_run.unwrap_or(false);
        self.include_timestamp |= file.include_timestamp.unwrap_or(false);
        self.regex_filter = self.regex_filter.or(file.regex_filter);
        self.regex_exclude = self.regex_exclude.or(file.regex_exclude);
        self.output_dir = self.output_dir.or(file.output_dir);
        self.timeout_secs = self.timeout_secs.or(file.timeout_secs);
        self
    }
}

/// Validated configuration for one replay run. Built once, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    pub base_url: String,
    pub log_file_path: PathBuf,
    pub dry_run: bool,
    pub include_timestamp: bool,
    pub filter: FilterMode,
    pub output_dir: PathBuf,
    pub request_timeout: Option<Duration>,
}

impl ReplayConfig {
    /// Minimal configuration, mostly useful for embedding and tests.
    pub fn new(base_url: impl Into<String>, log_file_path: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            log_file_path: log_file_path.into(),
            dry_run: false,
            include_timestamp: false,
            filter: FilterMode::None,
            output_dir: PathBuf::from("."),
            request_timeout: None,
        }
    }
}

impl TryFrom<ReplayOptions> for ReplayConfig {
    type Error = ConfigError;

    fn try_from(opts: ReplayOptions) -> Result<Self, Self::Error> {
        let base_url = opts
            .base_url
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        let log_file_path = opts
            .log_file_path
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(ConfigError::MissingLogFilePath)?;

        validate_base_url(&base_url)?;

        let filter = compile_filter(opts.regex_filter.as_deref(), opts.regex_exclude.as_deref())?;

        Ok(Self {
            base_url,
            log_file_path,
            dry_run: opts.dry_run,
            include_timestamp: opts.include_timestamp,
            filter,
            output_dir: opts.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            request_timeout: opts
                .timeout_secs
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
        })
    }
}

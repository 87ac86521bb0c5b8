use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    // IO / Parsing
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // Required parameters
    #[error(
        "please supply the base URL (with http/https) as a parameter, eg: --base-url=https://website.com"
    )]
    MissingBaseUrl,

    #[error(
        "please supply the path of the log file as a parameter, eg: --log-file-path=/var/log/nginx/access.log"
    )]
    MissingLogFilePath,

    // Base URL
    #[error("invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("base URL's scheme must be either http or https, got '{scheme}'")]
    InvalidScheme { scheme: String },

    #[error("base URL must have a hostname (can be either a domain name or an IP address)")]
    MissingHost,

    // Filters
    #[error("only one of --regex-filter and --regex-exclude can be used at once")]
    ConflictingFilters,

    #[error("failed to compile regular expression passed in --regex-filter: {source}")]
    InvalidRegexFilter {
        #[source]
        source: regex::Error,
    },

    #[error("failed to compile regular expression passed in --regex-exclude: {source}")]
    InvalidRegexExclude {
        #[source]
        source: regex::Error,
    },
}

impl ConfigError {
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}

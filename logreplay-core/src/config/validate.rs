use crate::config::ConfigError;
use crate::replay::FilterMode;
use regex::Regex;
use url::Url;

/// The base URL must be absolute, use http or https, and name a host.
pub fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = match Url::parse(base_url) {
        Ok(url) => url,
        // "website.com" or "1.1.1.1" without a scheme.
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            return Err(ConfigError::InvalidScheme {
                scheme: String::new(),
            });
        }
        Err(source) => {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                source,
            });
        }
    };

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidScheme {
            scheme: url.scheme().to_string(),
        });
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ConfigError::MissingHost),
    }
}

/// Builds the admission filter. Empty patterns count as unset.
pub fn compile_filter(
    include: Option<&str>,
    exclude: Option<&str>,
) -> Result<FilterMode, ConfigError> {
    let include = include.filter(|s| !s.is_empty());
    let exclude = exclude.filter(|s| !s.is_empty());

    match (include, exclude) {
        (Some(_), Some(_)) => Err(ConfigError::ConflictingFilters),
        (Some(pattern), None) => Regex::new(pattern)
            .map(FilterMode::Include)
            .map_err(|source| ConfigError::InvalidRegexFilter { source }),
        (None, Some(pattern)) => Regex::new(pattern)
            .map(FilterMode::Exclude)
            .map_err(|source| ConfigError::InvalidRegexExclude { source }),
        (None, None) => Ok(FilterMode::None),
    }
}

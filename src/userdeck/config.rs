//! API endpoint configuration. The base URL comes from `--api-url`, then the
//! `USERDECK_API_URL` environment variable, then a local development default.
//! Configuration values are public; do not store secrets here.

use thiserror::Error;
use url::Url;

/// Environment variable holding the API base URL.
pub const API_URL_ENV: &str = "USERDECK_API_URL";

/// Base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    /// Builds a config from an explicit base URL. Blank values fall back to
    /// [`DEFAULT_API_BASE_URL`].
    ///
    /// # Errors
    /// Returns an error if the URL does not parse or is not `http`/`https`.
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        let api_base_url = normalize_value(api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let parsed = Url::parse(&api_base_url).map_err(|err| ConfigError::InvalidBaseUrl {
            url: api_base_url.clone(),
            reason: err.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::InvalidBaseUrl {
                    url: api_base_url,
                    reason: format!("unsupported scheme {scheme}"),
                })
            }
        }

        if parsed.host().is_none() {
            return Err(ConfigError::InvalidBaseUrl {
                url: api_base_url,
                reason: "no host specified".to_string(),
            });
        }

        Ok(Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_value_trims_and_rejects_empty() {
        assert_eq!(normalize_value(""), None);
        assert_eq!(normalize_value("   "), None);
        assert_eq!(
            normalize_value("  https://api.example.com "),
            Some("https://api.example.com".to_string())
        );
    }

    #[test]
    fn new_falls_back_to_default_when_blank() {
        assert_eq!(AppConfig::new("  "), Ok(AppConfig::default()));
        assert_eq!(AppConfig::default().api_base_url, "http://localhost:3001");
    }

    #[test]
    fn new_strips_trailing_slash() {
        let config = AppConfig::new("https://api.example.com/v1/");
        assert_eq!(
            config.map(|c| c.api_base_url),
            Ok("https://api.example.com/v1".to_string())
        );
    }

    #[test]
    fn new_rejects_unsupported_scheme() {
        let err = AppConfig::new("ftp://example.com").err();
        assert!(matches!(
            err,
            Some(ConfigError::InvalidBaseUrl { ref reason, .. }) if reason.contains("unsupported scheme")
        ));
    }

    #[test]
    fn new_rejects_garbage() {
        assert!(AppConfig::new("not a url").is_err());
    }
}

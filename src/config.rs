use std::env;
use std::time::Duration;

use crate::error::{GalleryError, Result};
use crate::logger::LogLevel;
use crate::models::ColorScheme;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub base_url: String,
    /// Sent as `?count=N` on the recommendations call. The backend picks 12 when absent.
    pub recommendation_count: Option<u32>,
    /// No timeout unless configured. A zero duration is rejected by `validate`.
    pub timeout: Option<Duration>,
    pub default_scheme: ColorScheme,
    pub log_level: LogLevel,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            recommendation_count: None,
            timeout: None,
            default_scheme: ColorScheme::Vibrant,
            log_level: LogLevel::Info,
        }
    }
}

impl GalleryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = env::var("GALLERY_BASE_URL").unwrap_or(defaults.base_url);
        let recommendation_count = env::var("GALLERY_RECOMMENDATION_COUNT")
            .ok()
            .and_then(|s| s.parse().ok());
        let timeout = env::var("GALLERY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| parse_timeout_secs(&s));
        let default_scheme = env::var("GALLERY_DEFAULT_SCHEME")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.default_scheme);
        let log_level = env::var("GALLERY_LOG_LEVEL")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.log_level);

        GalleryConfig {
            base_url,
            recommendation_count,
            timeout,
            default_scheme,
            log_level,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_recommendation_count(mut self, count: u32) -> Self {
        self.recommendation_count = Some(count);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_default_scheme(mut self, scheme: ColorScheme) -> Self {
        self.default_scheme = scheme;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(GalleryError::Config("Gallery base URL is required".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(GalleryError::Config(format!(
                "Gallery base URL must start with http:// or https://, got '{}'",
                url
            )));
        }
        if self.timeout == Some(Duration::ZERO) {
            return Err(GalleryError::Config(
                "Request timeout must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    /// Base URL without a trailing slash, ready for path concatenation.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }
}

/// Seconds from `GALLERY_TIMEOUT_SECS`. `0` and unparsable values mean no timeout.
fn parse_timeout_secs(value: &str) -> Option<Duration> {
    match value.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.default_scheme, ColorScheme::Vibrant);
        assert!(config.timeout.is_none());
        assert!(config.recommendation_count.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = GalleryConfig::new()
            .with_base_url("http://gallery.local:8080/")
            .with_recommendation_count(20)
            .with_timeout(Duration::from_secs(3))
            .with_default_scheme(ColorScheme::Pastel)
            .with_log_level(LogLevel::Debug);

        assert_eq!(config.normalized_base_url(), "http://gallery.local:8080");
        assert_eq!(config.recommendation_count, Some(20));
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.default_scheme, ColorScheme::Pastel);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(matches!(
            GalleryConfig::new().with_base_url("  ").validate(),
            Err(GalleryError::Config(_))
        ));
        assert!(matches!(
            GalleryConfig::new().with_base_url("ftp://gallery").validate(),
            Err(GalleryError::Config(_))
        ));
    }

    #[test]
    fn test_zero_timeout() {
        assert_eq!(parse_timeout_secs("0"), None);
        assert_eq!(parse_timeout_secs(" 15 "), Some(Duration::from_secs(15)));
        assert_eq!(parse_timeout_secs("soon"), None);
        assert!(matches!(
            GalleryConfig::new().with_timeout(Duration::ZERO).validate(),
            Err(GalleryError::Config(_))
        ));
    }
}

use chrono::{DateTime, Datelike};
use thiserror::Error;

/// Base path baked in at compile time by the build script.
pub const BUILD_BASE_PATH: &str = env!("SITE_BASE_PATH");
const BUILD_TIME: &str = env!("BUILD_TIME");
const FALLBACK_YEAR: i32 = 2025;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base path must start with '/': {0:?}")]
    MissingLeadingSlash(String),
    #[error("base path must not end with '/': {0:?}")]
    TrailingSlash(String),
    #[error("base path contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Deployment settings shared by every view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteConfig {
    base_path: String,
}

impl SiteConfig {
    /// An empty base path means the site is served from the domain root.
    pub fn new(base_path: impl Into<String>) -> Result<Self, ConfigError> {
        let base_path = base_path.into();
        if base_path.is_empty() {
            return Ok(Self { base_path });
        }
        if !base_path.starts_with('/') {
            return Err(ConfigError::MissingLeadingSlash(base_path));
        }
        if base_path.ends_with('/') {
            return Err(ConfigError::TrailingSlash(base_path));
        }
        if let Some(c) = base_path
            .chars()
            .find(|c| c.is_whitespace() || matches!(c, '?' | '#'))
        {
            return Err(ConfigError::InvalidCharacter(c));
        }
        Ok(Self { base_path })
    }

    pub fn from_build() -> Result<Self, ConfigError> {
        Self::new(BUILD_BASE_PATH)
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Resolves a static asset against the base path.
    pub fn asset(&self, name: &str) -> String {
        format!("{}/{}", self.base_path, name.trim_start_matches('/'))
    }
}

/// Build-time config, or the root-path default if the baked value is unusable.
pub fn site_config() -> SiteConfig {
    SiteConfig::from_build().unwrap_or_else(|e| {
        log::error!("ignoring configured base path: {e}");
        SiteConfig::default()
    })
}

pub fn build_year() -> i32 {
    year_of(BUILD_TIME).unwrap_or(FALLBACK_YEAR)
}

fn year_of(timestamp: &str) -> Option<i32> {
    DateTime::parse_from_rfc3339(timestamp)
        .ok()
        .map(|t| t.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_base_path() {
        let config = SiteConfig::new("").unwrap();
        assert_eq!(config.base_path(), "");
        assert_eq!(config.asset("noise.svg"), "/noise.svg");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_sub_path_prefixes_assets() {
        let config = SiteConfig::new("/PortifolioAllanQA").unwrap();
        assert_eq!(config.asset("noise.svg"), "/PortifolioAllanQA/noise.svg");
        assert_eq!(config.asset("/noise.svg"), "/PortifolioAllanQA/noise.svg");
        assert_eq!(
            config.asset("img/avatar.png"),
            "/PortifolioAllanQA/img/avatar.png"
        );
    }

    #[test]
    fn test_invalid_base_paths() {
        assert_eq!(
            SiteConfig::new("PortifolioAllanQA"),
            Err(ConfigError::MissingLeadingSlash(
                "PortifolioAllanQA".to_string()
            ))
        );
        assert_eq!(
            SiteConfig::new("/site/"),
            Err(ConfigError::TrailingSlash("/site/".to_string()))
        );
        assert_eq!(
            SiteConfig::new("/"),
            Err(ConfigError::TrailingSlash("/".to_string()))
        );
        assert_eq!(
            SiteConfig::new("/my site"),
            Err(ConfigError::InvalidCharacter(' '))
        );
        assert_eq!(
            SiteConfig::new("/site?x=1"),
            Err(ConfigError::InvalidCharacter('?'))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SiteConfig::new("/site/").unwrap_err();
        assert_eq!(err.to_string(), "base path must not end with '/': \"/site/\"");
    }

    #[test]
    fn test_year_of() {
        assert_eq!(year_of("2025-03-01T12:00:00+00:00"), Some(2025));
        assert_eq!(year_of("2031-12-31T23:59:59.123456789+00:00"), Some(2031));
        assert_eq!(year_of("not a timestamp"), None);
        assert!(build_year() >= FALLBACK_YEAR);
    }
}

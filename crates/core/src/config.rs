//! Configuration for search boxes and the catalog browser.
//!
//! All sections are optional in TOML; missing keys take their defaults.
//!
//! ```toml
//! identity_path = ".lookahead/visitor-id"
//!
//! [search]
//! base_url = "https://apicollegerepo.lytortech.com"
//! debounce_ms = 400
//! page_size = 4
//!
//! [catalog]
//! cache_ttl_secs = 600
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://apicollegerepo.lytortech.com";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Search box settings.
    pub search: SearchConfig,
    /// Catalog browser settings.
    pub catalog: CatalogConfig,
    /// Where the anonymous visitor id is kept.
    pub identity_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            catalog: CatalogConfig::default(),
            identity_path: PathBuf::from(".lookahead/visitor-id"),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<()> {
        self.search.validate()?;
        self.catalog.validate()
    }
}

/// Settings for one search box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// API host, without trailing slash.
    pub base_url: String,
    /// Quiet period before a query settles.
    pub debounce_ms: u64,
    /// Items per page; the fetch window is `page * page_size`.
    pub page_size: usize,
    /// Distance from the bottom (px) that counts as "near bottom".
    pub scroll_threshold_px: u32,
    /// Per-request HTTP timeout.
    pub request_timeout_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce_ms: 400,
            page_size: 4,
            scroll_threshold_px: 10,
            request_timeout_ms: 10_000,
        }
    }
}

impl SearchConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API host.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the debounce delay.
    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Set the page size.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Set the near-bottom scroll threshold.
    pub fn scroll_threshold_px(mut self, px: u32) -> Self {
        self.scroll_threshold_px = px;
        self
    }

    /// Set the HTTP request timeout.
    pub fn request_timeout_ms(mut self, ms: u64) -> Self {
        self.request_timeout_ms = ms;
        self
    }

    /// Debounce delay as a `Duration`.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Reject values the search box cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::InvalidConfig {
                reason: "search.base_url must not be empty".into(),
            });
        }
        if self.page_size == 0 {
            return Err(Error::InvalidConfig {
                reason: "search.page_size must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Settings for the catalog browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// API host, without trailing slash.
    pub base_url: String,
    /// Cards per listing page.
    pub page_size: usize,
    /// How many records to request from the filter endpoint.
    pub fetch_size: usize,
    /// Cache lifetime.
    pub cache_ttl_secs: u64,
    /// Cache file location.
    pub cache_path: PathBuf,
    /// Per-request HTTP timeout.
    pub request_timeout_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: 9,
            fetch_size: 1000,
            cache_ttl_secs: 10 * 60,
            cache_path: PathBuf::from(".lookahead/colleges.json"),
            request_timeout_ms: 10_000,
        }
    }
}

impl CatalogConfig {
    /// Cache lifetime as a `Duration`.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Reject values the catalog cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::InvalidConfig {
                reason: "catalog.base_url must not be empty".into(),
            });
        }
        if self.page_size == 0 {
            return Err(Error::InvalidConfig {
                reason: "catalog.page_size must be at least 1".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.debounce(), Duration::from_millis(400));
        assert_eq!(cfg.page_size, 4);
        assert_eq!(cfg.scroll_threshold_px, 10);
        assert_eq!(CatalogConfig::default().page_size, 9);
        assert_eq!(CatalogConfig::default().cache_ttl(), Duration::from_secs(600));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let cfg = Config::from_toml_str("[search]\ndebounce_ms = 250\n").unwrap();
        assert_eq!(cfg.search.debounce_ms, 250);
        assert_eq!(cfg.search.page_size, 4);
        assert_eq!(cfg.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = Config::from_toml_str("[search]\npage_size = 0\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        assert!(SearchConfig::new().base_url("  ").validate().is_err());
    }

    #[test]
    fn test_bad_toml_is_invalid_config() {
        let err = Config::from_toml_str("[search\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lookahead.toml");
        std::fs::write(&path, "[catalog]\npage_size = 12\n").unwrap();
        let cfg = Config::from_file(&path).unwrap();
        assert_eq!(cfg.catalog.page_size, 12);
    }

    #[test]
    fn test_builder() {
        let cfg = SearchConfig::new()
            .base_url("http://localhost:8080")
            .debounce_ms(0)
            .page_size(10)
            .scroll_threshold_px(20);
        assert_eq!(cfg.base_url, "http://localhost:8080");
        assert_eq!(cfg.debounce(), Duration::ZERO);
        assert_eq!(cfg.page_size, 10);
        assert_eq!(cfg.scroll_threshold_px, 20);
    }
}

//! Application configuration.

use crate::utils::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "GOTS_WEBAPP_CONFIG";
/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "GOTS_API_URL";
/// Config file looked up in the working directory by default.
pub const DEFAULT_CONFIG_FILE: &str = "gots-webapp.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin of the backend serving `/api/*` and the gateway's `/_/*` paths.
    pub base_url: String,
    pub request_timeout_secs: u64,
    /// Raw `Cookie` header forwarded to the gateway, if the session lives elsewhere.
    pub session_cookie: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub window_width: f64,
    pub window_height: f64,
    pub sidebar_collapsed: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_string(),
            request_timeout_secs: 10,
            session_cookie: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_width: 1280.0,
            window_height: 832.0,
            sidebar_collapsed: false,
        }
    }
}

impl AppConfig {
    /// Loads the config file (if any) and applies environment overrides.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_PATH_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from);

        let config = Self::load_from(&path)?;
        Ok(config.with_base_url_override(std::env::var(API_URL_ENV).ok()))
    }

    /// Reads a config file; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        let config = Self::from_json(&json)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| Error::Config(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url_override(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            self.api.base_url = url;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        let url = self.api.base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "api.base_url must be an http(s) URL, got {url:?}"
            )));
        }
        if self.api.request_timeout_secs == 0 {
            return Err(Error::Config("api.request_timeout_secs must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "api": { "base_url": "https://gots.example" } }"#)
            .unwrap();

        assert_eq!(config.api.base_url, "https://gots.example");
        assert_eq!(config.api.request_timeout_secs, 10);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let err = AppConfig::from_json(r#"{ "api": { "base_url": "ftp://nope" } }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_file_means_defaults() {
        let config = AppConfig::load_from(Path::new("/definitely/not/here.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = AppConfig::default().with_base_url_override(Some("  ".into()));
        assert_eq!(config.api.base_url, "http://localhost:8081");

        let config = config.with_base_url_override(Some("http://10.0.0.2:8081".into()));
        assert_eq!(config.api.base_url, "http://10.0.0.2:8081");
    }
}

//! Configuration handling for the presenter and the relay

use crate::contact::DEFAULT_RELAY_URL;
use crate::i18n::Locale;
use crate::state::{Band, BandError, ProjectBands, ViewerInputConfig};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Default number of rows of the virtual home page
pub const DEFAULT_PAGE_ROWS: u16 = 240;
/// Default relay bind address
pub const DEFAULT_RELAY_BIND: &str = "127.0.0.1:8787";
/// Default email API endpoint
pub const DEFAULT_EMAIL_API_URL: &str = "https://api.resend.com/emails";
/// Address shown on the contact view
pub const DEFAULT_COMPANY_EMAIL: &str = "info@estate.example";

const ENV_RELAY_URL: &str = "SHOWCASE_RELAY_URL";
const ENV_RELAY_BIND: &str = "CONTACT_RELAY_ADDR";
const ENV_EMAIL_API_URL: &str = "EMAIL_API_URL";
const ENV_EMAIL_API_KEY: &str = "EMAIL_API_KEY";
const ENV_EMAIL_FROM: &str = "CONTACT_EMAIL_FROM";
const ENV_EMAIL_TO: &str = "CONTACT_EMAIL_TO";

/// User configuration shared by both binaries
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SiteConfig {
    /// Initial locale
    pub locale: Option<Locale>,
    /// Catalog file replacing the built-in content
    pub catalog_path: Option<PathBuf>,
    /// Height of the virtual home page in rows
    pub page_rows: Option<u16>,
    /// Scroll bands mapping page progress to projects
    pub project_bands: Option<Vec<Band>>,
    /// Viewer wheel/drag cooldown in milliseconds
    pub wheel_cooldown_ms: Option<u64>,
    /// Viewer drag threshold in pixels
    pub drag_threshold_px: Option<f32>,
    /// Base URL of the contact relay
    pub relay_url: Option<String>,
    /// Relay listen address
    pub relay_bind: Option<String>,
    /// Email provider endpoint
    pub email_api_url: Option<String>,
    /// Sender address of relayed mail
    pub email_from: Option<String>,
    /// Recipient address of relayed mail
    pub email_to: Option<String>,
    /// Address offered on the contact view
    pub company_email: Option<String>,
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl SiteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "estate", "estate-showcase")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SiteConfig = serde_json::from_str(&content)?;
                tracing::debug!("loaded config from {}", path.display());
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    pub fn locale(&self) -> Locale {
        self.locale.unwrap_or_default()
    }

    pub fn page_rows(&self) -> u16 {
        self.page_rows.filter(|rows| *rows > 0).unwrap_or(DEFAULT_PAGE_ROWS)
    }

    /// Configured bands, validated
    pub fn try_bands(&self) -> Result<ProjectBands, BandError> {
        match &self.project_bands {
            Some(bands) => ProjectBands::new(bands.clone()),
            None => Ok(ProjectBands::default()),
        }
    }

    /// Configured bands, or the defaults when the configuration is invalid
    pub fn bands(&self) -> ProjectBands {
        self.try_bands().unwrap_or_else(|error| {
            tracing::warn!("invalid project_bands in config ({error}); using defaults");
            ProjectBands::default()
        })
    }

    pub fn viewer_input(&self) -> ViewerInputConfig {
        let defaults = ViewerInputConfig::default();
        ViewerInputConfig {
            cooldown: self
                .wheel_cooldown_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.cooldown),
            drag_threshold: self
                .drag_threshold_px
                .filter(|px| px.is_finite() && *px > 0.0)
                .unwrap_or(defaults.drag_threshold),
        }
    }

    pub fn relay_url(&self) -> String {
        env_value(ENV_RELAY_URL)
            .or_else(|| self.relay_url.clone())
            .unwrap_or_else(|| DEFAULT_RELAY_URL.to_string())
    }

    pub fn relay_bind(&self) -> Result<SocketAddr> {
        let raw = env_value(ENV_RELAY_BIND)
            .or_else(|| self.relay_bind.clone())
            .unwrap_or_else(|| DEFAULT_RELAY_BIND.to_string());
        Ok(raw.parse()?)
    }

    pub fn email_api_url(&self) -> String {
        env_value(ENV_EMAIL_API_URL)
            .or_else(|| self.email_api_url.clone())
            .unwrap_or_else(|| DEFAULT_EMAIL_API_URL.to_string())
    }

    /// Provider key; never stored in the config file
    pub fn email_api_key() -> Option<String> {
        env_value(ENV_EMAIL_API_KEY)
    }

    pub fn email_from(&self) -> String {
        env_value(ENV_EMAIL_FROM)
            .or_else(|| self.email_from.clone())
            .unwrap_or_default()
    }

    pub fn email_to(&self) -> String {
        env_value(ENV_EMAIL_TO)
            .or_else(|| self.email_to.clone())
            .unwrap_or_default()
    }

    pub fn company_email(&self) -> String {
        self.company_email
            .clone()
            .unwrap_or_else(|| DEFAULT_COMPANY_EMAIL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.locale.is_none());
        assert!(config.catalog_path.is_none());
        assert!(config.project_bands.is_none());
        assert!(config.relay_url.is_none());
        assert_eq!(config.locale(), Locale::Tr);
        assert_eq!(config.page_rows(), DEFAULT_PAGE_ROWS);
        assert_eq!(config.company_email(), DEFAULT_COMPANY_EMAIL);
    }

    #[test]
    fn test_serialization() {
        let config = SiteConfig {
            locale: Some(Locale::En),
            page_rows: Some(300),
            wheel_cooldown_ms: Some(150),
            relay_url: Some("http://relay.local".to_string()),
            email_to: Some("sales@estate.example".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
        assert!(json.contains(r#""locale":"en""#));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Unknown fields are ignored
        let json = r#"{"page_rows": 120, "unknown_field": "value"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.page_rows(), 120);
    }

    #[test]
    fn test_zero_page_rows_uses_default() {
        let config = SiteConfig {
            page_rows: Some(0),
            ..Default::default()
        };
        assert_eq!(config.page_rows(), DEFAULT_PAGE_ROWS);
    }

    #[test]
    fn test_configured_bands() {
        let json = r#"{"project_bands": [
            {"start": 0.0, "end": 0.5, "project": null},
            {"start": 0.5, "end": 1.0, "project": 1}
        ]}"#;
        let config: SiteConfig = serde_json::from_str(json).unwrap();
        let bands = config.bands();
        assert_eq!(bands.map_fraction(0.2), None);
        assert_eq!(bands.map_fraction(0.7), Some(1));
        assert_eq!(bands.map_fraction(1.0), Some(1));
    }

    #[test]
    fn test_invalid_bands_fall_back_to_default() {
        let config = SiteConfig {
            project_bands: Some(vec![
                Band::new(0.0, 0.4, None),
                Band::new(0.5, 1.0, Some(1)),
            ]),
            ..Default::default()
        };
        assert!(config.try_bands().is_err());
        assert_eq!(config.bands(), ProjectBands::default());
    }

    #[test]
    fn test_viewer_input_overrides() {
        let config = SiteConfig {
            wheel_cooldown_ms: Some(120),
            drag_threshold_px: Some(-3.0),
            ..Default::default()
        };
        let input = config.viewer_input();
        assert_eq!(input.cooldown, Duration::from_millis(120));
        assert_eq!(input.drag_threshold, ViewerInputConfig::default().drag_threshold);
    }

    #[test]
    fn test_relay_bind_from_config() {
        let config = SiteConfig {
            relay_bind: Some("0.0.0.0:9000".to_string()),
            ..Default::default()
        };
        // The environment may override; only assert when it does not
        if std::env::var(ENV_RELAY_BIND).is_err() {
            assert_eq!(config.relay_bind().unwrap().port(), 9000);
        }
    }

    #[test]
    fn test_invalid_relay_bind_is_error() {
        let config = SiteConfig {
            relay_bind: Some("not an address".to_string()),
            ..Default::default()
        };
        if std::env::var(ENV_RELAY_BIND).is_err() {
            assert!(config.relay_bind().is_err());
        }
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = SiteConfig::config_path();
    }

    #[test]
    fn test_load_returns_ok_without_file() {
        let result = SiteConfig::load();
        assert!(result.is_ok());
    }
}

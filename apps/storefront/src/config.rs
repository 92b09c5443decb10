//! # Storefront Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SAVOR_*`)
//! 2. Config file (`--config` path, or `storefront.toml` in the platform
//!    config directory)
//! 3. Defaults (this file)
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3333/"
//! timeout_secs = 30
//!
//! [display]
//! locale = "pt-BR"
//!
//! [overlay]
//! timeout_ms = 2000
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use savor_client::config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use savor_client::ClientConfig;
use savor_core::{Locale, MoneyFormatter};
use savor_session::OverlayProps;

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorefrontConfig {
    pub api: ApiSection,
    pub display: DisplaySection,
    pub overlay: OverlaySection,
}

/// Menu service connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub base_url: String,
    /// Transport timeout per request, in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiSection {
    fn default() -> Self {
        ApiSection {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplaySection {
    pub locale: Locale,
}

/// Confirmation overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySection {
    /// Auto-dismiss delay in milliseconds.
    pub timeout_ms: u64,
}

impl Default for OverlaySection {
    fn default() -> Self {
        OverlaySection {
            timeout_ms: savor_session::overlay::DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl StorefrontConfig {
    /// Loads defaults, then the config file, then `SAVOR_*` variables.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => StorefrontConfig::default(),
            },
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`load`](Self::load), but falls back to defaults on any error.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!(error = %e, "Using default configuration");
            StorefrontConfig::default()
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(?path, "Loaded config file");
        Self::from_toml(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Applies overrides from the environment.
    ///
    /// ## Environment Variables
    /// - `SAVOR_API_URL`: menu service base URL
    /// - `SAVOR_API_TIMEOUT_SECS`: request timeout
    /// - `SAVOR_LOCALE`: `en-US` or `pt-BR`
    /// - `SAVOR_OVERLAY_TIMEOUT_MS`: confirmation auto-dismiss delay
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(url) = var("SAVOR_API_URL") {
            self.api.base_url = url;
        }
        if let Some(secs) = var("SAVOR_API_TIMEOUT_SECS") {
            self.api.timeout_secs = parse_env("SAVOR_API_TIMEOUT_SECS", &secs)?;
        }
        if let Some(locale) = var("SAVOR_LOCALE") {
            self.display.locale = locale.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SAVOR_LOCALE".to_string(),
                value: locale.clone(),
            })?;
        }
        if let Some(ms) = var("SAVOR_OVERLAY_TIMEOUT_MS") {
            self.overlay.timeout_ms = parse_env("SAVOR_OVERLAY_TIMEOUT_MS", &ms)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.client_config()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if self.overlay.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "overlay.timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn client_config(&self) -> Result<ClientConfig, savor_client::ClientError> {
        ClientConfig::new(
            &self.api.base_url,
            Duration::from_secs(self.api.timeout_secs),
        )
    }

    pub fn formatter(&self) -> MoneyFormatter {
        MoneyFormatter::for_locale(self.display.locale)
    }

    pub fn overlay_props(&self) -> OverlayProps {
        OverlayProps::with_timeout(Duration::from_millis(self.overlay.timeout_ms))
    }
}

fn parse_env(key: &str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Platform config file location.
///
/// - **macOS**: `~/Library/Application Support/com.savor.storefront/storefront.toml`
/// - **Windows**: `%APPDATA%\savor\storefront\config\storefront.toml`
/// - **Linux**: `~/.config/storefront/storefront.toml`
pub fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "savor", "storefront").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

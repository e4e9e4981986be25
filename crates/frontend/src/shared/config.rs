//! Client configuration
//!
//! The defaults are embedded into the wasm bundle; the API location can be
//! overridden at build time with the `PRODUCT_API_BASE` environment variable.

use crate::shared::api_utils::api_base;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the product API, e.g. "https://shop.example/api".
    /// Empty means: derive from the window location.
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid client config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
"#;

/// Path prefix appended to the window-derived origin
const API_PREFIX: &str = "/api";

pub fn parse_config(text: &str) -> Result<ClientConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Load the embedded configuration and apply the build-time override
pub fn load_config() -> ClientConfig {
    let mut config = match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; using built-in defaults", e);
            ClientConfig::default()
        }
    };

    if let Some(base_url) = option_env!("PRODUCT_API_BASE") {
        log::info!("Product API base overridden at build time: {}", base_url);
        config.api.base_url = base_url.to_string();
    }

    config
}

impl ClientConfig {
    /// Resolved base URL for the product endpoints
    pub fn api_base_url(&self) -> String {
        self.resolve_api_base_url(|| format!("{}{}", api_base(), API_PREFIX))
    }

    fn resolve_api_base_url(&self, from_location: impl FnOnce() -> String) -> String {
        let configured = self.api.base_url.trim();
        let base = if configured.is_empty() {
            from_location()
        } else {
            configured.to_string()
        };
        base.trim_end_matches('/').to_string()
    }
}

//! Core configuration.
//!
//! Loaded from a YAML file (`memberdesk.yaml` by convention); every field
//! has a default so a missing file is not an error. `MEMBERDESK_API_URL`
//! overrides the file value either way, which is how deployments point the
//! same build at staging or production.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

pub const API_URL_ENV: &str = "MEMBERDESK_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the portal REST API.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Quiet period for debounced reference searches, in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Default rows per page for list screens.
    #[serde(default = "default_page_size")]
    pub page_size: u64,
}

fn default_api_url() -> String {
    "http://localhost:3000/".to_string()
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_page_size() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            debounce_ms: default_debounce_ms(),
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, or return defaults if it does not
    /// exist, then apply environment overrides.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config: Config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                CoreError::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to read config at {}: {}", path.display(), e),
                ))
            })?;
            serde_yaml_ng::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            config.api_url = url;
        }

        if config.page_size == 0 {
            return Err(CoreError::Config(
                "page_size must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }
}

// ⚙️ Configuration
// YAML file (optional) + environment overrides
//
// Lookup order: BANK_TRANSFERS_CONFIG, then config/bank-transfers.yaml if it
// exists, then built-in defaults. Host and port env vars win over the file.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Path of the YAML config file, when set
pub const CONFIG_ENV: &str = "BANK_TRANSFERS_CONFIG";
pub const HOST_ENV: &str = "BANK_TRANSFERS_HOST";
pub const PORT_ENV: &str = "BANK_TRANSFERS_PORT";

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "config/bank-transfers.yaml";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Mount point of the JSON API, e.g. "/api"
    pub api_prefix: String,
    pub log_level: String,
    pub use_json: bool,
    /// Directory served under /static
    pub web_dir: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8081,
            api_prefix: "/api".to_string(),
            log_level: "info".to_string(),
            use_json: false,
            web_dir: "web".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from a YAML file; missing keys keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config file, then apply env overrides
    pub fn from_env() -> Result<Self> {
        let mut config = match env::var(CONFIG_ENV) {
            Ok(path) => Self::load(path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH)?,
            Err(_) => Self::default(),
        };
        config.apply_overrides(env::var(HOST_ENV).ok(), env::var(PORT_ENV).ok())?;
        Ok(config)
    }

    /// Reject values the router cannot mount
    pub fn validate(&self) -> Result<()> {
        if !self.api_prefix.starts_with('/') {
            bail!("api_prefix must start with '/': {:?}", self.api_prefix);
        }
        Ok(())
    }

    /// API mount point without trailing slash; empty means the root
    ///
    /// A missing leading slash is added so the router never sees a path axum rejects.
    pub fn api_prefix(&self) -> String {
        let trimmed = self.api_prefix.trim_matches('/');
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        }
    }

    fn apply_overrides(&mut self, host: Option<String>, port: Option<String>) -> Result<()> {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port
                .parse()
                .with_context(|| format!("Invalid {}: {}", PORT_ENV, port))?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

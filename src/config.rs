//! Client configuration from a YAML file or the environment.
//!
//! A config file holds the server location and connection flags; the
//! credentials may live in it too, but `ALFRESCO_USERNAME` and
//! `ALFRESCO_PASSWORD` always win so that secrets can stay out of files.
//!
//! ```yaml
//! base_url: http://localhost:8080
//! username: admin
//! timeout_secs: 30
//! verify_ssl: true
//! raise_on_unexpected_status: false
//! ```

use std::env;
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::error::{Error, Result};

pub const ENV_URL: &str = "ALFRESCO_URL";
pub const ENV_USERNAME: &str = "ALFRESCO_USERNAME";
pub const ENV_PASSWORD: &str = "ALFRESCO_PASSWORD";
pub const ENV_TIMEOUT: &str = "ALFRESCO_TIMEOUT";
pub const ENV_VERIFY_SSL: &str = "ALFRESCO_VERIFY_SSL";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
    #[serde(default)]
    pub raise_on_unexpected_status: bool,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_verify_ssl() -> bool {
    true
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("verify_ssl", &self.verify_ssl)
            .field("raise_on_unexpected_status", &self.raise_on_unexpected_status)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            username: String::new(),
            password: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            verify_ssl: true,
            raise_on_unexpected_status: false,
        }
    }

    pub fn with_credentials(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty()
    }

    /// Reads the configuration from the process environment, loading a
    /// `.env` file first when one exists.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let base_url = match env::var(ENV_URL) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => {
                error!(var = ENV_URL, "Base URL missing from environment");
                return Err(Error::Config(format!("{ENV_URL} must be set")));
            }
        };

        let mut config = Self::new(base_url);
        config.apply_credential_overrides();

        if let Ok(raw) = env::var(ENV_TIMEOUT) {
            config.timeout_secs = raw.trim().parse().map_err(|e| {
                error!(error = ?e, raw = %raw, "Failed to parse {}", ENV_TIMEOUT);
                Error::Config(format!(
                    "{ENV_TIMEOUT} must be a whole number of seconds, got {raw:?}"
                ))
            })?;
        }
        if let Ok(raw) = env::var(ENV_VERIFY_SSL) {
            config.verify_ssl = parse_flag(&raw).ok_or_else(|| {
                error!(raw = %raw, "Failed to parse {}", ENV_VERIFY_SSL);
                Error::Config(format!("{ENV_VERIFY_SSL} must be true or false, got {raw:?}"))
            })?;
        }

        info!(
            base_url = %config.base_url,
            credentials_set = config.has_credentials(),
            timeout_secs = config.timeout_secs,
            verify_ssl = config.verify_ssl,
            "Loaded client configuration from environment"
        );
        Ok(config)
    }

    fn apply_credential_overrides(&mut self) {
        if let Ok(username) = env::var(ENV_USERNAME) {
            self.username = username;
        }
        if let Ok(password) = env::var(ENV_PASSWORD) {
            self.password = password;
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Loads a YAML config file, then lets `ALFRESCO_USERNAME` and
/// `ALFRESCO_PASSWORD` override the file's credentials.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let content = match fs::read_to_string(path_ref) {
        Ok(content) => content,
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(Error::Config(format!(
                "failed to read config file {}: {e}",
                path_ref.display()
            )));
        }
    };

    let mut config: ClientConfig = match serde_yaml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            return Err(Error::Config(format!("failed to parse config YAML: {e}")));
        }
    };

    config.apply_credential_overrides();
    info!(
        config_path = ?path_ref,
        base_url = %config.base_url,
        credentials_set = config.has_credentials(),
        "Configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn debug_hides_password() {
        let config =
            ClientConfig::new("http://localhost:8080").with_credentials("admin", "hunter2");
        let printed = format!("{config:?}");
        assert!(printed.contains("admin"));
        assert!(!printed.contains("hunter2"));
    }

    #[test]
    fn yaml_defaults() {
        let config: ClientConfig = serde_yaml::from_str("base_url: http://acs:8080\n").unwrap();
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.verify_ssl);
        assert!(!config.raise_on_unexpected_status);
        assert!(!config.has_credentials());
    }
}

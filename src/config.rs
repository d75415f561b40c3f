//! Configuration types for report-fetch
//!
//! The only setting is the address of the host serving the UsageReporting
//! API. It is persisted as a small JSON settings file and read once at startup.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Path of the UsageReporting service on the host
pub const SERVICE_PATH: &str = "/Panopto/PublicAPI/4.0/UsageReporting.svc";

/// Settings file name used when no explicit path is given
pub const SETTINGS_FILE_NAME: &str = "report-fetch.json";

/// Persisted application settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Host name (optionally with port) of the service, e.g. "demo.hosted.panopto.com"
    pub host_address: String,
}

impl Config {
    /// Create a config for the given host address
    pub fn new(host_address: impl Into<String>) -> Self {
        Self {
            host_address: host_address.into(),
        }
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::SettingsNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(Error::Io(e)),
        };

        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::debug!(?path, host = %config.host_address, "loaded settings");
        Ok(config)
    }

    /// Persist settings as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Resolve the host setting at startup
    ///
    /// An explicit host override wins; otherwise the settings file is read
    /// from `settings_path` or the default location.
    pub fn resolve(host_override: Option<String>, settings_path: Option<&Path>) -> Result<Self> {
        if let Some(host) = host_override {
            let config = Self::new(host);
            config.validate()?;
            return Ok(config);
        }

        match settings_path {
            Some(path) => Self::load(path),
            None => Self::load(&default_settings_path()),
        }
    }

    /// Check the host address is a bare authority (host or host:port)
    pub fn validate(&self) -> Result<()> {
        let host = self.host_address.as_str();

        let reason = if host.is_empty() {
            Some("host_address must not be empty")
        } else if host.contains("://") {
            Some("host_address must not include a scheme")
        } else if host.contains('/') {
            Some("host_address must not include a path")
        } else if host.chars().any(char::is_whitespace) {
            Some("host_address must not contain whitespace")
        } else {
            None
        };

        match reason {
            Some(message) => Err(Error::Config {
                message: message.to_string(),
                key: Some("host_address".to_string()),
            }),
            None => Ok(()),
        }
    }

    /// Full URL of the UsageReporting endpoint
    pub fn endpoint_url(&self) -> String {
        format!("https://{}{}", self.host_address, SERVICE_PATH)
    }
}

/// Default settings location: `<config dir>/report-fetch.json`, or the
/// working directory when the platform has no config directory
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(SETTINGS_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::api::client::{ClientConfig, BROWSER_HEADERS, DEFAULT_BASE_URL, DEFAULT_REQUEST_DELAY};
use crate::error::{CrawlError, Result};

const CONFIG_DIR_NAME: &str = ".aptcrawl";
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// API host
    pub base_url: String,

    /// Pause before every request, in milliseconds
    pub request_delay_ms: u64,

    /// Request timeout; unset keeps the transport default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Headers sent with every request
    pub headers: BTreeMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_delay_ms: DEFAULT_REQUEST_DELAY.as_millis() as u64,
            timeout_secs: None,
            headers: BROWSER_HEADERS
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }
}

impl Config {
    /// Get the configuration directory path
    pub fn config_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| CrawlError::Config("Could not determine home directory".to_string()))?;

        Ok(home_dir.join(CONFIG_DIR_NAME))
    }

    /// Get the configuration file full path
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_path()?.join(CONFIG_FILE_NAME))
    }

    /// Create the configuration directory and a default file if missing
    pub fn initialize() -> Result<()> {
        let config_dir = Self::config_path()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).map_err(|e| {
                CrawlError::Config(format!("Failed to create config directory: {}", e))
            })?;

            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let permissions = fs::Permissions::from_mode(0o700);
                fs::set_permissions(&config_dir, permissions).map_err(|e| {
                    CrawlError::Config(format!("Failed to set directory permissions: {}", e))
                })?;
            }
        }

        let config_file = Self::config_file_path()?;
        if !config_file.exists() {
            Self::default().save_to(&config_file)?;
        }

        Ok(())
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::initialize()?;
        Self::load_from(&Self::config_file_path()?)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| CrawlError::Config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&contents)
            .map_err(|e| CrawlError::Config(format!("Failed to parse config file: {}", e)))
    }

    /// Save configuration to a specific file (0600 on Unix)
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| CrawlError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, yaml)
            .map_err(|e| CrawlError::Config(format!("Failed to write config file: {}", e)))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(path, permissions)
                .map_err(|e| CrawlError::Config(format!("Failed to set file permissions: {}", e)))?;
        }

        Ok(())
    }

    /// Client settings derived from the file
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.api.base_url.clone(),
            headers: self
                .api
                .headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
            request_delay: Duration::from_millis(self.api.request_delay_ms),
            timeout: self.api.timeout_secs.map(Duration::from_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_config() {
        let client = Config::default().client_config();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.request_delay, Duration::from_secs(5));
        assert_eq!(client.headers.len(), BROWSER_HEADERS.len());
        assert!(client.timeout.is_none());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "api:\n  request_delay_ms: 0\n  timeout_secs: 10\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api.request_delay_ms, 0);
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.headers.len(), BROWSER_HEADERS.len());

        let client = config.client_config();
        assert!(client.request_delay.is_zero());
        assert_eq!(client.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = Config::default();
        config.api.base_url = "http://127.0.0.1:8080".to_string();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "api: [unclosed").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CrawlError::Config(_))));
    }

    #[test]
    fn test_config_path() {
        let path = Config::config_path().unwrap();
        assert!(path.to_string_lossy().ends_with(".aptcrawl"));
    }
}

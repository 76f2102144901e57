//! Configuration management for Listwarden.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides. The `[layout]` section holds every
//! positional assumption the scraper makes about the admin console's
//! markup, so a console layout change is fixed in the config file.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the list's admin URL.
pub const ENV_BASE_URL: &str = "LISTWARDEN_BASE_URL";
/// Environment variable toggling TLS certificate verification.
pub const ENV_VERIFY_TLS: &str = "LISTWARDEN_VERIFY_TLS";
/// Environment variable overriding the request timeout.
pub const ENV_TIMEOUT_SECS: &str = "LISTWARDEN_TIMEOUT_SECS";
/// Environment variable holding the list admin password.
pub const ENV_ADMIN_PASSWORD: &str = "LISTWARDEN_ADMIN_PASSWORD";

/// Main application configuration.
///
/// This is loaded from `~/.config/listwarden/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote console connection settings
    pub connection: ConnectionConfig,
    /// Positional layout of the console's pages
    pub layout: PageLayout,
}

impl AppConfig {
    /// Load configuration from the default location, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::read(&config_path)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            });
        }
        Self::read(path)
    }

    fn read(path: &Path) -> ConfigResult<Self> {
        tracing::debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `LISTWARDEN_BASE_URL`: Override the list admin URL
    /// - `LISTWARDEN_VERIFY_TLS`: Override certificate verification (true/false)
    /// - `LISTWARDEN_TIMEOUT_SECS`: Override the request timeout
    /// - `LISTWARDEN_ADMIN_PASSWORD`: Admin password (never read from the file)
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply overrides from a variable lookup, normally the process environment.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup(ENV_BASE_URL) {
            tracing::debug!("Override connection.base_url from env: {}", val);
            self.connection.base_url = val;
        }

        if let Some(val) = lookup(ENV_VERIFY_TLS) {
            if let Ok(verify) = val.parse() {
                self.connection.verify_tls = verify;
                tracing::debug!("Override connection.verify_tls from env: {}", verify);
            }
        }

        if let Some(val) = lookup(ENV_TIMEOUT_SECS) {
            if let Ok(secs) = val.parse() {
                self.connection.timeout_secs = secs;
                tracing::debug!("Override connection.timeout_secs from env: {}", secs);
            }
        }

        if let Some(val) = lookup(ENV_ADMIN_PASSWORD) {
            tracing::debug!("Admin password taken from env");
            self.connection.admin_password = Some(val);
        }
    }

    /// Check that the settings are usable for connecting.
    pub fn validate(&self) -> ConfigResult<()> {
        let base = &self.connection.base_url;
        if base.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "connection.base_url".to_string(),
                reason: "not set".to_string(),
            });
        }

        let parsed = url::Url::parse(base).map_err(|e| ConfigError::InvalidValue {
            field: "connection.base_url".to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "connection.base_url".to_string(),
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        if self.connection.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "connection.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir)?;
        }
        tracing::debug!("Saving config to {}", path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/listwarden/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("org", "listwarden", "listwarden")
            .ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Connection settings for one list's admin console.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Admin URL of the list, e.g. `https://lists.example.org/mailman/admin/team`
    pub base_url: String,
    /// Verify the server's TLS certificate
    pub verify_tls: bool,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User agent string
    pub user_agent: String,
    /// Admin password (taken from the environment or CLI, never stored)
    #[serde(skip)]
    pub admin_password: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            verify_tls: true,
            timeout_secs: 30,
            user_agent: concat!("listwarden/", env!("CARGO_PKG_VERSION")).to_string(),
            admin_password: None,
        }
    }
}

/// Positional layout of the admin console's pages.
///
/// The console offers no ids or classes to select on, so every element is
/// addressed by tag name and zero-based document-order index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayout {
    /// Index of the member table among all tables of a listing page
    pub member_table: usize,
    /// Row of the member table holding the letter links, if any
    pub letter_row: usize,
    /// First data row on an unpaginated listing
    pub single_page_first_row: usize,
    /// First data row on a letter sub-page
    pub paginated_first_row: usize,
    /// Cell of a data row holding the address
    pub address_cell: usize,
    /// Index of the token-bearing form on a settings page
    pub token_form: usize,
    /// Index of the token-bearing input within that form
    pub token_input: usize,
    /// Heading whose presence marks a result page with successes
    pub success_heading: String,
    /// List holding the per-address result lines
    pub result_list: String,
    /// Heading confirming an address change
    pub confirmation_heading: String,
    /// Substring marking a result line as a warning or error
    pub rejection_marker: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            member_table: 4,
            letter_row: 1,
            single_page_first_row: 2,
            paginated_first_row: 3,
            address_cell: 1,
            token_form: 0,
            token_input: 0,
            success_heading: "h5".to_string(),
            result_list: "ul".to_string(),
            confirmation_heading: "h3".to_string(),
            rejection_marker: "--".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.connection.base_url.is_empty());
        assert!(config.connection.verify_tls);
        assert_eq!(config.connection.timeout_secs, 30);
        assert!(config.connection.user_agent.starts_with("listwarden/"));
        assert_eq!(config.layout.member_table, 4);
        assert_eq!(config.layout.letter_row, 1);
        assert_eq!(config.layout.single_page_first_row, 2);
        assert_eq!(config.layout.paginated_first_row, 3);
        assert_eq!(config.layout.address_cell, 1);
        assert_eq!(config.layout.rejection_marker, "--");
    }

    #[test]
    fn test_config_serialization() {
        let mut config = AppConfig::default();
        config.connection.admin_password = Some("hunter2".to_string());

        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("[connection]"));
        assert!(toml_str.contains("[layout]"));
        assert!(!toml_str.contains("hunter2"));

        let parsed: AppConfig = toml::from_str(&toml_str).expect("parse serialized config");
        assert_eq!(parsed.layout, config.layout);
        assert!(parsed.connection.admin_password.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("config.toml");

        let mut config = AppConfig::default();
        config.connection.base_url = "https://lists.example.org/mailman/admin/team".to_string();
        config.layout.member_table = 3;

        let contents = toml::to_string_pretty(&config).expect("serialize config");
        fs::write(&config_path, contents).expect("write config file");

        let loaded = AppConfig::load_from(&config_path).expect("load config");
        assert_eq!(
            loaded.connection.base_url,
            "https://lists.example.org/mailman/admin/team"
        );
        assert_eq!(loaded.layout.member_table, 3);
    }

    #[test]
    fn test_save_to_creates_directories() {
        let tmp = TempDir::new().expect("create temp dir");
        let config_path = tmp.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.connection.base_url = "https://lists.example.org/mailman/admin/team".to_string();
        config.connection.admin_password = Some("hunter2".to_string());
        config.save_to(&config_path).expect("save config");

        let written = fs::read_to_string(&config_path).expect("read back");
        assert!(!written.contains("hunter2"));

        let loaded = AppConfig::load_from(&config_path).expect("load config");
        assert_eq!(loaded.connection.base_url, config.connection.base_url);
        assert_eq!(loaded.layout, PageLayout::default());
    }

    #[test]
    fn test_load_from_missing_file() {
        let tmp = TempDir::new().expect("create temp dir");
        let err = AppConfig::load_from(&tmp.path().join("absent.toml"))
            .expect_err("missing file should fail");
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_BASE_URL, "https://lists.example.org/mailman/admin/ops"),
            (ENV_VERIFY_TLS, "false"),
            (ENV_TIMEOUT_SECS, "not-a-number"),
            (ENV_ADMIN_PASSWORD, "secret"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_env_overrides(|key| env.get(key).map(ToString::to_string));

        assert_eq!(
            config.connection.base_url,
            "https://lists.example.org/mailman/admin/ops"
        );
        assert!(!config.connection.verify_tls);
        // Unparseable values leave the setting alone
        assert_eq!(config.connection.timeout_secs, 30);
        assert_eq!(config.connection.admin_password.as_deref(), Some("secret"));
    }

    #[test]
    fn test_validate() {
        let mut config = AppConfig::default();
        assert!(config.validate().is_err());

        config.connection.base_url = "ftp://lists.example.org/admin".to_string();
        assert!(config.validate().is_err());

        config.connection.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.connection.base_url = "https://lists.example.org/mailman/admin/team".to_string();
        assert!(config.validate().is_ok());

        config.connection.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[connection]
base_url = "http://localhost/mailman/admin/test"

[layout]
member_table = 2
success_heading = "h4"
"#;

        let config: AppConfig = toml::from_str(toml_str).expect("parse partial config");
        assert_eq!(config.connection.base_url, "http://localhost/mailman/admin/test");
        assert!(config.connection.verify_tls);
        assert_eq!(config.layout.member_table, 2);
        assert_eq!(config.layout.success_heading, "h4");
        // These should be defaults
        assert_eq!(config.layout.paginated_first_row, 3);
        assert_eq!(config.layout.result_list, "ul");
    }
}

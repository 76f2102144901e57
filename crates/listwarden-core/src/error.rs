//! Configuration errors.
//!
//! Each crate of the workspace owns its error enum; this one covers loading,
//! saving and validating the config file.

use thiserror::Error;

/// Errors raised while loading, saving or validating [`crate::AppConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The platform offers no per-user config directory
    #[error("no per-user config directory on this platform")]
    NoConfigDir,

    /// An explicitly given config file does not exist
    #[error("config file not found at {path}")]
    NotFound {
        /// Path that was given
        path: String,
    },

    /// The file is not valid TOML for the config schema
    #[error("malformed config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be written back as TOML
    #[error("could not encode config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Reading or writing the file failed
    #[error("config file I/O: {0}")]
    Io(#[from] std::io::Error),

    /// A value is present but unusable
    #[error("invalid {field}: {reason}")]
    InvalidValue {
        /// Dotted key of the offending setting
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

//! Listwarden Core - Foundation crate for the Listwarden list administration client.
//!
//! This crate provides shared types, error handling and configuration that all
//! other Listwarden crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Configuration errors
//! - [`config`] - TOML-based configuration with XDG paths and the page layout table
//! - [`types`] - Shared newtypes (`MemberAddress`, `Token`, `PageSet`)
//!
//! # Example
//!
//! ```rust
//! use listwarden_core::{AppConfig, PageLayout};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.layout, PageLayout::default());
//! assert_eq!(config.layout.member_table, 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, ConnectionConfig, PageLayout};
pub use error::{ConfigError, ConfigResult};
pub use types::{MemberAddress, PageSet, Token};

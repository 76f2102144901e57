//! Error types for console administration.

use thiserror::Error;

/// Errors that can occur while driving the admin console.
#[derive(Error, Debug)]
pub enum AdminError {
    /// Request failed at the HTTP level
    #[error("transport error: {0}")]
    Transport(#[from] listwarden_transport::TransportError),

    /// A page lacked the structure its layout entry points at
    #[error("unexpected page structure: {0}")]
    Scrape(#[from] listwarden_scraper::ScrapeError),

    /// The console served the login form again after the password was posted
    #[error("admin login rejected by the console")]
    AuthenticationFailed,

    /// Connection settings are unusable
    #[error("configuration error: {0}")]
    Config(#[from] listwarden_core::ConfigError),
}

/// Result type for admin operations.
pub type Result<T> = std::result::Result<T, AdminError>;

//! Listwarden Admin - Mailing list administration over the HTML console.
//!
//! This crate sequences the console's pages into list operations: log in,
//! read the roster, subscribe or unsubscribe in bulk, change one member's
//! address, and submit whole settings sections. Every mutation fetches a
//! fresh anti-forgery token from the page it is about to post to.
//!
//! # Architecture
//!
//! - **Session** ([`session`]): the authenticated console, one request at a time
//! - **Membership** ([`membership`]): bulk subscribe/unsubscribe form options
//! - **Settings** ([`settings`]): settings sections and their preset field sets
//! - **Errors** ([`error`]): admin-level error type
//!
//! # Example
//!
//! ```rust,ignore
//! use listwarden_admin::{AddOptions, AdminSession};
//! use listwarden_core::{AppConfig, MemberAddress};
//!
//! let config = AppConfig::load_with_env()?;
//! let session = AdminSession::from_config(&config)?;
//! session.login("list-admin-password").await?;
//!
//! let applied = session
//!     .add_members(&[MemberAddress::from("ann@example.org")], &AddOptions::default())
//!     .await?;
//! println!("subscribed {} members", applied.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod error;
pub mod membership;
pub mod session;
pub mod settings;

// Re-export commonly used types
pub use error::{AdminError, Result};
pub use membership::{AddOptions, RemoveOptions};
pub use session::AdminSession;
pub use settings::{ConfigSection, SectionForm};

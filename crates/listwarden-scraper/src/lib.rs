//! Listwarden Scraper - HTML navigation and result interpretation.
//!
//! The admin console has no machine-readable API and its markup carries no
//! ids or classes worth keying on. This crate locates content purely by tag
//! name and document-order position (see [`listwarden_core::PageLayout`]) and
//! turns the console's pages into typed values:
//!
//! - member listings, following letter-index sub-pages when paginated
//! - one-time anti-forgery tokens from settings forms
//! - applied/rejected entries from membership result pages
//! - confirmation of a single address change
//!
//! Every function here is pure over a parsed [`Document`]. Parsing never
//! fails; only the absence of expected structure is an error.
//!
//! # Example
//!
//! ```rust
//! use listwarden_core::PageLayout;
//! use listwarden_scraper::{parse_results, Document};
//!
//! let doc = Document::parse(
//!     "<h5>Successfully subscribed:</h5><ul><li>a@example.org</li>\
//!      <li>b@example.org -- Already a member</li></ul>",
//! );
//! let applied = parse_results(&doc, &PageLayout::default()).unwrap();
//! assert_eq!(applied.len(), 1);
//! assert_eq!(applied[0].as_str(), "a@example.org");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod document;
pub mod error;
pub mod login;
pub mod members;
pub mod results;
pub mod token;

// Re-export commonly used types
pub use document::{Document, Element};
pub use error::{Result, ScrapeError};
pub use login::shows_login_form;
pub use members::{list_members, parse_listing, parse_sub_page, Listing};
pub use results::{classify_results, parse_results, verify_change, ResultEntry};
pub use token::extract_token;

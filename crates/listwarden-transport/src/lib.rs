//! HTTP transport for the list admin console.
//!
//! Provides the `Transport` seam the admin client talks through, a
//! reqwest-backed implementation holding the session cookie, and a
//! canned-page mock for tests.

pub mod error;
pub mod http;
pub mod mock;
pub mod transport;

pub use error::{Result, TransportError};
pub use http::HttpTransport;
pub use mock::{MockTransport, RecordedRequest};
pub use transport::{FormFields, Method, Page, Transport};

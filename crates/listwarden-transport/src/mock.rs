//! Mock transport for testing.
//!
//! Serves canned pages keyed by method and path, and records every request
//! in the order it was issued so tests can assert on sequencing.

use crate::error::{Result, TransportError};
use crate::transport::{FormFields, Method, Page, Transport};
use std::collections::HashMap;
use tokio::sync::Mutex;

/// One recorded request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub form: FormFields,
}

impl RecordedRequest {
    /// Value of the first form field with this name
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Transport answering from a table of canned pages.
///
/// # Example
///
/// ```rust,ignore
/// use listwarden_transport::{MockTransport, Transport};
///
/// let mock = MockTransport::new().with_get("members", "<html></html>");
/// let page = mock.get("members").await?;
/// assert_eq!(page.status, 200);
/// ```
#[derive(Default)]
pub struct MockTransport {
    pages: Mutex<HashMap<(Method, String), Page>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Create a mock with no pages
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for GET `path` (builder pattern)
    pub fn with_get(self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.with_page(Method::Get, path, Page::ok(body))
    }

    /// Serve `body` for POST `path` (builder pattern)
    pub fn with_post(self, path: impl Into<String>, body: impl Into<String>) -> Self {
        self.with_page(Method::Post, path, Page::ok(body))
    }

    /// Serve `page` for `method` `path` (builder pattern)
    pub fn with_page(mut self, method: Method, path: impl Into<String>, page: Page) -> Self {
        self.pages.get_mut().insert((method, path.into()), page);
        self
    }

    /// All requests issued so far, oldest first
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl Transport for MockTransport {
    async fn submit(&self, method: Method, path: &str, form: &[(String, String)]) -> Result<Page> {
        self.requests.lock().await.push(RecordedRequest {
            method,
            path: path.to_string(),
            form: form.to_vec(),
        });

        self.pages
            .lock()
            .await
            .get(&(method, path.to_string()))
            .cloned()
            .ok_or_else(|| TransportError::NoCannedPage {
                method: method.to_string(),
                path: path.to_string(),
            })
    }
}

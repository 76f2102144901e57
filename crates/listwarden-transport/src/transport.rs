use crate::error::Result;
use std::fmt;

/// Ordered form fields, submitted `application/x-www-form-urlencoded`.
pub type FormFields = Vec<(String, String)>;

/// HTTP method used against the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// A response from the console
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    /// A 200 response with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

/// Session-holding transport to the admin console.
///
/// Implementations keep the session cookie between calls. Paths are
/// relative to the list's admin URL unless they are absolute URLs.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Issue one request and return the response page
    async fn submit(&self, method: Method, path: &str, form: &[(String, String)]) -> Result<Page>;

    /// GET a page
    async fn get(&self, path: &str) -> Result<Page> {
        self.submit(Method::Get, path, &[]).await
    }

    /// POST a form
    async fn post(&self, path: &str, form: &[(String, String)]) -> Result<Page> {
        self.submit(Method::Post, path, form).await
    }
}

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TransportError>;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("client setup failed: {0}")]
    Client(String),

    #[error("invalid url '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("no canned page for {method} {path}")]
    NoCannedPage { method: String, path: String },
}

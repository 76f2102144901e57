//! Structural-absence errors.
//!
//! Raised when the console's page no longer has the element the layout
//! table points at, which means either the console's layout changed or a
//! different page (typically the login form) was served. These are fatal:
//! no partial extraction is returned.

use thiserror::Error;

/// An expected element or attribute is missing from a page.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScrapeError {
    /// No element of this tag at this document-order index
    #[error("missing <{tag}> #{index} ({context})")]
    MissingElement {
        /// Tag name looked up
        tag: String,
        /// Zero-based index among elements of that tag
        index: usize,
        /// What the element was expected to hold
        context: &'static str,
    },

    /// Element found but it lacks the attribute
    #[error("<{tag}> has no '{attribute}' attribute ({context})")]
    MissingAttribute {
        /// Tag name of the element
        tag: String,
        /// Attribute looked up
        attribute: String,
        /// What the attribute was expected to hold
        context: &'static str,
    },
}

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScrapeError::MissingElement {
            tag: "table".to_string(),
            index: 4,
            context: "member table",
        };
        assert_eq!(err.to_string(), "missing <table> #4 (member table)");

        let err = ScrapeError::MissingAttribute {
            tag: "input".to_string(),
            attribute: "value".to_string(),
            context: "token input",
        };
        assert_eq!(
            err.to_string(),
            "<input> has no 'value' attribute (token input)"
        );
    }
}

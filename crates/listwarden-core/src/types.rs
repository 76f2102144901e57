//! Shared types used across Listwarden.
//!
//! These newtypes give the scraped strings a domain meaning without adding
//! any validation: addresses and tokens are carried exactly as the remote
//! console renders them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A list member's address as shown by the admin console.
///
/// No validation or normalisation happens here. Duplicates are allowed and
/// order is meaningful wherever a sequence of addresses is returned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberAddress(String);

impl MemberAddress {
    /// Wrap a string as a member address.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Get the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the address and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Join addresses into the newline-separated block the console's textareas expect.
    #[must_use]
    pub fn join_lines(addresses: &[MemberAddress]) -> String {
        addresses
            .iter()
            .map(MemberAddress::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for MemberAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MemberAddress {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MemberAddress {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for MemberAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One-time anti-forgery token scraped from a settings form.
///
/// Valid for exactly one submission to the page it came from. The `Debug`
/// output is redacted so tokens never end up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a scraped token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the raw token value for form submission.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// Ordered sub-page URLs discovered from the letter-index row of a listing.
///
/// Empty when the listing fits on a single page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageSet(Vec<String>);

impl PageSet {
    /// Create an empty page set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sub-page URL, keeping discovery order.
    pub fn push(&mut self, url: impl Into<String>) {
        self.0.push(url.into());
    }

    /// Number of sub-pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the listing is a single page.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the sub-page URLs in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl IntoIterator for PageSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PageSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<String> for PageSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_address_is_not_normalised() {
        let addr = MemberAddress::new("  Mixed.Case@Example.ORG ");
        assert_eq!(addr.as_str(), "  Mixed.Case@Example.ORG ");
        assert_eq!(addr.to_string(), "  Mixed.Case@Example.ORG ");
    }

    #[test]
    fn test_join_lines() {
        let addrs = vec![
            MemberAddress::from("a@example.org"),
            MemberAddress::from("b@example.org"),
        ];
        assert_eq!(
            MemberAddress::join_lines(&addrs),
            "a@example.org\nb@example.org"
        );
        assert_eq!(MemberAddress::join_lines(&[]), "");
    }

    #[test]
    fn test_member_address_serialization() {
        let addr = MemberAddress::from("a@example.org");
        let json = serde_json::to_string(&addr).expect("serialize address");
        assert_eq!(json, "\"a@example.org\"");

        let back: MemberAddress = serde_json::from_str(&json).expect("deserialize address");
        assert_eq!(back, addr);
    }

    #[test]
    fn test_token_debug_is_redacted() {
        let token = Token::new("abc123");
        assert_eq!(token.as_str(), "abc123");
        assert!(!format!("{token:?}").contains("abc123"));
    }

    #[test]
    fn test_page_set_keeps_order() {
        let mut pages = PageSet::new();
        assert!(pages.is_empty());

        pages.push("/members?letter=b");
        pages.push("/members?letter=a");
        pages.push("/members?letter=b");

        assert_eq!(pages.len(), 3);
        let urls: Vec<_> = pages.iter().cloned().collect();
        assert_eq!(
            urls,
            vec!["/members?letter=b", "/members?letter=a", "/members?letter=b"]
        );
    }
}

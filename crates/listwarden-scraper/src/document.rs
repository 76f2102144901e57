//! Positional queries over a parsed HTML page.
//!
//! A thin, read-only layer over `scraper::Html`. Elements are addressed by
//! tag name and zero-based index in document order, the only addressing the
//! console's markup supports. Tag names match ASCII case-insensitively.

use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html};

/// An immutable parsed HTML page.
///
/// Built once per response body and dropped after extraction. Parsing is
/// permissive: unclosed tags and stray entities produce a best-effort tree.
#[derive(Debug)]
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a response body. Never fails.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            html: Html::parse_document(raw),
        }
    }

    /// Every element with this tag name, in document order.
    #[must_use]
    pub fn all_of_tag(&self, tag: &str) -> Vec<Element<'_>> {
        tagged(self.html.root_element(), false, tag).collect()
    }

    /// The `index`-th element with this tag name, if any.
    #[must_use]
    pub fn nth_of_tag(&self, tag: &str, index: usize) -> Option<Element<'_>> {
        tagged(self.html.root_element(), false, tag).nth(index)
    }

    /// Like [`Document::nth_of_tag`], failing with `context` when absent.
    pub fn require_nth_of_tag(
        &self,
        tag: &str,
        index: usize,
        context: &'static str,
    ) -> Result<Element<'_>> {
        self.nth_of_tag(tag, index)
            .ok_or_else(|| ScrapeError::MissingElement {
                tag: tag.to_string(),
                index,
                context,
            })
    }
}

/// Elements named `tag` under `scope` in document order, `scope` itself
/// included unless `skip_self`.
fn tagged<'a: 'b, 'b>(
    scope: ElementRef<'a>,
    skip_self: bool,
    tag: &'b str,
) -> impl Iterator<Item = Element<'a>> + 'b {
    scope
        .descendants()
        .skip(usize::from(skip_self))
        .filter_map(ElementRef::wrap)
        .filter(move |el| el.value().name().eq_ignore_ascii_case(tag))
        .map(Element)
}

/// A borrowed element of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    /// Lowercase tag name.
    #[must_use]
    pub fn tag(&self) -> &'a str {
        self.0.value().name()
    }

    /// Descendants with this tag name in document order, excluding the element itself.
    #[must_use]
    pub fn descendants_by_tag(&self, tag: &str) -> Vec<Element<'a>> {
        tagged(self.0, true, tag).collect()
    }

    /// The `index`-th descendant with this tag name, if any.
    #[must_use]
    pub fn nth_descendant(&self, tag: &str, index: usize) -> Option<Element<'a>> {
        tagged(self.0, true, tag).nth(index)
    }

    /// Like [`Element::nth_descendant`], failing with `context` when absent.
    pub fn require_nth_descendant(
        &self,
        tag: &str,
        index: usize,
        context: &'static str,
    ) -> Result<Element<'a>> {
        self.nth_descendant(tag, index)
            .ok_or_else(|| ScrapeError::MissingElement {
                tag: tag.to_string(),
                index,
                context,
            })
    }

    /// Attribute value, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    /// Like [`Element::attribute`], failing with `context` when absent.
    pub fn require_attribute(&self, name: &str, context: &'static str) -> Result<&'a str> {
        self.attribute(name)
            .ok_or_else(|| ScrapeError::MissingAttribute {
                tag: self.tag().to_string(),
                attribute: name.to_string(),
                context,
            })
    }

    /// Concatenated text of all descendant text nodes, untrimmed.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.text().collect()
    }
}

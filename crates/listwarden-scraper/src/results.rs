//! Membership result pages.
//!
//! After a mass subscribe or unsubscribe the console lists one line per
//! address under a heading. Warnings and errors are appended to the line
//! after a `--` delimiter, so a line that looks successful may not be.

use crate::document::Document;
use crate::error::Result;
use listwarden_core::{MemberAddress, PageLayout};

/// Classification of one result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultEntry {
    /// The console applied the change for this address
    Applied(MemberAddress),
    /// The line carried a warning or error; the full line text is kept
    Rejected(String),
}

impl ResultEntry {
    /// The applied address, if this entry succeeded.
    #[must_use]
    pub fn applied(&self) -> Option<&MemberAddress> {
        match self {
            Self::Applied(addr) => Some(addr),
            Self::Rejected(_) => None,
        }
    }
}

/// Classify every line of a membership result page, in document order.
///
/// A page without the success heading has nothing applied and yields an
/// empty list. The heading without the result list is a structural error.
pub fn classify_results(doc: &Document, layout: &PageLayout) -> Result<Vec<ResultEntry>> {
    if doc.nth_of_tag(&layout.success_heading, 0).is_none() {
        tracing::debug!("No success heading, nothing applied");
        return Ok(Vec::new());
    }

    let list = doc.require_nth_of_tag(&layout.result_list, 0, "result list")?;
    let entries = list
        .descendants_by_tag("li")
        .iter()
        .map(|item| {
            let text = item.text().trim().to_string();
            if text.contains(layout.rejection_marker.as_str()) {
                tracing::warn!("Result line rejected: {}", text);
                ResultEntry::Rejected(text)
            } else {
                ResultEntry::Applied(MemberAddress::new(text))
            }
        })
        .collect();

    Ok(entries)
}

/// Addresses the console reports as applied, in document order.
pub fn parse_results(doc: &Document, layout: &PageLayout) -> Result<Vec<MemberAddress>> {
    Ok(classify_results(doc, layout)?
        .into_iter()
        .filter_map(|entry| match entry {
            ResultEntry::Applied(addr) => Some(addr),
            ResultEntry::Rejected(_) => None,
        })
        .collect())
}

/// Whether an address-change confirmation names both addresses.
///
/// A page without the confirmation heading is a structural error.
pub fn verify_change(doc: &Document, layout: &PageLayout, from: &str, to: &str) -> Result<bool> {
    let heading =
        doc.require_nth_of_tag(&layout.confirmation_heading, 0, "change confirmation")?;
    let text = heading.text();
    Ok(text.contains(from) && text.contains(to))
}

//! Member listing extraction.
//!
//! The console renders the membership roster as one table at a fixed
//! position. Small lists fit on one page; large lists replace the roster
//! with a row of letter links, each leading to a sub-page holding the
//! members under that letter. Sub-pages carry one more header row than the
//! single-page roster.

use crate::document::{Document, Element};
use crate::error::{Result, ScrapeError};
use listwarden_core::{MemberAddress, PageLayout, PageSet};
use std::future::Future;

/// What the root listing page holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Every member is on the root page
    SinglePage(Vec<MemberAddress>),
    /// Members are spread over letter sub-pages, in link order
    Paginated(PageSet),
}

/// Read the root listing page.
///
/// A missing member table or letter row is a hard failure.
pub fn parse_listing(doc: &Document, layout: &PageLayout) -> Result<Listing> {
    let table = doc.require_nth_of_tag("table", layout.member_table, "member table")?;
    let rows = table.descendants_by_tag("tr");

    let letter_row = rows
        .get(layout.letter_row)
        .ok_or_else(|| ScrapeError::MissingElement {
            tag: "tr".to_string(),
            index: layout.letter_row,
            context: "letter row",
        })?;

    let links = letter_row.descendants_by_tag("a");
    if links.is_empty() {
        let members = rows_to_members(&rows, layout.single_page_first_row, layout)?;
        tracing::debug!("Single-page listing with {} members", members.len());
        return Ok(Listing::SinglePage(members));
    }

    let pages = links
        .iter()
        .map(|link| {
            link.require_attribute("href", "letter link")
                .map(ToString::to_string)
        })
        .collect::<Result<PageSet>>()?;

    tracing::debug!("Paginated listing with {} letter pages", pages.len());
    Ok(Listing::Paginated(pages))
}

/// Read the members of one letter sub-page.
///
/// A table with fewer rows than the header offset yields no members.
pub fn parse_sub_page(doc: &Document, layout: &PageLayout) -> Result<Vec<MemberAddress>> {
    let table = doc.require_nth_of_tag("table", layout.member_table, "member table")?;
    let rows = table.descendants_by_tag("tr");
    rows_to_members(&rows, layout.paginated_first_row, layout)
}

/// Collect every member of a list, following letter sub-pages.
///
/// `fetch` is called once per sub-page URL, strictly one after another and
/// in link order. Results are concatenated as encountered: no sorting, no
/// de-duplication. Any structural error aborts the whole listing.
pub async fn list_members<F, Fut, E>(
    root_html: &str,
    layout: &PageLayout,
    mut fetch: F,
) -> std::result::Result<Vec<MemberAddress>, E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = std::result::Result<String, E>>,
    E: From<ScrapeError>,
{
    let listing = parse_listing(&Document::parse(root_html), layout)?;
    let pages = match listing {
        Listing::SinglePage(members) => return Ok(members),
        Listing::Paginated(pages) => pages,
    };

    let mut members = Vec::new();
    for url in pages {
        let html = fetch(url.clone()).await?;
        let page_members = parse_sub_page(&Document::parse(&html), layout)?;
        tracing::debug!("{} members on {}", page_members.len(), url);
        members.extend(page_members);
    }

    Ok(members)
}

fn rows_to_members(
    rows: &[Element<'_>],
    first_row: usize,
    layout: &PageLayout,
) -> Result<Vec<MemberAddress>> {
    rows.iter()
        .skip(first_row)
        .map(|row| {
            let cell = row.require_nth_descendant("td", layout.address_cell, "member address cell")?;
            Ok(MemberAddress::new(cell.text().trim()))
        })
        .collect()
}

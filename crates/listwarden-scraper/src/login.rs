//! Login form detection.

use crate::document::Document;

/// Name of the console's password field.
pub const PASSWORD_FIELD: &str = "adminpw";

/// Whether the page is the console's login form.
///
/// The console answers a rejected password, or an expired session, with
/// the login form again instead of an error status.
#[must_use]
pub fn shows_login_form(doc: &Document) -> bool {
    doc.all_of_tag("input")
        .iter()
        .any(|input| input.attribute("name") == Some(PASSWORD_FIELD))
}

//! Anti-forgery token extraction.

use crate::document::Document;
use crate::error::Result;
use listwarden_core::{PageLayout, Token};

/// Read the token a settings page embeds for its next submission.
///
/// The token is the `value` of the first input of the first form. A page
/// without that form, input or value cannot be submitted, so every absence
/// is an error.
pub fn extract_token(doc: &Document, layout: &PageLayout) -> Result<Token> {
    let form = doc.require_nth_of_tag("form", layout.token_form, "token form")?;
    let input = form.require_nth_descendant("input", layout.token_input, "token input")?;
    let value = input.require_attribute("value", "token input")?;
    Ok(Token::new(value))
}

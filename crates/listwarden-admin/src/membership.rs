//! Bulk membership forms.
//!
//! The console's mass subscribe and mass removal pages take the addresses
//! as one newline-separated textarea plus a few yes/no switches.

use listwarden_core::{MemberAddress, Token};
use listwarden_transport::FormFields;

/// Form field carrying the anti-forgery token.
pub const TOKEN_FIELD: &str = "csrf_token";

/// Submit button of the membership pages. The console only checks that it is present.
pub const SUBMIT_BUTTON: (&str, &str) = ("setmemberopts_btn", "Submit Your Changes");

/// Switches for a mass subscribe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddOptions {
    /// Send invitations instead of subscribing directly
    pub invite: bool,
    /// Send the welcome message to this batch
    pub send_welcome: bool,
    /// Notify the list owner about the new members
    pub notify_owner: bool,
}

/// Switches for a mass removal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoveOptions {
    /// Send unsubscription acknowledgements to the removed members
    pub send_ack: bool,
    /// Notify the list owner about the removals
    pub notify_owner: bool,
}

fn flag(on: bool) -> String {
    if on { "1" } else { "0" }.to_string()
}

fn field(name: &str, value: impl Into<String>) -> (String, String) {
    (name.to_string(), value.into())
}

pub(crate) fn add_form(token: &Token, members: &[MemberAddress], options: &AddOptions) -> FormFields {
    vec![
        field(TOKEN_FIELD, token.as_str()),
        field("subscribe_or_invite", flag(options.invite)),
        field("send_welcome_msg_to_this_batch", flag(options.send_welcome)),
        field("send_notifications_to_list_owner", flag(options.notify_owner)),
        field("subscribees", MemberAddress::join_lines(members)),
        field(SUBMIT_BUTTON.0, SUBMIT_BUTTON.1),
    ]
}

pub(crate) fn remove_form(
    token: &Token,
    members: &[MemberAddress],
    options: &RemoveOptions,
) -> FormFields {
    vec![
        field(TOKEN_FIELD, token.as_str()),
        field("send_unsub_ack_to_this_batch", flag(options.send_ack)),
        field("send_unsub_notifications_to_list_owner", flag(options.notify_owner)),
        field("unsubscribees", MemberAddress::join_lines(members)),
        field(SUBMIT_BUTTON.0, SUBMIT_BUTTON.1),
    ]
}

pub(crate) fn change_form(token: &Token, from: &MemberAddress, to: &MemberAddress) -> FormFields {
    vec![
        field(TOKEN_FIELD, token.as_str()),
        field("change_from", from.as_str()),
        field("change_to", to.as_str()),
        field(SUBMIT_BUTTON.0, SUBMIT_BUTTON.1),
    ]
}

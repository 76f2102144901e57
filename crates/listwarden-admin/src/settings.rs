//! List settings sections.
//!
//! Each settings page of the console is posted as a whole: every field of
//! the section is sent, together with the token read from that same page.
//! The presets below describe a locked-down announcement-style list; any
//! field can be overridden with [`SectionForm::set`] before submitting.

use listwarden_core::MemberAddress;
use listwarden_transport::FormFields;
use std::fmt;

/// A settings page of the admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigSection {
    /// General options: names, owners, reply handling, notifications
    General,
    /// Sender filters: member moderation and non-member handling
    PrivacySender,
    /// Subscription rules and roster visibility
    PrivacySubscribing,
    /// Recipient filters
    PrivacyRecipient,
    /// Digest delivery
    Digest,
    /// Regular (non-digest) delivery
    NonDigest,
    /// Bounce processing
    Bounce,
}

impl ConfigSection {
    /// Every section, in console menu order.
    pub const ALL: [ConfigSection; 7] = [
        Self::General,
        Self::PrivacySender,
        Self::PrivacySubscribing,
        Self::PrivacyRecipient,
        Self::Digest,
        Self::NonDigest,
        Self::Bounce,
    ];

    /// Path of the section's page, relative to the list's admin URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::PrivacySender => "privacy/sender",
            Self::PrivacySubscribing => "privacy/subscribing",
            Self::PrivacyRecipient => "privacy/recipient",
            Self::Digest => "digest",
            Self::NonDigest => "nondigest",
            Self::Bounce => "bounce",
        }
    }
}

impl fmt::Display for ConfigSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Submit button shared by all settings pages.
const SUBMIT: (&str, &str) = ("submit", "Send");

/// A complete settings form for one section.
///
/// Fields keep their insertion order. The anti-forgery token is not part of
/// the form; the session prepends it at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionForm {
    section: ConfigSection,
    fields: FormFields,
}

impl SectionForm {
    /// An empty form for `section`.
    #[must_use]
    pub fn new(section: ConfigSection) -> Self {
        Self {
            section,
            fields: Vec::new(),
        }
    }

    fn with_fields(section: ConfigSection, fields: &[(&str, &str)]) -> Self {
        let mut form = Self::new(section);
        for (name, value) in fields {
            form.set(*name, *value);
        }
        form
    }

    /// Set a field, replacing an earlier value in place or appending it.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(existing) => existing.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    /// Value of a field, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// The section this form belongs to.
    #[must_use]
    pub fn section(&self) -> ConfigSection {
        self.section
    }

    /// The fields in submit order.
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    fn finish(mut self) -> Self {
        self.fields.retain(|(k, _)| k != SUBMIT.0);
        self.fields.push((SUBMIT.0.to_string(), SUBMIT.1.to_string()));
        self
    }

    /// General options.
    ///
    /// `owner` also becomes the moderator; `subject_prefix` is wrapped in
    /// brackets.
    #[must_use]
    pub fn general(real_name: &str, owner: &str, subject_prefix: &str, host_name: &str) -> Self {
        let prefix = format!("[{subject_prefix}]");
        Self::with_fields(
            ConfigSection::General,
            &[
                ("real_name", real_name),
                ("owner", owner),
                ("moderator", owner),
                ("description", ""),
                ("info", ""),
                ("subject_prefix", prefix.as_str()),
                ("anonymous_list", "0"),
                ("first_strip_reply_to", "0"),
                ("reply_goes_to_list", "0"),
                ("reply_to_address", ""),
                ("umbrella_list", "1"),
                ("umbrella_member_suffix", "-owner"),
                ("send_reminders", "0"),
                ("welcome_msg", ""),
                ("send_welcome_msg", "0"),
                ("goodbye_msg", "Your subscription to this list has been cancelled."),
                ("send_goodbye_msg", "0"),
                ("admin_immed_notify", "0"),
                ("admin_notify_mchanges", "0"),
                ("respond_to_post_requests", "0"),
                ("emergency", "0"),
                ("administrivia", "0"),
                ("max_message_size", "0"),
                ("admin_member_chunksize", "100000"),
                ("host_name", host_name),
                ("include_rfc2369_headers", "0"),
                ("include_list_post_header", "0"),
                ("include_sender_header", "1"),
                ("max_days_to_hold", "1"),
            ],
        )
        .finish()
    }

    /// Sender filters: moderate members, accept only the given non-members.
    #[must_use]
    pub fn privacy_sender(nonmembers: &[MemberAddress]) -> Self {
        let accepted = MemberAddress::join_lines(nonmembers);
        Self::with_fields(
            ConfigSection::PrivacySender,
            &[
                ("default_member_moderation", "1"),
                ("member_moderation_action", "1"),
                ("member_moderation_notice", ""),
                ("accept_these_nonmembers", accepted.as_str()),
                ("hold_these_nonmembers", ""),
                ("reject_these_nonmembers", ""),
                ("discard_these_nonmembers", ""),
                ("nonmember_rejection_notice", ""),
                ("generic_nonmember_action", "2"),
                ("forward_auto_discards", "0"),
            ],
        )
        .finish()
    }

    /// Subscription rules: unadvertised, approval required, private roster.
    #[must_use]
    pub fn privacy_subscribing() -> Self {
        Self::with_fields(
            ConfigSection::PrivacySubscribing,
            &[
                ("advertised", "0"),
                ("subscribe_policy", "2"),
                ("subscribe_auto_approval", ""),
                ("unsubscribe_policy", "0"),
                ("ban_list", ""),
                ("private_roster", "2"),
                ("obscure_addresses", "1"),
            ],
        )
        .finish()
    }

    /// Recipient filters: no explicit destination, no recipient limit.
    #[must_use]
    pub fn privacy_recipient() -> Self {
        Self::with_fields(
            ConfigSection::PrivacyRecipient,
            &[
                ("require_explicit_destination", "0"),
                ("acceptable_aliases", ""),
                ("max_num_recipients", "0"),
            ],
        )
        .finish()
    }

    /// Digest delivery: available but not the default.
    #[must_use]
    pub fn digest() -> Self {
        Self::with_fields(
            ConfigSection::Digest,
            &[
                ("digestable", "1"),
                ("digest_is_default", "0"),
                ("mime_is_default_digest", "0"),
                ("digest_size_threshhold", "30"),
                ("digest_send_periodic", "1"),
                ("digest_header", ""),
                ("digest_footer", ""),
                ("digest_volume_frequency", "0"),
                ("_new_volume", "0"),
                ("_send_digest_now", "0"),
            ],
        )
        .finish()
    }

    /// Regular delivery with the given footer and header.
    #[must_use]
    pub fn nondigest(msg_footer: &str, msg_header: &str) -> Self {
        Self::with_fields(
            ConfigSection::NonDigest,
            &[
                ("nondigestable", "1"),
                ("msg_header", msg_header),
                ("msg_footer", msg_footer),
                ("scrub_nondigest", "0"),
                ("regular_exclude_lists", ""),
                ("regular_exclude_ignore", "1"),
                ("regular_include_lists", ""),
            ],
        )
        .finish()
    }

    /// Bounce processing on, every owner notification off.
    #[must_use]
    pub fn bounce() -> Self {
        Self::with_fields(
            ConfigSection::Bounce,
            &[
                ("bounce_processing", "1"),
                ("bounce_score_threshold", "5.0"),
                ("bounce_info_stale_after", "7"),
                ("bounce_you_are_disabled_warnings", "0"),
                ("bounce_you_are_disabled_warnings_interval", "0"),
                ("bounce_unrecognized_goes_to_list_owner", "0"),
                ("bounce_notify_owner_on_bounce_increment", "0"),
                ("bounce_notify_owner_on_disable", "0"),
                ("bounce_notify_owner_on_removal", "0"),
            ],
        )
        .finish()
    }
}

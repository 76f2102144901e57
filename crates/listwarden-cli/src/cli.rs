//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listwarden")]
#[command(about = "Administer a Mailman 2 mailing list through its web console")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Admin URL of the list, e.g. https://lists.example.org/mailman/admin/team
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Admin password (defaults to LISTWARDEN_ADMIN_PASSWORD)
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a config file with the default page layout
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Membership management
    #[command(subcommand)]
    Members(MembersCommand),

    /// Submit a settings section
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand, Debug)]
pub enum MembersCommand {
    /// Print every member address
    List,

    /// Subscribe addresses
    Add {
        /// Addresses to subscribe
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Send invitations instead of subscribing
        #[arg(long)]
        invite: bool,

        /// Send the welcome message
        #[arg(long)]
        welcome: bool,

        /// Notify the list owner
        #[arg(long)]
        notify_owner: bool,
    },

    /// Unsubscribe addresses
    Remove {
        /// Addresses to unsubscribe
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Send unsubscription acknowledgements
        #[arg(long)]
        ack: bool,

        /// Notify the list owner
        #[arg(long)]
        notify_owner: bool,
    },

    /// Change a member's address
    Change {
        /// Current address
        from: String,
        /// New address
        to: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// General options
    General(GeneralArgs),

    /// Sender filters, accepting posts from the given non-members
    PrivacySender {
        /// Non-member addresses allowed to post
        nonmembers: Vec<String>,
    },

    /// Subscription rules
    PrivacySubscribing,

    /// Recipient filters
    PrivacyRecipient,

    /// Digest delivery
    Digest,

    /// Regular delivery
    Nondigest {
        /// Header added to every message
        #[arg(long, default_value = "")]
        header: String,

        /// Footer added to every message
        #[arg(long, default_value = "")]
        footer: String,
    },

    /// Bounce processing
    Bounce,
}

#[derive(Args, Debug)]
pub struct GeneralArgs {
    /// Public list name
    #[arg(long)]
    pub real_name: String,

    /// Owner address, also used as moderator
    #[arg(long)]
    pub owner: String,

    /// Subject prefix, without brackets
    #[arg(long)]
    pub subject_prefix: String,

    /// Host name of the list
    #[arg(long)]
    pub host_name: String,
}

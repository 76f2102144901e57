//! Listwarden command-line client.
//!
//! Thin shell over `listwarden-admin`: resolves configuration, logs in, runs
//! one operation and prints its result.

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Command, ConfigCommand, GlobalArgs, MembersCommand};
use listwarden_admin::{AddOptions, AdminSession, RemoveOptions, SectionForm};
use listwarden_core::config::ENV_ADMIN_PASSWORD;
use listwarden_core::{AppConfig, MemberAddress};
use listwarden_transport::{HttpTransport, Transport};
use std::process::ExitCode;
use tracing::info;

/// Initialize tracing subscriber for logging
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,listwarden=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Load the config file, then layer env and command-line overrides on top.
fn load_config(global: &GlobalArgs) -> Result<AppConfig> {
    let mut config = match &global.config {
        Some(path) => AppConfig::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => AppConfig::load().context("failed to load config")?,
    };
    config.apply_env_overrides(|key| std::env::var(key).ok());
    apply_cli_overrides(&mut config, global);
    Ok(config)
}

fn apply_cli_overrides(config: &mut AppConfig, global: &GlobalArgs) {
    if let Some(url) = &global.base_url {
        config.connection.base_url.clone_from(url);
    }
    if global.insecure {
        config.connection.verify_tls = false;
    }
    if let Some(password) = &global.password {
        config.connection.admin_password = Some(password.clone());
    }
}

fn addresses(raw: Vec<String>) -> Vec<MemberAddress> {
    raw.into_iter().map(MemberAddress::from).collect()
}

fn print_members(members: &[MemberAddress], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(members)?);
    } else {
        for member in members {
            println!("{member}");
        }
    }
    Ok(())
}

async fn run_members<T: Transport>(
    session: &AdminSession<T>,
    command: MembersCommand,
    json: bool,
) -> Result<()> {
    match command {
        MembersCommand::List => {
            let members = session.list_members().await?;
            print_members(&members, json)
        }
        MembersCommand::Add {
            addresses: raw,
            invite,
            welcome,
            notify_owner,
        } => {
            let options = AddOptions {
                invite,
                send_welcome: welcome,
                notify_owner,
            };
            let applied = session.add_members(&addresses(raw), &options).await?;
            print_members(&applied, json)
        }
        MembersCommand::Remove {
            addresses: raw,
            ack,
            notify_owner,
        } => {
            let options = RemoveOptions {
                send_ack: ack,
                notify_owner,
            };
            let removed = session.remove_members(&addresses(raw), &options).await?;
            print_members(&removed, json)
        }
        MembersCommand::Change { from, to } => {
            let from = MemberAddress::from(from);
            let to = MemberAddress::from(to);
            let changed = session.change_member(&from, &to).await?;
            if json {
                let out = serde_json::json!({
                    "from": from,
                    "to": to,
                    "changed": changed,
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            }
            if !changed {
                bail!("console did not confirm the change of {from} to {to}");
            }
            if !json {
                println!("{from} -> {to}");
            }
            Ok(())
        }
    }
}

fn section_form(command: ConfigCommand) -> SectionForm {
    match command {
        ConfigCommand::General(args) => SectionForm::general(
            &args.real_name,
            &args.owner,
            &args.subject_prefix,
            &args.host_name,
        ),
        ConfigCommand::PrivacySender { nonmembers } => {
            SectionForm::privacy_sender(&addresses(nonmembers))
        }
        ConfigCommand::PrivacySubscribing => SectionForm::privacy_subscribing(),
        ConfigCommand::PrivacyRecipient => SectionForm::privacy_recipient(),
        ConfigCommand::Digest => SectionForm::digest(),
        ConfigCommand::Nondigest { header, footer } => SectionForm::nondigest(&footer, &header),
        ConfigCommand::Bounce => SectionForm::bounce(),
    }
}

async fn run_config<T: Transport>(
    session: &AdminSession<T>,
    command: ConfigCommand,
    json: bool,
) -> Result<()> {
    let form = section_form(command);
    let page = session.submit_config(&form).await?;
    let section = form.section();

    if json {
        let out = serde_json::json!({
            "section": section.path(),
            "status": page.status,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("submitted {section} (HTTP {})", page.status);
    }
    Ok(())
}

/// Write a fresh config file. The password is never written.
fn init_config(global: &GlobalArgs, force: bool) -> Result<()> {
    let path = match &global.config {
        Some(path) => path.clone(),
        None => AppConfig::config_path()?,
    };
    if path.exists() && !force {
        bail!("{} already exists, pass --force to overwrite", path.display());
    }

    let mut config = AppConfig::default();
    apply_cli_overrides(&mut config, global);
    match &global.config {
        Some(path) => config.save_to(path)?,
        None => config.save()?,
    }

    println!("wrote {}", path.display());
    Ok(())
}

/// Build a session from the resolved config and log in.
async fn connect(global: &GlobalArgs) -> Result<AdminSession<HttpTransport>> {
    let config = load_config(global)?;
    let Some(password) = config.connection.admin_password.clone() else {
        bail!("no admin password: pass --password or set {ENV_ADMIN_PASSWORD}");
    };

    let session = AdminSession::from_config(&config)?;
    session.login(&password).await?;
    info!("Logged in to {}", config.connection.base_url);
    Ok(session)
}

async fn run(cli: Cli) -> Result<()> {
    let Cli { global, command } = cli;
    match command {
        Command::Init { force } => init_config(&global, force),
        Command::Members(command) => {
            let session = connect(&global).await?;
            run_members(&session, command, global.json).await
        }
        Command::Config(command) => {
            let session = connect(&global).await?;
            run_config(&session, command, global.json).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listwarden_admin::ConfigSection;

    #[test]
    fn test_cli_overrides_win_over_config() {
        let cli = Cli::try_parse_from([
            "listwarden",
            "--base-url",
            "https://lists.example.org/mailman/admin/team",
            "--password",
            "pw",
            "--insecure",
            "members",
            "list",
        ])
        .unwrap();

        let mut config = AppConfig::default();
        config.connection.base_url = "https://old.example.org/mailman/admin/x".to_string();
        apply_cli_overrides(&mut config, &cli.global);

        assert_eq!(
            config.connection.base_url,
            "https://lists.example.org/mailman/admin/team"
        );
        assert_eq!(config.connection.admin_password.as_deref(), Some("pw"));
        assert!(!config.connection.verify_tls);
    }

    #[test]
    fn test_absent_flags_keep_config() {
        let cli = Cli::try_parse_from(["listwarden", "members", "list"]).unwrap();
        let mut config = AppConfig::default();
        config.connection.base_url = "https://lists.example.org/mailman/admin/team".to_string();
        apply_cli_overrides(&mut config, &cli.global);

        assert_eq!(
            config.connection.base_url,
            "https://lists.example.org/mailman/admin/team"
        );
        assert!(config.connection.verify_tls);
        assert!(config.connection.admin_password.is_none());
    }

    #[test]
    fn test_init_writes_config_without_password() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        let cli = Cli::try_parse_from([
            "listwarden",
            "init",
            "--config",
            path.to_str().unwrap(),
            "--base-url",
            "https://lists.example.org/mailman/admin/team",
            "--password",
            "pw",
        ])
        .unwrap();

        init_config(&cli.global, false).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(
            loaded.connection.base_url,
            "https://lists.example.org/mailman/admin/team"
        );
        assert!(loaded.connection.admin_password.is_none());

        // A second run refuses to clobber the file.
        assert!(init_config(&cli.global, false).is_err());
        assert!(init_config(&cli.global, true).is_ok());
    }

    #[test]
    fn test_section_form_for_nondigest() {
        let form = section_form(ConfigCommand::Nondigest {
            header: "head".to_string(),
            footer: "foot".to_string(),
        });
        assert_eq!(form.section(), ConfigSection::NonDigest);
        assert_eq!(form.get("msg_header"), Some("head"));
        assert_eq!(form.get("msg_footer"), Some("foot"));
    }
}

//! Authenticated admin console session.

use crate::error::{AdminError, Result};
use crate::membership::{self, AddOptions, RemoveOptions, TOKEN_FIELD};
use crate::settings::SectionForm;
use listwarden_core::{AppConfig, MemberAddress, PageLayout, Token};
use listwarden_scraper::login::PASSWORD_FIELD;
use listwarden_scraper::{
    extract_token, parse_results, shows_login_form, verify_change, Document,
};
use listwarden_transport::{HttpTransport, Page, Transport};
use std::borrow::Cow;

/// Path of the roster page.
const MEMBERS_PATH: &str = "members";
/// Path of the mass subscribe page.
const ADD_PATH: &str = "members/add";
/// Path of the mass removal page.
const REMOVE_PATH: &str = "members/remove";
/// Path of the address change page.
const CHANGE_PATH: &str = "members/change";

/// Letter links are relative to the members page, so a bare `?letter=x`
/// query belongs to it rather than to the admin URL.
fn letter_path(href: &str) -> Cow<'_, str> {
    if href.starts_with('?') {
        Cow::Owned(format!("{MEMBERS_PATH}{href}"))
    } else {
        Cow::Borrowed(href)
    }
}

/// A session against one list's admin console.
///
/// Requests go out strictly one at a time. The transport holds the login
/// cookie, so every operation after [`AdminSession::login`] runs as the
/// list administrator.
pub struct AdminSession<T: Transport> {
    transport: T,
    layout: PageLayout,
}

impl AdminSession<HttpTransport> {
    /// Build an HTTP session from validated configuration.
    ///
    /// The session is not logged in yet.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::from_config(&config.connection)?;
        Ok(Self::new(transport, config.layout.clone()))
    }
}

impl<T: Transport> AdminSession<T> {
    /// Wrap a transport.
    pub fn new(transport: T, layout: PageLayout) -> Self {
        Self { transport, layout }
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The page layout used to read responses
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Log in with the list's admin password.
    ///
    /// Fails with [`AdminError::AuthenticationFailed`] when the console
    /// answers with its login form again.
    pub async fn login(&self, password: &str) -> Result<()> {
        tracing::info!("Logging in to admin console");
        let form = vec![(PASSWORD_FIELD.to_string(), password.to_string())];
        let page = self.transport.post("", &form).await?;

        if shows_login_form(&Document::parse(&page.body)) {
            tracing::warn!("Admin console rejected the password");
            return Err(AdminError::AuthenticationFailed);
        }

        tracing::debug!("Admin login accepted");
        Ok(())
    }

    /// Read the anti-forgery token from the form on `path`.
    pub async fn fetch_token(&self, path: &str) -> Result<Token> {
        let page = self.transport.get(path).await?;
        let token = extract_token(&Document::parse(&page.body), &self.layout)?;
        tracing::debug!("Fetched form token from {}", path);
        Ok(token)
    }

    /// Every member of the list, following letter sub-pages when the roster
    /// is paginated.
    pub async fn list_members(&self) -> Result<Vec<MemberAddress>> {
        let root = self.transport.get(MEMBERS_PATH).await?;
        let transport = &self.transport;

        let members =
            listwarden_scraper::list_members(&root.body, &self.layout, move |url| async move {
                Ok::<_, AdminError>(transport.get(&letter_path(&url)).await?.body)
            })
            .await?;

        tracing::info!("Listed {} members", members.len());
        Ok(members)
    }

    /// Subscribe `members` in one batch.
    ///
    /// Returns the addresses the console reports as subscribed; addresses it
    /// refused are logged and left out.
    pub async fn add_members(
        &self,
        members: &[MemberAddress],
        options: &AddOptions,
    ) -> Result<Vec<MemberAddress>> {
        tracing::info!("Subscribing {} addresses", members.len());
        let token = self.fetch_token(ADD_PATH).await?;
        let form = membership::add_form(&token, members, options);
        let page = self.transport.post(ADD_PATH, &form).await?;

        let applied = parse_results(&Document::parse(&page.body), &self.layout)?;
        tracing::info!("{} of {} addresses subscribed", applied.len(), members.len());
        Ok(applied)
    }

    /// Unsubscribe `members` in one batch.
    ///
    /// Returns the addresses the console reports as removed.
    pub async fn remove_members(
        &self,
        members: &[MemberAddress],
        options: &RemoveOptions,
    ) -> Result<Vec<MemberAddress>> {
        tracing::info!("Unsubscribing {} addresses", members.len());
        let token = self.fetch_token(REMOVE_PATH).await?;
        let form = membership::remove_form(&token, members, options);
        let page = self.transport.post(REMOVE_PATH, &form).await?;

        let removed = parse_results(&Document::parse(&page.body), &self.layout)?;
        tracing::info!("{} of {} addresses unsubscribed", removed.len(), members.len());
        Ok(removed)
    }

    /// Change one member's address.
    ///
    /// `Ok(false)` means the console answered but its confirmation does not
    /// name both addresses.
    pub async fn change_member(&self, from: &MemberAddress, to: &MemberAddress) -> Result<bool> {
        tracing::info!("Changing member {} to {}", from, to);
        let token = self.fetch_token(CHANGE_PATH).await?;
        let form = membership::change_form(&token, from, to);
        let page = self.transport.post(CHANGE_PATH, &form).await?;

        let changed = verify_change(
            &Document::parse(&page.body),
            &self.layout,
            from.as_str(),
            to.as_str(),
        )?;
        if !changed {
            tracing::warn!("Console did not confirm change of {}", from);
        }
        Ok(changed)
    }

    /// Submit a whole settings section and return the console's response.
    pub async fn submit_config(&self, form: &SectionForm) -> Result<Page> {
        let path = form.section().path();
        tracing::info!("Submitting settings section {}", path);
        let token = self.fetch_token(path).await?;

        let mut fields = Vec::with_capacity(form.fields().len() + 1);
        fields.push((TOKEN_FIELD.to_string(), token.as_str().to_string()));
        fields.extend(form.fields().iter().cloned());

        let page = self.transport.post(path, &fields).await?;
        tracing::debug!("Settings section {} answered with {}", path, page.status);
        Ok(page)
    }
}

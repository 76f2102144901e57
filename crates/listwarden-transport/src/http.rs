use crate::error::{Result, TransportError};
use crate::transport::{Method, Page, Transport};
use listwarden_core::ConnectionConfig;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// reqwest-backed transport with an in-memory cookie session
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for the list at `base_url` with default settings
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let config = ConnectionConfig {
            base_url: base_url.into(),
            ..ConnectionConfig::default()
        };
        Self::from_config(&config)
    }

    /// Create a transport from connection settings
    pub fn from_config(config: &ConnectionConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| TransportError::InvalidUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        if !config.verify_tls {
            tracing::warn!("TLS certificate verification disabled for {}", base_url);
        }

        let client = Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(!config.verify_tls)
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// The list's admin URL every relative path hangs off
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a console path or page href against the admin URL.
    ///
    /// An empty path is the admin URL itself. Anything else is joined per
    /// RFC 3986 against the admin URL taken as a directory, so `members/add`
    /// lands under it while a host-relative href keeps its own path.
    pub fn resolve(&self, path: &str) -> Result<Url> {
        let invalid = |url: String, e: url::ParseError| TransportError::InvalidUrl {
            url,
            reason: e.to_string(),
        };

        if path.is_empty() {
            return Url::parse(&self.base_url).map_err(|e| invalid(self.base_url.clone(), e));
        }

        let dir = format!("{}/", self.base_url);
        Url::parse(&dir)
            .and_then(|base| base.join(path))
            .map_err(|e| invalid(path.to_string(), e))
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn submit(&self, method: Method, path: &str, form: &[(String, String)]) -> Result<Page> {
        let url = self.resolve(path)?;
        tracing::debug!("{} {}", method, url);

        let request = match method {
            Method::Get if form.is_empty() => self.client.get(url.clone()),
            Method::Get => self.client.get(url.clone()).query(form),
            Method::Post => self.client.post(url.clone()).form(form),
        };

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());

        Ok(Page {
            status: status.as_u16(),
            body,
        })
    }
}

/*
[INPUT]:  HTTP configuration (environment, timeouts, API secret)
[OUTPUT]: Configured reqwest client plus the generic `call` dispatcher
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing request dispatch
*/

use crate::http::error::{MapleradError, Result};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Base URLs for the Maplerad API
const SANDBOX_BASE_URL: &str = "https://sandbox.api.maplerad.com";
const LIVE_BASE_URL: &str = "https://api.maplerad.com";

/// Every path is rooted under this version segment
const API_VERSION: &str = "v1";

/// Upstream deployment to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Live,
    Sandbox,
}

impl Environment {
    pub fn base_url(self) -> &'static str {
        match self {
            Environment::Live => LIVE_BASE_URL,
            Environment::Sandbox => SANDBOX_BASE_URL,
        }
    }
}

/// `"live"` selects production; any other value selects sandbox.
impl From<&str> for Environment {
    fn from(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("live") {
            Environment::Live
        } else {
            Environment::Sandbox
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// End-to-end budget for one request (connect + write + read)
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the Maplerad API.
///
/// One instance per session; cheap to clone and safe to share across tasks.
/// All resource services borrow this client and funnel through [`call`].
///
/// [`call`]: MapleradClient::call
#[derive(Debug, Clone)]
pub struct MapleradClient {
    http_client: Client,
    base_url: Url,
    environment: Environment,
}

impl MapleradClient {
    /// Create a new client with the default configuration
    pub fn new(secret: &str, environment: Environment) -> Result<Self> {
        Self::with_config(secret, environment, ClientConfig::default())
    }

    /// Create a new client with custom timeouts
    pub fn with_config(
        secret: &str,
        environment: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let base_url = Url::parse(environment.base_url())?;
        Ok(Self {
            http_client: build_http_client(secret, &config)?,
            base_url,
            environment,
        })
    }

    /// Create a client pointed at an arbitrary base URL.
    ///
    /// Used by the test suite to stand up mock servers; also usable against
    /// self-hosted API gateways.
    pub fn with_config_and_base_url(
        secret: &str,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        Ok(Self {
            http_client: build_http_client(secret, &config)?,
            base_url: Url::parse(base_url)?,
            environment: Environment::Sandbox,
        })
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `base + /v1 + path` and append query pairs in insertion order.
    pub(crate) fn resolve_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.base_url.join(&format!("{API_VERSION}{path}"))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Perform one request against the Maplerad API.
    ///
    /// `path` is relative to the versioned API root (`/customers`, not
    /// `/v1/customers`). The body, when present, is JSON-encoded before the
    /// request is dispatched so encode failures never hit the wire. A status
    /// of 400 or above becomes [`MapleradError::Api`] carrying the raw
    /// response body; a success body that does not parse into `T` becomes
    /// [`MapleradError::Decoding`].
    pub async fn call<T, B>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.resolve_url(path, query)?;

        let mut request = self.http_client.request(method.clone(), url.clone());
        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(MapleradError::Encoding)?;
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(payload);
        }

        tracing::debug!(%method, %url, "maplerad api request");

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if status.as_u16() >= 400 {
            return Err(MapleradError::api_error(status, text));
        }

        serde_json::from_str(&text).map_err(MapleradError::Decoding)
    }
}

fn build_http_client(secret: &str, config: &ClientConfig) -> Result<Client> {
    if secret.trim().is_empty() {
        return Err(MapleradError::Config(
            "please provide your secret key".to_string(),
        ));
    }

    // Installed once at build time, so every request carries the bearer
    // token without per-call header mutation.
    let mut auth = HeaderValue::from_str(&format!("Bearer {secret}"))
        .map_err(|_| MapleradError::Config("secret contains invalid header bytes".to_string()))?;
    auth.set_sensitive(true);

    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, auth);

    Client::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|e| MapleradError::Config(format!("failed to build HTTP client: {e}")))
}

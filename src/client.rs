//! Authenticated HTTP client for the Ecraspay gateway.

use std::fmt;
use std::time::Duration;

use bon::bon;
use http::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
use serde_json::Value;
use tracing::debug;

use crate::config::{DEFAULT_TIMEOUT, Environment};
use crate::errors::{EcraspayError, Result};

/// A parsed JSON response body. The gateway does not commit to a response
/// schema, so bodies are handed back verbatim as a key/value map.
pub type JsonObject = serde_json::Map<String, Value>;

/// Client for the Ecraspay REST API.
///
/// Wraps a reusable [`reqwest::Client`] with a bearer API key, a resolved
/// base URL and a bounded request timeout. Construction resolves everything
/// once; the client is immutable afterwards and cheap to clone, so one
/// instance can be shared across tasks.
#[derive(Clone)]
pub struct EcraspayClient {
    auth_header: HeaderValue,
    environment: Environment,
    base_url: String,
    client: reqwest::Client,
}

#[bon]
impl EcraspayClient {
    /// Build a new client.
    ///
    /// `api_key` falls back to the `ECRASPAY_API_KEY` environment variable
    /// and `environment` to `ECRASPAY_ENV`, so deployments can keep
    /// credentials out of code. `base_url` overrides the environment's
    /// default host and must be a valid URL. `client` injects a custom
    /// transport (useful for tests or per-call deadlines); an injected
    /// client supersedes `timeout`, which only applies to the client built
    /// here.
    #[builder(on(String, into))]
    pub fn new(
        api_key: Option<String>,
        environment: Option<Environment>,
        base_url: Option<String>,
        timeout: Option<Duration>,
        client: Option<reqwest::Client>,
    ) -> Result<Self> {
        use std::env;

        let api_key = api_key
            .or_else(|| env::var("ECRASPAY_API_KEY").ok())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                EcraspayError::config(
                    "Missing API key. Pass api_key to the builder or set ECRASPAY_API_KEY.",
                )
            })?;

        // Configuration mistakes surface here, not as transport errors on
        // the first call.
        let mut auth_header = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| EcraspayError::config("API key is not a valid header value"))?;
        auth_header.set_sensitive(true);

        let environment = environment.unwrap_or_else(|| {
            env::var("ECRASPAY_ENV")
                .map(|name| Environment::from_name(&name))
                .unwrap_or_default()
        });

        let base_url = base_url.unwrap_or_else(|| environment.base_url().to_string());
        reqwest::Url::parse(&base_url)
            .map_err(|e| EcraspayError::config(format!("Invalid base URL '{base_url}': {e}")))?;

        let client = match client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .map_err(|e| EcraspayError::config(format!("Failed to build HTTP client: {e}")))?,
        };

        Ok(Self {
            auth_header,
            environment,
            base_url,
            client,
        })
    }
}

impl EcraspayClient {
    /// The environment this client talks to.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The resolved base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn join_url(base: &str, path: &str) -> String {
        let base = base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Issue an authenticated request and parse the JSON response.
    ///
    /// `payload` is serialized as the request body when present; `None`
    /// sends no body at all. Every request carries the bearer Authorization
    /// and JSON Content-Type headers. A status >= 400 becomes
    /// [`EcraspayError::Api`] carrying the raw body text; a success status
    /// whose body is not a JSON object becomes
    /// [`EcraspayError::ResponseParse`].
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<&Value>,
    ) -> Result<JsonObject> {
        let url = Self::join_url(&self.base_url, path);
        debug!(%method, %url, has_body = payload.is_some(), "dispatching gateway request");

        let mut builder = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, self.auth_header.clone())
            .header(CONTENT_TYPE, "application/json");

        if let Some(payload) = payload {
            let body = serde_json::to_vec(payload).map_err(EcraspayError::Serialization)?;
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let text = response.text().await?;

        if status >= 400 {
            debug!(status, "gateway rejected request");
            return Err(EcraspayError::Api { status, body: text });
        }

        serde_json::from_str::<JsonObject>(&text).map_err(EcraspayError::ResponseParse)
    }
}

impl fmt::Debug for EcraspayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the API key.
        f.debug_struct("EcraspayClient")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

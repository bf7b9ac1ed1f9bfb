use crate::core::config::ConfigError;
use crate::core::errors::CmcError;
use crate::core::kernel::query::{encode_url, QueryParams};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use tracing::{instrument, trace};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-CMC_PRO_API_KEY";

/// REST client trait the endpoint layer programs against.
///
/// One implementation performs real HTTP; tests substitute recording stubs.
#[async_trait]
pub trait RestClient: Send + Sync {
    /// Perform one GET request against `endpoint` and decode the response
    /// body into `T`.
    ///
    /// Both 2xx and non-2xx bodies flow through the same decode step: the
    /// API returns its error reports as structured JSON inside the regular
    /// envelope, so an HTTP error status alone is not a failure here.
    /// Returns `Ok(None)` when the body is empty or whitespace, regardless
    /// of status.
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<Option<T>, CmcError>;
}

/// Configuration for the REST client
#[derive(Clone, Debug)]
pub struct RestClientConfig {
    /// Base URL for the API, ending with a path separator
    pub base_url: String,
    /// Service name for logging and tracing
    pub service_name: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
    /// User agent string to include in requests
    pub user_agent: String,
}

impl RestClientConfig {
    pub fn new(base_url: String, service_name: String) -> Self {
        Self {
            base_url,
            service_name,
            timeout_seconds: 30,
            user_agent: "coinmarketcap-rs/0.1".to_string(),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    /// Set the user agent string
    pub fn with_user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Builder for creating REST client instances
pub struct RestClientBuilder {
    config: RestClientConfig,
    api_key: Option<Secret<String>>,
}

impl RestClientBuilder {
    pub fn new(config: RestClientConfig) -> Self {
        Self {
            config,
            api_key: None,
        }
    }

    /// Set the API key sent with every request
    pub fn with_api_key(mut self, api_key: Secret<String>) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Build the REST client
    pub fn build(self) -> Result<ReqwestRest, CmcError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .user_agent(&self.config.user_agent)
            .build()
            .map_err(|e| {
                CmcError::Config(ConfigError::InvalidConfiguration(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        Ok(ReqwestRest {
            client,
            config: self.config,
            api_key: self.api_key.unwrap_or_else(|| Secret::new(String::new())),
        })
    }
}

/// Response body text tagged with the HTTP outcome that produced it.
///
/// A transport failure with no readable body never becomes a `RawBody`; the
/// original error propagates instead. The two readable cases deliberately
/// share the decode path.
#[derive(Debug)]
enum RawBody {
    /// Body of a 2xx response
    Success(String),
    /// Body recovered from a non-2xx response
    ErrorBody(String),
}

impl RawBody {
    fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::ErrorBody(text) => text,
        }
    }
}

/// Decode a captured body into the caller's shape.
///
/// Blank bodies decode to `None` for every target type; anything else must
/// parse as JSON or the decode fault surfaces to the caller.
pub(crate) fn decode_body<T: DeserializeOwned>(body: &str) -> Result<Option<T>, CmcError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(body).map(Some).map_err(CmcError::from)
}

/// Implementation of `RestClient` using reqwest
#[derive(Clone)]
pub struct ReqwestRest {
    client: Client,
    config: RestClientConfig,
    api_key: Secret<String>,
}

impl std::fmt::Debug for ReqwestRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestRest")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ReqwestRest {
    /// Fetch one URL and capture whatever body the transport exposes.
    ///
    /// Three outcomes: a 2xx body, a non-2xx body, or the transport error
    /// itself when no readable response exists (connection refused, DNS
    /// failure, timeout, unreadable stream).
    #[instrument(skip(self, params), fields(service = %self.config.service_name, endpoint = %endpoint))]
    async fn fetch(&self, endpoint: &str, params: &QueryParams) -> Result<RawBody, CmcError> {
        let url = encode_url(&self.config.base_url, endpoint, params);

        let response = self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.api_key.expose_secret().as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        // An unreadable body re-raises the transport error even though the
        // status line already arrived.
        let text = response.text().await?;

        trace!(status = %status, "response body: {}", text);

        if status.is_success() {
            Ok(RawBody::Success(text))
        } else {
            Ok(RawBody::ErrorBody(text))
        }
    }
}

#[async_trait]
impl RestClient for ReqwestRest {
    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<Option<T>, CmcError> {
        let body = self.fetch(endpoint, params).await?;
        decode_body(body.text())
    }
}

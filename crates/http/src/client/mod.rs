//! Question-answering HTTP client

pub mod error;
pub mod query;

use error::ClientError;
use kbchat_core::{ChatConfig, DEFAULT_TIMEOUT};
use reqwest::{Client, ClientBuilder, StatusCode};
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_USER_AGENT: &str = "kbchat-client/0.1.0";

/// Client for the question-answering endpoint
#[derive(Clone, Debug)]
pub struct QaClient {
    client: Client,
    endpoint: String,
    timeout: Duration,
}

impl QaClient {
    /// Create a new client with default configuration
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().endpoint(endpoint).build()
    }

    /// Create a client from a validated [`ChatConfig`]
    pub fn from_config(config: &ChatConfig) -> Result<Self, ClientError> {
        config
            .validate()
            .map_err(|e| ClientError::Configuration(e.to_string()))?;

        Self::builder()
            .endpoint(config.endpoint.clone())
            .timeout(config.timeout)
            .build()
    }

    /// Create a new client builder
    pub fn builder() -> QaClientBuilder {
        QaClientBuilder::default()
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute a request and return the body of a successful response
    pub async fn execute(&self, request: reqwest::RequestBuilder) -> Result<String, ClientError> {
        let (status, body) = self.fetch(request).await?;

        if status.is_success() {
            Ok(body)
        } else {
            let message = if body.is_empty() {
                status.to_string()
            } else {
                body
            };
            Err(ClientError::from_status(status, message))
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn fetch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(StatusCode, String), ClientError> {
        read_response(request).await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout(self.timeout)
            } else {
                ClientError::Request(e)
            }
        })
    }

    // Browser fetch has no timeout of its own, so race it against a timer.
    // The browser also owns the User-Agent header; the builder leaves it
    // unset here so the GET stays a CORS simple request with no preflight.
    #[cfg(target_arch = "wasm32")]
    async fn fetch(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(StatusCode, String), ClientError> {
        use gloo_timers::future::TimeoutFuture;

        let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        let response = async { read_response(request).await.map_err(ClientError::from) };
        race_deadline(response, TimeoutFuture::new(millis), self.timeout).await
    }
}

/// Resolve `work`, or fail with [`ClientError::Timeout`] if `deadline` fires first
#[cfg(any(target_arch = "wasm32", test))]
async fn race_deadline<T>(
    work: impl Future<Output = Result<T, ClientError>>,
    deadline: impl Future<Output = ()>,
    timeout: Duration,
) -> Result<T, ClientError> {
    use futures::future::{Either, select};
    use std::pin::pin;

    match select(pin!(work), pin!(deadline)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ClientError::Timeout(timeout)),
    }
}

async fn read_response(
    request: reqwest::RequestBuilder,
) -> Result<(StatusCode, String), reqwest::Error> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

/// Builder for QaClient
#[derive(Debug, Default)]
pub struct QaClientBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl QaClientBuilder {
    /// Set the endpoint URL. It is used as given, including any trailing slash.
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<QaClient, ClientError> {
        let endpoint = self
            .endpoint
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ClientError::Configuration("endpoint is required".into()))?;
        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);

        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            client_builder = client_builder
                .timeout(timeout)
                .user_agent(DEFAULT_USER_AGENT);
        }

        let client = client_builder.build()?;

        Ok(QaClient {
            client,
            endpoint,
            timeout,
        })
    }
}

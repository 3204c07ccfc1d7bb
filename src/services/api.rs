//! Event manager API client
//!
//! Thin transport over the remote API: JSON bodies, `{ "data": ... }` success
//! envelopes, `{ "message", "errorSources" }` error envelopes and a cookie
//! session shared by every clone of the client.

use std::time::{Duration, Instant};

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::config::ApiConfig;
use crate::utils::errors::{ApiError, EventManagerError, Result};
use crate::utils::helpers::generate_request_id;
use crate::utils::logging::{log_api_error, log_api_request};

/// Header carrying the per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Success envelope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataEnvelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    pub data: T,
}

/// Error envelope
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "errorSources", default)]
    pub error_sources: Vec<ErrorSource>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorSource {
    #[serde(default)]
    pub path: String,
    pub message: String,
}

impl ErrorEnvelope {
    /// The message shown to the user: first error source, else the top-level message
    pub fn user_message(&self) -> Option<String> {
        self.error_sources
            .first()
            .map(|source| source.message.clone())
            .or_else(|| self.message.clone())
    }
}

/// HTTP client for the event manager API
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.as_str())
            .cookie_store(true)
            .build()
            .map_err(EventManagerError::Http)?;

        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL of an API path such as `events/all-events`
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}/{}", base, path.trim_start_matches('/')))?)
    }

    /// GET a `{ data }` payload
    pub async fn get_data<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint(path)?;
        let request = self.client.get(url).query(query);
        let response = self.execute(Method::GET, path, request).await?;
        Self::decode_data(response).await
    }

    /// Send a JSON body and ignore the response payload
    pub async fn send_json<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> Result<()> {
        let url = self.endpoint(path)?;
        let request = self.client.request(method.clone(), url).json(body);
        self.execute(method, path, request).await?;
        Ok(())
    }

    /// Send a request without a body and ignore the response payload
    pub async fn send_empty(&self, method: Method, path: &str) -> Result<()> {
        let url = self.endpoint(path)?;
        let request = self.client.request(method.clone(), url);
        self.execute(method, path, request).await?;
        Ok(())
    }

    /// POST without a body, returning the raw response for custom decoding
    pub async fn post_raw(&self, path: &str) -> Result<Response> {
        let url = self.endpoint(path)?;
        let request = self.client.post(url);
        self.execute(Method::POST, path, request).await
    }

    async fn execute(&self, method: Method, path: &str, request: RequestBuilder) -> Result<Response> {
        let request_id = generate_request_id();
        debug!(method = %method, endpoint = path, request_id = %request_id, "Sending API request");

        let started = Instant::now();
        let result = request.header(REQUEST_ID_HEADER, request_id.as_str()).send().await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let response = result.map_err(|e| {
            log_api_request(method.as_str(), path, elapsed_ms, false);
            log_api_error(path, &e.to_string(), Some(&request_id));
            if e.is_timeout() {
                EventManagerError::Api(ApiError::Timeout)
            } else if e.is_connect() {
                EventManagerError::Api(ApiError::ServiceUnavailable)
            } else {
                EventManagerError::Http(e)
            }
        })?;

        let status = response.status();
        log_api_request(method.as_str(), path, elapsed_ms, status.is_success());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = Self::error_message(status, &body);
        log_api_error(path, &message, Some(&request_id));

        Err(EventManagerError::Api(ApiError::RequestFailed {
            status: status.as_u16(),
            message,
        }))
    }

    fn error_message(status: StatusCode, body: &str) -> String {
        serde_json::from_str::<ErrorEnvelope>(body)
            .ok()
            .and_then(|envelope| envelope.user_message())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            })
    }

    async fn decode_data<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.text().await.map_err(|e| ApiError::InvalidResponse(e.to_string()))?;
        let envelope: DataEnvelope<T> = serde_json::from_str(&body)?;
        Ok(envelope.data)
    }
}

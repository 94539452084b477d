//! HTTP transport for the SafeVoice backend API
//!
//! One configured client bound to a fixed base origin. Every outgoing
//! request reads the injected session and, if a token is present,
//! attaches it as a bearer credential. Exactly one attempt per call; no
//! retry, no backoff.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use shared::ErrorResponse;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;

/// HTTP client for making network requests to the SafeVoice backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    session: SessionStore,
}

impl HttpClient {
    /// Create a new HTTP client from configuration and a session
    /// context
    pub fn new(config: &ClientConfig, session: SessionStore) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The injected session context
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build authorization header value from the current session
    /// snapshot
    fn auth_header(&self) -> Option<String> {
        self.session.token().map(|t| format!("Bearer {}", t))
    }

    /// Dispatch a prepared request, racing it against cancellation
    async fn execute(
        &self,
        mut request: reqwest::RequestBuilder,
        cancel: &CancellationToken,
    ) -> ClientResult<reqwest::Response> {
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        tokio::select! {
            _ = cancel.cancelled() => Err(ClientError::Cancelled),
            response = request.send() => Ok(response?),
        }
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> ClientResult<T> {
        debug!(path, "GET");
        let response = self.execute(self.client.get(self.url(path)), cancel).await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> ClientResult<T> {
        debug!(path, "POST");
        let request = self.client.post(self.url(path)).json(body);
        let response = self.execute(request, cancel).await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body, discarding the response body
    pub async fn post_unit<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> ClientResult<()> {
        debug!(path, "POST");
        let request = self.client.post(self.url(path)).json(body);
        let response = self.execute(request, cancel).await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Make a PUT request with JSON body, discarding the response body
    pub async fn put_unit<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        cancel: &CancellationToken,
    ) -> ClientResult<()> {
        debug!(path, "PUT");
        let request = self.client.put(self.url(path)).json(body);
        let response = self.execute(request, cancel).await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Make a POST request with a multipart form
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        cancel: &CancellationToken,
    ) -> ClientResult<T> {
        debug!(path, "POST multipart");
        let request = self.client.post(self.url(path)).multipart(form);
        let response = self.execute(request, cancel).await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with a multipart form, discarding the
    /// response body
    pub async fn post_multipart_unit(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
        cancel: &CancellationToken,
    ) -> ClientResult<()> {
        debug!(path, "POST multipart");
        let request = self.client.post(self.url(path)).multipart(form);
        let response = self.execute(request, cancel).await?;
        Self::check_status(response).await.map(|_| ())
    }

    /// Surface a non-2xx response as a structured error, keeping the
    /// backend message when its error envelope carries one
    async fn check_status(response: reqwest::Response) -> ClientResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorResponse>(&text)
            .ok()
            .and_then(|e| e.message);
        warn!(status = status.as_u16(), "backend rejected request");

        Err(ClientError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Handle the HTTP response, decoding the JSON body on success
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let response = Self::check_status(response).await?;
        response.json().await.map_err(Into::into)
    }
}

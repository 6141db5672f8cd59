//! HTTP client for the chat backend.

use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::config::BackendConfig;
use crate::error::{Result, RetrievalError};
use crate::types::{ChatList, PromptRequest, PromptResponse};

/// HTTP client for the backend.
///
/// # Example
///
/// ```rust,no_run
/// use chat_shell::Client;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("http://localhost:8000/health")?;
/// let chats = client.fetch_chat_list().await?;
/// println!("{} chats", chats.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    endpoint: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the given chat list endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Full URL of the chat list resource (e.g., "http://localhost:8000/health")
    pub fn new(endpoint: impl AsRef<str>) -> Result<Self> {
        let endpoint = Url::parse(endpoint.as_ref())?;
        Ok(Self {
            endpoint,
            http: reqwest::Client::new(),
        })
    }

    /// Create a client with a custom reqwest client.
    pub fn with_client(endpoint: impl AsRef<str>, http: reqwest::Client) -> Result<Self> {
        let endpoint = Url::parse(endpoint.as_ref())?;
        Ok(Self { endpoint, http })
    }

    /// Build a client from backend configuration.
    ///
    /// A transport timeout is only installed when `timeout_secs` is set.
    pub fn from_config(backend: &BackendConfig) -> Result<Self> {
        let endpoint = backend.endpoint()?;
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = backend.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            endpoint,
            http: builder.build()?,
        })
    }

    /// The chat list endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch the chat list with a single `GET` to the endpoint.
    ///
    /// No body, query string or extra headers are sent. The list comes back
    /// in server order; an empty array is a valid, empty result.
    pub async fn fetch_chat_list(&self) -> Result<ChatList> {
        debug!(
            name: "chat_list.fetch.started",
            endpoint = %self.endpoint,
            "Fetching chat list"
        );

        let result = self.get_chat_list().await;

        match &result {
            Ok(list) => debug!(
                name: "chat_list.fetch.completed",
                count = list.len(),
                "Chat list fetched"
            ),
            Err(e) => warn!(
                name: "chat_list.fetch.failed",
                endpoint = %self.endpoint,
                error = %e,
                "Chat list fetch failed"
            ),
        }

        result
    }

    /// Send a prompt to the backend's `/prompt` route.
    ///
    /// The route is resolved against the origin of the chat list endpoint.
    pub async fn prompt(&self, message: impl Into<String>) -> Result<PromptResponse> {
        let req = PromptRequest {
            message: message.into(),
        };
        let response = self.http.post(self.url("/prompt")).json(&req).send().await?;
        Self::handle_response(response).await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal helpers
    // ─────────────────────────────────────────────────────────────────────────

    async fn get_chat_list(&self) -> Result<ChatList> {
        let response = self.http.get(self.endpoint.clone()).send().await?;
        Self::handle_response(response).await
    }

    fn url(&self, path: &str) -> Url {
        self.endpoint
            .join(path)
            .unwrap_or_else(|_| self.endpoint.clone())
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let body = response.bytes().await?;
            Ok(serde_json::from_slice(&body)?)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            Err(RetrievalError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

//! HTTP client for the ask endpoint

use chatbox_core::prelude::*;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::protocol::{ConsultReply, ConsultRequest, DemoReply, DemoRequest};

/// Endpoint used when no configuration overrides it
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5001/api/ask";

/// Backend the app sends conversation turns to.
///
/// The TUI uses [`HttpBackend`]; tests script replies instead.
#[trait_variant::make(AskBackend: Send)]
pub trait LocalAskBackend {
    /// Send a two-party consultation turn
    async fn consult(&self, request: ConsultRequest) -> Result<ConsultReply>;

    /// Send a demo chat turn
    async fn demo(&self, request: DemoRequest) -> Result<DemoReply>;
}

/// POSTs JSON requests to a single endpoint.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    endpoint: Url,
}

impl HttpBackend {
    /// Create a client for `endpoint`, which must be an absolute http(s) URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::config(format!("invalid backend endpoint {endpoint:?}: {e}")))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "backend endpoint must use http or https, got {}",
                endpoint.scheme()
            )));
        }

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    async fn post_json<T: Serialize + Sync>(&self, body: &T) -> Result<Value> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| Error::http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = server_error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            return Err(Error::http_status(status.as_u16(), message));
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::http(e.to_string()))?;
        debug!("API response: {text}");

        serde_json::from_str(&text)
            .map_err(|e| Error::protocol(format!("reply is not valid JSON: {e}")))
    }
}

impl AskBackend for HttpBackend {
    async fn consult(&self, request: ConsultRequest) -> Result<ConsultReply> {
        let value = self.post_json(&request).await?;
        ConsultReply::from_value(&value)
    }

    async fn demo(&self, request: DemoRequest) -> Result<DemoReply> {
        let value = self.post_json(&request).await?;
        DemoReply::from_value(&value)
    }
}

/// Pull a human-readable message out of an error body.
///
/// The server answers failures with `{"error": "..."}`; anything else is
/// passed through as trimmed text.
fn server_error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("error") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
            None => Some(body.to_string()),
        },
        _ => Some(body.to_string()),
    }
}

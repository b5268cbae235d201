use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::client::models::api::{ApiError, ConvertRequest, ConvertResponse};
use crate::config::ClientConfig;

pub const REQUEST_FAILED_MSG: &str = "Request failed. Check your API key and settings.";
pub const NETWORK_ERROR_MSG: &str =
    "Network error. Ensure the server is running and your model endpoint is reachable.";

/// Failure modes of a conversion call. `Server` covers failure-class
/// statuses together with whatever structured detail the body carried;
/// `Network` covers everything below that (connect, DNS, timeout,
/// malformed body).
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("server rejected the request ({status})")]
    Server {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("transport failure: {0}")]
    Network(String),
}

impl ConvertError {
    /// The string shown in the output area for this failure. Server detail
    /// is surfaced verbatim when present; everything else maps to a fixed
    /// fallback message.
    pub fn user_message(&self) -> String {
        match self {
            ConvertError::Server {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ConvertError::Server { detail: None, .. } => REQUEST_FAILED_MSG.to_string(),
            ConvertError::Network(_) => NETWORK_ERROR_MSG.to_string(),
        }
    }
}

/// HTTP client for the conversion endpoint.
pub struct ConvertService {
    http: reqwest::Client,
    base_url: String,
}

impl ConvertService {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.server_url.trim_end_matches('/').to_string(),
        })
    }

    /// Send `prompt` to the conversion endpoint and return the generated
    /// system prompt. Never retries; every failure is mapped into
    /// [`ConvertError`] for the caller to surface.
    pub async fn convert(&self, prompt: &str) -> Result<String, ConvertError> {
        let url = format!("{}/api/convert", self.base_url);
        let request = ConvertRequest {
            prompt: prompt.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ConvertError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ConvertError::Network(e.to_string()))?;

        interpret_response(status, &body)
    }
}

/// Classify a response by its status; the expected body shape follows from
/// the class, never the other way around.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<String, ConvertError> {
    if status.is_success() {
        let parsed: ConvertResponse = serde_json::from_str(body)
            .map_err(|e| ConvertError::Network(format!("malformed response body: {}", e)))?;
        Ok(parsed.system_prompt)
    } else {
        let detail = serde_json::from_str::<ApiError>(body)
            .ok()
            .and_then(|e| e.detail)
            .filter(|d| !d.is_empty());
        Err(ConvertError::Server { status, detail })
    }
}

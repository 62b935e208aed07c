//! HTTP client for the analysis service.
//!
//! The client never hands an error to the normalizer. Transport failures,
//! non-2xx statuses and unreadable bodies are logged and turned into an
//! [`AnalysisPayload`] carrying an upstream error, which the normalizer
//! renders as the "Analysis Error" section.

use std::time::Duration;

use bugscope_report::types::Mode;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::payload::AnalysisPayload;

/// Default service address (the analysis backend's dev port).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Body of an analyze/debug call.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub code: String,
    pub language: String,
    pub mode: Mode,
}

/// Why a call did not produce a usable payload.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("analysis service answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode analysis response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Payload shown to the user for this failure.
    ///
    /// A non-2xx answer whose body has an `error` field keeps the service's
    /// own message.
    pub fn into_payload(self) -> AnalysisPayload {
        if let ClientError::Status { body, .. } = &self
            && let Ok(value) = serde_json::from_str::<Value>(body)
        {
            let payload = AnalysisPayload::from_value(&value);
            if let Some(err) = payload.error {
                return AnalysisPayload {
                    model: payload.model,
                    ..AnalysisPayload::upstream_error(err.message())
                };
            }
        }
        AnalysisPayload::upstream_error(self.to_string())
    }
}

/// Thin wrapper over `reqwest::Client` bound to one service base URL.
#[derive(Debug, Clone)]
pub struct AnalyzeClient {
    client: Client,
    base_url: String,
}

impl AnalyzeClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ClientError::Transport {
                url: base_url.clone(),
                source,
            })?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Route for a mode: `/api/analyze` or `/api/debug`.
    pub fn url_for(&self, mode: Mode) -> String {
        let route = match mode {
            Mode::Analysis => "analyze",
            Mode::Debug => "debug",
        };
        format!("{}/api/{}", self.base_url, route)
    }

    /// Run one analysis. Always yields a payload.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> AnalysisPayload {
        match self.try_analyze(request).await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "analysis request failed");
                err.into_payload()
            }
        }
    }

    /// Same call, with the failure kept as a typed error.
    pub async fn try_analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisPayload, ClientError> {
        let url = self.url_for(request.mode);
        info!(%url, language = %request.language, bytes = request.code.len(), "sending code for analysis");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;
        debug!(status = status.as_u16(), bytes = body.len(), "analysis response received");

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        AnalysisPayload::from_json(&body).map_err(|err| ClientError::Decode(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::PayloadError;

    #[test]
    fn routes_follow_mode() {
        let client = AnalyzeClient::new("http://svc:3001/", DEFAULT_TIMEOUT).expect("client");
        assert_eq!(client.base_url(), "http://svc:3001");
        assert_eq!(client.url_for(Mode::Analysis), "http://svc:3001/api/analyze");
        assert_eq!(client.url_for(Mode::Debug), "http://svc:3001/api/debug");
    }

    #[test]
    fn status_error_keeps_service_message() {
        let err = ClientError::Status {
            status: 400,
            body: r#"{"success": false, "error": "Missing required fields: code and language"}"#
                .into(),
        };
        let payload = err.into_payload();
        assert_eq!(
            payload.error,
            Some(PayloadError::Upstream(
                "Missing required fields: code and language".into()
            ))
        );
    }

    #[test]
    fn status_error_without_json_uses_display() {
        let err = ClientError::Status {
            status: 502,
            body: "Bad Gateway".into(),
        };
        let payload = err.into_payload();
        assert_eq!(
            payload.error.as_ref().map(PayloadError::message),
            Some("analysis service answered 502: Bad Gateway")
        );
    }

    #[test]
    fn request_serializes_lowercase_mode() {
        let req = AnalyzeRequest {
            code: "print(1)".into(),
            language: "python".into(),
            mode: Mode::Debug,
        };
        let json = serde_json::to_value(&req).expect("serialize");
        assert_eq!(json["mode"], "debug");
        assert_eq!(json["code"], "print(1)");
    }
}

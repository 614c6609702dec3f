//
//  zenhub-cli
//  api/pipeline/classify.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::warn;

use super::{Next, PipelineRequest, PipelineStep, RawResponse};
use crate::api::common::{ApiError, Result};

/// Converts non-2xx responses into [`ApiError::RequestFailed`].
///
/// Runs after the transport returns. Success envelopes pass through untouched;
/// anything else is turned into an error before a caller can try to
/// deserialize it.
#[derive(Debug, Clone, Default)]
pub struct ErrorClassificationStep;

impl ErrorClassificationStep {
    /// Creates the step.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PipelineStep for ErrorClassificationStep {
    fn name(&self) -> &'static str {
        "error-classification"
    }

    async fn process(&self, request: PipelineRequest, next: Next<'_>) -> Result<RawResponse> {
        let method = request.method.clone();
        let path = request.url.path().to_string();

        let response = next.run(request).await?;
        if response.status.is_success() {
            return Ok(response);
        }

        let message = error_message(response.status, &response.text());
        warn!(
            %method,
            path = %path,
            status = response.status(),
            message = %message,
            "Request failed"
        );

        Err(ApiError::RequestFailed {
            status: response.status(),
            message,
        })
    }
}

/// Extracts a human readable message from an error response body.
///
/// Recognized shapes, in order:
///
/// - `{"message": "..."}`
/// - `{"error": {"message": "..."}}`
/// - `{"errors": [{"message": "..."}]}`
///
/// Any other non-empty body is returned verbatim; an empty body yields the
/// status's canonical reason phrase.
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }

        if let Some(message) = json
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }

        if let Some(message) = json
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|arr| arr.first())
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
    }

    let body = body.trim();
    if body.is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown status")
            .to_string()
    } else {
        body.to_string()
    }
}

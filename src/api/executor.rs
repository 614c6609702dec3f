//
//  zenhub-cli
//  api/executor.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request Executor
//!
//! The executor is the only place requests are built and dispatched. Every
//! scoped client (repository, issue, epic, release) holds one and calls either
//! [`RequestExecutor::execute_raw`] for status-only operations or
//! [`RequestExecutor::execute_typed`] when the body is deserialized.
//!
//! # Cancellation
//!
//! Both forms take a [`CancellationToken`]. A token that is already cancelled
//! fails the call before anything is sent; a token cancelled while the request
//! is in flight aborts the exchange (including the body read) and yields
//! [`ApiError::Cancelled`].

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};
use url::Url;

use super::client::ClientOptions;
use super::common::{ApiError, Response, Result};
use super::pipeline::{HttpPipeline, PipelineRequest, RawResponse};

/// Builds, sends and decodes requests through a shared pipeline.
///
/// Cloning is cheap: the pipeline and options sit behind `Arc`s and are
/// shared by every clone.
#[derive(Debug, Clone)]
pub struct RequestExecutor {
    pipeline: Arc<HttpPipeline>,
    options: Arc<ClientOptions>,
}

impl RequestExecutor {
    /// Creates an executor over a pipeline and options.
    pub fn new(pipeline: Arc<HttpPipeline>, options: Arc<ClientOptions>) -> Self {
        Self { pipeline, options }
    }

    /// The shared pipeline.
    pub fn pipeline(&self) -> &Arc<HttpPipeline> {
        &self.pipeline
    }

    /// The shared options.
    pub fn options(&self) -> &Arc<ClientOptions> {
        &self.options
    }

    /// Builds an absolute URL from path segments under the configured endpoint.
    ///
    /// Each segment is percent-encoded, so identifiers containing `/` or `?`
    /// cannot change the shape of the path.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use std::sync::Arc;
    /// # use zenhub_cli::api::client::ClientOptions;
    /// # use zenhub_cli::api::executor::RequestExecutor;
    /// # use zenhub_cli::api::pipeline::HttpPipeline;
    /// # use zenhub_cli::auth::Credential;
    /// let options = ClientOptions::default();
    /// let pipeline = HttpPipeline::standard(&Credential::new("t").unwrap(), &options).unwrap();
    /// let executor = RequestExecutor::new(Arc::new(pipeline), Arc::new(options));
    ///
    /// let url = executor.url(&["p1", "repositories", "42", "epics"]).unwrap();
    /// assert_eq!(url.as_str(), "https://api.zenhub.io/p1/repositories/42/epics");
    /// ```
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.options.endpoint()?;
        let base = url.to_string();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{base} cannot be a base URL")))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and returns the raw envelope.
    ///
    /// Non-2xx responses never reach the caller as envelopes; they surface as
    /// [`ApiError::RequestFailed`] from the classification step.
    #[instrument(skip_all, fields(method = %method, path = %url.path()))]
    pub async fn execute_raw(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<RawResponse> {
        if cancel.is_cancelled() {
            debug!("Cancelled before send");
            return Err(ApiError::Cancelled);
        }

        let mut request = PipelineRequest::new(method, url);
        request.body = body.map(String::into_bytes);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Cancelled in flight");
                Err(ApiError::Cancelled)
            }
            result = self.pipeline.send(request) => result,
        }
    }

    /// Sends a request and deserializes a successful body into `T`.
    ///
    /// An empty (or whitespace-only) success body produces `value: None`.
    ///
    /// # Errors
    ///
    /// Everything [`execute_raw`](Self::execute_raw) can return, plus
    /// [`ApiError::DeserializationFailed`] when the body does not match `T`.
    pub async fn execute_typed<T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: Option<String>,
        cancel: &CancellationToken,
    ) -> Result<Response<T>> {
        let response = self.execute_raw(method, url, body, cancel).await?;
        decode(response)
    }
}

/// Decodes a success envelope into a typed response.
pub fn decode<T: DeserializeOwned>(response: RawResponse) -> Result<Response<T>> {
    if response.is_empty() {
        return Ok(Response::new(None, response.status));
    }

    let value = serde_json::from_slice(&response.content)
        .map_err(|e| ApiError::DeserializationFailed(e.to_string()))?;
    Ok(Response::new(Some(value), response.status))
}

/// Serializes a request body to a JSON string.
pub fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<String> {
    serde_json::to_string(body).map_err(|e| ApiError::invalid_argument("body", &e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        id: u64,
    }

    fn raw(status: StatusCode, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: HeaderMap::new(),
            content: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_decode_value() {
        let response: Response<Sample> = decode(raw(StatusCode::OK, r#"{"id":7}"#)).unwrap();
        assert_eq!(response.value, Some(Sample { id: 7 }));
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn test_decode_empty_body_is_none() {
        let response: Response<Sample> = decode(raw(StatusCode::OK, "")).unwrap();
        assert!(response.value.is_none());
    }

    #[test]
    fn test_decode_mismatch_fails() {
        let result: Result<Response<Sample>> = decode(raw(StatusCode::OK, r#"{"id":"x"}"#));
        assert!(matches!(result, Err(ApiError::DeserializationFailed(_))));
    }

    #[test]
    fn test_url_encodes_segments() {
        let options = ClientOptions::default();
        let credential = crate::auth::Credential::new("t").unwrap();
        let pipeline = HttpPipeline::standard(&credential, &options).unwrap();
        let executor = RequestExecutor::new(Arc::new(pipeline), Arc::new(options));

        let url = executor.url(&["p1", "reports", "release", "a/b"]).unwrap();
        assert_eq!(url.path(), "/p1/reports/release/a%2Fb");
    }

    #[test]
    fn test_precancelled_token_fails_without_sending() {
        let options = ClientOptions::default();
        let credential = crate::auth::Credential::new("t").unwrap();
        let pipeline = HttpPipeline::standard(&credential, &options).unwrap();
        let executor = RequestExecutor::new(Arc::new(pipeline), Arc::new(options));

        let cancel = CancellationToken::new();
        cancel.cancel();

        let url = executor.url(&["p1", "workspaces"]).unwrap();
        let result = tokio_test::block_on(executor.execute_raw(Method::GET, url, None, &cancel));
        assert!(matches!(result, Err(ApiError::Cancelled)));
    }
}

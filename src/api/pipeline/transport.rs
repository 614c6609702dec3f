//
//  zenhub-cli
//  api/pipeline/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::Client;
use tracing::debug;

use super::{PipelineRequest, RawResponse};
use crate::api::client::ClientOptions;
use crate::api::common::Result;

/// Terminal element of the pipeline: performs the HTTP exchange.
///
/// Reads the whole body before returning, so every step sees a complete
/// envelope. `Content-Type: application/json` is set only when the request
/// carries a body. Redirects are never followed: a 3xx comes back as-is and
/// the classification step turns it into a failure, so the token header
/// only ever goes to the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds a transport from client options.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`](crate::api::common::ApiError::Network)
    /// if the underlying HTTP client cannot be initialized.
    pub fn new(options: &ClientOptions) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(options.user_agent.clone())
            .redirect(Policy::none());
        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wraps an existing `reqwest::Client`.
    ///
    /// The caller owns its redirect policy; build it with
    /// [`Policy::none`] to keep the token on the configured host.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends the request and reads the full response.
    pub async fn send(&self, request: PipelineRequest) -> Result<RawResponse> {
        debug!(method = %request.method, url = %request.url, "Sending request");

        let PipelineRequest {
            method,
            url,
            mut headers,
            body,
        } = request;

        let mut builder = self.client.request(method, url);
        if let Some(body) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            builder = builder.body(body);
        }

        let response = builder.headers(headers).send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let content = response.bytes().await?.to_vec();

        debug!(status = status.as_u16(), bytes = content.len(), "Received response");

        Ok(RawResponse {
            status,
            headers,
            content,
        })
    }
}

//
//  zenhub-cli
//  api/pipeline/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Pipeline
//!
//! Every request the client sends flows through an [`HttpPipeline`]: an ordered,
//! fixed list of [`PipelineStep`]s followed by the [`HttpTransport`]. Each step
//! receives the outbound [`PipelineRequest`] together with a [`Next`] cursor over
//! the rest of the chain, and decides whether to continue (`next.run(request)`)
//! and what to do with the [`RawResponse`] that comes back.
//!
//! ## Standard Chain
//!
//! ```text
//! AuthenticationStep -> ErrorClassificationStep -> HttpTransport
//!   (adds header)         (inspects status after send)
//! ```
//!
//! The authentication step mutates the request before forwarding it; the
//! classification step forwards first and converts a non-2xx envelope into
//! [`ApiError::RequestFailed`](crate::api::common::ApiError::RequestFailed)
//! before anything downstream can deserialize it.
//!
//! ## Adding Steps
//!
//! New behaviour such as request tracing is added by implementing
//! [`PipelineStep`] and passing the step to [`HttpPipeline::new`]. Call sites
//! only ever see [`HttpPipeline::send`].

mod auth;
mod classify;
mod transport;

pub use auth::*;
pub use classify::*;
pub use transport::*;

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode};
use url::Url;

use crate::api::client::ClientOptions;
use crate::api::common::Result;
use crate::auth::Credential;

/// An outbound request as it travels through the pipeline.
///
/// Built once per call by the executor and owned by the chain from then on;
/// steps receive it by value and may mutate headers before forwarding it.
#[derive(Debug, Clone)]
pub struct PipelineRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: Url,
    /// Request headers.
    pub headers: HeaderMap,
    /// Serialized body, if the operation sends one.
    pub body: Option<Vec<u8>>,
}

impl PipelineRequest {
    /// Creates a request with no headers and no body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

/// A fully read response envelope.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw body bytes; empty when the server sent no body.
    pub content: Vec<u8>,
}

impl RawResponse {
    /// Returns the numeric HTTP status.
    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Returns `true` when the body is empty or whitespace only.
    pub fn is_empty(&self) -> bool {
        self.content.iter().all(u8::is_ascii_whitespace)
    }

    /// Returns the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.content).into_owned()
    }
}

/// A single unit of request/response processing.
///
/// Implementations either forward the request with `next.run(request).await`
/// or fail without forwarding. Steps must be stateless or internally
/// synchronized; one pipeline serves concurrent calls.
///
/// # Example
///
/// ```rust,no_run
/// use async_trait::async_trait;
/// use zenhub_cli::api::common::Result;
/// use zenhub_cli::api::pipeline::{Next, PipelineRequest, PipelineStep, RawResponse};
///
/// #[derive(Debug)]
/// struct TraceStep;
///
/// #[async_trait]
/// impl PipelineStep for TraceStep {
///     fn name(&self) -> &'static str {
///         "trace"
///     }
///
///     async fn process(&self, request: PipelineRequest, next: Next<'_>) -> Result<RawResponse> {
///         println!("-> {} {}", request.method, request.url);
///         let response = next.run(request).await?;
///         println!("<- {}", response.status);
///         Ok(response)
///     }
/// }
/// ```
#[async_trait]
pub trait PipelineStep: Send + Sync + fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Processes the request and continues down the chain.
    async fn process(&self, request: PipelineRequest, next: Next<'_>) -> Result<RawResponse>;
}

/// Cursor over the remaining steps of a pipeline.
///
/// Running it invokes the next step, or the transport once no steps remain.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    steps: &'a [Arc<dyn PipelineStep>],
    transport: &'a HttpTransport,
}

impl<'a> Next<'a> {
    /// Forwards the request to the remainder of the chain.
    pub async fn run(self, request: PipelineRequest) -> Result<RawResponse> {
        match self.steps.split_first() {
            Some((step, rest)) => {
                let next = Next {
                    steps: rest,
                    transport: self.transport,
                };
                step.process(request, next).await
            }
            None => self.transport.send(request).await,
        }
    }

    /// Number of steps still ahead of the transport.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl fmt::Debug for Next<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("remaining", &self.steps.len())
            .finish()
    }
}

/// An ordered chain of steps terminated by the HTTP transport.
///
/// The chain is fixed at construction. A pipeline is shared (through `Arc`)
/// by the entry client and every scoped client derived from it.
#[derive(Debug)]
pub struct HttpPipeline {
    steps: Vec<Arc<dyn PipelineStep>>,
    transport: HttpTransport,
}

impl HttpPipeline {
    /// Creates a pipeline from explicit steps and a transport.
    pub fn new(steps: Vec<Arc<dyn PipelineStep>>, transport: HttpTransport) -> Self {
        Self { steps, transport }
    }

    /// Builds the standard chain: authentication, then error classification.
    ///
    /// # Errors
    ///
    /// Fails if the credential cannot be encoded as a header value or the HTTP
    /// client cannot be constructed.
    pub fn standard(credential: &Credential, options: &ClientOptions) -> Result<Self> {
        let transport = HttpTransport::new(options)?;
        let steps: Vec<Arc<dyn PipelineStep>> = vec![
            Arc::new(AuthenticationStep::new(credential)?),
            Arc::new(ErrorClassificationStep::new()),
        ];
        Ok(Self::new(steps, transport))
    }

    /// Sends a request through every step and the transport.
    pub async fn send(&self, request: PipelineRequest) -> Result<RawResponse> {
        let next = Next {
            steps: &self.steps,
            transport: &self.transport,
        };
        next.run(request).await
    }

    /// Names of the configured steps, in order.
    pub fn step_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|step| step.name()).collect()
    }
}

//
//  zenhub-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # ZenHub API Client
//!
//! This module provides the entry point for talking to the ZenHub REST API.
//! [`ZenHubClient`] owns the request pipeline and hands out resource-scoped
//! clients that share it.
//!
//! ## Features
//!
//! - Token authentication on every request
//! - Configurable endpoint, timeout and User-Agent via [`ClientOptions`]
//! - Factories for repository, issue, epic and release clients
//!
//! ## Example
//!
//! ```rust,no_run
//! use tokio_util::sync::CancellationToken;
//! use zenhub_cli::api::ZenHubClient;
//!
//! # async fn run() -> zenhub_cli::api::common::Result<()> {
//! let client = ZenHubClient::new("your-token")?;
//! let cancel = CancellationToken::new();
//!
//! let details = client.issue(13550592, 3953)?.get_details(&cancel).await?;
//! println!("{:?}", details.value);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use url::Url;

use super::common::{ApiError, IssueRef, Result};
use super::executor::RequestExecutor;
use super::pipeline::HttpPipeline;
use super::resources::{EpicClient, IssueClient, ReleaseClient, RepositoryClient};
use crate::auth::Credential;

/// Default ZenHub API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.zenhub.io";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Options shared by every request a client sends.
///
/// # Fields
///
/// * `endpoint` - Base URL, `https://api.zenhub.io` unless overridden
/// * `timeout` - Per-request timeout; `None` disables it
/// * `user_agent` - Sent on every request, `zh/<version>` by default
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    /// Base URL all endpoint paths are appended to; `None` means
    /// `https://api.zenhub.io`.
    pub endpoint: Option<Url>,
    /// Per-request timeout.
    pub timeout: Option<Duration>,
    /// User-Agent header value.
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            user_agent: format!("{}/{}", crate::APP_NAME, crate::VERSION),
        }
    }
}

impl ClientOptions {
    /// Replaces the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if `endpoint` is not an absolute
    /// `http` or `https` URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use zenhub_cli::api::client::ClientOptions;
    ///
    /// let options = ClientOptions::default()
    ///     .with_endpoint("https://zenhub.example.com")
    ///     .unwrap();
    /// assert_eq!(options.endpoint().unwrap().host_str(), Some("zenhub.example.com"));
    ///
    /// assert!(ClientOptions::default().with_endpoint("not a url").is_err());
    /// ```
    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint.trim())
            .map_err(|e| ApiError::invalid_argument("endpoint", &e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
            return Err(ApiError::invalid_argument(
                "endpoint",
                "must be an absolute http(s) URL",
            ));
        }
        self.endpoint = Some(url);
        Ok(self)
    }

    /// The base URL requests are built from.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidUrl`] if the built-in default fails to parse.
    pub fn endpoint(&self) -> Result<Url> {
        match &self.endpoint {
            Some(url) => Ok(url.clone()),
            None => Url::parse(DEFAULT_ENDPOINT)
                .map_err(|e| ApiError::InvalidUrl(format!("{DEFAULT_ENDPOINT}: {e}"))),
        }
    }

    /// Replaces the request timeout.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replaces the User-Agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// The entry client for the ZenHub API.
///
/// Owns one pipeline and one set of options. Every scoped client created
/// through the factories shares both; nothing is copied per client.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use std::time::Duration;
/// use zenhub_cli::api::client::{ClientOptions, ZenHubClient};
///
/// let options = ClientOptions::default()
///     .with_endpoint("https://zenhub.example.com")?
///     .with_timeout(Some(Duration::from_secs(10)));
///
/// let client = ZenHubClient::with_options("your-token", options)?;
/// # Ok::<(), zenhub_cli::api::common::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ZenHubClient {
    executor: RequestExecutor,
}

impl ZenHubClient {
    /// Creates a client against the default endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidArgument`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_options(token, ClientOptions::default())
    }

    /// Creates a client with explicit options.
    pub fn with_options(token: impl Into<String>, options: ClientOptions) -> Result<Self> {
        let credential = Credential::new(token)?;
        let pipeline = HttpPipeline::standard(&credential, &options)?;
        Ok(Self::from_parts(Arc::new(pipeline), Arc::new(options)))
    }

    /// Creates a client around an existing pipeline.
    ///
    /// Used when a caller needs a custom step list.
    pub fn from_parts(pipeline: Arc<HttpPipeline>, options: Arc<ClientOptions>) -> Self {
        Self {
            executor: RequestExecutor::new(pipeline, options),
        }
    }

    /// The shared pipeline.
    pub fn pipeline(&self) -> &Arc<HttpPipeline> {
        self.executor.pipeline()
    }

    /// The shared options.
    pub fn options(&self) -> &Arc<ClientOptions> {
        self.executor.options()
    }

    /// Returns a client scoped to one repository.
    pub fn repository(&self, repo_id: u64) -> Result<RepositoryClient> {
        RepositoryClient::new(self.executor.clone(), repo_id)
    }

    /// Returns a client scoped to one issue.
    pub fn issue(&self, repo_id: u64, issue_number: u64) -> Result<IssueClient> {
        IssueClient::new(self.executor.clone(), repo_id, issue_number)
    }

    /// Returns a client scoped to the issue an [`IssueRef`] points at.
    pub fn issue_for(&self, issue: &IssueRef) -> Result<IssueClient> {
        self.issue(issue.repo_id, issue.issue_number)
    }

    /// Returns a client scoped to one epic.
    pub fn epic(&self, repo_id: u64, epic_number: u64) -> Result<EpicClient> {
        EpicClient::new(self.executor.clone(), repo_id, epic_number)
    }

    /// Returns a client scoped to the epic an [`IssueRef`] points at.
    pub fn epic_for(&self, epic: &IssueRef) -> Result<EpicClient> {
        self.epic(epic.repo_id, epic.issue_number)
    }

    /// Returns a client scoped to one release report.
    pub fn release(&self, release_id: &str) -> Result<ReleaseClient> {
        ReleaseClient::new(self.executor.clone(), release_id)
    }
}

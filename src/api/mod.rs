//
//  zenhub-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Typed access to the ZenHub REST API (`/p1` and `/p2` endpoints).
//!
//! ## Architecture
//!
//! ```text
//! ZenHubClient ──factories──> RepositoryClient / IssueClient / EpicClient / ReleaseClient
//!                                         │
//!                                         ▼
//!                                 RequestExecutor  (execute_raw / execute_typed)
//!                                         │
//!                                         ▼
//!                   HttpPipeline: AuthenticationStep -> ErrorClassificationStep -> HttpTransport
//! ```
//!
//! - [`client`]: Entry client and [`ClientOptions`](client::ClientOptions)
//! - [`resources`]: Resource-scoped clients, one method per endpoint
//! - [`executor`]: Builds requests, handles cancellation, decodes bodies
//! - [`pipeline`]: Ordered request steps and the HTTP transport
//! - [`models`]: Request and response types
//! - [`common`]: Errors, the typed response wrapper, issue references
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tokio_util::sync::CancellationToken;
//! use zenhub_cli::api::ZenHubClient;
//!
//! # async fn run() -> zenhub_cli::api::common::Result<()> {
//! let client = ZenHubClient::new("your-token")?;
//! let cancel = CancellationToken::new();
//!
//! let issue = client.issue(1234567, 42)?;
//! issue.set_estimate(5, &cancel).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`ApiError`]:
//!
//! - `InvalidArgument`: a missing identity, detected before sending
//! - `RequestFailed`: any non-2xx status, with the server's message
//! - `DeserializationFailed`: a 2xx body that does not match the result type
//! - `Cancelled`: the cancellation token fired
//!
//! Nothing is retried.

pub mod client;
pub mod common;
pub mod executor;
pub mod models;
pub mod pipeline;
pub mod resources;

pub use client::{ClientOptions, ZenHubClient};
pub use common::{ApiError, IssueRef, Response};
pub use resources::{EpicClient, IssueClient, ReleaseClient, RepositoryClient};

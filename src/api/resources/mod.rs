//
//  zenhub-cli
//  api/resources/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Resource-scoped clients.
//!
//! Each client is bound to one identity and exposes only the operations valid
//! for it:
//!
//! | Client | Identity | Operations |
//! |--------|----------|------------|
//! | [`RepositoryClient`] | repository id | workspaces, boards, epics, dependencies, milestones, release reports |
//! | [`IssueClient`] | repository id + issue number | details, events, estimate, moves, convert to epic, blocked-by |
//! | [`EpicClient`] | repository id + epic number | details, add/remove issues, convert to issue |
//! | [`ReleaseClient`] | release id | report, edit, repositories, issues |
//!
//! Identities are validated when the client is built, so an operation on a
//! client that exists never fails with a missing-identity error.

mod epic;
mod issue;
mod release;
mod repository;

pub use epic::EpicClient;
pub use issue::IssueClient;
pub use release::ReleaseClient;
pub use repository::RepositoryClient;

use reqwest::Method;
use tokio_util::sync::CancellationToken;

use super::common::{Response, Result};
use super::executor::{json_body, RequestExecutor};
use super::models::IssueDependency;
use super::pipeline::RawResponse;

/// `POST /p1/dependencies`
pub(crate) async fn create_dependency(
    executor: &RequestExecutor,
    dependency: &IssueDependency,
    cancel: &CancellationToken,
) -> Result<Response<IssueDependency>> {
    dependency.blocking.validate("blocking")?;
    dependency.blocked.validate("blocked")?;

    let url = executor.url(&["p1", "dependencies"])?;
    executor
        .execute_typed(Method::POST, url, Some(json_body(dependency)?), cancel)
        .await
}

/// `DELETE /p1/dependencies`
pub(crate) async fn delete_dependency(
    executor: &RequestExecutor,
    dependency: &IssueDependency,
    cancel: &CancellationToken,
) -> Result<RawResponse> {
    dependency.blocking.validate("blocking")?;
    dependency.blocked.validate("blocked")?;

    let url = executor.url(&["p1", "dependencies"])?;
    executor
        .execute_raw(Method::DELETE, url, Some(json_body(dependency)?), cancel)
        .await
}

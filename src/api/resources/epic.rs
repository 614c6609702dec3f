//
//  zenhub-cli
//  api/resources/epic.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use reqwest::Method;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::api::common::{require_number, require_repo_id, IssueRef, Response, Result};
use crate::api::executor::{json_body, RequestExecutor};
use crate::api::models::{EpicDetails, UpdateIssuesRequest};
use crate::api::pipeline::RawResponse;

/// Operations on a single epic.
///
/// # Example
///
/// ```rust,no_run
/// use tokio_util::sync::CancellationToken;
/// use zenhub_cli::api::common::IssueRef;
/// use zenhub_cli::api::ZenHubClient;
///
/// # async fn run() -> zenhub_cli::api::common::Result<()> {
/// let client = ZenHubClient::new("your-token")?;
/// let epic = client.epic(13550592, 3953)?;
/// let cancel = CancellationToken::new();
///
/// epic.add_issues(&[IssueRef::new(13550592, 2)], &cancel).await?;
/// let details = epic.get_details(&cancel).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EpicClient {
    executor: RequestExecutor,
    repo_id: u64,
    epic_number: u64,
}

impl EpicClient {
    /// Creates a client for epic `epic_number` in `repo_id`.
    pub fn new(executor: RequestExecutor, repo_id: u64, epic_number: u64) -> Result<Self> {
        require_repo_id("repo_id", repo_id)?;
        require_number("epic_number", epic_number)?;
        Ok(Self {
            executor,
            repo_id,
            epic_number,
        })
    }

    /// Reference to the epic issue.
    pub fn epic_ref(&self) -> IssueRef {
        IssueRef::new(self.repo_id, self.epic_number)
    }

    /// The executor shared with the parent client.
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    fn url(&self, tail: &[&str]) -> Result<Url> {
        let repo = self.repo_id.to_string();
        let number = self.epic_number.to_string();
        let mut segments = vec!["p1", "repositories", repo.as_str(), "epics", number.as_str()];
        segments.extend_from_slice(tail);
        self.executor.url(&segments)
    }

    /// Epic data including child issues.
    ///
    /// `GET /p1/repositories/{repo_id}/epics/{epic_number}`
    pub async fn get_details(&self, cancel: &CancellationToken) -> Result<Response<EpicDetails>> {
        let url = self.url(&[])?;
        self.executor.execute_typed(Method::GET, url, None, cancel).await
    }

    /// Adds and removes child issues in one call.
    ///
    /// `POST /p1/repositories/{repo_id}/epics/{epic_number}/update_issues`
    pub async fn update_issues(
        &self,
        changes: &UpdateIssuesRequest,
        cancel: &CancellationToken,
    ) -> Result<RawResponse> {
        for issue in changes.add_issues.iter().chain(&changes.remove_issues) {
            issue.validate("issues")?;
        }

        let url = self.url(&["update_issues"])?;
        self.executor
            .execute_raw(Method::POST, url, Some(json_body(changes)?), cancel)
            .await
    }

    /// Adds child issues.
    pub async fn add_issues(&self, issues: &[IssueRef], cancel: &CancellationToken) -> Result<RawResponse> {
        self.update_issues(&UpdateIssuesRequest::adding(issues.to_vec()), cancel)
            .await
    }

    /// Removes child issues.
    pub async fn remove_issues(&self, issues: &[IssueRef], cancel: &CancellationToken) -> Result<RawResponse> {
        self.update_issues(&UpdateIssuesRequest::removing(issues.to_vec()), cancel)
            .await
    }

    /// Converts the epic back into a plain issue.
    ///
    /// `POST /p1/repositories/{repo_id}/epics/{epic_number}/convert_to_issue`
    pub async fn convert_to_issue(&self, cancel: &CancellationToken) -> Result<RawResponse> {
        let url = self.url(&["convert_to_issue"])?;
        self.executor.execute_raw(Method::POST, url, None, cancel).await
    }
}

//
//  zenhub-cli
//  api/resources/release.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use reqwest::Method;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::api::common::{require_non_empty, require_repo_id, ApiError, IssueRef, Response, Result};
use crate::api::executor::{json_body, RequestExecutor};
use crate::api::models::{EditReleaseReportRequest, IssueDetails, ReleaseReport, UpdateIssuesRequest};
use crate::api::pipeline::RawResponse;

/// Operations on a single release report.
#[derive(Debug, Clone)]
pub struct ReleaseClient {
    executor: RequestExecutor,
    release_id: String,
}

impl ReleaseClient {
    /// Creates a client for `release_id`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for an empty or whitespace-only id.
    pub fn new(executor: RequestExecutor, release_id: &str) -> Result<Self> {
        require_non_empty("release_id", release_id)?;
        Ok(Self {
            executor,
            release_id: release_id.trim().to_string(),
        })
    }

    /// The release report id.
    pub fn release_id(&self) -> &str {
        &self.release_id
    }

    /// The executor shared with the parent client.
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    fn url(&self, tail: &[&str]) -> Result<Url> {
        let mut segments = vec!["p1", "reports", "release", self.release_id.as_str()];
        segments.extend_from_slice(tail);
        self.executor.url(&segments)
    }

    /// The report.
    ///
    /// `GET /p1/reports/release/{release_id}`
    pub async fn get_report(&self, cancel: &CancellationToken) -> Result<Response<ReleaseReport>> {
        let url = self.url(&[])?;
        self.executor.execute_typed(Method::GET, url, None, cancel).await
    }

    /// Updates the fields set in `changes`.
    ///
    /// `PATCH /p1/reports/release/{release_id}`
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` without sending anything when `changes` sets
    /// no field.
    pub async fn edit_report(
        &self,
        changes: &EditReleaseReportRequest,
        cancel: &CancellationToken,
    ) -> Result<Response<ReleaseReport>> {
        if changes.is_empty() {
            return Err(ApiError::invalid_argument("changes", "no fields to update"));
        }

        let url = self.url(&[])?;
        self.executor
            .execute_typed(Method::PATCH, url, Some(json_body(changes)?), cancel)
            .await
    }

    /// Connects a repository to the report.
    ///
    /// `POST /p1/reports/release/{release_id}/repository/{repo_id}`
    pub async fn add_repository(&self, repo_id: u64, cancel: &CancellationToken) -> Result<RawResponse> {
        require_repo_id("repo_id", repo_id)?;

        let repo = repo_id.to_string();
        let url = self.url(&["repository", repo.as_str()])?;
        self.executor.execute_raw(Method::POST, url, None, cancel).await
    }

    /// Disconnects a repository from the report.
    ///
    /// `DELETE /p1/reports/release/{release_id}/repository/{repo_id}`
    pub async fn remove_repository(&self, repo_id: u64, cancel: &CancellationToken) -> Result<RawResponse> {
        require_repo_id("repo_id", repo_id)?;

        let repo = repo_id.to_string();
        let url = self.url(&["repository", repo.as_str()])?;
        self.executor.execute_raw(Method::DELETE, url, None, cancel).await
    }

    /// Issues in the report.
    ///
    /// `GET /p1/reports/release/{release_id}/issues`
    pub async fn get_issues(&self, cancel: &CancellationToken) -> Result<Response<Vec<IssueDetails>>> {
        let url = self.url(&["issues"])?;
        self.executor.execute_typed(Method::GET, url, None, cancel).await
    }

    /// Adds and removes issues in one call.
    ///
    /// `PATCH /p1/reports/release/{release_id}/issues`
    pub async fn update_issues(
        &self,
        changes: &UpdateIssuesRequest,
        cancel: &CancellationToken,
    ) -> Result<RawResponse> {
        for issue in changes.add_issues.iter().chain(&changes.remove_issues) {
            issue.validate("issues")?;
        }

        let url = self.url(&["issues"])?;
        self.executor
            .execute_raw(Method::PATCH, url, Some(json_body(changes)?), cancel)
            .await
    }

    /// Adds issues to the report.
    pub async fn add_issues(&self, issues: &[IssueRef], cancel: &CancellationToken) -> Result<RawResponse> {
        self.update_issues(&UpdateIssuesRequest::adding(issues.to_vec()), cancel)
            .await
    }

    /// Removes issues from the report.
    pub async fn remove_issues(&self, issues: &[IssueRef], cancel: &CancellationToken) -> Result<RawResponse> {
        self.update_issues(&UpdateIssuesRequest::removing(issues.to_vec()), cancel)
            .await
    }
}

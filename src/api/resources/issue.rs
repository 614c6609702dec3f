//
//  zenhub-cli
//  api/resources/issue.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use reqwest::Method;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::api::common::{
    require_non_empty, require_number, require_repo_id, IssueRef, Response, Result,
};
use crate::api::executor::{json_body, RequestExecutor};
use crate::api::models::{
    ConvertToEpicRequest, EstimateRequest, IssueDependency, IssueDetails, IssueEvent,
    MoveIssueRequest,
};
use crate::api::pipeline::RawResponse;

/// Operations on a single issue.
///
/// Status-only operations (estimate, moves, conversion, unblocking) return the
/// [`RawResponse`] and never look at the body.
#[derive(Debug, Clone)]
pub struct IssueClient {
    executor: RequestExecutor,
    repo_id: u64,
    issue_number: u64,
}

impl IssueClient {
    /// Creates a client for issue `issue_number` in `repo_id`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` when either value is zero.
    pub fn new(executor: RequestExecutor, repo_id: u64, issue_number: u64) -> Result<Self> {
        require_repo_id("repo_id", repo_id)?;
        require_number("issue_number", issue_number)?;
        Ok(Self {
            executor,
            repo_id,
            issue_number,
        })
    }

    /// Reference to this issue.
    pub fn issue_ref(&self) -> IssueRef {
        IssueRef::new(self.repo_id, self.issue_number)
    }

    /// The executor shared with the parent client.
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    /// `/p1/repositories/{repo_id}/{collection}/{issue_number}/{tail...}`
    fn p1_url(&self, collection: &str, tail: &[&str]) -> Result<Url> {
        let repo = self.repo_id.to_string();
        let number = self.issue_number.to_string();
        let mut segments = vec!["p1", "repositories", repo.as_str(), collection, number.as_str()];
        segments.extend_from_slice(tail);
        self.executor.url(&segments)
    }

    /// ZenHub data for the issue.
    ///
    /// `GET /p1/repositories/{repo_id}/issues/{issue_number}`
    pub async fn get_details(&self, cancel: &CancellationToken) -> Result<Response<IssueDetails>> {
        let url = self.p1_url("issues", &[])?;
        self.executor.execute_typed(Method::GET, url, None, cancel).await
    }

    /// ZenHub history of the issue, newest first.
    ///
    /// `GET /p1/repositories/{repo_id}/issues/{issue_number}/events`
    pub async fn get_events(&self, cancel: &CancellationToken) -> Result<Response<Vec<IssueEvent>>> {
        let url = self.p1_url("issues", &["events"])?;
        self.executor.execute_typed(Method::GET, url, None, cancel).await
    }

    /// Sets the estimate.
    ///
    /// `PUT /p1/repositories/{repo_id}/issues/{issue_number}/estimate`
    pub async fn set_estimate(&self, estimate: u32, cancel: &CancellationToken) -> Result<RawResponse> {
        let url = self.p1_url("issues", &["estimate"])?;
        let body = json_body(&EstimateRequest { estimate })?;
        self.executor.execute_raw(Method::PUT, url, Some(body), cancel).await
    }

    /// Moves the issue to a pipeline in a specific workspace.
    ///
    /// `POST /p2/workspaces/{workspace_id}/repositories/{repo_id}/issues/{issue_number}/moves`
    pub async fn move_to_pipeline(
        &self,
        workspace_id: &str,
        pipeline_id: &str,
        position: u32,
        cancel: &CancellationToken,
    ) -> Result<RawResponse> {
        require_non_empty("workspace_id", workspace_id)?;
        require_non_empty("pipeline_id", pipeline_id)?;

        let repo = self.repo_id.to_string();
        let number = self.issue_number.to_string();
        let url = self.executor.url(&[
            "p2",
            "workspaces",
            workspace_id,
            "repositories",
            repo.as_str(),
            "issues",
            number.as_str(),
            "moves",
        ])?;
        let body = json_body(&MoveIssueRequest {
            pipeline_id: pipeline_id.to_string(),
            position,
        })?;
        self.executor.execute_raw(Method::POST, url, Some(body), cancel).await
    }

    /// Moves the issue to a pipeline in the repository's oldest workspace.
    ///
    /// `POST /p1/repositories/{repo_id}/issues/{issue_number}/moves`
    pub async fn move_to_pipeline_in_default_workspace(
        &self,
        pipeline_id: &str,
        position: u32,
        cancel: &CancellationToken,
    ) -> Result<RawResponse> {
        require_non_empty("pipeline_id", pipeline_id)?;

        let url = self.p1_url("issues", &["moves"])?;
        let body = json_body(&MoveIssueRequest {
            pipeline_id: pipeline_id.to_string(),
            position,
        })?;
        self.executor.execute_raw(Method::POST, url, Some(body), cancel).await
    }

    /// Converts the issue into an epic containing `issues`.
    ///
    /// An empty slice converts the issue without children.
    ///
    /// `POST /p1/repositories/{repo_id}/epics/{issue_number}/convert_to_epic`
    pub async fn convert_to_epic(&self, issues: &[IssueRef], cancel: &CancellationToken) -> Result<RawResponse> {
        for issue in issues {
            issue.validate("issues")?;
        }

        let url = self.p1_url("epics", &["convert_to_epic"])?;
        let body = json_body(&ConvertToEpicRequest {
            issues: issues.to_vec(),
        })?;
        self.executor.execute_raw(Method::POST, url, Some(body), cancel).await
    }

    /// Marks this issue as blocked by `blocking`.
    ///
    /// `POST /p1/dependencies`
    pub async fn add_blocked_by(
        &self,
        blocking: &IssueRef,
        cancel: &CancellationToken,
    ) -> Result<Response<IssueDependency>> {
        let dependency = IssueDependency::new(*blocking, self.issue_ref());
        super::create_dependency(&self.executor, &dependency, cancel).await
    }

    /// Removes a blocked-by relationship.
    ///
    /// `DELETE /p1/dependencies`
    pub async fn remove_blocked_by(&self, blocking: &IssueRef, cancel: &CancellationToken) -> Result<RawResponse> {
        let dependency = IssueDependency::new(*blocking, self.issue_ref());
        super::delete_dependency(&self.executor, &dependency, cancel).await
    }
}

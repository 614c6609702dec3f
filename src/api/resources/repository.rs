//
//  zenhub-cli
//  api/resources/repository.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use chrono::{DateTime, Utc};
use reqwest::Method;
use tokio_util::sync::CancellationToken;

use crate::api::common::{require_non_empty, require_number, require_repo_id, Response, Result};
use crate::api::executor::{json_body, RequestExecutor};
use crate::api::models::{
    Board, CreateReleaseReportRequest, EpicList, ReleaseReport, RepoDependencies, StartDate,
    Workspace,
};

/// Operations on a single repository.
///
/// # Example
///
/// ```rust,no_run
/// use tokio_util::sync::CancellationToken;
/// use zenhub_cli::api::ZenHubClient;
///
/// # async fn run() -> zenhub_cli::api::common::Result<()> {
/// let client = ZenHubClient::new("your-token")?;
/// let repo = client.repository(1234567)?;
/// let cancel = CancellationToken::new();
///
/// for workspace in repo.get_workspaces(&cancel).await?.into_value().unwrap_or_default() {
///     let board = repo.get_board(&workspace.id, &cancel).await?;
///     println!("{}: {:?}", workspace.name, board.value.map(|b| b.pipelines.len()));
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RepositoryClient {
    executor: RequestExecutor,
    repo_id: u64,
}

impl RepositoryClient {
    /// Creates a client for `repo_id`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a zero repository id.
    pub fn new(executor: RequestExecutor, repo_id: u64) -> Result<Self> {
        require_repo_id("repo_id", repo_id)?;
        Ok(Self { executor, repo_id })
    }

    /// The repository id.
    pub fn repo_id(&self) -> u64 {
        self.repo_id
    }

    /// The executor shared with the parent client.
    pub fn executor(&self) -> &RequestExecutor {
        &self.executor
    }

    fn repo_segment(&self) -> String {
        self.repo_id.to_string()
    }

    /// Workspaces the repository belongs to.
    ///
    /// `GET /p2/repositories/{repo_id}/workspaces`
    pub async fn get_workspaces(&self, cancel: &CancellationToken) -> Result<Response<Vec<Workspace>>> {
        let repo = self.repo_segment();
        let url = self.executor.url(&["p2", "repositories", repo.as_str(), "workspaces"])?;
        self.executor.execute_typed(Method::GET, url, None, cancel).await
    }

    /// Board for the repository in a given workspace.
    ///
    /// `GET /p2/workspaces/{workspace_id}/repositories/{repo_id}/board`
    pub async fn get_board(&self, workspace_id: &str, cancel: &CancellationToken) -> Result<Response<Board>> {
        require_non_empty("workspace_id", workspace_id)?;

        let repo = self.repo_segment();
        let url = self
            .executor
            .url(&["p2", "workspaces", workspace_id, "repositories", repo.as_str(), "board"])?;
        self.executor.execute_typed(Method::GET, url, None, cancel).await
    }

    /// Board in the repository's oldest workspace.
    ///
    /// `GET /p1/repositories/{repo_id}/board`
    pub async fn get_default_board(&self, cancel: &CancellationToken) -> Result<Response<Board>> {
        let repo = self.repo_segment();
        let url = self.executor.url(&["p1", "repositories", repo.as_str(), "board"])?;
        self.executor.execute_typed(Method::GET, url, None, cancel).await
    }

    /// Start date of a milestone.
    ///
    /// `GET /p1/repositories/{repo_id}/milestones/{milestone}/start_date`
    pub async fn get_milestone_start(
        &self,
        milestone: u64,
        cancel: &CancellationToken,
    ) -> Result<Response<StartDate>> {
        require_number("milestone", milestone)?;

        let url = self.milestone_url(milestone)?;
        self.executor.execute_typed(Method::GET, url, None, cancel).await
    }

    /// Sets the start date of a milestone.
    ///
    /// The date is converted to UTC before it is sent.
    ///
    /// `POST /p1/repositories/{repo_id}/milestones/{milestone}/start_date`
    pub async fn set_milestone_start(
        &self,
        milestone: u64,
        start_date: impl Into<DateTime<Utc>>,
        cancel: &CancellationToken,
    ) -> Result<Response<StartDate>> {
        require_number("milestone", milestone)?;

        let url = self.milestone_url(milestone)?;
        let body = json_body(&StartDate::new(start_date.into()))?;
        self.executor.execute_typed(Method::POST, url, Some(body), cancel).await
    }

    fn milestone_url(&self, milestone: u64) -> Result<url::Url> {
        let repo = self.repo_segment();
        let milestone = milestone.to_string();
        self.executor.url(&[
            "p1",
            "repositories",
            repo.as_str(),
            "milestones",
            milestone.as_str(),
            "start_date",
        ])
    }

    /// Dependencies between issues in the repository.
    ///
    /// `GET /p1/repositories/{repo_id}/dependencies`
    pub async fn get_dependencies(&self, cancel: &CancellationToken) -> Result<Response<RepoDependencies>> {
        let repo = self.repo_segment();
        let url = self.executor.url(&["p1", "repositories", repo.as_str(), "dependencies"])?;
        self.executor.execute_typed(Method::GET, url, None, cancel).await
    }

    /// Epics in the repository.
    ///
    /// `GET /p1/repositories/{repo_id}/epics`
    pub async fn get_epics(&self, cancel: &CancellationToken) -> Result<Response<EpicList>> {
        let repo = self.repo_segment();
        let url = self.executor.url(&["p1", "repositories", repo.as_str(), "epics"])?;
        self.executor.execute_typed(Method::GET, url, None, cancel).await
    }

    /// Creates a release report anchored on this repository.
    ///
    /// `POST /p1/repositories/{repo_id}/reports/release`
    pub async fn create_release_report(
        &self,
        report: &CreateReleaseReportRequest,
        cancel: &CancellationToken,
    ) -> Result<Response<ReleaseReport>> {
        for repo_id in &report.repositories {
            require_repo_id("repositories", *repo_id)?;
        }

        let repo = self.repo_segment();
        let url = self
            .executor
            .url(&["p1", "repositories", repo.as_str(), "reports", "release"])?;
        self.executor
            .execute_typed(Method::POST, url, Some(json_body(report)?), cancel)
            .await
    }

    /// Release reports that include the repository.
    ///
    /// `GET /p1/repositories/{repo_id}/reports/releases`
    pub async fn get_release_reports(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Response<Vec<ReleaseReport>>> {
        let repo = self.repo_segment();
        let url = self
            .executor
            .url(&["p1", "repositories", repo.as_str(), "reports", "releases"])?;
        self.executor.execute_typed(Method::GET, url, None, cancel).await
    }
}

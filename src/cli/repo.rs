//
//  zenhub-cli
//  cli/repo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Repository commands
//!
//! Everything here is scoped to one GitHub repository id: its boards,
//! epics, dependency graph, milestones and release reports.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;

use crate::api::models::{
    Board, CreateReleaseReportRequest, EpicInfo, IssueDependency, ReleaseReport, StartDate, Workspace,
};
use crate::api::RepositoryClient;
use crate::config::Config;
use crate::output::{format_issue_ref, format_state, or_dash, print_field, TableBuilder, TableOutput};
use crate::util::{format_date, parse_date, truncate};

use super::release::ReleaseView;
use super::{resolve_workspace, GlobalOptions, RepoArg};

/// Repository-level views
#[derive(Args, Debug)]
pub struct RepoCommand {
    #[command(subcommand)]
    pub command: RepoSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum RepoSubcommand {
    /// List the epics in a repository
    Epics(RepoArgs),

    /// List the workspaces a repository belongs to
    #[command(visible_alias = "ws")]
    Workspaces(RepoArgs),

    /// Show the board of a repository
    Board(BoardArgs),

    /// List dependencies between issues
    #[command(visible_alias = "deps")]
    Dependencies(RepoArgs),

    /// Get or set the start date of a milestone
    #[command(name = "milestone-start")]
    MilestoneStart(MilestoneArgs),

    /// List release reports for a repository
    Releases(RepoArgs),

    /// Create a release report
    #[command(name = "create-release")]
    CreateRelease(CreateReleaseArgs),
}

#[derive(Args, Debug)]
pub struct RepoArgs {
    /// Repository id, or '.' for the configured default
    pub repo: RepoArg,
}

#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Repository id, or '.' for the configured default
    pub repo: RepoArg,

    /// Workspace id; without one the repository's oldest workspace is used
    #[arg(long, short = 'w')]
    pub workspace: Option<String>,
}

#[derive(Args, Debug)]
pub struct MilestoneArgs {
    /// Repository id, or '.' for the configured default
    pub repo: RepoArg,

    /// Milestone number
    pub milestone: u64,

    /// New start date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub set: Option<String>,
}

#[derive(Args, Debug)]
pub struct CreateReleaseArgs {
    /// Repository id, or '.' for the configured default
    pub repo: RepoArg,

    /// Release title
    #[arg(long, short = 't')]
    pub title: String,

    /// Release description
    #[arg(long, short = 'd', default_value = "")]
    pub description: String,

    /// Start date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub start: String,

    /// Desired end date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub end: String,

    /// Additional repository ids to include
    #[arg(long = "repos", num_args = 1.., value_name = "REPO_ID")]
    pub repos: Vec<u64>,
}

// Display types

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct EpicRow(EpicInfo);

impl TableOutput for EpicRow {
    fn print_table(&self, color: bool) {
        println!("{}", self.table_row(color).join("  "));
    }

    fn table_headers() -> &'static [&'static str] {
        &["EPIC", "URL"]
    }

    fn table_row(&self, color: bool) -> Vec<String> {
        vec![
            format_issue_ref(self.0.repo_id, self.0.issue_number, color),
            or_dash(self.0.issue_url.as_deref()),
        ]
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct WorkspaceRow(Workspace);

impl TableOutput for WorkspaceRow {
    fn print_table(&self, color: bool) {
        println!("{}", self.table_row(color).join("  "));
    }

    fn table_headers() -> &'static [&'static str] {
        &["ID", "NAME", "REPOSITORIES", "DESCRIPTION"]
    }

    fn table_row(&self, color: bool) -> Vec<String> {
        let name = if color {
            style(&self.0.name).bold().to_string()
        } else {
            self.0.name.clone()
        };
        vec![
            self.0.id.clone(),
            name,
            self.0.repositories.len().to_string(),
            truncate(self.0.description.as_deref().unwrap_or("-"), 40),
        ]
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct BoardView(Board);

impl TableOutput for BoardView {
    fn print_table(&self, color: bool) {
        let rows = self.0.pipelines.iter().map(|pipeline| {
            vec![
                pipeline.name.clone(),
                pipeline.issues.len().to_string(),
                pipeline.total_estimate().to_string(),
                pipeline.id.clone(),
            ]
        });

        TableBuilder::new()
            .color(color)
            .headers(["PIPELINE", "ISSUES", "ESTIMATE", "ID"])
            .rows(rows)
            .print();
        println!("{} issue(s) on the board", self.0.issue_count());
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct DependencyRow(IssueDependency);

impl TableOutput for DependencyRow {
    fn print_table(&self, color: bool) {
        println!("{}", self.table_row(color).join("  "));
    }

    fn table_headers() -> &'static [&'static str] {
        &["BLOCKING", "BLOCKED"]
    }

    fn table_row(&self, color: bool) -> Vec<String> {
        vec![
            format_issue_ref(self.0.blocking.repo_id, self.0.blocking.issue_number, color),
            format_issue_ref(self.0.blocked.repo_id, self.0.blocked.issue_number, color),
        ]
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct StartDateView(StartDate);

impl TableOutput for StartDateView {
    fn print_table(&self, color: bool) {
        print_field("Start date", &format_date(&self.0.start_date), color);
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct ReleaseRow(ReleaseReport);

impl TableOutput for ReleaseRow {
    fn print_table(&self, color: bool) {
        println!("{}", self.table_row(color).join("  "));
    }

    fn table_headers() -> &'static [&'static str] {
        &["ID", "TITLE", "STATE", "START", "END"]
    }

    fn table_row(&self, color: bool) -> Vec<String> {
        let report = &self.0;
        vec![
            report.release_id.clone(),
            truncate(report.title.as_deref().unwrap_or("-"), 40),
            format_state(&or_dash(report.state), color),
            or_dash(report.start_date.as_ref().map(format_date)),
            or_dash(report.desired_end_date.as_ref().map(format_date)),
        ]
    }
}

impl RepoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            RepoSubcommand::Epics(args) => self.epics(args, global).await,
            RepoSubcommand::Workspaces(args) => self.workspaces(args, global).await,
            RepoSubcommand::Board(args) => self.board(args, global).await,
            RepoSubcommand::Dependencies(args) => self.dependencies(args, global).await,
            RepoSubcommand::MilestoneStart(args) => self.milestone_start(args, global).await,
            RepoSubcommand::Releases(args) => self.releases(args, global).await,
            RepoSubcommand::CreateRelease(args) => self.create_release(args, global).await,
        }
    }

    fn get_client(&self, repo: RepoArg, global: &GlobalOptions, config: &Config) -> Result<RepositoryClient> {
        let repo_id = repo.resolve(config)?;
        Ok(global.client(config)?.repository(repo_id)?)
    }

    /// List epics
    async fn epics(&self, args: &RepoArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let repo = self.get_client(args.repo, global, &config)?;

        let epics: Vec<EpicRow> = repo
            .get_epics(&global.cancel)
            .await?
            .into_value()
            .unwrap_or_default()
            .epic_issues
            .into_iter()
            .map(EpicRow)
            .collect();

        global.writer().write_list(&epics, "No epics found.")
    }

    /// List workspaces
    async fn workspaces(&self, args: &RepoArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let repo = self.get_client(args.repo, global, &config)?;

        let workspaces: Vec<WorkspaceRow> = repo
            .get_workspaces(&global.cancel)
            .await?
            .into_value()
            .unwrap_or_default()
            .into_iter()
            .map(WorkspaceRow)
            .collect();

        global.writer().write_list(&workspaces, "No workspaces found.")
    }

    /// Show a board
    async fn board(&self, args: &BoardArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let repo = self.get_client(args.repo, global, &config)?;

        let response = match resolve_workspace(args.workspace.as_deref(), &config) {
            Some(workspace_id) => repo.get_board(&workspace_id, &global.cancel).await?,
            None => repo.get_default_board(&global.cancel).await?,
        };

        let Some(board) = response.into_value() else {
            bail!("ZenHub returned no board for repository {}", repo.repo_id());
        };
        global.writer().write(&BoardView(board))
    }

    /// List dependencies
    async fn dependencies(&self, args: &RepoArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let repo = self.get_client(args.repo, global, &config)?;

        let dependencies: Vec<DependencyRow> = repo
            .get_dependencies(&global.cancel)
            .await?
            .into_value()
            .unwrap_or_default()
            .dependencies
            .into_iter()
            .map(DependencyRow)
            .collect();

        global.writer().write_list(&dependencies, "No dependencies found.")
    }

    /// Get or set a milestone start date
    async fn milestone_start(&self, args: &MilestoneArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let repo = self.get_client(args.repo, global, &config)?;

        let response = match &args.set {
            Some(date) => {
                let date = parse_date(date)?;
                repo.set_milestone_start(args.milestone, date, &global.cancel).await?
            }
            None => repo.get_milestone_start(args.milestone, &global.cancel).await?,
        };

        let Some(start) = response.into_value() else {
            bail!("Milestone {} has no start date", args.milestone);
        };
        global.writer().write(&StartDateView(start))
    }

    /// List release reports
    async fn releases(&self, args: &RepoArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let repo = self.get_client(args.repo, global, &config)?;

        let releases: Vec<ReleaseRow> = repo
            .get_release_reports(&global.cancel)
            .await?
            .into_value()
            .unwrap_or_default()
            .into_iter()
            .map(ReleaseRow)
            .collect();

        global.writer().write_list(&releases, "No release reports found.")
    }

    /// Create a release report
    async fn create_release(&self, args: &CreateReleaseArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let repo = self.get_client(args.repo, global, &config)?;

        let request = CreateReleaseReportRequest {
            title: args.title.clone(),
            description: args.description.clone(),
            start_date: parse_date(&args.start)?,
            desired_end_date: parse_date(&args.end)?,
            repositories: args.repos.clone(),
        };
        if request.desired_end_date < request.start_date {
            bail!("--end must not be before --start");
        }

        let Some(report) = repo.create_release_report(&request, &global.cancel).await?.into_value() else {
            bail!("ZenHub returned no release report");
        };

        let writer = global.writer();
        if !writer.is_json() {
            writer.write_success(&format!("Created release report {}", report.release_id));
        }
        writer.write(&ReleaseView(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn parse(args: &[&str]) -> RepoSubcommand {
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Repo(cmd) => cmd.command,
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_create_release() {
        let cmd = parse(&[
            "zh", "repo", "create-release", ".", "--title", "v1", "--start", "2019-11-19", "--end",
            "2019-12-19", "--repos", "1", "2",
        ]);
        match cmd {
            RepoSubcommand::CreateRelease(args) => {
                assert_eq!(args.repo, RepoArg::Default);
                assert_eq!(args.repos, vec![1, 2]);
                assert_eq!(args.description, "");
            }
            other => panic!("unexpected subcommand {:?}", other),
        }
    }

    #[test]
    fn test_parse_milestone_set() {
        match parse(&["zh", "repo", "milestone-start", "1", "1", "--set", "2019-11-01"]) {
            RepoSubcommand::MilestoneStart(args) => {
                assert_eq!(args.milestone, 1);
                assert_eq!(args.set.as_deref(), Some("2019-11-01"));
            }
            other => panic!("unexpected subcommand {:?}", other),
        }
    }

    #[test]
    fn test_workspace_row_handles_missing_description() {
        let workspace: Workspace = serde_json::from_value(serde_json::json!({
            "name": "Design and UX",
            "description": null,
            "id": "5d0a7a9741fd098f6b7f58ac",
            "repositories": [12345678]
        }))
        .unwrap();

        let row = WorkspaceRow(workspace).table_row(false);
        assert_eq!(row, vec!["5d0a7a9741fd098f6b7f58ac", "Design and UX", "1", "-"]);
    }
}

//
//  zenhub-cli
//  cli/release.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Release report commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::common::IssueRef;
use crate::api::models::{EditReleaseReportRequest, ReleaseReport, ReleaseState};
use crate::api::ReleaseClient;
use crate::config::Config;
use crate::output::{format_state, or_dash, print_field, print_header, TableOutput};
use crate::util::{format_date, parse_date};

use super::epic::IssueRow;
use super::{GlobalOptions, RepoArg};

/// Manage release reports
#[derive(Args, Debug)]
pub struct ReleaseCommand {
    #[command(subcommand)]
    pub command: ReleaseSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ReleaseSubcommand {
    /// Show a release report
    View(ReleaseArgs),

    /// Edit a release report
    Edit(EditArgs),

    /// List the issues in a release report
    Issues(ReleaseArgs),

    /// Add issues to a release report
    #[command(name = "add-issues")]
    AddIssues(ReleaseIssuesArgs),

    /// Remove issues from a release report
    #[command(name = "remove-issues")]
    RemoveIssues(ReleaseIssuesArgs),

    /// Connect a repository to a release report
    #[command(name = "add-repo")]
    AddRepo(ReleaseRepoArgs),

    /// Disconnect a repository from a release report
    #[command(name = "remove-repo")]
    RemoveRepo(ReleaseRepoArgs),
}

#[derive(Args, Debug)]
pub struct ReleaseArgs {
    /// Release report id
    pub id: String,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Release report id
    pub id: String,

    /// New title
    #[arg(long, short = 't')]
    pub title: Option<String>,

    /// New description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// New start date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub start: Option<String>,

    /// New desired end date (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub end: Option<String>,

    /// New state
    #[arg(long, short = 's', value_parser = ["open", "closed"])]
    pub state: Option<String>,
}

#[derive(Args, Debug)]
pub struct ReleaseIssuesArgs {
    /// Release report id
    pub id: String,

    /// Issues as REPO_ID:NUMBER
    #[arg(required = true, value_name = "REPO_ID:NUMBER")]
    pub issues: Vec<IssueRef>,
}

#[derive(Args, Debug)]
pub struct ReleaseRepoArgs {
    /// Release report id
    pub id: String,

    /// Repository id, or '.' for the configured default
    pub repo: RepoArg,
}

// Display types

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(super) struct ReleaseView(pub ReleaseReport);

impl TableOutput for ReleaseView {
    fn print_table(&self, color: bool) {
        let report = &self.0;
        print_header(report.title.as_deref().unwrap_or(&report.release_id));
        print_field("ID", &report.release_id, color);
        print_field("State", &format_state(&or_dash(report.state), color), color);
        print_field("Start", &or_dash(report.start_date.as_ref().map(format_date)), color);
        print_field(
            "Desired end",
            &or_dash(report.desired_end_date.as_ref().map(format_date)),
            color,
        );
        if let Some(closed_at) = &report.closed_at {
            print_field("Closed", &format_date(closed_at), color);
        }
        if !report.repositories.is_empty() {
            let repos: Vec<String> = report.repositories.iter().map(u64::to_string).collect();
            print_field("Repositories", &repos.join(", "), color);
        }
        if let Some(description) = report.description.as_deref().filter(|d| !d.is_empty()) {
            println!();
            println!("{}", description);
        }
    }
}

impl EditArgs {
    fn changes(&self) -> Result<EditReleaseReportRequest> {
        Ok(EditReleaseReportRequest {
            title: self.title.clone(),
            description: self.description.clone(),
            start_date: self.start.as_deref().map(parse_date).transpose()?,
            desired_end_date: self.end.as_deref().map(parse_date).transpose()?,
            state: self
                .state
                .as_deref()
                .map(str::parse::<ReleaseState>)
                .transpose()?,
        })
    }
}

impl ReleaseCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ReleaseSubcommand::View(args) => self.view(args, global).await,
            ReleaseSubcommand::Edit(args) => self.edit(args, global).await,
            ReleaseSubcommand::Issues(args) => self.issues(args, global).await,
            ReleaseSubcommand::AddIssues(args) => self.add_issues(args, global).await,
            ReleaseSubcommand::RemoveIssues(args) => self.remove_issues(args, global).await,
            ReleaseSubcommand::AddRepo(args) => self.add_repo(args, global).await,
            ReleaseSubcommand::RemoveRepo(args) => self.remove_repo(args, global).await,
        }
    }

    fn get_client(&self, id: &str, global: &GlobalOptions, config: &Config) -> Result<ReleaseClient> {
        Ok(global.client(config)?.release(id)?)
    }

    /// Show a report
    async fn view(&self, args: &ReleaseArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let release = self.get_client(&args.id, global, &config)?;

        let Some(report) = release.get_report(&global.cancel).await?.into_value() else {
            bail!("ZenHub returned no data for release {}", release.release_id());
        };
        global.writer().write(&ReleaseView(report))
    }

    /// Edit a report
    async fn edit(&self, args: &EditArgs, global: &GlobalOptions) -> Result<()> {
        let changes = args.changes()?;
        if changes.is_empty() {
            bail!("Nothing to change. Pass at least one of --title, --description, --start, --end, --state");
        }

        let config = Config::load()?;
        let release = self.get_client(&args.id, global, &config)?;

        let response = release.edit_report(&changes, &global.cancel).await?;
        let writer = global.writer();
        match response.into_value() {
            Some(report) => writer.write(&ReleaseView(report)),
            None => {
                writer.write_success(&format!("Updated release {}", release.release_id()));
                Ok(())
            }
        }
    }

    /// List issues
    async fn issues(&self, args: &ReleaseArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let release = self.get_client(&args.id, global, &config)?;

        let issues: Vec<IssueRow> = release
            .get_issues(&global.cancel)
            .await?
            .into_value()
            .unwrap_or_default()
            .into_iter()
            .map(IssueRow)
            .collect();

        global.writer().write_list(&issues, "No issues in this release.")
    }

    /// Add issues
    async fn add_issues(&self, args: &ReleaseIssuesArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let release = self.get_client(&args.id, global, &config)?;

        release.add_issues(&args.issues, &global.cancel).await?;

        global.writer().write_success(&format!(
            "Added {} issue(s) to release {}",
            args.issues.len(),
            release.release_id()
        ));
        Ok(())
    }

    /// Remove issues
    async fn remove_issues(&self, args: &ReleaseIssuesArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let release = self.get_client(&args.id, global, &config)?;

        release.remove_issues(&args.issues, &global.cancel).await?;

        global.writer().write_success(&format!(
            "Removed {} issue(s) from release {}",
            args.issues.len(),
            release.release_id()
        ));
        Ok(())
    }

    /// Connect a repository
    async fn add_repo(&self, args: &ReleaseRepoArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let repo_id = args.repo.resolve(&config)?;
        let release = self.get_client(&args.id, global, &config)?;

        release.add_repository(repo_id, &global.cancel).await?;

        global.writer().write_success(&format!(
            "Connected repository {} to release {}",
            repo_id,
            release.release_id()
        ));
        Ok(())
    }

    /// Disconnect a repository
    async fn remove_repo(&self, args: &ReleaseRepoArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let repo_id = args.repo.resolve(&config)?;
        let release = self.get_client(&args.id, global, &config)?;

        release.remove_repository(repo_id, &global.cancel).await?;

        global.writer().write_success(&format!(
            "Disconnected repository {} from release {}",
            repo_id,
            release.release_id()
        ));
        Ok(())
    }
}

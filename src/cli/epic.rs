//
//  zenhub-cli
//  cli/epic.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Epic commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::api::common::IssueRef;
use crate::api::models::{EpicDetails, IssueDetails};
use crate::api::EpicClient;
use crate::config::Config;
use crate::output::{format_bool, format_issue_ref, or_dash, print_field, print_header, TableBuilder, TableOutput};

use super::{GlobalOptions, RepoArg};

/// Work with epics
#[derive(Args, Debug)]
pub struct EpicCommand {
    #[command(subcommand)]
    pub command: EpicSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum EpicSubcommand {
    /// Show an epic and its issues
    View(EpicArgs),

    /// Add issues to an epic
    Add(EpicIssuesArgs),

    /// Remove issues from an epic
    #[command(visible_alias = "rm")]
    Remove(EpicIssuesArgs),

    /// Convert an epic back into a plain issue
    #[command(name = "to-issue")]
    ToIssue(EpicArgs),
}

#[derive(Args, Debug)]
pub struct EpicArgs {
    /// Repository id, or '.' for the configured default
    pub repo: RepoArg,

    /// Issue number of the epic
    pub number: u64,
}

#[derive(Args, Debug)]
pub struct EpicIssuesArgs {
    #[command(flatten)]
    pub epic: EpicArgs,

    /// Issues as REPO_ID:NUMBER
    #[arg(required = true, value_name = "REPO_ID:NUMBER")]
    pub issues: Vec<IssueRef>,
}

// Display types

/// One issue in an epic, release or board listing.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(super) struct IssueRow(pub IssueDetails);

impl TableOutput for IssueRow {
    fn print_table(&self, color: bool) {
        println!("{}", self.table_row(color).join("  "));
    }

    fn table_headers() -> &'static [&'static str] {
        &["ISSUE", "ESTIMATE", "PIPELINE", "EPIC"]
    }

    fn table_row(&self, color: bool) -> Vec<String> {
        let issue = &self.0;
        let reference = match (issue.repo_id, issue.issue_number) {
            (Some(repo_id), Some(number)) => format_issue_ref(repo_id, number, color),
            (None, Some(number)) => format!("#{}", number),
            _ => "-".to_string(),
        };
        vec![
            reference,
            or_dash(issue.estimate.map(|e| e.value)),
            issue
                .pipeline
                .as_ref()
                .map(|p| p.display_name().to_string())
                .unwrap_or_else(|| "-".to_string()),
            format_bool(issue.is_epic, color),
        ]
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct EpicView {
    #[serde(skip)]
    epic: IssueRef,
    details: EpicDetails,
}

impl TableOutput for EpicView {
    fn print_table(&self, color: bool) {
        print_header(&format!("Epic {}", self.epic));
        print_field("Estimate", &or_dash(self.details.estimate.map(|e| e.value)), color);
        print_field(
            "Total estimate",
            &or_dash(self.details.total_epic_estimates.map(|e| e.value)),
            color,
        );
        print_field(
            "Pipeline",
            self.details
                .pipeline
                .as_ref()
                .map(|p| p.display_name())
                .unwrap_or("-"),
            color,
        );
        print_field("Issues", &self.details.issues.len().to_string(), color);

        if !self.details.issues.is_empty() {
            println!();
            TableBuilder::new()
                .color(color)
                .headers(IssueRow::table_headers().iter().copied())
                .rows(self.details.issues.iter().cloned().map(|i| IssueRow(i).table_row(color)))
                .print();
        }
    }
}

impl EpicCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            EpicSubcommand::View(args) => self.view(args, global).await,
            EpicSubcommand::Add(args) => self.add(args, global).await,
            EpicSubcommand::Remove(args) => self.remove(args, global).await,
            EpicSubcommand::ToIssue(args) => self.to_issue(args, global).await,
        }
    }

    fn get_client(&self, args: &EpicArgs, global: &GlobalOptions) -> Result<EpicClient> {
        let config = Config::load()?;
        let repo_id = args.repo.resolve(&config)?;
        Ok(global.client(&config)?.epic(repo_id, args.number)?)
    }

    /// Show an epic
    async fn view(&self, args: &EpicArgs, global: &GlobalOptions) -> Result<()> {
        let epic = self.get_client(args, global)?;

        let Some(details) = epic.get_details(&global.cancel).await?.into_value() else {
            bail!("ZenHub returned no data for epic {}", epic.epic_ref());
        };

        global.writer().write(&EpicView {
            epic: epic.epic_ref(),
            details,
        })
    }

    /// Add issues
    async fn add(&self, args: &EpicIssuesArgs, global: &GlobalOptions) -> Result<()> {
        let epic = self.get_client(&args.epic, global)?;

        epic.add_issues(&args.issues, &global.cancel).await?;

        global.writer().write_success(&format!(
            "Added {} issue(s) to epic {}",
            args.issues.len(),
            epic.epic_ref()
        ));
        Ok(())
    }

    /// Remove issues
    async fn remove(&self, args: &EpicIssuesArgs, global: &GlobalOptions) -> Result<()> {
        let epic = self.get_client(&args.epic, global)?;

        epic.remove_issues(&args.issues, &global.cancel).await?;

        global.writer().write_success(&format!(
            "Removed {} issue(s) from epic {}",
            args.issues.len(),
            epic.epic_ref()
        ));
        Ok(())
    }

    /// Convert back to an issue
    async fn to_issue(&self, args: &EpicArgs, global: &GlobalOptions) -> Result<()> {
        let epic = self.get_client(args, global)?;

        epic.convert_to_issue(&global.cancel).await?;

        global
            .writer()
            .write_success(&format!("Converted epic {} to an issue", epic.epic_ref()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Estimate;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_add_requires_issues() {
        assert!(Cli::try_parse_from(["zh", "epic", "add", "1", "2"]).is_err());

        let cli = Cli::try_parse_from(["zh", "epic", "add", "1", "2", "1:3", "1:4"]).unwrap();
        match cli.command {
            Commands::Epic(EpicCommand {
                command: EpicSubcommand::Add(args),
            }) => assert_eq!(args.issues.len(), 2),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_issue_row() {
        let row = IssueRow(IssueDetails {
            repo_id: Some(103707262),
            issue_number: Some(3161),
            estimate: Some(Estimate { value: 2.0 }),
            ..Default::default()
        })
        .table_row(false);

        assert_eq!(row, vec!["103707262#3161", "2", "-", "No"]);
    }
}

//
//  zenhub-cli
//  cli/issue.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Issue commands

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;
use serde::Serialize;

use crate::api::common::IssueRef;
use crate::api::models::{IssueDependency, IssueDetails, IssueEvent};
use crate::api::IssueClient;
use crate::config::Config;
use crate::output::{format_bool, or_dash, print_field, print_header, TableOutput};
use crate::util::format_relative_time;

use super::{resolve_workspace, GlobalOptions, RepoArg};

/// Work with issues
#[derive(Args, Debug)]
pub struct IssueCommand {
    #[command(subcommand)]
    pub command: IssueSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum IssueSubcommand {
    /// Show estimate, pipeline and epic status of an issue
    View(IssueArgs),

    /// Show the ZenHub event history of an issue
    Events(IssueArgs),

    /// Set the estimate of an issue
    Estimate(EstimateArgs),

    /// Move an issue to another pipeline
    Move(MoveArgs),

    /// Convert an issue into an epic
    #[command(name = "to-epic")]
    ToEpic(ToEpicArgs),

    /// Mark an issue as blocked by another
    Block(DependencyArgs),

    /// Remove a blocked-by relationship
    Unblock(DependencyArgs),
}

/// Identifies one issue
#[derive(Args, Debug)]
pub struct IssueArgs {
    /// Repository id, or '.' for the configured default
    pub repo: RepoArg,

    /// Issue number
    pub number: u64,
}

#[derive(Args, Debug)]
pub struct EstimateArgs {
    #[command(flatten)]
    pub issue: IssueArgs,

    /// New estimate in story points
    pub value: u32,
}

#[derive(Args, Debug)]
pub struct MoveArgs {
    #[command(flatten)]
    pub issue: IssueArgs,

    /// Target pipeline id
    #[arg(long, short = 'p')]
    pub pipeline: String,

    /// Position in the pipeline, 0 is the top
    #[arg(long, default_value = "0")]
    pub position: u32,

    /// Workspace id; without one the repository's oldest workspace is used
    #[arg(long, short = 'w')]
    pub workspace: Option<String>,
}

#[derive(Args, Debug)]
pub struct ToEpicArgs {
    #[command(flatten)]
    pub issue: IssueArgs,

    /// Issue to place in the new epic, as REPO_ID:NUMBER (repeatable)
    #[arg(long = "add", value_name = "REPO_ID:NUMBER")]
    pub add: Vec<IssueRef>,
}

#[derive(Args, Debug)]
pub struct DependencyArgs {
    #[command(flatten)]
    pub issue: IssueArgs,

    /// The blocking issue, as REPO_ID:NUMBER
    #[arg(long, value_name = "REPO_ID:NUMBER")]
    pub by: IssueRef,
}

// Display types

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct IssueView {
    #[serde(skip)]
    issue: IssueRef,
    details: IssueDetails,
}

impl TableOutput for IssueView {
    fn print_table(&self, color: bool) {
        print_header(&format!("Issue {}", self.issue));
        print_field(
            "Estimate",
            &or_dash(self.details.estimate.map(|e| e.value)),
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
        print_field("Epic", &format_bool(self.details.is_epic, color), color);
        print_field(
            "+1s",
            &self.details.plus_ones.len().to_string(),
            color,
        );

        if self.details.pipelines.len() > 1 {
            println!();
            println!("Workspaces:");
            for pipeline in &self.details.pipelines {
                println!(
                    "  {} {}",
                    pipeline.workspace_id.as_deref().unwrap_or("-"),
                    pipeline.display_name()
                );
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct EventRow(IssueEvent);

impl TableOutput for EventRow {
    fn print_table(&self, color: bool) {
        println!("{}", self.table_row(color).join("  "));
    }

    fn table_headers() -> &'static [&'static str] {
        &["WHEN", "USER", "EVENT", "CHANGE"]
    }

    fn table_row(&self, color: bool) -> Vec<String> {
        let event = &self.0;
        let change = match (&event.from_estimate, &event.to_estimate) {
            (from, Some(to)) => format!("estimate {} -> {}", or_dash(from.map(|e| e.value)), to.value),
            _ => match (&event.from_pipeline, &event.to_pipeline) {
                (Some(from), Some(to)) => format!("{} -> {}", from.display_name(), to.display_name()),
                (None, Some(to)) => format!("-> {}", to.display_name()),
                _ => String::new(),
            },
        };
        let kind = if color {
            style(&event.event_type).cyan().to_string()
        } else {
            event.event_type.clone()
        };

        vec![
            event
                .created_at
                .as_ref()
                .map(format_relative_time)
                .unwrap_or_else(|| "-".to_string()),
            or_dash(event.user_id),
            kind,
            change,
        ]
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct DependencyView(IssueDependency);

impl TableOutput for DependencyView {
    fn print_table(&self, color: bool) {
        print_field("Blocking", &self.0.blocking.to_string(), color);
        print_field("Blocked", &self.0.blocked.to_string(), color);
    }
}

impl IssueCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            IssueSubcommand::View(args) => self.view(args, global).await,
            IssueSubcommand::Events(args) => self.events(args, global).await,
            IssueSubcommand::Estimate(args) => self.estimate(args, global).await,
            IssueSubcommand::Move(args) => self.move_issue(args, global).await,
            IssueSubcommand::ToEpic(args) => self.to_epic(args, global).await,
            IssueSubcommand::Block(args) => self.block(args, global).await,
            IssueSubcommand::Unblock(args) => self.unblock(args, global).await,
        }
    }

    fn get_client(&self, args: &IssueArgs, global: &GlobalOptions, config: &Config) -> Result<IssueClient> {
        let repo_id = args.repo.resolve(config)?;
        let client = global.client(config)?;
        Ok(client.issue(repo_id, args.number)?)
    }

    /// Show issue details
    async fn view(&self, args: &IssueArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let issue = self.get_client(args, global, &config)?;

        let Some(details) = issue.get_details(&global.cancel).await?.into_value() else {
            bail!("ZenHub returned no data for issue {}", issue.issue_ref());
        };

        global.writer().write(&IssueView {
            issue: issue.issue_ref(),
            details,
        })
    }

    /// Show issue events
    async fn events(&self, args: &IssueArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let issue = self.get_client(args, global, &config)?;

        let events: Vec<EventRow> = issue
            .get_events(&global.cancel)
            .await?
            .into_value()
            .unwrap_or_default()
            .into_iter()
            .map(EventRow)
            .collect();

        global.writer().write_list(&events, "No events found.")
    }

    /// Set an estimate
    async fn estimate(&self, args: &EstimateArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let issue = self.get_client(&args.issue, global, &config)?;

        issue.set_estimate(args.value, &global.cancel).await?;

        global.writer().write_success(&format!(
            "Set estimate of {} to {}",
            issue.issue_ref(),
            args.value
        ));
        Ok(())
    }

    /// Move to a pipeline
    async fn move_issue(&self, args: &MoveArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let issue = self.get_client(&args.issue, global, &config)?;

        match resolve_workspace(args.workspace.as_deref(), &config) {
            Some(workspace_id) => {
                issue
                    .move_to_pipeline(&workspace_id, &args.pipeline, args.position, &global.cancel)
                    .await?;
            }
            None => {
                issue
                    .move_to_pipeline_in_default_workspace(&args.pipeline, args.position, &global.cancel)
                    .await?;
            }
        }

        global.writer().write_success(&format!(
            "Moved {} to pipeline {} at position {}",
            issue.issue_ref(),
            args.pipeline,
            args.position
        ));
        Ok(())
    }

    /// Convert to an epic
    async fn to_epic(&self, args: &ToEpicArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let issue = self.get_client(&args.issue, global, &config)?;

        issue.convert_to_epic(&args.add, &global.cancel).await?;

        global.writer().write_success(&format!(
            "Converted {} to an epic with {} issue(s)",
            issue.issue_ref(),
            args.add.len()
        ));
        Ok(())
    }

    /// Add a dependency
    async fn block(&self, args: &DependencyArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let issue = self.get_client(&args.issue, global, &config)?;

        let created = issue.add_blocked_by(&args.by, &global.cancel).await?;
        let dependency = created
            .into_value()
            .unwrap_or_else(|| IssueDependency::new(args.by, issue.issue_ref()));

        let writer = global.writer();
        if writer.is_json() {
            writer.write(&DependencyView(dependency))?;
        } else {
            writer.write_success(&format!(
                "{} is now blocked by {}",
                dependency.blocked, dependency.blocking
            ));
        }
        Ok(())
    }

    /// Remove a dependency
    async fn unblock(&self, args: &DependencyArgs, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let issue = self.get_client(&args.issue, global, &config)?;

        issue.remove_blocked_by(&args.by, &global.cancel).await?;

        global.writer().write_success(&format!(
            "{} is no longer blocked by {}",
            issue.issue_ref(),
            args.by
        ));
        Ok(())
    }
}

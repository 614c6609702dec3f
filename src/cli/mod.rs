//
//  zenhub-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod completion;
mod config;
mod epic;
mod issue;
mod release;
mod repo;

pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use epic::EpicCommand;
pub use issue::IssueCommand;
pub use release::ReleaseCommand;
pub use repo::RepoCommand;

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use crate::api::ZenHubClient;
use crate::auth::{resolve_token, TOKEN_ENV};
use crate::config::Config;
use crate::output::{OutputFormat, OutputWriter};

/// ZenHub CLI - Work with ZenHub boards from the command line
#[derive(Parser, Debug)]
#[command(
    name = "zh",
    version,
    about = "Work with ZenHub from the command line",
    long_about = "zh is a CLI for the ZenHub REST API.\n\n\
                  It brings estimates, pipelines, epics, dependencies and release reports to your terminal.",
    propagate_version = true,
    after_help = "Use 'zh <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// ZenHub API token, or '-' to read it from stdin
    #[arg(long, global = true, env = TOKEN_ENV, hide_env_values = true)]
    pub token: Option<String>,

    /// API endpoint, overriding the config file
    #[arg(long, global = true, env = "ZENHUB_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Fired on Ctrl-C; every API call observes it.
    #[arg(skip)]
    pub cancel: CancellationToken,
}

impl GlobalOptions {
    /// Output writer for the `--json` flag.
    pub fn writer(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_json_flag(self.json))
    }

    /// Builds an API client from the token and the config file.
    pub fn client(&self, config: &Config) -> Result<ZenHubClient> {
        let credential = resolve_token(self.token.as_deref())?;
        let options = config.client_options_with(self.endpoint.as_deref())?;
        Ok(ZenHubClient::with_options(credential.token(), options)?)
    }
}

/// A repository id on the command line, or `.` for the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoArg {
    Default,
    Id(u64),
}

impl RepoArg {
    /// Resolves `.` through `defaults.repo_id`.
    pub fn resolve(self, config: &Config) -> Result<u64> {
        match self {
            Self::Id(id) => Ok(id),
            Self::Default => config.defaults.repo_id.ok_or_else(|| {
                anyhow!("No default repository configured. Run 'zh config set repo_id <ID>' first.")
            }),
        }
    }
}

impl FromStr for RepoArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s == "." {
            return Ok(Self::Default);
        }
        match s.parse::<u64>() {
            Ok(0) => Err("repository id must be non-zero".to_string()),
            Ok(id) => Ok(Self::Id(id)),
            Err(_) => Err(format!("expected a repository id or '.', got '{}'", s)),
        }
    }
}

impl fmt::Display for RepoArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("."),
            Self::Id(id) => write!(f, "{}", id),
        }
    }
}

/// `--workspace`, falling back to `defaults.workspace_id`.
pub(crate) fn resolve_workspace(flag: Option<&str>, config: &Config) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| config.defaults.workspace_id.clone())
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Work with issues: estimates, pipelines, dependencies
    #[command(visible_alias = "i")]
    Issue(IssueCommand),

    /// Work with epics
    Epic(EpicCommand),

    /// Repository-level views: boards, epics, workspaces
    #[command(visible_alias = "r")]
    Repo(RepoCommand),

    /// Manage release reports
    Release(ReleaseCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

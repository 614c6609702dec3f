//
//  zenhub-cli
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `zh config`: read and change `config.toml`.
//!
//! Keys are `endpoint`, `timeout_secs`, `repo_id` and `workspace_id`; clap
//! rejects anything else before the file is touched.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::config::{Config, KEYS};
use crate::output::{or_dash, print_field, TableOutput};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print one value
    Get(KeyArgs),

    /// Store a value
    Set(SetArgs),

    /// Remove a value, restoring its default
    Unset(KeyArgs),

    /// Show every key
    #[command(visible_alias = "ls")]
    List,

    /// Print where the file lives
    Path,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    #[arg(value_parser = KEYS.to_vec())]
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    #[arg(value_parser = KEYS.to_vec())]
    pub key: String,

    pub value: String,
}

/// One key and its stored value.
#[derive(Debug, Serialize)]
struct ConfigEntry {
    key: String,
    value: Option<String>,
}

impl TableOutput for ConfigEntry {
    fn print_table(&self, color: bool) {
        print_field(&self.key, &or_dash(self.value.as_deref()), color);
    }

    fn table_headers() -> &'static [&'static str] {
        &["KEY", "VALUE"]
    }

    fn table_row(&self, _color: bool) -> Vec<String> {
        vec![self.key.clone(), or_dash(self.value.as_deref())]
    }
}

#[derive(Debug, Serialize)]
struct ConfigLocation {
    path: PathBuf,
    exists: bool,
}

impl TableOutput for ConfigLocation {
    fn print_table(&self, _color: bool) {
        println!("{}", self.path.display());
    }
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let writer = global.writer();
        let mut config = Config::load()?;

        match &self.command {
            ConfigSubcommand::Get(args) => {
                let value = config.get(&args.key);
                if value.is_none() && !writer.is_json() {
                    bail!("'{}' is not set", args.key);
                }
                writer.write(&ConfigEntry {
                    key: args.key.clone(),
                    value,
                })
            }
            ConfigSubcommand::Set(args) => {
                config.set(&args.key, &args.value)?;
                config.save()?;
                writer.write_success(&format!("{} = {}", args.key, args.value.trim()));
                Ok(())
            }
            ConfigSubcommand::Unset(args) => {
                config.unset(&args.key)?;
                config.save()?;
                writer.write_success(&format!("{} cleared", args.key));
                Ok(())
            }
            ConfigSubcommand::List => {
                let entries: Vec<ConfigEntry> = config
                    .entries()
                    .into_iter()
                    .map(|(key, value)| ConfigEntry {
                        key: key.to_string(),
                        value,
                    })
                    .collect();
                writer.write_list(&entries, "No configuration keys")
            }
            ConfigSubcommand::Path => {
                let path = Config::config_path()?;
                let exists = path.exists();
                writer.write(&ConfigLocation { path, exists })
            }
        }
    }
}

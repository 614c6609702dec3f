//
//  zenhub-cli
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration File I/O
//!
//! Thin wrappers over `std::fs` used by [`Config`](super::Config). Errors
//! carry the path so a bad permission or a missing directory is obvious from
//! the CLI's error line.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the whole configuration file.
///
/// # Errors
///
/// Fails if the file is missing, unreadable, or not UTF-8.
pub fn read_config_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Writes the configuration file, creating parent directories first.
///
/// Overwrites any existing file.
pub fn write_config_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

/// Whether a regular file exists at `path`.
pub fn config_exists(path: &Path) -> bool {
    path.is_file()
}

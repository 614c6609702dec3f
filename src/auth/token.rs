//
//  zenhub-cli
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Token Input
//!
//! The CLI never stores tokens. A token arrives per invocation from one of:
//!
//! 1. `--token <TOKEN>`
//! 2. the `ZENHUB_TOKEN` environment variable
//! 3. `--token -`, which reads one line from standard input
//!
//! ## Example
//!
//! ```bash
//! export ZENHUB_TOKEN=...
//! zh issue view 1234567 42
//!
//! pass show zenhub | zh --token - issue view 1234567 42
//! ```

use anyhow::{bail, Context, Result};
use thiserror::Error;

use super::Credential;

/// Neither `--token` nor `ZENHUB_TOKEN` was given.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No API token provided. Pass --token or set the ZENHUB_TOKEN environment variable")]
pub struct MissingToken;

/// Reads a token from standard input.
///
/// Only the first line is read; surrounding whitespace is trimmed.
///
/// # Example
///
/// ```rust,no_run
/// use zenhub_cli::auth::read_token_from_stdin;
///
/// fn main() -> anyhow::Result<()> {
///     let token = read_token_from_stdin()?;
///     println!("Token received ({} characters)", token.len());
///     Ok(())
/// }
/// ```
pub fn read_token_from_stdin() -> Result<String> {
    use std::io::{self, BufRead};

    let stdin = io::stdin();
    let mut line = String::new();
    stdin
        .lock()
        .read_line(&mut line)
        .context("Failed to read token from stdin")?;

    Ok(line.trim().to_string())
}

/// Checks the format of a token.
///
/// A token must be non-empty and contain no whitespace. This does not contact
/// ZenHub; an invalid token is only detected by the 401 it produces.
///
/// ```rust
/// use zenhub_cli::auth::validate_token;
///
/// assert!(validate_token("abc123"));
/// assert!(!validate_token(""));
/// assert!(!validate_token("has space"));
/// ```
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

/// Turns the `--token` value (already merged with `ZENHUB_TOKEN` by clap) into
/// a credential.
///
/// # Errors
///
/// Fails when no token was supplied, when stdin cannot be read, or when the
/// token is malformed.
pub fn resolve_token(flag: Option<&str>) -> Result<Credential> {
    let token = match flag {
        Some("-") => read_token_from_stdin()?,
        Some(token) => token.trim().to_string(),
        None => return Err(MissingToken.into()),
    };

    if !validate_token(&token) {
        bail!("Invalid API token format");
    }

    Ok(Credential::new(token)?)
}

//
//  zenhub-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # ZenHub CLI Library
//!
//! A typed client for the ZenHub REST API and the `zh` command line built
//! on top of it.
//!
//! ## Overview
//!
//! [`api::ZenHubClient`] is the entry point. It owns one request pipeline
//! (authentication, error classification, HTTP transport) and hands out
//! clients scoped to a repository, an issue, an epic or a release report.
//! Every call takes a [`CancellationToken`](tokio_util::sync::CancellationToken)
//! and returns either a typed [`api::Response`] or the raw status and body.
//!
//! ## Module Structure
//!
//! - [`api`]: Pipeline, executor, models and resource clients
//! - [`auth`]: The API token credential
//! - [`config`]: `config.toml` handling
//! - [`cli`]: Command-line interface definitions using clap
//! - [`output`]: Table and JSON rendering
//! - [`util`]: Date helpers and string utilities
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tokio_util::sync::CancellationToken;
//! use zenhub_cli::api::ZenHubClient;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let client = ZenHubClient::new("your-token")?;
//! let cancel = CancellationToken::new();
//!
//! let board = client.repository(1234567)?.get_default_board(&cancel).await?;
//! if let Some(board) = board.into_value() {
//!     for pipeline in &board.pipelines {
//!         println!("{}: {} issue(s)", pipeline.name, pipeline.issues.len());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Each command module handles parsing and execution of its respective
/// functionality.
pub mod cli;

/// ZenHub REST API client.
///
/// Requests flow through an ordered pipeline of steps before reaching the
/// HTTP transport. No request is ever retried.
pub mod api;

/// API token handling.
pub mod auth;

/// Configuration file management.
///
/// - Linux: `~/.config/zh/config.toml`
/// - macOS: `~/Library/Application Support/zh/config.toml`
/// - Windows: `%APPDATA%\zh\config\config.toml`
pub mod config;

/// Output formatting for table and JSON modes.
pub mod output;

/// Utility functions and helpers.
pub mod util;

pub use cli::Cli;
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display, completions and the
/// configuration directory.
pub const APP_NAME: &str = "zh";

/// Application version constant, taken from Cargo.toml.
///
/// ```rust
/// use zenhub_cli::VERSION;
///
/// println!("zh version {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// Standardized exit codes so scripts can tell failures apart.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16-31`: Operation-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments, including an identity rejected before
    /// any request was sent.
    pub const USAGE: i32 = 2;

    /// ZenHub answered 401 or 403. Check the API token.
    pub const AUTH_ERROR: i32 = 4;

    /// ZenHub answered 404.
    pub const NOT_FOUND: i32 = 8;

    /// Operation cancelled by the user, typically with Ctrl+C.
    pub const CANCELLED: i32 = 16;

    /// ZenHub answered 429.
    pub const RATE_LIMIT: i32 = 32;

    /// Maps an error to its exit code.
    ///
    /// Looks through the whole `anyhow` chain for an
    /// [`ApiError`](crate::api::ApiError) or a missing token; anything else
    /// is [`ERROR`].
    ///
    /// ```rust
    /// use zenhub_cli::api::ApiError;
    /// use zenhub_cli::exit_codes;
    ///
    /// let err = anyhow::Error::new(ApiError::Cancelled);
    /// assert_eq!(exit_codes::for_error(&err), exit_codes::CANCELLED);
    /// ```
    pub fn for_error(err: &anyhow::Error) -> i32 {
        use crate::api::ApiError;
        use crate::auth::MissingToken;

        if err.chain().any(|e| e.is::<MissingToken>()) {
            return AUTH_ERROR;
        }

        let Some(api_error) = err.chain().find_map(|e| e.downcast_ref::<ApiError>()) else {
            return ERROR;
        };

        match api_error {
            ApiError::InvalidArgument(_) => USAGE,
            ApiError::Cancelled => CANCELLED,
            ApiError::RequestFailed { status: 401 | 403, .. } => AUTH_ERROR,
            ApiError::RequestFailed { status: 404, .. } => NOT_FOUND,
            ApiError::RequestFailed { status: 429, .. } => RATE_LIMIT,
            _ => ERROR,
        }
    }
}

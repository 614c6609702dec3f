//
//  zenhub-cli
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types
//!
//! This module provides the types shared by every layer of the ZenHub client:
//! the error taxonomy, the typed response wrapper, and the issue reference used
//! in request bodies and dependency payloads.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all API operations
//! - [`Response`] - Deserialized value paired with the HTTP status
//! - [`IssueRef`] - `(repo_id, issue_number)` pair identifying an issue
//!
//! # Example
//!
//! ```rust
//! use zenhub_cli::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::RequestFailed { status: 404, .. }) => println!("Not found"),
//!         Err(ApiError::Cancelled) => println!("Cancelled"),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for all ZenHub API operations.
///
/// | Variant | Raised by | When |
/// |---------|-----------|------|
/// | `InvalidArgument` | scoped clients, factories | before any request is sent |
/// | `RequestFailed` | error classification step | non-2xx response |
/// | `DeserializationFailed` | typed executor | 2xx body does not match the result shape |
/// | `Cancelled` | executor | the cancellation token fired |
/// | `Network` | transport | connection, TLS, DNS or timeout failure |
/// | `InvalidUrl` | executor | endpoint path cannot be joined onto the base URL |
///
/// # Notes
///
/// - Nothing in the pipeline recovers from or retries any of these
/// - The `Network` variant automatically converts from `reqwest::Error`
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required identity or argument was missing or empty.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The remote endpoint answered with a non-success status.
    ///
    /// # Fields
    ///
    /// - `status` - The HTTP status code returned by the server
    /// - `message` - Message extracted from the response body, or the reason phrase
    #[error("Request failed ({status}): {message}")]
    RequestFailed {
        /// HTTP status code of the response.
        status: u16,
        /// Human readable failure description.
        message: String,
    },

    /// A success response body did not match the expected shape.
    #[error("Failed to deserialize response: {0}")]
    DeserializationFailed(String),

    /// The operation's cancellation token fired before it completed.
    #[error("Request cancelled")]
    Cancelled,

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Builds an [`ApiError::InvalidArgument`] naming the offending argument.
    pub fn invalid_argument(name: &str, reason: &str) -> Self {
        Self::InvalidArgument(format!("{}: {}", name, reason))
    }

    /// Returns the HTTP status carried by a `RequestFailed` error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }

    /// Returns `true` for a 401 or 403 response.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401) | Some(403))
    }
}

impl From<url::ParseError> for ApiError {
    fn from(error: url::ParseError) -> Self {
        Self::InvalidUrl(error.to_string())
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// A deserialized response paired with the status it arrived with.
///
/// `value` is `None` when the server answered with an empty body; an empty
/// success body is never treated as a deserialization failure.
///
/// # Example
///
/// ```rust
/// use reqwest::StatusCode;
/// use zenhub_cli::api::common::Response;
///
/// let response = Response::new(Some(42), StatusCode::OK);
/// assert_eq!(response.status(), 200);
/// assert_eq!(response.into_value(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    /// The deserialized body, absent for empty bodies.
    pub value: Option<T>,
    /// The HTTP status of the response.
    pub status: StatusCode,
}

impl<T> Response<T> {
    /// Creates a new typed response.
    pub fn new(value: Option<T>, status: StatusCode) -> Self {
        Self { value, status }
    }

    /// Returns the numeric HTTP status.
    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    /// Borrows the deserialized value.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the response and returns the deserialized value.
    pub fn into_value(self) -> Option<T> {
        self.value
    }
}

/// Reference to a single issue, as ZenHub encodes it on the wire.
///
/// Serializes as `{"repo_id": 1, "issue_number": 2}`. The string form used on
/// the command line is `REPO_ID:ISSUE_NUMBER`.
///
/// # Example
///
/// ```rust
/// use zenhub_cli::api::common::IssueRef;
///
/// let issue: IssueRef = "1234567:42".parse().unwrap();
/// assert_eq!(issue, IssueRef::new(1234567, 42));
/// assert_eq!(issue.to_string(), "1234567:42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueRef {
    /// GitHub repository id.
    pub repo_id: u64,
    /// Issue number within the repository.
    pub issue_number: u64,
}

impl IssueRef {
    /// Creates a new issue reference.
    pub fn new(repo_id: u64, issue_number: u64) -> Self {
        Self {
            repo_id,
            issue_number,
        }
    }

    /// Fails with `InvalidArgument` when either half of the reference is zero.
    pub fn validate(&self, name: &str) -> Result<()> {
        if self.repo_id == 0 {
            return Err(ApiError::invalid_argument(name, "repository id must be non-zero"));
        }
        if self.issue_number == 0 {
            return Err(ApiError::invalid_argument(name, "issue number must be non-zero"));
        }
        Ok(())
    }
}

impl fmt::Display for IssueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.repo_id, self.issue_number)
    }
}

impl FromStr for IssueRef {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        let (repo, number) = s
            .split_once(':')
            .ok_or_else(|| ApiError::invalid_argument("issue", "expected REPO_ID:ISSUE_NUMBER"))?;

        let repo_id = repo
            .trim()
            .parse()
            .map_err(|_| ApiError::invalid_argument("issue", "repository id is not a number"))?;
        let issue_number = number
            .trim()
            .parse()
            .map_err(|_| ApiError::invalid_argument("issue", "issue number is not a number"))?;

        let issue = Self::new(repo_id, issue_number);
        issue.validate("issue")?;
        Ok(issue)
    }
}

/// Rejects a zero repository id.
pub(crate) fn require_repo_id(name: &str, repo_id: u64) -> Result<()> {
    if repo_id == 0 {
        return Err(ApiError::invalid_argument(name, "repository id must be non-zero"));
    }
    Ok(())
}

/// Rejects a zero issue, epic or milestone number.
pub(crate) fn require_number(name: &str, number: u64) -> Result<()> {
    if number == 0 {
        return Err(ApiError::invalid_argument(name, "must be non-zero"));
    }
    Ok(())
}

/// Rejects an empty or whitespace-only identifier.
pub(crate) fn require_non_empty(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ApiError::invalid_argument(name, "must not be empty"));
    }
    Ok(())
}

//
//  zenhub-cli
//  api/models/releases.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Release report types.
//!
//! A release report groups issues from one or more repositories under a
//! target date range. Reports are created from a repository and then addressed
//! by their `release_id`.
//!
//! # States
//!
//! * `open` - In progress
//! * `closed` - Shipped or abandoned; `closed_at` is set
//!
//! Any other state string decodes as [`ReleaseState::Unknown`] so a new
//! server-side state does not break reading the report.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::ApiError;

/// State of a release report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseState {
    Open,
    Closed,
    /// A state this client does not recognise.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ReleaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

impl FromStr for ReleaseState {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(ApiError::invalid_argument("state", "expected 'open' or 'closed'")),
        }
    }
}

/// A release report.
///
/// # Fields
///
/// * `release_id` - Report id used in `/p1/reports/release/{id}` paths
/// * `start_date` / `desired_end_date` - Planned window
/// * `closed_at` - Set once the report is closed
/// * `repositories` - Connected repository ids (absent from list responses)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseReport {
    pub release_id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub desired_end_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub state: Option<ReleaseState>,

    #[serde(default)]
    pub repositories: Vec<u64>,
}

impl ReleaseReport {
    /// Whether the report is closed.
    pub fn is_closed(&self) -> bool {
        self.state == Some(ReleaseState::Closed) || self.closed_at.is_some()
    }
}

/// Body of `POST /p1/repositories/{repo_id}/reports/release`.
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use zenhub_cli::api::models::CreateReleaseReportRequest;
///
/// let date = Utc.with_ymd_and_hms(2019, 11, 19, 8, 0, 0).unwrap();
/// let body = CreateReleaseReportRequest {
///     title: String::new(),
///     description: String::new(),
///     start_date: date,
///     desired_end_date: date,
///     repositories: vec![],
/// };
/// assert_eq!(
///     serde_json::to_string(&body).unwrap(),
///     r#"{"title":"","description":"","start_date":"2019-11-19T08:00:00Z","desired_end_date":"2019-11-19T08:00:00Z","repositories":[]}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateReleaseReportRequest {
    pub title: String,
    pub description: String,
    #[serde(with = "crate::util::utc")]
    pub start_date: DateTime<Utc>,
    #[serde(with = "crate::util::utc")]
    pub desired_end_date: DateTime<Utc>,
    /// Additional repositories to include.
    pub repositories: Vec<u64>,
}

/// Body of `PATCH /p1/reports/release/{release_id}`.
///
/// Fields left as `None` are omitted and keep their current value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EditReleaseReportRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::util::utc::option"
    )]
    pub start_date: Option<DateTime<Utc>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::util::utc::option"
    )]
    pub desired_end_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ReleaseState>,
}

impl EditReleaseReportRequest {
    /// Whether no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.start_date.is_none()
            && self.desired_end_date.is_none()
            && self.state.is_none()
    }
}

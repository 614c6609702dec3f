//
//  zenhub-cli
//  api/models/issues.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Issue types.
//!
//! ZenHub layers estimates, pipelines and +1s on top of GitHub issues. These
//! types carry that data; titles, bodies and assignees stay on GitHub.
//!
//! # Event Types
//!
//! * `estimateIssue` - the estimate changed (`from_estimate` / `to_estimate`)
//! * `transferIssue` - the issue moved between pipelines (`from_pipeline` / `to_pipeline`)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::common::IssueRef;

/// A story-point estimate.
///
/// Estimates may be fractional (`0.5`), hence `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Estimate value.
    pub value: f64,
}

/// A pipeline an issue sits in, within one workspace.
///
/// Event payloads carry only the name; issue payloads carry all three fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineRef {
    /// Workspace the pipeline belongs to.
    #[serde(default)]
    pub workspace_id: Option<String>,

    /// Display name, e.g. "In Progress".
    #[serde(default)]
    pub name: Option<String>,

    /// Pipeline id, used when moving issues.
    #[serde(default)]
    pub pipeline_id: Option<String>,
}

impl PipelineRef {
    /// Name for display, or `-` when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("-")
    }
}

/// A +1 left on an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlusOne {
    /// When the +1 was given.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// ZenHub data for a single issue.
///
/// Used for the issue details endpoint and as the element type of boards,
/// epics and release issue lists, each of which fills a different subset.
///
/// # Fields
///
/// * `issue_number` - Present in lists; absent from the single-issue endpoint
/// * `is_epic` - Whether the issue has been converted to an epic
/// * `estimate` - Current estimate, if one is set
/// * `pipeline` - Pipeline in the oldest workspace
/// * `pipelines` - Pipeline per workspace
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IssueDetails {
    /// Issue number.
    #[serde(default)]
    pub issue_number: Option<u64>,

    /// Whether the issue is an epic.
    #[serde(default)]
    pub is_epic: bool,

    /// Repository id.
    #[serde(default)]
    pub repo_id: Option<u64>,

    /// Position within the pipeline.
    #[serde(default)]
    pub position: Option<i64>,

    /// Current estimate.
    #[serde(default)]
    pub estimate: Option<Estimate>,

    /// Pipeline in the oldest workspace.
    #[serde(default)]
    pub pipeline: Option<PipelineRef>,

    /// Pipelines across every workspace the repository belongs to.
    #[serde(default)]
    pub pipelines: Vec<PipelineRef>,

    /// +1s on the issue.
    #[serde(default)]
    pub plus_ones: Vec<PlusOne>,
}

/// One entry in an issue's ZenHub history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueEvent {
    /// GitHub user id of the actor.
    #[serde(default)]
    pub user_id: Option<u64>,

    /// Event kind, e.g. `estimateIssue` or `transferIssue`.
    #[serde(rename = "type")]
    pub event_type: String,

    /// When the event happened.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub from_estimate: Option<Estimate>,

    #[serde(default)]
    pub to_estimate: Option<Estimate>,

    #[serde(default)]
    pub from_pipeline: Option<PipelineRef>,

    #[serde(default)]
    pub to_pipeline: Option<PipelineRef>,

    /// Workspace a transfer happened in.
    #[serde(default)]
    pub workspace_id: Option<String>,
}

/// Body of `PUT .../estimate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// New estimate.
    pub estimate: u32,
}

/// Body of `POST .../moves`.
///
/// `position` is a zero-based index within the target pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIssueRequest {
    /// Target pipeline.
    pub pipeline_id: String,
    /// Position within the pipeline.
    pub position: u32,
}

/// Body of `POST .../convert_to_epic`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConvertToEpicRequest {
    /// Issues to place in the new epic.
    pub issues: Vec<IssueRef>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shapes() {
        let estimate = serde_json::to_string(&EstimateRequest { estimate: 15 }).unwrap();
        assert_eq!(estimate, r#"{"estimate":15}"#);

        let mv = MoveIssueRequest {
            pipeline_id: "pipelineDummy".to_string(),
            position: 1,
        };
        assert_eq!(
            serde_json::to_string(&mv).unwrap(),
            r#"{"pipeline_id":"pipelineDummy","position":1}"#
        );

        let convert = ConvertToEpicRequest::default();
        assert_eq!(serde_json::to_string(&convert).unwrap(), r#"{"issues":[]}"#);
    }

    #[test]
    fn test_partial_board_issue() {
        let issue: IssueDetails =
            serde_json::from_str(r#"{"issue_number":142,"is_epic":false}"#).unwrap();
        assert_eq!(issue.issue_number, Some(142));
        assert!(issue.estimate.is_none());
        assert!(issue.pipelines.is_empty());
    }

    #[test]
    fn test_event_type_rename() {
        let event: IssueEvent = serde_json::from_str(
            r#"{"user_id":16717,"type":"transferIssue","to_pipeline":{"name":"Backlog"}}"#,
        )
        .unwrap();
        assert_eq!(event.event_type, "transferIssue");
        assert_eq!(
            event.to_pipeline.as_ref().map(PipelineRef::display_name),
            Some("Backlog")
        );
    }

    #[test]
    fn test_fractional_estimate() {
        let estimate: Estimate = serde_json::from_str(r#"{"value":0.5}"#).unwrap();
        assert_eq!(estimate.value, 0.5);
    }
}

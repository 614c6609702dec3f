//
//  zenhub-cli
//  api/models/epics.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Epic types.

use serde::{Deserialize, Serialize};

use super::issues::{Estimate, IssueDetails, PipelineRef};
use crate::api::common::IssueRef;

/// Full data for one epic, including its child issues.
///
/// `total_epic_estimates` sums the estimates of every child; `estimate` is the
/// epic issue's own estimate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EpicDetails {
    /// Sum of child estimates.
    #[serde(default)]
    pub total_epic_estimates: Option<Estimate>,

    /// The epic's own estimate.
    #[serde(default)]
    pub estimate: Option<Estimate>,

    /// Pipeline in the oldest workspace.
    #[serde(default)]
    pub pipeline: Option<PipelineRef>,

    /// Pipelines across every workspace.
    #[serde(default)]
    pub pipelines: Vec<PipelineRef>,

    /// Issues in the epic.
    #[serde(default)]
    pub issues: Vec<IssueDetails>,
}

/// An epic as listed for a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpicInfo {
    pub issue_number: u64,
    pub repo_id: u64,
    /// GitHub URL of the epic issue.
    #[serde(default)]
    pub issue_url: Option<String>,
}

/// Epics in a repository.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EpicList {
    #[serde(default)]
    pub epic_issues: Vec<EpicInfo>,
}

/// Body that adds and removes issues in one call.
///
/// Shared by the epic `update_issues` endpoint and the release report
/// `issues` endpoint. Both lists are always sent, empty or not.
///
/// ```rust
/// use zenhub_cli::api::common::IssueRef;
/// use zenhub_cli::api::models::UpdateIssuesRequest;
///
/// let body = UpdateIssuesRequest::adding(vec![IssueRef::new(1, 2)]);
/// assert_eq!(
///     serde_json::to_string(&body).unwrap(),
///     r#"{"add_issues":[{"repo_id":1,"issue_number":2}],"remove_issues":[]}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpdateIssuesRequest {
    pub add_issues: Vec<IssueRef>,
    pub remove_issues: Vec<IssueRef>,
}

impl UpdateIssuesRequest {
    /// Only additions.
    pub fn adding(issues: Vec<IssueRef>) -> Self {
        Self {
            add_issues: issues,
            remove_issues: Vec::new(),
        }
    }

    /// Only removals.
    pub fn removing(issues: Vec<IssueRef>) -> Self {
        Self {
            add_issues: Vec::new(),
            remove_issues: issues,
        }
    }

    /// Whether neither list has entries.
    pub fn is_empty(&self) -> bool {
        self.add_issues.is_empty() && self.remove_issues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removing_keeps_empty_add_list() {
        let body = UpdateIssuesRequest::removing(vec![IssueRef::new(13550592, 3)]);
        let json: serde_json::Value = serde_json::to_value(&body).unwrap();
        assert_eq!(json["add_issues"], serde_json::json!([]));
        assert_eq!(json["remove_issues"][0]["issue_number"], 3);
    }

    #[test]
    fn test_epic_list() {
        let list: EpicList = serde_json::from_str(
            r#"{"epic_issues":[{"issue_number":3953,"repo_id":1234567,"issue_url":"https://github.com/o/r/issues/3953"}]}"#,
        )
        .unwrap();
        assert_eq!(list.epic_issues[0].issue_number, 3953);
    }
}

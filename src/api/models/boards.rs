//
//  zenhub-cli
//  api/models/boards.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::{Deserialize, Serialize};

use super::issues::IssueDetails;

/// A workspace board: pipelines in display order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub pipelines: Vec<BoardPipeline>,
}

impl Board {
    /// Finds a pipeline by name, ignoring case.
    pub fn pipeline_named(&self, name: &str) -> Option<&BoardPipeline> {
        self.pipelines
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Total issues across all pipelines.
    pub fn issue_count(&self) -> usize {
        self.pipelines.iter().map(|p| p.issues.len()).sum()
    }
}

/// One column of a board.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BoardPipeline {
    pub id: String,
    pub name: String,
    /// Issues in board order. Each entry carries only number, estimate,
    /// position and epic flag.
    #[serde(default)]
    pub issues: Vec<IssueDetails>,
}

impl BoardPipeline {
    /// Sum of the estimates in this pipeline.
    pub fn total_estimate(&self) -> f64 {
        self.issues
            .iter()
            .filter_map(|issue| issue.estimate.map(|e| e.value))
            .sum()
    }
}

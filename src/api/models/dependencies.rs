//
//  zenhub-cli
//  api/models/dependencies.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Issue dependency types.
//!
//! A dependency says that `blocking` must be done before `blocked` can move.
//! The same shape is used as the response of the create call and as the body
//! of both create and delete.

use serde::{Deserialize, Serialize};

use crate::api::common::IssueRef;

/// A blocking/blocked relationship between two issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueDependency {
    /// The issue that blocks.
    pub blocking: IssueRef,
    /// The issue being blocked.
    pub blocked: IssueRef,
}

impl IssueDependency {
    /// Creates a dependency where `blocking` blocks `blocked`.
    pub fn new(blocking: IssueRef, blocked: IssueRef) -> Self {
        Self { blocking, blocked }
    }
}

/// Body of `POST /p1/dependencies` and `DELETE /p1/dependencies`.
pub type DependencyRequest = IssueDependency;

/// All dependencies touching issues in a repository.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RepoDependencies {
    #[serde(default)]
    pub dependencies: Vec<IssueDependency>,
}

impl RepoDependencies {
    /// Dependencies where `issue` is the blocked side.
    pub fn blockers_of(&self, issue: &IssueRef) -> Vec<IssueRef> {
        self.dependencies
            .iter()
            .filter(|d| &d.blocked == issue)
            .map(|d| d.blocking)
            .collect()
    }
}

//
//  zenhub-cli
//  api/models/workspaces.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use serde::{Deserialize, Serialize};

/// A ZenHub workspace.
///
/// A repository can belong to several workspaces, each with its own board
/// and pipelines. The first workspace returned is the oldest one, which is
/// what the `/p1` "default workspace" endpoints operate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Workspace id, used in `/p2/workspaces/{id}/...` paths.
    pub id: String,

    /// Display name.
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// GitHub ids of the repositories connected to the workspace.
    #[serde(default)]
    pub repositories: Vec<u64>,
}

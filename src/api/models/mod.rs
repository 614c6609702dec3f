//
//  zenhub-cli
//  api/models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! ZenHub API data types.
//!
//! Response shapes and request bodies, grouped by resource. Every response
//! field the API may omit is optional or defaulted, so partial payloads (the
//! board endpoint returns only a handful of issue fields, for example)
//! deserialize into the same types as full ones.
//!
//! # Modules
//!
//! - [`issues`] - Issue details, events, estimates, moves
//! - [`epics`] - Epic details and the epic list
//! - [`boards`] - Board and board pipelines
//! - [`workspaces`] - Workspaces a repository belongs to
//! - [`dependencies`] - Blocking/blocked relationships
//! - [`releases`] - Release reports
//! - [`milestones`] - Milestone start dates

pub mod boards;
pub mod dependencies;
pub mod epics;
pub mod issues;
pub mod milestones;
pub mod releases;
pub mod workspaces;

pub use boards::*;
pub use dependencies::*;
pub use epics::*;
pub use issues::*;
pub use milestones::*;
pub use releases::*;
pub use workspaces::*;

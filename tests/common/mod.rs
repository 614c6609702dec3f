//
//  zenhub-cli
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared stand-in server setup and response fixtures.

#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use zenhub_cli::api::{ClientOptions, ZenHubClient};

pub const REPO_ID: u64 = 1;
pub const ISSUE_NUMBER: u64 = 2;
pub const MILESTONE: u64 = 1;
pub const WORKSPACE_ID: &str = "dummyWorkspace";
pub const RELEASE_ID: &str = "dummyRelease";
pub const PIPELINE_ID: &str = "pipelineDummy";
pub const TOKEN: &str = "dummyToken";
pub const AUTH_HEADER: &str = "x-authentication-token";

/// A client pointed at the stand-in server.
pub fn client(server: &ServerGuard) -> ZenHubClient {
    let options = ClientOptions::default()
        .with_endpoint(&server.url())
        .expect("mock server url");
    ZenHubClient::with_options(TOKEN, options).expect("client")
}

/// A mock that requires the auth header and answers with `status` and `body`.
pub async fn mock_json(
    server: &mut ServerGuard,
    method: &str,
    path: &str,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock(method, path)
        .match_header(AUTH_HEADER, TOKEN)
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Catch-all mocks asserting that nothing at all reaches the server.
pub async fn expect_no_requests(server: &mut ServerGuard) -> Vec<Mock> {
    let mut mocks = Vec::new();
    for method in ["GET", "POST", "PUT", "PATCH", "DELETE"] {
        mocks.push(
            server
                .mock(method, Matcher::Any)
                .expect(0)
                .create_async()
                .await,
        );
    }
    mocks
}

pub async fn assert_all(mocks: &[Mock]) {
    for mock in mocks {
        mock.assert_async().await;
    }
}

pub const ISSUE_DETAILS: &str = r#"{
    "estimate": { "value": 8 },
    "plus_ones": [ { "created_at": "2015-12-11T18:43:22.296Z" } ],
    "pipeline": {
        "name": "QA",
        "pipeline_id": "5d0a7a9741fd098f6b7f58a7",
        "workspace_id": "5d0a7a9741fd098f6b7f58ac"
    },
    "pipelines": [
        {
            "name": "QA",
            "pipeline_id": "5d0a7a9741fd098f6b7f58a7",
            "workspace_id": "5d0a7a9741fd098f6b7f58ac"
        },
        {
            "name": "Done",
            "pipeline_id": "5d0a7cea41fd098f6b7f58b7",
            "workspace_id": "5d0a7cea41fd098f6b7f58b8"
        }
    ],
    "is_epic": true
}"#;

pub const ISSUE_EVENTS: &str = r#"[
    {
        "user_id": 16717,
        "type": "estimateIssue",
        "created_at": "2015-12-11T19:43:22.296Z",
        "from_estimate": { "value": 8 }
    },
    {
        "user_id": 16717,
        "type": "estimateIssue",
        "created_at": "2015-12-11T18:43:22.296Z",
        "from_estimate": { "value": 4 },
        "to_estimate": { "value": 8 }
    },
    {
        "user_id": 16717,
        "type": "estimateIssue",
        "created_at": "2015-12-11T13:43:22.296Z",
        "to_estimate": { "value": 4 }
    },
    {
        "user_id": 16717,
        "type": "transferIssue",
        "created_at": "2015-12-11T12:43:22.296Z",
        "from_pipeline": { "name": "Backlog" },
        "to_pipeline": { "name": "In progress" },
        "workspace_id": "5d0a7a9741fd098f6b7f58ac"
    },
    {
        "user_id": 16717,
        "type": "transferIssue",
        "created_at": "2015-12-11T11:43:22.296Z",
        "to_pipeline": { "name": "Backlog" }
    }
]"#;

pub const REPO_EPICS: &str = r#"{
    "epic_issues": [
        {
            "issue_number": 3953,
            "repo_id": 1234567,
            "issue_url": "https://github.com/RepoOwner/RepoName/issues/3953"
        },
        {
            "issue_number": 1342,
            "repo_id": 1234567,
            "issue_url": "https://github.com/RepoOwner/RepoName/issues/1342"
        }
    ]
}"#;

pub const EPIC_DETAILS: &str = r#"{
    "total_epic_estimates": { "value": 60 },
    "estimate": { "value": 10 },
    "pipeline": {
        "workspace_id": "5d0a7a9741fd098f6b7f58ac",
        "name": "Backlog",
        "pipeline_id": "5d0a7a9741fd098f6b7f58a8"
    },
    "pipelines": [
        {
            "workspace_id": "5d0a7a9741fd098f6b7f58ac",
            "name": "Backlog",
            "pipeline_id": "5d0a7a9741fd098f6b7f58a8"
        },
        {
            "workspace_id": "5d0a7cea41fd098f6b7f58b8",
            "name": "In Progress",
            "pipeline_id": "5d0a7cea41fd098f6b7f58b5"
        }
    ],
    "issues": [
        {
            "issue_number": 3161,
            "is_epic": true,
            "repo_id": 1099029,
            "estimate": { "value": 40 },
            "pipeline": {
                "workspace_id": "5d0a7a9741fd098f6b7f58ac",
                "name": "Backlog",
                "pipeline_id": "5d0a7a9741fd098f6b7f58a8"
            }
        },
        {
            "issue_number": 2,
            "is_epic": false,
            "repo_id": 1234567,
            "estimate": { "value": 10 },
            "pipeline": {
                "workspace_id": "5d0a7a9741fd098f6b7f58ac",
                "name": "Backlog",
                "pipeline_id": "5d0a7a9741fd098f6b7f58a8"
            }
        }
    ]
}"#;

pub const WORKSPACES: &str = r#"[
    {
        "name": "Design and UX",
        "description": null,
        "id": "5d0a7a9741fd098f6b7f58ac",
        "repositories": [12345678, 912345]
    },
    {
        "name": "Roadmap",
        "description": "Feature planning and enhancements",
        "id": "5d0a7cea41fd098f6b7f58b8",
        "repositories": [12345678]
    }
]"#;

pub const BOARD: &str = r#"{
    "pipelines": [
        {
            "id": "595d430add03f01d32460080",
            "name": "New Issues",
            "issues": [
                { "issue_number": 279, "estimate": { "value": 40 }, "position": 0, "is_epic": true },
                { "issue_number": 142, "is_epic": false }
            ]
        },
        {
            "id": "595d430add03f01d32460081",
            "name": "Backlog",
            "issues": [
                { "issue_number": 303, "estimate": { "value": 40 }, "position": 3, "is_epic": false }
            ]
        },
        {
            "id": "595d430add03f01d32460082",
            "name": "To Do",
            "issues": [
                { "issue_number": 380, "estimate": { "value": 1 }, "position": 0, "is_epic": true },
                { "issue_number": 284, "position": 2, "is_epic": false },
                { "issue_number": 329, "estimate": { "value": 8 }, "position": 7, "is_epic": false }
            ]
        }
    ]
}"#;

pub const DEPENDENCIES: &str = r#"{
    "dependencies": [
        {
            "blocking": { "issue_number": 3953, "repo_id": 1234567 },
            "blocked": { "issue_number": 1342, "repo_id": 1234567 }
        },
        {
            "blocking": { "issue_number": 5, "repo_id": 987 },
            "blocked": { "issue_number": 1342, "repo_id": 1234567 }
        }
    ]
}"#;

pub const RELEASE_REPORT: &str = r#"{
    "release_id": "59d3cd520a430a6344fd3bdb",
    "title": "Test release",
    "description": "",
    "start_date": "2017-10-01T19:00:00.000Z",
    "desired_end_date": "2017-10-03T19:00:00.000Z",
    "created_at": "2017-10-03T17:48:02.701Z",
    "closed_at": null,
    "state": "open",
    "repositories": [105683718]
}"#;

pub const REPO_RELEASES: &str = r#"[
    {
        "release_id": "59cbf2fde010f7a5207406e8",
        "title": "Great title for release 1",
        "description": "Great description for release",
        "start_date": "2000-10-10T00:00:00.000Z",
        "desired_end_date": "2010-10-10T00:00:00.000Z",
        "created_at": "2017-09-27T18:50:37.418Z",
        "closed_at": null,
        "state": "open"
    },
    {
        "release_id": "59cbf2fde010f7a5207406e8",
        "title": "Great title for release 2",
        "description": "Great description for release",
        "start_date": "2000-10-10T00:00:00.000Z",
        "desired_end_date": "2010-10-10T00:00:00.000Z",
        "created_at": "2017-09-27T18:50:37.418Z",
        "closed_at": null,
        "state": "open"
    }
]"#;

pub const EDITED_RELEASE: &str = r#"{
    "release_id": "59d3d6438b3f16667f9e7174",
    "title": "Amazing title",
    "description": "Amazing description",
    "start_date": "2007-01-01T00:00:00.000Z",
    "desired_end_date": "2007-01-01T00:00:00.000Z",
    "created_at": "2017-10-03T18:26:11.700Z",
    "closed_at": "2017-10-03T18:26:11.700Z",
    "state": "closed",
    "repositories": [105683567, 105683718]
}"#;

pub const CREATED_RELEASE: &str = r#"{
    "release_id": "59dff4f508399a35a276a1ea",
    "title": "Great title",
    "description": "Amazing description",
    "start_date": "2007-01-01T00:00:00.000Z",
    "desired_end_date": "2007-01-01T00:00:00.000Z",
    "created_at": "2017-10-12T23:04:21.795Z",
    "closed_at": null,
    "state": "open",
    "repositories": [103707262]
}"#;

pub const RELEASE_ISSUES: &str = r#"[
    { "repo_id": 103707262, "issue_number": 2 },
    { "repo_id": 103707262, "issue_number": 3 }
]"#;

pub const DEPENDENCY_BODY: &str =
    r#"{"blocking":{"repo_id":1,"issue_number":2},"blocked":{"repo_id":1,"issue_number":2}}"#;

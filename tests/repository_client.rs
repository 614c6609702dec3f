//
//  zenhub-cli
//  tests/repository_client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use common::*;
use mockito::Matcher;
use tokio_util::sync::CancellationToken;
use zenhub_cli::api::models::CreateReleaseReportRequest;
use zenhub_cli::api::{ApiError, IssueRef};

#[tokio::test]
async fn get_workspaces() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(&mut server, "GET", "/p2/repositories/1/workspaces", 200, WORKSPACES).await;

    let repo = client(&server).repository(REPO_ID).unwrap();
    let workspaces = repo
        .get_workspaces(&CancellationToken::new())
        .await
        .unwrap()
        .into_value()
        .unwrap();

    assert_eq!(workspaces.len(), 2);
    assert_eq!(workspaces[0].name, "Design and UX");
    assert!(workspaces[0].description.is_none());
    assert_eq!(workspaces[1].repositories[0], 12345678);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_board_for_workspace() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(
        &mut server,
        "GET",
        "/p2/workspaces/dummyWorkspace/repositories/1/board",
        200,
        BOARD,
    )
    .await;

    let repo = client(&server).repository(REPO_ID).unwrap();
    let board = repo
        .get_board(WORKSPACE_ID, &CancellationToken::new())
        .await
        .unwrap()
        .into_value()
        .unwrap();

    assert_eq!(board.pipelines[0].id, "595d430add03f01d32460080");
    assert_eq!(board.issue_count(), 6);
    assert_eq!(board.pipeline_named("to do").unwrap().total_estimate(), 9.0);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_default_board() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(&mut server, "GET", "/p1/repositories/1/board", 200, BOARD).await;

    let repo = client(&server).repository(REPO_ID).unwrap();
    let board = repo
        .get_default_board(&CancellationToken::new())
        .await
        .unwrap()
        .into_value()
        .unwrap();

    assert_eq!(board.pipelines[0].id, "595d430add03f01d32460080");
    assert_eq!(board.pipelines.len(), 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn board_rejects_blank_workspace() {
    let mut server = mockito::Server::new_async().await;
    let guards = expect_no_requests(&mut server).await;

    let repo = client(&server).repository(REPO_ID).unwrap();
    let err = repo.get_board("", &CancellationToken::new()).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidArgument(_)));
    assert_all(&guards).await;
}

#[tokio::test]
async fn get_epics() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(&mut server, "GET", "/p1/repositories/1/epics", 200, REPO_EPICS).await;

    let repo = client(&server).repository(REPO_ID).unwrap();
    let epics = repo
        .get_epics(&CancellationToken::new())
        .await
        .unwrap()
        .into_value()
        .unwrap();

    assert_eq!(epics.epic_issues[0].issue_number, 3953);
    assert_eq!(epics.epic_issues[1].repo_id, 1234567);
    mock.assert_async().await;
}

#[tokio::test]
async fn get_dependencies() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(&mut server, "GET", "/p1/repositories/1/dependencies", 200, DEPENDENCIES).await;

    let repo = client(&server).repository(REPO_ID).unwrap();
    let dependencies = repo
        .get_dependencies(&CancellationToken::new())
        .await
        .unwrap()
        .into_value()
        .unwrap();

    assert_eq!(dependencies.dependencies[0].blocking.issue_number, 3953);
    assert_eq!(
        dependencies.blockers_of(&IssueRef::new(1234567, 1342)),
        vec![IssueRef::new(1234567, 3953), IssueRef::new(987, 5)]
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn get_milestone_start() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(
        &mut server,
        "GET",
        "/p1/repositories/1/milestones/1/start_date",
        200,
        r#"{ "start_date": "2010-11-13T01:38:56.842Z" }"#,
    )
    .await;

    let repo = client(&server).repository(REPO_ID).unwrap();
    let start = repo
        .get_milestone_start(MILESTONE, &CancellationToken::new())
        .await
        .unwrap()
        .into_value()
        .unwrap();

    let expected: DateTime<Utc> = "2010-11-13T01:38:56.842Z".parse().unwrap();
    assert_eq!(start.start_date, expected);
    mock.assert_async().await;
}

#[tokio::test]
async fn set_milestone_start_converts_to_utc() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/p1/repositories/1/milestones/1/start_date")
        .match_header(AUTH_HEADER, TOKEN)
        .match_body(r#"{"start_date":"2019-11-01T07:00:00Z"}"#)
        .with_status(200)
        .with_body(r#"{"start_date":"2019-11-01T07:00:00Z"}"#)
        .create_async()
        .await;

    let repo = client(&server).repository(REPO_ID).unwrap();
    let local = FixedOffset::east_opt(2 * 3600)
        .unwrap()
        .with_ymd_and_hms(2019, 11, 1, 9, 0, 0)
        .unwrap();

    let start = repo
        .set_milestone_start(MILESTONE, local, &CancellationToken::new())
        .await
        .unwrap()
        .into_value()
        .unwrap();

    assert_eq!(start.start_date, Utc.with_ymd_and_hms(2019, 11, 1, 7, 0, 0).unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn milestone_zero_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let guards = expect_no_requests(&mut server).await;

    let repo = client(&server).repository(REPO_ID).unwrap();
    let cancel = CancellationToken::new();

    assert!(matches!(
        repo.get_milestone_start(0, &cancel).await.unwrap_err(),
        ApiError::InvalidArgument(_)
    ));
    assert!(matches!(
        repo.set_milestone_start(0, Utc::now(), &cancel).await.unwrap_err(),
        ApiError::InvalidArgument(_)
    ));
    assert_all(&guards).await;
}

#[tokio::test]
async fn create_release_report() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/p1/repositories/1/reports/release")
        .match_header(AUTH_HEADER, TOKEN)
        .match_body(
            r#"{"title":"","description":"","start_date":"2019-11-19T08:00:00Z","desired_end_date":"2019-11-19T08:00:00Z","repositories":[]}"#,
        )
        .with_status(200)
        .with_body(CREATED_RELEASE)
        .create_async()
        .await;

    let date = Utc.with_ymd_and_hms(2019, 11, 19, 8, 0, 0).unwrap();
    let request = CreateReleaseReportRequest {
        title: String::new(),
        description: String::new(),
        start_date: date,
        desired_end_date: date,
        repositories: Vec::new(),
    };

    let repo = client(&server).repository(REPO_ID).unwrap();
    let report = repo
        .create_release_report(&request, &CancellationToken::new())
        .await
        .unwrap()
        .into_value()
        .unwrap();

    assert_eq!(report.release_id, "59dff4f508399a35a276a1ea");
    assert!(!report.is_closed());
    mock.assert_async().await;
}

#[tokio::test]
async fn get_release_reports() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(&mut server, "GET", "/p1/repositories/1/reports/releases", 200, REPO_RELEASES).await;

    let repo = client(&server).repository(REPO_ID).unwrap();
    let reports = repo
        .get_release_reports(&CancellationToken::new())
        .await
        .unwrap()
        .into_value()
        .unwrap();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].release_id, "59cbf2fde010f7a5207406e8");
    assert!(reports[0].repositories.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn every_request_carries_the_token() {
    let mut server = mockito::Server::new_async().await;
    let unauthenticated = server
        .mock("GET", Matcher::Any)
        .match_header(AUTH_HEADER, Matcher::Missing)
        .expect(0)
        .create_async()
        .await;
    let authenticated = mock_json(&mut server, "GET", "/p1/repositories/1/epics", 200, REPO_EPICS).await;

    let repo = client(&server).repository(REPO_ID).unwrap();
    repo.get_epics(&CancellationToken::new()).await.unwrap();

    unauthenticated.assert_async().await;
    authenticated.assert_async().await;
}

//
//  zenhub-cli
//  tests/epic_client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

mod common;

use common::*;
use tokio_util::sync::CancellationToken;
use zenhub_cli::api::models::UpdateIssuesRequest;
use zenhub_cli::api::{ApiError, IssueRef};

#[tokio::test]
async fn get_details_decodes_children() {
    let mut server = mockito::Server::new_async().await;
    let mock = mock_json(&mut server, "GET", "/p1/repositories/1/epics/2", 200, EPIC_DETAILS).await;

    let epic = client(&server).epic(REPO_ID, ISSUE_NUMBER).unwrap();
    let details = epic
        .get_details(&CancellationToken::new())
        .await
        .unwrap()
        .into_value()
        .unwrap();

    assert_eq!(details.total_epic_estimates.unwrap().value, 60.0);
    assert_eq!(details.estimate.unwrap().value, 10.0);
    assert_eq!(details.pipelines.len(), 2);
    assert_eq!(details.issues.len(), 2);
    assert_eq!(details.issues[0].issue_number, Some(3161));
    assert!(details.issues[0].is_epic);
    assert_eq!(details.issues[1].repo_id, Some(1234567));
    mock.assert_async().await;
}

#[tokio::test]
async fn repeated_reads_are_independent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/p1/repositories/1/epics/2")
        .match_header(AUTH_HEADER, TOKEN)
        .with_status(200)
        .with_body(EPIC_DETAILS)
        .expect(2)
        .create_async()
        .await;

    let epic = client(&server).epic(REPO_ID, ISSUE_NUMBER).unwrap();
    let cancel = CancellationToken::new();
    let first = epic.get_details(&cancel).await.unwrap().into_value();
    let second = epic.get_details(&cancel).await.unwrap().into_value();

    assert_eq!(first, second);
    mock.assert_async().await;
}

#[tokio::test]
async fn add_issues_sends_empty_removal_list() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/p1/repositories/1/epics/2/update_issues")
        .match_header(AUTH_HEADER, TOKEN)
        .match_body(r#"{"add_issues":[{"repo_id":13550592,"issue_number":3}],"remove_issues":[]}"#)
        .with_status(200)
        .create_async()
        .await;

    let epic = client(&server).epic(REPO_ID, ISSUE_NUMBER).unwrap();
    let response = epic
        .add_issues(&[IssueRef::new(13550592, 3)], &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn update_issues_adds_and_removes() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/p1/repositories/1/epics/2/update_issues")
        .match_header(AUTH_HEADER, TOKEN)
        .match_body(
            r#"{"add_issues":[{"repo_id":13550592,"issue_number":3}],"remove_issues":[{"repo_id":13550592,"issue_number":1}]}"#,
        )
        .with_status(200)
        .create_async()
        .await;

    let changes = UpdateIssuesRequest {
        add_issues: vec![IssueRef::new(13550592, 3)],
        remove_issues: vec![IssueRef::new(13550592, 1)],
    };
    let epic = client(&server).epic(REPO_ID, ISSUE_NUMBER).unwrap();
    epic.update_issues(&changes, &CancellationToken::new())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn remove_issues_sends_empty_add_list() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/p1/repositories/1/epics/2/update_issues")
        .match_header(AUTH_HEADER, TOKEN)
        .match_body(r#"{"add_issues":[],"remove_issues":[{"repo_id":13550592,"issue_number":1}]}"#)
        .with_status(200)
        .create_async()
        .await;

    let epic = client(&server).epic(REPO_ID, ISSUE_NUMBER).unwrap();
    epic.remove_issues(&[IssueRef::new(13550592, 1)], &CancellationToken::new())
        .await
        .unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn convert_to_issue_has_no_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/p1/repositories/1/epics/2/convert_to_issue")
        .match_header(AUTH_HEADER, TOKEN)
        .match_body("")
        .with_status(200)
        .create_async()
        .await;

    let epic = client(&server).epic(REPO_ID, ISSUE_NUMBER).unwrap();
    let response = epic.convert_to_issue(&CancellationToken::new()).await.unwrap();

    assert_eq!(response.status(), 200);
    mock.assert_async().await;
}

#[tokio::test]
async fn child_with_zero_number_is_rejected() {
    let mut server = mockito::Server::new_async().await;
    let guards = expect_no_requests(&mut server).await;

    let epic = client(&server).epic(REPO_ID, ISSUE_NUMBER).unwrap();
    let err = epic
        .add_issues(&[IssueRef::new(13550592, 0)], &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::InvalidArgument(_)));
    assert_all(&guards).await;
}

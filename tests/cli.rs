//
//  zenhub-cli
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `zh` with a private config file and no token in the environment.
fn zh(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("zh").unwrap();
    cmd.env("ZH_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("ZENHUB_TOKEN")
        .env_remove("ZENHUB_ENDPOINT")
        .env_remove("ZH_DEBUG");
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    zh(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("issue"))
        .stdout(predicate::str::contains("release"));
}

#[test]
fn version_command() {
    let dir = TempDir::new().unwrap();
    zh(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zh version"));
}

#[test]
fn missing_token_is_reported() {
    let dir = TempDir::new().unwrap();
    zh(&dir)
        .args(["issue", "view", "1", "2"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("ZENHUB_TOKEN"));
}

#[test]
fn zero_repository_id_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    zh(&dir)
        .args(["--token", "dummyToken", "issue", "view", "0", "2"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("non-zero"));
}

#[test]
fn config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    let expected = dir.path().join("config.toml");
    zh(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected.display().to_string()));
}

#[test]
fn config_set_then_get() {
    let dir = TempDir::new().unwrap();
    zh(&dir)
        .args(["config", "set", "repo_id", "42"])
        .assert()
        .success();

    zh(&dir)
        .args(["config", "get", "repo_id"])
        .assert()
        .success()
        .stdout(predicate::str::diff("42\n"));
}

#[test]
fn config_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    zh(&dir)
        .args(["config", "set", "colour", "red"])
        .assert()
        .code(2);
}

#[test]
fn issue_view_as_json() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/p1/repositories/1/issues/2")
        .match_header("x-authentication-token", "dummyToken")
        .with_status(200)
        .with_body(r#"{"estimate":{"value":8},"pipelines":[],"is_epic":true}"#)
        .create();

    let dir = TempDir::new().unwrap();
    zh(&dir)
        .args(["--token", "dummyToken", "--endpoint", &server.url(), "--json"])
        .args(["issue", "view", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""is_epic": true"#));

    mock.assert();
}

#[test]
fn issue_view_with_empty_body_reports_no_data() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/p1/repositories/1/issues/2")
        .with_status(200)
        .create();

    let dir = TempDir::new().unwrap();
    zh(&dir)
        .args(["--token", "dummyToken", "--endpoint", &server.url()])
        .args(["issue", "view", "1", "2"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no data for issue 1:2"));

    mock.assert();
}

#[test]
fn not_found_exit_code() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/p1/repositories/1/epics/9")
        .with_status(404)
        .with_body(r#"{"message":"Not Found"}"#)
        .create();

    let dir = TempDir::new().unwrap();
    zh(&dir)
        .args(["--token", "dummyToken", "--endpoint", &server.url()])
        .args(["epic", "view", "1", "9"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("Not Found"));

    mock.assert();
}

#[test]
fn default_repository_comes_from_config() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/p1/repositories/42/epics")
        .with_status(200)
        .with_body(r#"{"epic_issues":[]}"#)
        .create();

    let dir = TempDir::new().unwrap();
    zh(&dir)
        .args(["config", "set", "repo_id", "42"])
        .assert()
        .success();

    zh(&dir)
        .args(["--token", "dummyToken", "--endpoint", &server.url()])
        .args(["repo", "epics", "."])
        .assert()
        .success();

    mock.assert();
}

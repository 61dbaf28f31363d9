//! End-to-end tests for `dockershrink optimize` against a mock service

use httpmock::MockServer;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

mod common;
use common::fixtures::{self, DOCKERFILE, DOCKERIGNORE};
use common::{dockershrink, TEST_API_KEY};

const OUTPUT_DIR: &str = "dockershrink.optimised";

#[test]
fn test_optimize_writes_files_and_prints_both_sections() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/v1/optimize")
            .header("Authorization", TEST_API_KEY)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "Dockerfile": DOCKERFILE,
                ".dockerignore": DOCKERIGNORE,
                "package.json": {
                    "name": "app",
                    "version": "1.0.0",
                    "scripts": { "start": "node index.js" }
                }
            }));
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "modified_project": {
                    "Dockerfile": "FROM node:20-alpine\nCMD [\"node\", \"index.js\"]\n",
                    "package.json": { "name": "app", "version": "1.0.0" }
                },
                "actions_taken": [{
                    "filename": "Dockerfile",
                    "title": "Use a smaller base image",
                    "description": "Switched node:20 to node:20-alpine.",
                    "rule": "use-alpine-base"
                }],
                "recommendations": [{
                    "filename": "package.json",
                    "title": "Move build tools to devDependencies",
                    "description": "They are not needed at runtime."
                }]
            }));
    });

    let project = fixtures::create_node_project().unwrap();
    let home = fixtures::home_with_credential(TEST_API_KEY).unwrap();

    dockershrink(home.path(), project.path())
        .env("SERVER_URL", server.base_url())
        .arg("optimize")
        .assert()
        .success()
        .stdout(predicate::str::contains("- Using Dockerfile"))
        .stdout(predicate::str::contains("- Using .dockerignore"))
        .stdout(predicate::str::contains("- Using package.json"))
        .stdout(predicate::str::contains("========== Actions Taken =========="))
        .stdout(predicate::str::contains("========== Recommendations =========="))
        .stdout(predicate::str::contains("File: Dockerfile"))
        .stdout(predicate::str::contains("Title: Use a smaller base image"))
        .stdout(predicate::str::contains(
            "Description: Switched node:20 to node:20-alpine.",
        ))
        .stdout(predicate::str::contains("Rule: use-alpine-base"))
        .stdout(predicate::str::contains("Title: Move build tools to devDependencies"))
        .stdout(predicate::str::contains("already optimized").not());

    mock.assert();

    let out = project.path().join(OUTPUT_DIR);
    assert_eq!(
        fs::read_to_string(out.join("Dockerfile")).unwrap(),
        "FROM node:20-alpine\nCMD [\"node\", \"index.js\"]\n"
    );
    let manifest = fs::read_to_string(out.join("package.json")).unwrap();
    assert!(manifest.contains("\n  \"name\": \"app\""));
    let reparsed: Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(reparsed, json!({ "name": "app", "version": "1.0.0" }));
}

#[test]
fn test_service_error_is_printed_and_nothing_is_written() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/api/v1/optimize");
        then.status(500)
            .header("content-type", "application/json")
            .json_body(json!({ "error": "boom" }));
    });

    let project = fixtures::create_node_project().unwrap();
    let home = fixtures::home_with_credential(TEST_API_KEY).unwrap();

    dockershrink(home.path(), project.path())
        .env("SERVER_URL", server.base_url())
        .arg("optimize")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: boom"));

    mock.assert();
    assert!(!project.path().join(OUTPUT_DIR).exists());
}

#[test]
fn test_already_optimized_project_prints_single_line() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method("POST").path("/api/v1/optimize");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(json!({
                "modified_project": {},
                "actions_taken": [],
                "recommendations": []
            }));
    });

    let project = fixtures::create_node_project().unwrap();
    let home = fixtures::home_with_credential(TEST_API_KEY).unwrap();

    dockershrink(home.path(), project.path())
        .env("SERVER_URL", server.base_url())
        .arg("optimize")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Docker image is already optimized, no further actions were taken by dockershrink.",
        ))
        .stdout(predicate::str::contains("==========").not());
}

#[test]
fn test_invalid_manifest_fails_before_any_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/api/v1/optimize");
        then.status(200).json_body(json!({}));
    });

    let project = TempDir::new().unwrap();
    fs::write(project.path().join("package.json"), "{ \"name\": ").unwrap();
    let home = fixtures::home_with_credential(TEST_API_KEY).unwrap();

    dockershrink(home.path(), project.path())
        .env("SERVER_URL", server.base_url())
        .arg("optimize")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("package.json"));

    mock.assert_calls(0);
}

#[test]
fn test_missing_credential_fails_with_init_hint() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST").path("/api/v1/optimize");
        then.status(200).json_body(json!({}));
    });

    let project = fixtures::create_node_project().unwrap();
    let home = TempDir::new().unwrap();

    dockershrink(home.path(), project.path())
        .env("SERVER_URL", server.base_url())
        .arg("optimize")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("dockershrink init --api-key"));

    mock.assert_calls(0);
}

#[test]
fn test_manifest_under_src_is_sent_and_absent_files_are_omitted() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/v1/optimize")
            .json_body(json!({
                "Dockerfile": DOCKERFILE,
                "package.json": {
                    "name": "app",
                    "version": "1.0.0",
                    "scripts": { "start": "node index.js" }
                },
                "openai_api_key": "sk-from-env"
            }));
        then.status(200).json_body(json!({
            "modified_project": {},
            "actions_taken": [],
            "recommendations": []
        }));
    });

    let project = fixtures::create_nested_manifest_project().unwrap();
    let home = fixtures::home_with_credential(TEST_API_KEY).unwrap();

    dockershrink(home.path(), project.path())
        .env("SERVER_URL", server.base_url())
        .env("OPENAI_API_KEY", "sk-from-env")
        .arg("optimize")
        .assert()
        .success()
        .stdout(predicate::str::contains("- No .dockerignore found in the default paths"))
        .stdout(predicate::str::contains("package.json"));

    mock.assert();
}

#[test]
fn test_explicit_paths_and_flag_key_win() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/v1/optimize")
            .json_body(json!({
                "Dockerfile": "FROM node:18\n",
                "openai_api_key": "sk-from-flag"
            }));
        then.status(200).json_body(json!({
            "modified_project": { "Dockerfile": "FROM node:18-alpine\n" },
            "actions_taken": [],
            "recommendations": []
        }));
    });

    let project = TempDir::new().unwrap();
    fs::create_dir(project.path().join("docker")).unwrap();
    fs::write(project.path().join("docker/app.Dockerfile"), "FROM node:18\n").unwrap();
    let home = fixtures::home_with_credential(TEST_API_KEY).unwrap();

    dockershrink(home.path(), project.path())
        .env("SERVER_URL", server.base_url())
        .env("OPENAI_API_KEY", "sk-from-env")
        .args([
            "optimize",
            "--dockerfile",
            "docker/app.Dockerfile",
            "--openai-api-key",
            "sk-from-flag",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Using docker/app.Dockerfile"));

    mock.assert();
    assert_eq!(
        fs::read_to_string(project.path().join(OUTPUT_DIR).join("Dockerfile")).unwrap(),
        "FROM node:18-alpine\n"
    );
}

#[test]
fn test_empty_flag_key_falls_back_to_env() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method("POST")
            .path("/api/v1/optimize")
            .json_body(json!({
                "Dockerfile": DOCKERFILE,
                ".dockerignore": DOCKERIGNORE,
                "package.json": {
                    "name": "app",
                    "version": "1.0.0",
                    "scripts": { "start": "node index.js" }
                },
                "openai_api_key": "sk-from-env"
            }));
        then.status(200).json_body(json!({
            "modified_project": {},
            "actions_taken": [],
            "recommendations": []
        }));
    });

    let project = fixtures::create_node_project().unwrap();
    let home = fixtures::home_with_credential(TEST_API_KEY).unwrap();

    dockershrink(home.path(), project.path())
        .env("SERVER_URL", server.base_url())
        .env("OPENAI_API_KEY", "sk-from-env")
        .args(["optimize", "--openai-api-key", ""])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_unreachable_service_is_a_network_error() {
    // Bind and drop a listener to get a port nothing answers on
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();

    let project = fixtures::create_node_project().unwrap();
    let home = fixtures::home_with_credential(TEST_API_KEY).unwrap();

    dockershrink(home.path(), project.path())
        .env("SERVER_URL", format!("http://127.0.0.1:{}", port))
        .arg("optimize")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot send API request"));

    assert!(!project.path().join(OUTPUT_DIR).exists());
}

//! Integration tests for the marshal CLI.
//!
//! These tests verify end-to-end CLI behavior using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn marshal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("marshal").unwrap();
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn cli_shows_help() {
    marshal_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Render schema-driven API requests"))
        .stdout(predicate::str::contains("describe"))
        .stdout(predicate::str::contains("render"));
}

#[test]
fn list_shows_every_service() {
    marshal_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("CognitoIdentityProvider.CreateGroup"))
        .stdout(predicate::str::contains("StepFunctions.SendTaskFailure"))
        .stdout(predicate::str::contains("S3.PutObjectAcl"));
}

#[test]
fn describe_as_json() {
    marshal_cmd()
        .args(["describe", "CreateGroup", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "CreateGroup""#))
        .stdout(predicate::str::contains("AWSCognitoIdentityProviderService.CreateGroup"));
}

#[test]
fn unknown_operation_fails() {
    marshal_cmd()
        .args(["describe", "DeleteEverything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown operation 'DeleteEverything'"));
}

#[test]
fn render_from_stdin() {
    marshal_cmd()
        .args(["render", "SendTaskFailure", "--input", "-"])
        .write_stdin(r#"{"taskToken": "abc123", "ignored": true}"#)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("POST /\n"))
        .stdout(predicate::str::contains("X-Amz-Target: AWSStepFunctions.SendTaskFailure"))
        .stdout(predicate::str::contains(r#"{"taskToken":"abc123"}"#));
}

#[test]
fn render_missing_required_field() {
    marshal_cmd()
        .args(["render", "CreateGroup", "--input", "-"])
        .write_stdin(r#"{"UserPoolId": "pool"}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing parameter \"GroupName\" for \"CognitoIdentityProvider.CreateGroup\"",
        ));
}

#[test]
fn render_invalid_json_input() {
    marshal_cmd()
        .args(["render", "CreateGroup", "--input", "-"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input is not valid JSON"));
}

#[test]
fn render_json_format_with_region() {
    marshal_cmd()
        .args([
            "render",
            "S3.GetObjectAcl",
            "--format",
            "json",
            "--region",
            "eu-west-1",
            "--input",
            "-",
        ])
        .write_stdin(r#"{"Bucket": "b", "Key": "a/b.txt"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""path": "/b/a/b.txt""#))
        .stdout(predicate::str::contains(r#""region": "eu-west-1""#));
}

#[test]
fn send_posts_to_endpoint() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let server = runtime.block_on(async {
        use wiremock::matchers::{body_string, header, method};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("x-amz-target", "AWSStepFunctions.SendTaskHeartbeat"))
            .and(body_string(r#"{"taskToken":"t-1"}"#))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;
        server
    });

    marshal_cmd()
        .args(["send", "SendTaskHeartbeat", "--endpoint", &server.uri(), "--input", "-"])
        .write_stdin(r#"{"taskToken": "t-1"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("HTTP 200"));
}

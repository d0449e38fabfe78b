//! `ReqwestTransport` against a local mock server.

use marshal::OperationInput;
use marshal::transport::{ReqwestTransport, Transport, TransportError};
use marshal_definitions::s3::GET_OBJECT_ACL;
use marshal_definitions::stepfunctions::SEND_TASK_FAILURE;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn sends_json_protocol_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("x-amz-target", "AWSStepFunctions.SendTaskFailure"))
        .and(header("content-type", "application/x-amz-json-1.0"))
        .and(body_string(r#"{"taskToken":"abc123","cause":"boom"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = ReqwestTransport::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();
    let request = OperationInput::from_json(
        &SEND_TASK_FAILURE,
        &json!({"cause": "boom", "taskToken": "abc123"}),
    )
    .unwrap()
    .render()
    .unwrap();

    let response = transport.send(request).await.unwrap();
    assert!(response.is_success());
    assert_eq!(response.body.as_ref(), b"{}");
}

#[tokio::test]
async fn sends_path_and_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/bucket/dir/file.txt"))
        .and(query_param("versionId", "v2"))
        .and(header("x-amz-request-payer", "requester"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<AccessControlPolicy/>")
                .insert_header("x-amz-request-id", "req-1"),
        )
        .mount(&mock_server)
        .await;

    let transport = ReqwestTransport::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();
    let request = OperationInput::from_json(
        &GET_OBJECT_ACL,
        &json!({
            "Bucket": "bucket",
            "Key": "dir/file.txt",
            "VersionId": "v2",
            "RequestPayer": "requester",
        }),
    )
    .unwrap()
    .render()
    .unwrap();

    let response = transport.send(request).await.unwrap();
    assert_eq!(response.status, 200);
    assert_eq!(response.header("X-Amz-Request-Id"), Some("req-1"));
}

#[tokio::test]
async fn error_status_is_returned_uninterpreted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"__type":"TaskDoesNotExist"}"#),
        )
        .mount(&mock_server)
        .await;

    let transport = ReqwestTransport::new(Url::parse(&mock_server.uri()).unwrap()).unwrap();
    let request = OperationInput::new(&SEND_TASK_FAILURE)
        .with("taskToken", "gone")
        .unwrap()
        .render()
        .unwrap();

    let response = transport.send(request).await.unwrap();
    assert_eq!(response.status, 400);
    assert!(!response.is_success());
    assert!(String::from_utf8_lossy(&response.body).contains("TaskDoesNotExist"));
}

#[tokio::test]
async fn default_headers_are_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("user-agent", "marshal-test"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let transport = ReqwestTransport::builder(Url::parse(&mock_server.uri()).unwrap())
        .default_header("User-Agent", "marshal-test")
        .unwrap()
        .build()
        .unwrap();
    let request = OperationInput::new(&SEND_TASK_FAILURE)
        .with("taskToken", "t")
        .unwrap()
        .render()
        .unwrap();

    transport.send(request).await.unwrap();
}

#[test]
fn base_path_is_kept() {
    let transport =
        ReqwestTransport::new(Url::parse("http://localhost:9/prefix/").unwrap()).unwrap();
    let request = OperationInput::new(&GET_OBJECT_ACL)
        .with("Bucket", "b")
        .unwrap()
        .with("Key", "k")
        .unwrap()
        .render()
        .unwrap();

    let url = transport.url_for(&request).unwrap();
    assert_eq!(url.as_str(), "http://localhost:9/prefix/b/k?acl");
}

#[tokio::test]
async fn unreachable_server_is_a_request_error() {
    let transport = ReqwestTransport::new(Url::parse("http://127.0.0.1:1").unwrap()).unwrap();
    let request = OperationInput::new(&SEND_TASK_FAILURE)
        .with("taskToken", "t")
        .unwrap()
        .render()
        .unwrap();

    let err = transport.send(request).await.unwrap_err();
    assert!(matches!(err, TransportError::Request(_)));
    assert!(err.is_retryable());
}

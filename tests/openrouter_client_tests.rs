//! Integration tests for the chat-completion client using a wiremock server.

use std::sync::Arc;

use pipeline_agent::{
    build_pipeline_prompt, render_legacy, ApiKey, ChatClient, DomainError,
    GeneratePipelineUseCase, OpenRouterClient, ProjectRequest,
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const MODEL: &str = "xai/grok-code-fast-1";

fn request() -> ProjectRequest {
    ProjectRequest::new("shop", "Python", "10.0.0.5", "SSH with scp")
        .with_database("PostgreSQL")
        .with_other_tech("Docker")
}

fn use_case(server: &MockServer) -> GeneratePipelineUseCase {
    GeneratePipelineUseCase::new(Arc::new(OpenRouterClient::new(MODEL, server.uri())))
}

#[tokio::test]
async fn test_sends_bearer_key_model_and_single_user_message() {
    let mock_server = MockServer::start().await;
    let prompt = build_pipeline_prompt(&request());

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-or-test"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "model": MODEL,
            "messages": [{"role": "user", "content": prompt}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"role": "assistant", "content": "name: CI\n..."}}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pipeline = use_case(&mock_server)
        .execute(&request(), &ApiKey::new("sk-or-test"))
        .await
        .unwrap();

    assert_eq!(pipeline.content(), "name: CI\n...");
}

#[tokio::test]
async fn test_success_content_is_returned_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{"message": {"content": "name: CI\n..."}}]
        })))
        .mount(&mock_server)
        .await;

    let text = use_case(&mock_server)
        .execute_legacy(&request(), &ApiKey::new("sk-or-test"))
        .await;

    assert_eq!(text, "name: CI\n...");
}

#[tokio::test]
async fn test_unauthorized_becomes_error_string() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": {"message": "No auth credentials found", "code": 401}
        })))
        .mount(&mock_server)
        .await;

    let result = use_case(&mock_server)
        .execute(&request(), &ApiKey::new("sk-or-wrong-key"))
        .await;

    match &result {
        Err(DomainError::Upstream { status, detail }) => {
            assert_eq!(*status, 401);
            assert_eq!(detail, "No auth credentials found");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }

    let text = render_legacy(&result);
    assert!(text.starts_with("Error: "));
    assert!(text.contains("401"));
    assert!(text.contains("No auth credentials found"));
    assert!(!text.contains("sk-or-wrong-key"));
}

#[tokio::test]
async fn test_unauthorized_with_empty_body_uses_reason_phrase() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let text = use_case(&mock_server)
        .execute_legacy(&request(), &ApiKey::new("sk-or-test"))
        .await;

    assert!(text.starts_with("Error: "));
    assert!(text.contains("401"));
    assert!(text.contains("Unauthorized"));
}

#[tokio::test]
async fn test_missing_choices_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "gen-123",
            "object": "chat.completion"
        })))
        .mount(&mock_server)
        .await;

    let result = use_case(&mock_server)
        .execute(&request(), &ApiKey::new("sk-or-test"))
        .await;

    assert!(matches!(result, Err(DomainError::MalformedResponse(_))));
    assert!(render_legacy(&result).starts_with("Error: "));
}

#[tokio::test]
async fn test_server_error_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = use_case(&mock_server)
        .execute_legacy(&request(), &ApiKey::new("sk-or-test"))
        .await;

    assert!(text.starts_with("Error: "));
    assert!(text.contains("503"));
    assert!(text.contains("upstream overloaded"));
}

#[tokio::test]
async fn test_validation_failure_sends_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = use_case(&mock_server)
        .execute(&ProjectRequest::new("shop", "", "10.0.0.5", "FTP"), &ApiKey::new("k"))
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    let result = use_case(&mock_server)
        .execute(&request(), &ApiKey::default())
        .await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Bind and drop a listener to obtain a port nothing listens on.
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let client = OpenRouterClient::new(MODEL, uri);
    let err = client
        .complete(&ApiKey::new("sk-or-test"), "prompt")
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Transport(_)));
    assert!(err.to_legacy_string().starts_with("Error: Request failed"));
}

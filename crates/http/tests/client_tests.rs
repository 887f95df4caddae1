//! Integration tests for the question-answering client

use kbchat_core::{
    ChatAction, ChatConfig, ChatState, CompletionStatus, FETCH_ERROR_MESSAGE, PendingQuery,
    RequestId,
};
use kbchat_http::{ClientError, QaClient};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn pending(query: &str, session: &str) -> PendingQuery {
    PendingQuery {
        request: RequestId::default(),
        query: query.to_string(),
        session: session.to_string(),
    }
}

fn answer_body(text: &str, session: &str) -> serde_json::Value {
    json!({
        "output": { "text": text },
        "sessionId": session,
        "citations": [],
    })
}

#[tokio::test]
async fn test_client_builder() {
    let client = QaClient::builder()
        .endpoint("http://localhost:8080/")
        .timeout(Duration::from_secs(5))
        .build();

    assert!(client.is_ok());
    let client = client.unwrap();
    assert_eq!(client.endpoint(), "http://localhost:8080/");
    assert_eq!(client.timeout(), Duration::from_secs(5));
}

#[tokio::test]
async fn test_client_builder_requires_endpoint() {
    let result = QaClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let result = QaClient::builder().endpoint("  ").build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_from_config_validates() {
    let client = QaClient::from_config(&ChatConfig::default()).unwrap();
    assert_eq!(client.endpoint(), "https://localhost/");
    assert_eq!(client.timeout(), Duration::from_secs(60));

    let config = ChatConfig::from_endpoint_override(Some("not a url"));
    assert!(matches!(
        QaClient::from_config(&config),
        Err(ClientError::Configuration(_))
    ));
}

#[tokio::test]
async fn test_ask_sends_query_and_session_params() {
    init_tracing();
    let mock_server = MockServer::start().await;

    let response_body = json!({
        "output": { "text": "Paris." },
        "sessionId": "sess-1",
        "citations": [{
            "generatedResponsePart": { "textResponsePart": { "text": "Paris is the capital" } },
            "retrievedReferences": [
                { "location": { "s3Location": { "uri": "s3://bucket/docs/report.pdf" } } },
                { "location": { "s3Location": { "uri": "s3://bucket/docs/other.pdf" } } }
            ]
        }]
    });

    Mock::given(method("GET"))
        .and(path("/ask"))
        .and(query_param("query", "What is the capital of France?"))
        .and(query_param("session", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = QaClient::new(format!("{}/ask", mock_server.uri())).unwrap();
    let answer = client
        .ask(&pending("What is the capital of France?", ""))
        .await
        .unwrap();

    assert_eq!(answer.text, "Paris.");
    assert_eq!(answer.session_id, "sess-1");
    assert_eq!(answer.citations.len(), 1);
    assert_eq!(answer.citations[0].text, "Paris is the capital");
    assert_eq!(answer.citations[0].file_name(), "report.pdf");
}

#[tokio::test]
async fn test_error_status_is_classified() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&mock_server)
        .await;

    let client = QaClient::new(mock_server.uri()).unwrap();
    let result = client.ask(&pending("q", "")).await;

    match result {
        Err(ClientError::ServerError { status, message }) => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad Gateway");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_forbidden_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = QaClient::new(mock_server.uri()).unwrap();
    let result = client.ask(&pending("q", "")).await;
    assert!(matches!(result, Err(ClientError::Forbidden(_))));
}

#[tokio::test]
async fn test_malformed_success_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .mount(&mock_server)
        .await;

    let client = QaClient::new(mock_server.uri()).unwrap();
    let result = client.ask(&pending("q", "")).await;
    assert!(matches!(result, Err(ClientError::Response(_))));
}

#[tokio::test]
async fn test_citation_without_reference_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "output": { "text": "x" },
            "sessionId": "s",
            "citations": [{
                "generatedResponsePart": { "textResponsePart": { "text": "quote" } },
                "retrievedReferences": []
            }]
        })))
        .mount(&mock_server)
        .await;

    let client = QaClient::new(mock_server.uri()).unwrap();
    let result = client.ask(&pending("q", "")).await;
    assert!(matches!(result, Err(ClientError::Response(_))));
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(answer_body("slow", "s"))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client = QaClient::builder()
        .endpoint(mock_server.uri())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let result = client.ask(&pending("q", "")).await;
    assert!(matches!(result, Err(ClientError::Timeout(t)) if t == Duration::from_millis(50)));
}

#[tokio::test]
async fn test_connection_refused() {
    let client = QaClient::new("http://127.0.0.1:1/").unwrap();
    let result = client.ask(&pending("q", "")).await;
    assert!(matches!(result, Err(ClientError::Request(_))));
}

#[tokio::test]
async fn test_conversation_echoes_session_on_next_submit() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("query", "first"))
        .and(query_param("session", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("one", "sess-7")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(query_param("query", "second"))
        .and(query_param("session", "sess-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("two", "sess-7")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = QaClient::new(mock_server.uri()).unwrap();
    let mut state = ChatState::default();

    state.set_draft("first");
    let first = state.submit().unwrap();
    let outcome = client.ask(&first).await;
    assert_eq!(state.complete(first.request, outcome), CompletionStatus::Answered);
    assert_eq!(state.session(), "sess-7");

    state.set_draft("second");
    let second = state.submit().unwrap();
    let outcome = client.ask(&second).await;
    assert_eq!(state.complete(second.request, outcome), CompletionStatus::Answered);
    assert_eq!(state.answer(), "two");
}

#[tokio::test]
async fn test_empty_draft_makes_no_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("x", "s")))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut state = ChatState::default();
    let before = state.clone();
    assert!(state.submit().is_none());
    assert_eq!(state, before);
}

#[tokio::test]
async fn test_failed_call_sets_error_and_clears_loading() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = QaClient::new(mock_server.uri()).unwrap();
    let mut state = ChatState::default();
    state.set_draft("q");
    let pending = state.submit().unwrap();
    assert!(state.is_loading());

    let outcome = client.ask(&pending).await;
    assert_eq!(state.complete(pending.request, outcome), CompletionStatus::Failed);
    assert_eq!(state.answer(), FETCH_ERROR_MESSAGE);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_native_client_identifies_itself() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "kbchat-client/0.1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("hi", "s")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = QaClient::new(mock_server.uri()).unwrap();
    let answer = client.ask(&pending("q", "")).await.unwrap();
    assert_eq!(answer.text, "hi");
}

#[tokio::test]
async fn test_completion_drives_state_through_submit() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("query", "Where is the report?"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("Archived", "s-9")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = QaClient::new(mock_server.uri()).unwrap();
    let mut state = ChatState::default();
    state.apply(ChatAction::Edit("Where is the report?".into()));

    let pending = state.prepare_submit().unwrap();
    state.apply(ChatAction::Start(pending.clone()));
    assert!(state.view().submit_disabled);

    let action = client.completion(&pending).await;
    assert!(matches!(&action, ChatAction::Complete { request, outcome: Ok(_) } if *request == pending.request));
    state.apply(action);

    assert!(!state.is_loading());
    assert_eq!(state.answer(), "Archived");
    assert_eq!(state.session(), "s-9");
}

#[tokio::test]
async fn test_completion_failure_carries_classified_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such function"))
        .mount(&mock_server)
        .await;

    let client = QaClient::new(mock_server.uri()).unwrap();
    let mut state = ChatState::default();
    state.apply(ChatAction::Edit("q".into()));
    let pending = state.prepare_submit().unwrap();
    state.apply(ChatAction::Start(pending.clone()));

    let action = client.completion(&pending).await;
    match &action {
        ChatAction::Complete { outcome: Err(message), .. } => {
            assert_eq!(message, "Resource not found: no such function");
        }
        other => panic!("unexpected action: {other:?}"),
    }

    state.apply(action);
    assert_eq!(state.answer(), FETCH_ERROR_MESSAGE);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn test_completion_after_reset_is_dropped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(answer_body("late", "s-late")))
        .mount(&mock_server)
        .await;

    let client = QaClient::new(mock_server.uri()).unwrap();
    let mut state = ChatState::default();
    state.apply(ChatAction::Edit("q".into()));
    let pending = state.prepare_submit().unwrap();
    state.apply(ChatAction::Start(pending.clone()));
    state.apply(ChatAction::Reset);

    state.apply(client.completion(&pending).await);
    assert_eq!(state.answer(), "");
    assert_eq!(state.session(), "");
    assert!(!state.is_loading());
}

//! Integration tests for the chat HTTP endpoints.
//!
//! Drives the full axum router (with CORS, tracing and timeout layers) over
//! the in-memory adapters, the same way the web frontend talks to it.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::Router;
use http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tokio::sync::Mutex;
use tower::ServiceExt;

use civic_complaint_assistant::adapters::http::{create_router, ChatHandlers};
use civic_complaint_assistant::adapters::{
    InMemoryComplaintRepository, InMemorySessionStore, LoggingNotifier,
};
use civic_complaint_assistant::application::{HandleTurnHandler, ResetSessionHandler};
use civic_complaint_assistant::config::ServerConfig;
use civic_complaint_assistant::domain::complaint::IssueType;
use civic_complaint_assistant::domain::conversation::{
    prompts, ConversationState, DialogueConfig, DialogueEngine,
};
use civic_complaint_assistant::domain::foundation::SessionId;
use civic_complaint_assistant::ports::{SessionLock, SessionStore, SessionStoreError};

const APOLOGY: &str = "Sorry, I encountered an error. Please try again or start a new complaint.";

// =============================================================================
// Test Infrastructure
// =============================================================================

struct TestApp {
    router: Router,
    repository: InMemoryComplaintRepository,
}

fn build_app(config: DialogueConfig) -> TestApp {
    let sessions: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
    build_app_with_store(sessions, config)
}

fn build_app_with_store(sessions: Arc<dyn SessionStore>, config: DialogueConfig) -> TestApp {
    let repository = InMemoryComplaintRepository::new();
    let turn_handler = HandleTurnHandler::new(
        Arc::clone(&sessions),
        Arc::new(repository.clone()),
        Arc::new(LoggingNotifier::new()),
        DialogueEngine::new(config),
    );
    let reset_handler = ResetSessionHandler::new(sessions);
    let handlers = ChatHandlers::new(Arc::new(turn_handler), Arc::new(reset_handler));

    TestApp {
        router: create_router(handlers, &ServerConfig::default()),
        repository,
    }
}

async fn post_json(router: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    // Extractor rejections come back as plain text.
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

async fn chat(router: &Router, session_id: &str, message: &str) -> String {
    let (status, body) = post_json(
        router,
        "/chat",
        json!({ "message": message, "session_id": session_id }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["reply"].as_str().unwrap().to_string()
}

/// Store whose backend is always down.
#[derive(Default)]
struct BrokenSessionStore {
    lock: Arc<Mutex<()>>,
}

#[async_trait]
impl SessionStore for BrokenSessionStore {
    async fn get(&self, _: &SessionId) -> Result<ConversationState, SessionStoreError> {
        Err(SessionStoreError::Backend("connection refused".to_string()))
    }

    async fn put(&self, _: &SessionId, _: ConversationState) -> Result<(), SessionStoreError> {
        Err(SessionStoreError::Backend("connection refused".to_string()))
    }

    async fn reset(&self, _: &SessionId) -> Result<ConversationState, SessionStoreError> {
        Err(SessionStoreError::Backend("connection refused".to_string()))
    }

    async fn lock(&self, _: &SessionId) -> SessionLock {
        Arc::clone(&self.lock).lock_owned().await
    }

    async fn session_count(&self) -> usize {
        0
    }
}

// =============================================================================
// Conversation flow
// =============================================================================

#[tokio::test]
async fn full_conversation_submits_one_complaint() {
    let app = build_app(DialogueConfig::default());

    let reply = chat(&app.router, "s1", "road/traffic issues").await;
    assert_eq!(
        reply,
        prompts::question(
            civic_complaint_assistant::domain::complaint::Field::ComplaintDescription,
            Some(IssueType::Road)
        )
    );

    chat(&app.router, "s1", "Large pothole on Main St").await;
    chat(&app.router, "s1", "123 Main Street").await;
    let reply = chat(&app.router, "s1", "John Smith").await;

    assert_eq!(reply, prompts::CONFIRMATION);
    let saved = app.repository.all().await;
    assert_eq!(saved.len(), 1);
    let (_, complaint) = &saved[0];
    assert_eq!(complaint.issue_code(), "road_traffic");
    assert_eq!(complaint.citizen_name(), "John Smith");
    assert_eq!(complaint.location(), "123 Main Street");
}

#[tokio::test]
async fn free_text_before_category_is_refused() {
    let app = build_app(DialogueConfig::default());

    let reply = chat(&app.router, "s1", "there is a pothole").await;

    assert_eq!(reply, prompts::category_required());
    assert_eq!(app.repository.count().await, 0);
}

#[tokio::test]
async fn messages_after_submission_do_not_resubmit() {
    let app = build_app(DialogueConfig::default());
    for message in [
        "water/plumbing issues",
        "Leaking pipe under the kitchen sink",
        "789 Pine Road",
        "Maria Gonzalez",
    ] {
        chat(&app.router, "s1", message).await;
    }

    let reply = chat(&app.router, "s1", "hello again").await;

    assert_eq!(reply, prompts::ALREADY_SUBMITTED);
    assert_eq!(app.repository.count().await, 1);
}

#[tokio::test]
async fn sessions_do_not_share_fields() {
    let app = build_app(DialogueConfig::default());

    chat(&app.router, "alice", "garbage/waste collection").await;
    let reply = chat(&app.router, "bob", "Garbage not collected for days").await;

    assert_eq!(reply, prompts::category_required());
}

#[tokio::test]
async fn missing_session_id_uses_default_session() {
    let app = build_app(DialogueConfig::default());

    post_json(&app.router, "/chat", json!({ "message": "road/traffic" })).await;
    let reply = chat(&app.router, "default", "Broken traffic light at the junction").await;

    assert_eq!(
        reply,
        prompts::question(
            civic_complaint_assistant::domain::complaint::Field::Location,
            Some(IssueType::Road)
        )
    );
}

// =============================================================================
// Reset
// =============================================================================

#[tokio::test]
async fn reset_starts_the_conversation_over() {
    let app = build_app(DialogueConfig::default());
    chat(&app.router, "s1", "electricity/power problems").await;

    let (status, body) = post_json(&app.router, "/reset", json!({ "session_id": "s1" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "status": "success", "message": "Session reset successfully" })
    );

    let reply = chat(&app.router, "s1", "Power outage since morning").await;
    assert_eq!(reply, prompts::category_required());
}

#[tokio::test]
async fn reset_accepts_empty_body() {
    let app = build_app(DialogueConfig::default());
    let request = Request::builder()
        .method("POST")
        .uri("/reset")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&app.router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
}

// =============================================================================
// Failures and probes
// =============================================================================

#[tokio::test]
async fn store_failure_returns_apology_with_ok_status() {
    let app = build_app_with_store(
        Arc::new(BrokenSessionStore::default()),
        DialogueConfig::default(),
    );

    let reply = chat(&app.router, "s1", "road/traffic issues").await;

    assert_eq!(reply, APOLOGY);
}

#[tokio::test]
async fn store_failure_on_reset_is_a_server_error() {
    let app = build_app_with_store(
        Arc::new(BrokenSessionStore::default()),
        DialogueConfig::default(),
    );

    let (status, body) = post_json(&app.router, "/reset", json!({ "session_id": "s1" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn invalid_session_id_returns_apology() {
    let app = build_app(DialogueConfig::default());
    let long_id = "x".repeat(300);

    let reply = chat(&app.router, &long_id, "road/traffic issues").await;

    assert_eq!(reply, APOLOGY);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = build_app(DialogueConfig::default());

    let (status, body) = get(&app.router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn root_lists_endpoints() {
    let app = build_app(DialogueConfig::default());

    let (status, body) = get(&app.router, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "running");
    assert!(body["endpoints"]["POST /chat"].is_string());
}

#[tokio::test]
async fn malformed_chat_body_is_rejected() {
    let app = build_app(DialogueConfig::default());

    let (status, body) = post_json(&app.router, "/chat", json!({ "session_id": "s1" })).await;

    assert!(status.is_client_error());
    assert!(body.as_str().is_some_and(|text| text.contains("message")));
}

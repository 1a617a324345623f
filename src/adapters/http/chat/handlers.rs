//! HTTP handlers for the chat endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::application::handlers::chat::{
    HandleTurnCommand, HandleTurnHandler, ResetSessionCommand, ResetSessionHandler,
};

use super::dto::{
    resolve_session_id, ChatRequest, ChatResponse, ErrorResponse, ResetRequest, StatusResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ChatHandlers {
    turn_handler: Arc<HandleTurnHandler>,
    reset_handler: Arc<ResetSessionHandler>,
}

impl ChatHandlers {
    pub fn new(turn_handler: Arc<HandleTurnHandler>, reset_handler: Arc<ResetSessionHandler>) -> Self {
        Self {
            turn_handler,
            reset_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /chat - Process one citizen message
///
/// Always answers 200; failures are reported in-band with a generic apology
/// so the chat window never shows a transport error.
pub async fn chat(
    State(handlers): State<ChatHandlers>,
    Json(req): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let session_id = match resolve_session_id(req.session_id.as_deref()) {
        Ok(id) => id,
        Err(reason) => {
            tracing::warn!(%reason, "Rejected chat request with invalid session id");
            return Json(ChatResponse::apology());
        }
    };

    let cmd = HandleTurnCommand {
        session_id: session_id.clone(),
        text: req.message,
    };

    match handlers.turn_handler.handle(cmd).await {
        Ok(result) => Json(ChatResponse {
            reply: result.reply,
        }),
        Err(e) => {
            tracing::error!(session_id = %session_id, error = %e, "Chat turn failed");
            Json(ChatResponse::apology())
        }
    }
}

/// POST /reset - Start a session over
pub async fn reset(
    State(handlers): State<ChatHandlers>,
    body: Option<Json<ResetRequest>>,
) -> Response {
    let req = body.map(|Json(req)| req).unwrap_or_default();

    let session_id = match resolve_session_id(req.session_id.as_deref()) {
        Ok(id) => id,
        Err(reason) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(reason)))
                .into_response()
        }
    };

    match handlers
        .reset_handler
        .handle(ResetSessionCommand {
            session_id: session_id.clone(),
        })
        .await
    {
        Ok(()) => (StatusCode::OK, Json(StatusResponse::reset_ok())).into_response(),
        Err(e) => {
            tracing::error!(session_id = %session_id, error = %e, "Session reset failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to reset session")),
            )
                .into_response()
        }
    }
}

/// GET /health - Liveness probe
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse::healthy())
}

/// GET / - API description
pub async fn api_info() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Civic Complaint Assistant API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "GET /": "API information",
            "GET /health": "Health check",
            "POST /chat": "Chat with the complaint assistant",
            "POST /reset": "Reset conversation session"
        }
    }))
}

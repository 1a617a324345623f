//! HTTP adapters - REST API implementations.
//!
//! `chat` holds the endpoints; this module wraps them in the cross-cutting
//! layers (CORS, request tracing, request timeout).

pub mod chat;

pub use chat::{chat_routes, ChatHandlers};

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Origin allowed when none are configured (local frontend dev server).
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Builds the full application router.
///
/// Layers are applied one at a time so each wraps a boxed body; the last
/// one added (CORS) is outermost.
pub fn create_router(handlers: ChatHandlers, server: &ServerConfig) -> Router {
    chat_routes(handlers)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&server.cors_origins_list()))
}

fn build_cors_layer(origins: &[String]) -> CorsLayer {
    let mut parsed: Vec<HeaderValue> = origins
        .iter()
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        tracing::info!(origin = DEFAULT_CORS_ORIGIN, "No CORS origins configured, using default");
        parsed.push(HeaderValue::from_static(DEFAULT_CORS_ORIGIN));
    } else {
        tracing::info!(count = parsed.len(), "CORS configured");
    }

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

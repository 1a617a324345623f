//! Chat HTTP adapter - the endpoints the web frontend talks to.

mod dto;
mod handlers;
mod routes;

pub use dto::{ChatRequest, ChatResponse, ResetRequest, StatusResponse, APOLOGY_REPLY};
pub use handlers::ChatHandlers;
pub use routes::chat_routes;

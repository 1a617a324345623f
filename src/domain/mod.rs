//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `complaint` - Categories, validators, record assembly and events
//! - `conversation` - Per-session state and the dialogue engine

pub mod complaint;
pub mod conversation;
pub mod foundation;

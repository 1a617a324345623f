//! Civic Complaint Assistant - Conversational complaint intake
//!
//! This crate collects civic infrastructure complaints (road, electricity,
//! water, garbage) through a multi-turn chat, validates the collected
//! fields, then persists the complaint and announces it to a webhook.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

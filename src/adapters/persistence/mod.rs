//! Persistence Adapters
//!
//! In-process implementation of the ComplaintRepository port. The
//! PostgreSQL implementation lives in `adapters::postgres`.

mod in_memory_complaint_repository;

pub use in_memory_complaint_repository::InMemoryComplaintRepository;

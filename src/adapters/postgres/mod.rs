//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresComplaintRepository` - Stores accepted complaints

mod complaint_repository;

pub use complaint_repository::PostgresComplaintRepository;

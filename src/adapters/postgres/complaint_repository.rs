//! PostgreSQL implementation of ComplaintRepository.
//!
//! Writes accepted complaints to the `complaints` table.

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::complaint::ValidatedComplaint;
use crate::domain::foundation::ComplaintId;
use crate::ports::{ComplaintRepository, PersistenceError};

/// PostgreSQL implementation of ComplaintRepository.
#[derive(Clone)]
pub struct PostgresComplaintRepository {
    pool: PgPool,
}

impl PostgresComplaintRepository {
    /// Creates a new PostgresComplaintRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool sized from configuration, running migrations if asked.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, PersistenceError> {
        let url = config
            .url
            .as_deref()
            .ok_or_else(|| PersistenceError::Database("No database URL configured".to_string()))?;

        let pool = PgPoolOptions::new()
            .min_connections(config.min_connections)
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
            .max_lifetime(config.max_lifetime())
            .connect(url)
            .await
            .map_err(|e| PersistenceError::Database(format!("Failed to connect: {}", e)))?;

        if config.run_migrations {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(|e| PersistenceError::Database(format!("Migration failed: {}", e)))?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl ComplaintRepository for PostgresComplaintRepository {
    async fn save(&self, complaint: &ValidatedComplaint) -> Result<ComplaintId, PersistenceError> {
        let id = ComplaintId::new();

        sqlx::query(
            r#"
            INSERT INTO complaints (
                id, session_id, citizen_name, location, complaint_description,
                issue_type, contact_email, contact_phone, priority, department,
                source, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(id.as_uuid())
        .bind(complaint.session_id().as_str())
        .bind(complaint.citizen_name())
        .bind(complaint.location())
        .bind(complaint.complaint_description())
        .bind(complaint.issue_code())
        .bind(complaint.contact_email())
        .bind(complaint.contact_phone())
        .bind(complaint.priority().as_str())
        .bind(complaint.department().as_str())
        .bind(complaint.source())
        .bind(complaint.created_at().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_check_violation() => {
                PersistenceError::Rejected(db.message().to_string())
            }
            other => PersistenceError::Database(format!("Failed to insert complaint: {}", other)),
        })?;

        Ok(id)
    }
}

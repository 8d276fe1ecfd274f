//! `services` table access.

use async_trait::async_trait;
use sqlx::PgPool;

use catalog_core::Service;

use super::RepositoryError;

/// Read access to catalog services.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// All rows with `active = true`, ordered by `sort_order` ascending.
    async fn list_active(&self) -> Result<Vec<Service>, RepositoryError>;

    /// Round-trip to the store, used by the readiness probe.
    async fn ping(&self) -> Result<(), RepositoryError>;
}

/// `PostgreSQL` implementation of [`ServiceRepository`].
#[derive(Clone)]
pub struct PgServiceRepository {
    pool: PgPool,
}

impl PgServiceRepository {
    /// Create a new repository over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for PgServiceRepository {
    async fn list_active(&self) -> Result<Vec<Service>, RepositoryError> {
        let services = sqlx::query_as::<_, Service>(
            r"
            SELECT id, name, description, price, active, sort_order
            FROM services
            WHERE active = true
            ORDER BY sort_order ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(services)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

//! Postgres data access for lookbook.
//!
//! Follows the repository convention: `FromRow` entity structs under
//! [`models`], zero-sized repository structs under [`repositories`] whose
//! async methods take `&PgPool` as the first argument and return
//! `Result<_, sqlx::Error>`. Error translation into domain errors happens
//! one layer up, in `lookbook-planner`.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await?;
    tracing::info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Cheap connectivity probe for readiness checks.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

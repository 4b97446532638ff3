//! Record store backends for the padaria service.
//!
//! - [`repositories::PgProductStore`] talks to PostgreSQL through `sqlx`.
//! - [`rest::RestProductStore`] talks to a hosted PostgREST-style service.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;
pub mod rest;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

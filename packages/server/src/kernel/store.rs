//! Postgres-backed exchange record store.
//!
//! One row per key in the `exchange_store` table; the whole exchange is a
//! single JSONB value, written last-writer-wins.

use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::kernel::traits::BaseExchangeStore;

pub struct PostgresExchangeStore {
    pool: PgPool,
}

impl PostgresExchangeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BaseExchangeStore for PostgresExchangeStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>> {
        sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT value FROM exchange_store WHERE key = $1",
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(Into::into)
    }

    async fn set(&self, key: &str, value: serde_json::Value) -> Result<()> {
        sqlx::query(
            "INSERT INTO exchange_store (key, value)
             VALUES ($1, $2)
             ON CONFLICT (key) DO UPDATE SET value = $2, updated_at = NOW()",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        sqlx::query("DELETE FROM exchange_store WHERE key = $1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

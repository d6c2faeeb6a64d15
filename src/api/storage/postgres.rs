//! PostgreSQL storage backend implementation.
//!
//! Uses sqlx for database operations and implements the [`Repository`] trait.
//! Every entity kind shares the `entities` table; the entity itself is kept
//! as JSONB in the `data` column and `seq` preserves insertion order.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::StorageError;
use super::traits::{Entity, Repository};

/// PostgreSQL repository for a single entity kind.
pub struct PostgresRepository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> PostgresRepository<T> {
    /// Create a new PostgreSQL repository over `pool`.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

fn decode_row<T: Entity>(row: &PgRow) -> Result<T, StorageError> {
    let data: Value = row.try_get("data")?;
    serde_json::from_value(data).map_err(|e| {
        StorageError::Serialization(format!("Failed to deserialize {}: {}", T::KIND, e))
    })
}

#[async_trait]
impl<T: Entity> Repository<T> for PostgresRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT data
            FROM entities
            WHERE kind = $1
            ORDER BY seq
            "#,
        )
        .bind(T::KIND)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(decode_row::<T>).collect()
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>, StorageError> {
        let row = sqlx::query(
            r#"
            SELECT data
            FROM entities
            WHERE kind = $1 AND id = $2
            "#,
        )
        .bind(T::KIND)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(decode_row::<T>).transpose()
    }

    async fn create(&self, entity: T) -> Result<T, StorageError> {
        let data = serde_json::to_value(&entity)?;

        sqlx::query(
            r#"
            INSERT INTO entities (kind, id, data)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(T::KIND)
        .bind(entity.id())
        .bind(data)
        .execute(&self.pool)
        .await?;

        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, StorageError> {
        let data = serde_json::to_value(&entity)?;

        let result = sqlx::query(
            r#"
            UPDATE entities
            SET data = $3
            WHERE kind = $1 AND id = $2
            "#,
        )
        .bind(T::KIND)
        .bind(entity.id())
        .bind(data)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found(T::KIND, entity.id()));
        }
        Ok(entity)
    }

    async fn delete(&self, entity: &T) -> Result<(), StorageError> {
        let result = sqlx::query(
            r#"
            DELETE FROM entities
            WHERE kind = $1 AND id = $2
            "#,
        )
        .bind(T::KIND)
        .bind(entity.id())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::not_found(T::KIND, entity.id()));
        }
        Ok(())
    }
}

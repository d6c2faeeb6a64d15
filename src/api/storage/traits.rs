//! Repository trait definitions shared by every storage backend.

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::StorageError;

/// An entity that can be kept in a [`Repository`].
///
/// `KIND` names the entity in logs, errors and the PostgreSQL `entities` table.
pub trait Entity: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    const KIND: &'static str;

    fn id(&self) -> Uuid;
}

/// Generic repository keyed by entity id.
#[async_trait::async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Get all entities, in insertion order
    async fn get_all(&self) -> Result<Vec<T>, StorageError>;

    /// Get an entity by ID
    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>, StorageError>;

    /// Persist a new entity and return it as stored
    async fn create(&self, entity: T) -> Result<T, StorageError>;

    /// Replace a stored entity (matched on its id) and return it as stored
    async fn update(&self, entity: T) -> Result<T, StorageError>;

    /// Remove a stored entity
    async fn delete(&self, entity: &T) -> Result<(), StorageError>;
}

/// Insert `items` into `repo` when the repository holds nothing yet.
///
/// Returns the number of inserted entities.
pub async fn seed_if_empty<T: Entity>(
    repo: &dyn Repository<T>,
    items: Vec<T>,
) -> Result<usize, StorageError> {
    if !repo.get_all().await?.is_empty() {
        return Ok(0);
    }

    let count = items.len();
    for item in items {
        repo.create(item).await?;
    }
    Ok(count)
}

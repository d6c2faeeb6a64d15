//! In-memory storage backend.
//!
//! Default backend when no `DATABASE_URL` is configured. Data lives for the
//! lifetime of the process.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::StorageError;
use super::traits::{Entity, Repository};

/// Vector-backed repository. Keeps entities in insertion order.
pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Entity> InMemoryRepository<T> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a repository pre-filled with `items`.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, StorageError> {
        Ok(self.items.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<T>, StorageError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == id).cloned())
    }

    async fn create(&self, entity: T) -> Result<T, StorageError> {
        let mut items = self.items.write().await;
        if items.iter().any(|item| item.id() == entity.id()) {
            return Err(StorageError::Other(format!(
                "{} with id {} already exists",
                T::KIND,
                entity.id()
            )));
        }
        items.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> Result<T, StorageError> {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|item| item.id() == entity.id()) {
            Some(slot) => {
                *slot = entity.clone();
                Ok(entity)
            }
            None => Err(StorageError::not_found(T::KIND, entity.id())),
        }
    }

    async fn delete(&self, entity: &T) -> Result<(), StorageError> {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| item.id() != entity.id());
        if items.len() == before {
            return Err(StorageError::not_found(T::KIND, entity.id()));
        }
        Ok(())
    }
}

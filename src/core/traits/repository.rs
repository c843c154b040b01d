use async_trait::async_trait;

use crate::core::Result;

/// Base repository trait for keyed document storage
/// Implementations must be safe to share across actix workers
#[async_trait]
pub trait Repository<T, ID>: Send + Sync {
    /// Store a new entity
    async fn create(&self, entity: T) -> Result<T>;

    /// Find entity by ID
    async fn find_by_id(&self, id: ID) -> Result<Option<T>>;

    /// Replace an existing entity; last write wins
    async fn update(&self, id: ID, entity: T) -> Result<T>;

    /// List entities, newest first
    async fn list(&self, limit: Option<u32>, offset: Option<u32>) -> Result<Vec<T>>;
}

use async_trait::async_trait;

use super::model::*;

/// Storage operations for the movie collection. Handlers hold this as
/// `Arc<dyn MovieRepo>` so the backend can be swapped without touching
/// the HTTP contract.
#[async_trait]
pub trait MovieRepo: Send + Sync {
    /// Every record in the collection, in backend-native order.
    async fn list_movies(&self) -> DbResult<Vec<Movie>>;

    /// Inserts a record, letting the backend mint the key, then reads the
    /// stored document back so the caller gets the canonical form.
    async fn create_movie(&self, fields: &MovieFields) -> DbResult<Movie>;

    /// Overwrites exactly `name`, `director` and `genre` on the matching
    /// record. Returns `NotFound` when no record matches the key.
    async fn update_movie(&self, key: &MovieKey, fields: &MovieFields) -> DbResult<()>;

    /// Removes the matching record. Returns `NotFound` when nothing matched.
    async fn delete_movie(&self, key: &MovieKey) -> DbResult<()>;
}

use async_trait::async_trait;
use webfilter_domain::{DomainError, Filter};

/// Durable storage for filters. Implementations must keep `get_all` order
/// stable across restarts (ascending id, i.e. insertion order) and make each
/// write atomic: a failed insert or delete leaves no trace in storage.
#[async_trait]
pub trait FilterRepository: Send + Sync {
    async fn insert(&self, text: String) -> Result<Filter, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Filter>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Filter>, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

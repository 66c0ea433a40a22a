#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use webfilter_application::ports::FilterRepository;
use webfilter_domain::{DomainError, Filter};

#[derive(Clone)]
pub struct MockFilterRepository {
    filters: Arc<RwLock<Vec<Filter>>>,
    next_id: Arc<AtomicI64>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockFilterRepository {
    pub fn new() -> Self {
        Self {
            filters: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn with_filters(texts: Vec<&str>) -> Self {
        let repo = Self::new();
        for text in texts {
            repo.insert(text.to_string()).await.unwrap();
        }
        repo
    }

    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn stored_count(&self) -> usize {
        self.filters.read().await.len()
    }
}

impl Default for MockFilterRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FilterRepository for MockFilterRepository {
    async fn insert(&self, text: String) -> Result<Filter, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "Mock repository failed".to_string(),
            ));
        }

        let mut filters = self.filters.write().await;
        if filters.iter().any(|f| f.text.as_ref() == text) {
            return Err(DomainError::DuplicateFilter(text));
        }

        let filter = Filter {
            id: Some(self.next_id.fetch_add(1, Ordering::SeqCst)),
            text: Arc::from(text.as_str()),
            created_at: Some("2026-01-01 00:00:00".to_string()),
        };
        filters.push(filter.clone());
        Ok(filter)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Filter>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "Mock repository failed".to_string(),
            ));
        }

        Ok(self
            .filters
            .read()
            .await
            .iter()
            .find(|f| f.id == Some(id))
            .cloned())
    }

    async fn get_all(&self) -> Result<Vec<Filter>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "Mock repository failed".to_string(),
            ));
        }

        Ok(self.filters.read().await.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DatabaseError(
                "Mock repository failed".to_string(),
            ));
        }

        let mut filters = self.filters.write().await;
        let before = filters.len();
        filters.retain(|f| f.id != Some(id));
        if filters.len() == before {
            return Err(DomainError::FilterNotFound(id));
        }
        Ok(())
    }
}

use arc_swap::ArcSwap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, instrument};
use webfilter_domain::{DomainError, Filter};

use crate::ports::FilterRepository;

/// Outcome of checking a navigation target against the filter set.
#[derive(Debug, Clone)]
pub enum NavigationDecision {
    Blocked(Filter),
    Allowed,
}

impl NavigationDecision {
    pub fn is_blocked(&self) -> bool {
        matches!(self, NavigationDecision::Blocked(_))
    }
}

/// Owns the authoritative in-memory filter set, kept write-through with the
/// injected repository. Reads (`matches`, `list`) go through a lock-free
/// snapshot so the navigation hot path never awaits; mutations serialize on a
/// single writer lock and publish a new snapshot only after the durable write
/// succeeded, so memory never shows a filter the store could lose on restart.
pub struct FilterStore {
    repo: Arc<dyn FilterRepository>,
    snapshot: ArcSwap<Vec<Filter>>,
    write_lock: Mutex<()>,
}

impl FilterStore {
    /// Load all filters from durable storage. Iteration order of the loaded
    /// set (ascending id) is the order `matches` scans in.
    pub async fn load(repo: Arc<dyn FilterRepository>) -> Result<Self, DomainError> {
        let filters = repo.get_all().await?;
        debug!(count = filters.len(), "Filter store loaded");
        Ok(Self {
            repo,
            snapshot: ArcSwap::from_pointee(filters),
            write_lock: Mutex::new(()),
        })
    }

    /// Read-only snapshot of the current filters in store order.
    pub fn list(&self) -> Vec<Filter> {
        self.snapshot.load().as_ref().clone()
    }

    #[instrument(skip(self))]
    pub async fn add(&self, text: &str) -> Result<Filter, DomainError> {
        Filter::validate_text(text).map_err(DomainError::InvalidFilter)?;

        let _guard = self.write_lock.lock().await;

        if self
            .snapshot
            .load()
            .iter()
            .any(|f| f.text.as_ref() == text)
        {
            return Err(DomainError::DuplicateFilter(text.to_string()));
        }

        let filter = self.repo.insert(text.to_string()).await?;

        let mut filters = self.snapshot.load().as_ref().clone();
        filters.push(filter.clone());
        self.snapshot.store(Arc::new(filters));

        Ok(filter)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        if !self
            .snapshot
            .load()
            .iter()
            .any(|f| f.id == Some(id))
        {
            return Err(DomainError::FilterNotFound(id));
        }

        self.repo.delete(id).await?;

        let filters: Vec<Filter> = self
            .snapshot
            .load()
            .iter()
            .filter(|f| f.id != Some(id))
            .cloned()
            .collect();
        self.snapshot.store(Arc::new(filters));

        Ok(())
    }

    /// First filter (in store order) whose text is contained in `url`.
    /// Case-sensitive, unanchored. None means the navigation is allowed.
    pub fn matches(&self, url: &str) -> Option<Filter> {
        self.snapshot
            .load()
            .iter()
            .find(|f| url.contains(f.text.as_ref()))
            .cloned()
    }

    /// The allow/block gate evaluated on every navigation attempt.
    pub fn check_url(&self, url: &str) -> NavigationDecision {
        match self.matches(url) {
            Some(filter) => NavigationDecision::Blocked(filter),
            None => NavigationDecision::Allowed,
        }
    }
}

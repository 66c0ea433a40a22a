use std::sync::Arc;
use tracing::{info, instrument};
use webfilter_domain::DomainError;

use crate::services::FilterStore;

pub struct DeleteFilterUseCase {
    store: Arc<FilterStore>,
}

impl DeleteFilterUseCase {
    pub fn new(store: Arc<FilterStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, id: i64) -> Result<(), DomainError> {
        self.store.remove(id).await?;

        info!(filter_id = id, "Filter deleted successfully");

        Ok(())
    }
}

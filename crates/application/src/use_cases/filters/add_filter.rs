use std::sync::Arc;
use tracing::{info, instrument};
use webfilter_domain::{DomainError, Filter};

use crate::services::FilterStore;

pub struct AddFilterUseCase {
    store: Arc<FilterStore>,
}

impl AddFilterUseCase {
    pub fn new(store: Arc<FilterStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, text: &str) -> Result<Filter, DomainError> {
        let filter = self.store.add(text).await?;

        info!(
            filter_id = ?filter.id,
            text = %filter.text,
            "Filter added successfully"
        );

        Ok(filter)
    }
}

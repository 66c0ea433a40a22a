use std::sync::Arc;
use webfilter_domain::Filter;

use crate::services::FilterStore;

pub struct GetFiltersUseCase {
    store: Arc<FilterStore>,
}

impl GetFiltersUseCase {
    pub fn new(store: Arc<FilterStore>) -> Self {
        Self { store }
    }

    pub fn execute(&self) -> Vec<Filter> {
        self.store.list()
    }
}

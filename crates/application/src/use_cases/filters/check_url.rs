use std::sync::Arc;
use tracing::{debug, instrument};

use crate::services::{FilterStore, NavigationDecision};

pub struct CheckUrlUseCase {
    store: Arc<FilterStore>,
}

impl CheckUrlUseCase {
    pub fn new(store: Arc<FilterStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, url: &str) -> NavigationDecision {
        let decision = self.store.check_url(url);

        if let NavigationDecision::Blocked(filter) = &decision {
            debug!(url = %url, matched = %filter.text, "Navigation blocked");
        }

        decision
    }
}

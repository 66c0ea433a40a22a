use std::sync::Arc;
use webfilter_application::services::FilterStore;
use webfilter_application::use_cases::filters::{
    AddFilterUseCase, CheckUrlUseCase, DeleteFilterUseCase, GetFiltersUseCase,
};
use webfilter_domain::DomainError;

use super::Repositories;

pub struct UseCases {
    pub add_filter: AddFilterUseCase,
    pub delete_filter: DeleteFilterUseCase,
    pub get_filters: GetFiltersUseCase,
    pub check_url: CheckUrlUseCase,
}

impl UseCases {
    pub async fn new(repos: &Repositories) -> Result<Self, DomainError> {
        let store = Arc::new(FilterStore::load(repos.filter.clone()).await?);

        Ok(Self {
            add_filter: AddFilterUseCase::new(store.clone()),
            delete_filter: DeleteFilterUseCase::new(store.clone()),
            get_filters: GetFiltersUseCase::new(store.clone()),
            check_url: CheckUrlUseCase::new(store),
        })
    }
}

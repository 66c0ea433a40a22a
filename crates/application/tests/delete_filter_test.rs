use std::sync::Arc;
use webfilter_application::services::FilterStore;
use webfilter_application::use_cases::filters::{DeleteFilterUseCase, GetFiltersUseCase};
use webfilter_domain::DomainError;

mod helpers;
use helpers::MockFilterRepository;

#[tokio::test]
async fn test_delete_existing_filter() {
    let repo = Arc::new(MockFilterRepository::with_filters(vec!["ads", "spam"]).await);
    let store = Arc::new(FilterStore::load(repo).await.unwrap());
    let delete = DeleteFilterUseCase::new(store.clone());
    let get = GetFiltersUseCase::new(store);

    let id = get.execute()[0].id.unwrap();
    delete.execute(id).await.unwrap();

    let remaining = get.execute();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].text.as_ref(), "spam");
}

#[tokio::test]
async fn test_delete_missing_filter() {
    let repo = Arc::new(MockFilterRepository::new());
    let store = Arc::new(FilterStore::load(repo).await.unwrap());
    let delete = DeleteFilterUseCase::new(store);

    let result = delete.execute(42).await;
    assert!(matches!(result, Err(DomainError::FilterNotFound(42))));
}

#[tokio::test]
async fn test_delete_then_readd() {
    let repo = Arc::new(MockFilterRepository::with_filters(vec!["ads"]).await);
    let store = Arc::new(FilterStore::load(repo).await.unwrap());

    let id = store.list()[0].id.unwrap();
    store.remove(id).await.unwrap();

    // Filters are immutable; editing one is delete + re-add.
    let readded = store.add("ads").await.unwrap();
    assert_ne!(readded.id, Some(id));
    assert_eq!(store.list().len(), 1);
}

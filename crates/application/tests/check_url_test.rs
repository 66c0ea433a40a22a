use std::sync::Arc;
use webfilter_application::services::{FilterStore, NavigationDecision};
use webfilter_application::use_cases::filters::CheckUrlUseCase;

mod helpers;
use helpers::MockFilterRepository;

async fn use_case_with(texts: Vec<&str>) -> CheckUrlUseCase {
    let repo = Arc::new(MockFilterRepository::with_filters(texts).await);
    let store = Arc::new(FilterStore::load(repo).await.unwrap());
    CheckUrlUseCase::new(store)
}

#[tokio::test]
async fn test_blocked_url() {
    let use_case = use_case_with(vec!["ads"]).await;

    let decision = use_case.execute("https://example.com/ads/banner");

    match decision {
        NavigationDecision::Blocked(filter) => assert_eq!(filter.text.as_ref(), "ads"),
        NavigationDecision::Allowed => panic!("expected block"),
    }
}

#[tokio::test]
async fn test_allowed_url() {
    let use_case = use_case_with(vec!["ads", "spam"]).await;

    let decision = use_case.execute("https://example.com/clean");
    assert!(!decision.is_blocked());
}

#[tokio::test]
async fn test_decision_is_deterministic() {
    let use_case = use_case_with(vec!["ad", "ads"]).await;

    for _ in 0..3 {
        match use_case.execute("https://example.com/ads") {
            NavigationDecision::Blocked(filter) => assert_eq!(filter.text.as_ref(), "ad"),
            NavigationDecision::Allowed => panic!("expected block"),
        }
    }
}

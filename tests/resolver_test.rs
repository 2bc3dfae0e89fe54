//! Integration tests for the catalog resolver

#[path = "common/mod.rs"]
mod common;

use common::*;
use ine_demographics::errors::AppError;
use ine_demographics::reference::STATIC_MUNICIPALITIES;
use ine_demographics::resolver::CatalogResolver;
use std::sync::Arc;

fn resolver(gateway: Arc<FakeGateway>) -> CatalogResolver {
    CatalogResolver::new(gateway, "33784", "96193")
}

#[tokio::test]
async fn test_remote_catalog_matches_are_ranked_by_length() {
    let gateway = Arc::new(FakeGateway::new(
        Some(vec![
            catalog_value("24199", "Valencia de Don Juan"),
            catalog_value("46250", "Valencia"),
            catalog_value("28079", "Madrid"),
        ]),
        None,
    ));
    let candidates = resolver(gateway).resolve("  VALENCIA ").await.unwrap();

    let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["46250", "24199"]);
    assert!(candidates.iter().all(|c| c.source_slug.is_none()));
}

#[tokio::test]
async fn test_empty_remote_catalog_falls_back_to_static() {
    let gateway = Arc::new(FakeGateway::new(Some(vec![]), None));
    let candidates = resolver(gateway).resolve("Madrid").await.unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, "28079");
    assert_eq!(candidates[0].source_slug.as_deref(), Some("madrid"));
}

#[tokio::test]
async fn test_catalog_failure_falls_back_to_static() {
    let gateway = Arc::new(FakeGateway::offline());
    let candidates = resolver(Arc::clone(&gateway))
        .resolve("bilbao")
        .await
        .unwrap();

    assert_eq!(candidates[0].name, "Bilbao");
    assert_eq!(gateway.catalog_calls(), 1);
}

#[tokio::test]
async fn test_remote_without_match_falls_back_to_static_slug() {
    let gateway = Arc::new(FakeGateway::new(
        Some(vec![catalog_value("28079", "Madrid")]),
        None,
    ));
    let candidates = resolver(gateway).resolve("las-palmas").await.unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, "35016");
}

#[tokio::test]
async fn test_remote_match_skips_static_table() {
    let gateway = Arc::new(FakeGateway::new(
        Some(vec![catalog_value("99999", "Madridejos")]),
        None,
    ));
    let candidates = resolver(gateway).resolve("madrid").await.unwrap();

    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].id, "99999");
}

#[tokio::test]
async fn test_every_static_entry_resolves_offline() {
    let gateway = Arc::new(FakeGateway::offline());
    let resolver = resolver(gateway);
    for entry in STATIC_MUNICIPALITIES {
        let by_name = resolver.resolve(entry.name).await.unwrap();
        assert!(by_name.iter().any(|c| c.id == entry.id), "{}", entry.name);

        let by_slug = resolver.resolve(entry.slug).await.unwrap();
        assert!(by_slug.iter().any(|c| c.id == entry.id), "{}", entry.slug);
    }
}

#[tokio::test]
async fn test_results_are_non_decreasing_by_name_length() {
    let gateway = Arc::new(FakeGateway::offline());
    let candidates = resolver(gateway).resolve("a").await.unwrap();

    assert!(candidates.len() > 1);
    assert!(candidates
        .windows(2)
        .all(|w| w[0].name.chars().count() <= w[1].name.chars().count()));
}

#[tokio::test]
async fn test_no_match_returns_empty_list() {
    let gateway = Arc::new(FakeGateway::new(Some(vec![]), None));
    let candidates = resolver(gateway).resolve("Nowhereville").await.unwrap();
    assert!(candidates.is_empty());
}

#[tokio::test]
async fn test_blank_query_is_input_error_without_gateway_call() {
    let gateway = Arc::new(FakeGateway::offline());
    let result = resolver(Arc::clone(&gateway)).resolve("   ").await;

    assert!(matches!(result, Err(AppError::MissingParameter)));
    assert_eq!(gateway.catalog_calls(), 0);
}

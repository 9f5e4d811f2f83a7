//! Failover behavior across catalog replicas
//!
//! Replicas are scanned in configured order. A 404 means "this replica
//! does not have it, ask the next one"; anything else ends the scan
//! immediately.


use test_helpers::{MockReplica, catalog_client, refused_endpoint, search_body};

use bazar_client::failover::FailoverExecutor;
use bazar_client::model::BookSummary;
use bazar_client::replica::ReplicaPool;
use bazar_client::types::Topic;

fn topic(raw: &str) -> Topic {
    Topic::new(raw.to_string()).unwrap()
}

#[tokio::test]
async fn test_not_found_replica_is_skipped() {
    // First replica has no route for the topic, second one does
    let first = MockReplica::new().spawn().await;
    let second = MockReplica::new()
        .on("GET /search/fiction", 200, &search_body(&[(1, "Dune")]))
        .spawn()
        .await;

    let (client, _cache) = catalog_client(vec![first.url(), second.url()]);
    let outcome = client.search(&topic("fiction")).await.unwrap();

    assert_eq!(outcome.books.len(), 1);
    assert_eq!(outcome.books[0].title, "Dune");
    assert_eq!(first.hit_count(), 1);
    assert_eq!(second.hit_count(), 1);
}

#[tokio::test]
async fn test_third_replica_serves_after_two_not_found() {
    let first = MockReplica::new().spawn().await;
    let second = MockReplica::new().spawn().await;
    let third = MockReplica::new()
        .on("GET /search/history", 200, &search_body(&[(7, "SICP")]))
        .spawn()
        .await;

    let (client, _cache) = catalog_client(vec![first.url(), second.url(), third.url()]);
    let outcome = client.search(&topic("history")).await.unwrap();

    assert_eq!(outcome.books[0].item_number, 7);
    assert_eq!(first.hit_count(), 1);
    assert_eq!(second.hit_count(), 1);
    assert_eq!(third.hit_count(), 1);
}

#[tokio::test]
async fn test_not_found_on_every_replica() {
    let first = MockReplica::new().spawn().await;
    let second = MockReplica::new().spawn().await;

    let (client, _cache) = catalog_client(vec![first.url(), second.url()]);
    let err = client.search(&topic("nonexistent")).await.unwrap_err();

    assert!(err.is_not_found());
    let message = err.to_string();
    assert!(message.contains("2"), "should report replicas tried: {}", message);
    assert_eq!(first.hit_count(), 1);
    assert_eq!(second.hit_count(), 1);
}

#[tokio::test]
async fn test_connection_failure_ends_the_scan() {
    // The second replica could answer, but a refused connection on the
    // first is fatal, not a skip
    let unreachable = refused_endpoint().await;
    let healthy = MockReplica::new()
        .on("GET /search/fiction", 200, &search_body(&[(1, "Dune")]))
        .spawn()
        .await;

    let (client, _cache) = catalog_client(vec![unreachable, healthy.url()]);
    let err = client.search(&topic("fiction")).await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(healthy.hit_count(), 0);
}

#[tokio::test]
async fn test_server_error_ends_the_scan() {
    let broken = MockReplica::new()
        .on("GET /search/fiction", 500, r#"{"error":"boom"}"#)
        .spawn()
        .await;
    let healthy = MockReplica::new()
        .on("GET /search/fiction", 200, &search_body(&[(1, "Dune")]))
        .spawn()
        .await;

    let (client, _cache) = catalog_client(vec![broken.url(), healthy.url()]);
    let err = client.search(&topic("fiction")).await.unwrap_err();

    assert!(!err.is_not_found());
    assert!(!err.is_transport());
    assert_eq!(broken.hit_count(), 1);
    assert_eq!(healthy.hit_count(), 0);
}

#[tokio::test]
async fn test_empty_result_is_success_not_a_skip() {
    // An empty array is a real answer; the scan must not continue
    let first = MockReplica::new()
        .on("GET /search/obscure", 200, "[]")
        .spawn()
        .await;
    let second = MockReplica::new()
        .on("GET /search/obscure", 200, &search_body(&[(9, "Hidden Gem")]))
        .spawn()
        .await;

    let (client, _cache) = catalog_client(vec![first.url(), second.url()]);
    let outcome = client.search(&topic("obscure")).await.unwrap();

    assert!(outcome.books.is_empty());
    assert_eq!(first.hit_count(), 1);
    assert_eq!(second.hit_count(), 0);

    // And it is cached like any other success
    let repeat = client.search(&topic("obscure")).await.unwrap();
    assert!(repeat.source.is_cache());
    assert!(repeat.books.is_empty());
    assert_eq!(first.hit_count(), 1);
    assert_eq!(second.hit_count(), 0);
}

#[tokio::test]
async fn test_scan_order_ignores_round_robin_cursor() {
    let first = MockReplica::new()
        .on("GET /search/fiction", 200, &search_body(&[(1, "Dune")]))
        .spawn()
        .await;
    let second = MockReplica::new()
        .on("GET /search/fiction", 200, &search_body(&[(2, "Wrong Copy")]))
        .spawn()
        .await;

    let pool = ReplicaPool::new("catalog", vec![first.url(), second.url()]).unwrap();
    // Advance the cursor a few times; the scan below must still start
    // at the first configured replica
    let _ = pool.select_next();
    let _ = pool.select_next();
    let _ = pool.select_next();

    let executor = FailoverExecutor::new(reqwest::Client::new());
    let (books, origin) = executor
        .execute::<Vec<BookSummary>>(&pool, &["search", "fiction"])
        .await
        .unwrap();

    assert_eq!(books[0].title, "Dune");
    assert_eq!(origin, first.url());
    assert_eq!(second.hit_count(), 0);
}

#[tokio::test]
async fn test_topic_with_spaces_is_percent_encoded() {
    let replica = MockReplica::new()
        .on(
            "GET /search/distributed%20systems",
            200,
            &search_body(&[(3, "RPCs for Noobs")]),
        )
        .spawn()
        .await;

    let (client, _cache) = catalog_client(vec![replica.url()]);
    let outcome = client.search(&topic("distributed systems")).await.unwrap();

    assert_eq!(outcome.books[0].title, "RPCs for Noobs");
    assert_eq!(
        replica.requests(),
        vec!["GET /search/distributed%20systems".to_string()]
    );
}

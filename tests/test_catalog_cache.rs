//! Cache-first catalog reads
//!
//! The first lookup goes to the network; repeats are answered from the
//! cache with no replica contact until a purchase invalidates the entry.


use test_helpers::{MockReplica, catalog_client, info_body, search_body};

use bazar_client::catalog::ResponseSource;
use bazar_client::types::Topic;

fn topic(raw: &str) -> Topic {
    Topic::new(raw.to_string()).unwrap()
}

#[tokio::test]
async fn test_repeated_search_never_touches_the_network() {
    let replica = MockReplica::new()
        .on("GET /search/fiction", 200, &search_body(&[(1, "Dune"), (2, "Hyperion")]))
        .spawn()
        .await;

    let (client, _cache) = catalog_client(vec![replica.url()]);

    let first = client.search(&topic("fiction")).await.unwrap();
    assert!(!first.source.is_cache());
    assert_eq!(replica.hit_count(), 1);

    let second = client.search(&topic("fiction")).await.unwrap();
    assert!(second.source.is_cache());
    assert_eq!(second.books, first.books);
    assert_eq!(replica.hit_count(), 1);
}

#[tokio::test]
async fn test_repeated_info_served_from_cache() {
    let replica = MockReplica::new()
        .on(
            "GET /info/7",
            200,
            &info_body(7, "SICP", "computer science", 55.0, 3),
        )
        .spawn()
        .await;

    let (client, _cache) = catalog_client(vec![replica.url()]);

    let first = client.info("7".parse().unwrap()).await.unwrap();
    assert_eq!(first.book.title, "SICP");

    let second = client.info("7".parse().unwrap()).await.unwrap();
    assert!(second.source.is_cache());
    assert_eq!(second.book, first.book);
    assert_eq!(replica.hit_count(), 1);
}

#[tokio::test]
async fn test_cached_entry_remembers_origin_replica() {
    // First replica answers 404, second serves; the cache must attribute
    // the entry to the second replica
    let first = MockReplica::new().spawn().await;
    let second = MockReplica::new()
        .on("GET /search/fiction", 200, &search_body(&[(1, "Dune")]))
        .spawn()
        .await;

    let (client, _cache) = catalog_client(vec![first.url(), second.url()]);
    client.search(&topic("fiction")).await.unwrap();

    let repeat = client.search(&topic("fiction")).await.unwrap();
    match repeat.source {
        ResponseSource::Cache { origin, .. } => assert_eq!(origin, second.url()),
        ResponseSource::Replica(_) => panic!("expected a cache hit"),
    }
}

#[tokio::test]
async fn test_search_and_info_keys_do_not_collide() {
    // Topic "42" and item number 42 must live in separate namespaces
    let replica = MockReplica::new()
        .on("GET /search/42", 200, &search_body(&[(42, "The Answer")]))
        .on(
            "GET /info/42",
            200,
            &info_body(42, "The Answer", "philosophy", 42.0, 42),
        )
        .spawn()
        .await;

    let (client, cache) = catalog_client(vec![replica.url()]);

    client.search(&topic("42")).await.unwrap();
    client.info("42".parse().unwrap()).await.unwrap();
    assert_eq!(replica.hit_count(), 2);

    cache.sync().await;
    assert_eq!(cache.entry_count(), 2);

    // Both repeats are cache hits
    assert!(client.search(&topic("42")).await.unwrap().source.is_cache());
    assert!(
        client
            .info("42".parse().unwrap())
            .await
            .unwrap()
            .source
            .is_cache()
    );
    assert_eq!(replica.hit_count(), 2);
}

#[tokio::test]
async fn test_distinct_topics_cached_separately() {
    let replica = MockReplica::new()
        .on("GET /search/fiction", 200, &search_body(&[(1, "Dune")]))
        .on("GET /search/history", 200, &search_body(&[(2, "1776")]))
        .spawn()
        .await;

    let (client, _cache) = catalog_client(vec![replica.url()]);

    let fiction = client.search(&topic("fiction")).await.unwrap();
    let history = client.search(&topic("history")).await.unwrap();

    assert_ne!(fiction.books, history.books);
    assert_eq!(replica.hit_count(), 2);

    assert_eq!(
        client.search(&topic("fiction")).await.unwrap().books,
        fiction.books
    );
    assert_eq!(replica.hit_count(), 2);
}

#[tokio::test]
async fn test_hit_and_miss_counters() {
    let replica = MockReplica::new()
        .on("GET /search/fiction", 200, &search_body(&[(1, "Dune")]))
        .spawn()
        .await;

    let (client, cache) = catalog_client(vec![replica.url()]);

    client.search(&topic("fiction")).await.unwrap();
    client.search(&topic("fiction")).await.unwrap();
    client.search(&topic("fiction")).await.unwrap();

    let stats = cache.stats().await;
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 2);
    assert_eq!(stats.entry_count, 1);
    assert!(stats.hit_rate > 60.0);
}

#[tokio::test]
async fn test_failed_search_caches_nothing() {
    let replica = MockReplica::new().spawn().await;

    let (client, cache) = catalog_client(vec![replica.url()]);
    assert!(client.search(&topic("fiction")).await.is_err());

    cache.sync().await;
    assert_eq!(cache.entry_count(), 0);

    // A retry goes back to the network
    assert!(client.search(&topic("fiction")).await.is_err());
    assert_eq!(replica.hit_count(), 2);
}

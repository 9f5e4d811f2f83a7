//! Benchmarks for replica selection and request URL construction
//!
//! Measures the per-request hot path on the client side:
//! - ReplicaPool::select_next round-robin rotation
//! - EndpointUrl::join_segments percent-encoded URL building
//!
//! Run with: cargo bench --bench replica_selection

use bazar_client::replica::ReplicaPool;
use bazar_client::types::EndpointUrl;
use divan::{Bencher, black_box};
use std::sync::Arc;

fn main() {
    divan::main();
}

fn make_pool(num_replicas: usize) -> Arc<ReplicaPool> {
    let endpoints = (0..num_replicas)
        .map(|i| EndpointUrl::parse(&format!("http://catalog-service-{}:3001", i + 1)).unwrap())
        .collect();
    Arc::new(ReplicaPool::new("catalog", endpoints).unwrap())
}

// =============================================================================
// Round-Robin Selection
// =============================================================================

mod round_robin {
    use super::*;

    #[divan::bench(sample_count = 1000, sample_size = 1000)]
    fn select_2_replicas(bencher: Bencher) {
        let pool = make_pool(2);
        bencher.bench(|| black_box(pool.select_next().clone()));
    }

    #[divan::bench(sample_count = 1000, sample_size = 1000)]
    fn select_4_replicas(bencher: Bencher) {
        let pool = make_pool(4);
        bencher.bench(|| black_box(pool.select_next().clone()));
    }

    #[divan::bench(sample_count = 1000, sample_size = 1000)]
    fn select_8_replicas(bencher: Bencher) {
        let pool = make_pool(8);
        bencher.bench(|| black_box(pool.select_next().clone()));
    }
}

// =============================================================================
// Request URL construction
// =============================================================================

mod url_building {
    use super::*;

    #[divan::bench(sample_count = 1000, sample_size = 1000)]
    fn join_plain_topic(bencher: Bencher) {
        let base = EndpointUrl::parse("http://catalog-service-1:3001").unwrap();
        bencher.bench(|| black_box(base.join_segments(black_box(&["search", "fiction"]))));
    }

    #[divan::bench(sample_count = 1000, sample_size = 1000)]
    fn join_topic_needing_encoding(bencher: Bencher) {
        let base = EndpointUrl::parse("http://catalog-service-1:3001").unwrap();
        bencher
            .bench(|| black_box(base.join_segments(black_box(&["search", "graduate school"]))));
    }

    #[divan::bench(sample_count = 1000, sample_size = 1000)]
    fn join_item_path(bencher: Bencher) {
        let base = EndpointUrl::parse("http://order-service-1:3003").unwrap();
        bencher.bench(|| black_box(base.join_segments(black_box(&["purchase", "42"]))));
    }
}

// =============================================================================
// Multi-threaded contention on the shared cursor
// =============================================================================

mod contention {
    use super::*;

    #[divan::bench(sample_count = 100, sample_size = 100, threads = [1, 2, 4, 8])]
    fn select_under_contention(bencher: Bencher) {
        let pool = make_pool(4);
        bencher.bench(|| black_box(pool.select_next().clone()));
    }
}

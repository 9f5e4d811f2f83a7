//! Client library for the BAZAR.COM bookstore
//!
//! An interactive client for a replicated two-service bookstore. All
//! resilience lives client-side:
//!
//! - [`replica::ReplicaPool`] tracks the replicas of one service and
//!   hands out order-placement targets round-robin
//! - [`failover::FailoverExecutor`] walks a pool in configured order,
//!   treating 404 as "try the next replica" and everything else as fatal
//! - [`cache::ResponseCache`] keeps catalog responses until a purchase
//!   explicitly invalidates them
//! - [`catalog::CatalogClient`] answers searches and lookups cache-first
//! - [`order::OrderClient`] places purchases exactly once, never
//!   retrying, and drives cache invalidation afterwards
//! - [`session::Session`] ties the above together for one interactive run

pub mod args;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod failover;
pub mod formatting;
pub mod logging;
pub mod model;
pub mod order;
pub mod replica;
pub mod session;
pub mod shell;
pub mod types;

pub use cache::{CacheKey, CacheStats, ResponseCache};
pub use catalog::CatalogClient;
pub use config::{Config, load_config, load_config_with_fallback};
pub use error::ClientError;
pub use order::OrderClient;
pub use replica::ReplicaPool;
pub use session::Session;

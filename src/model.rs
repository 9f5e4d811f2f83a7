//! Wire types for the catalog and order HTTP APIs
//!
//! The catalog answers `GET /search/<topic>` with a bare JSON array of
//! summaries and `GET /info/<item>` with a single detail object; the order
//! service answers `POST /purchase/<item>` with a confirmation message.
//! Unknown fields are ignored so replicas may grow their payloads.

use serde::{Deserialize, Serialize};

/// One row of a topic search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    #[serde(rename = "itemNumber")]
    pub item_number: u32,
    pub title: String,
}

/// Full record for a single catalog item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDetail {
    #[serde(rename = "itemNumber")]
    pub item_number: u32,
    pub title: String,
    pub topic: String,
    pub price: f64,
    pub stock: i64,
}

/// Order service response to a successful purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseConfirmation {
    pub message: String,
}

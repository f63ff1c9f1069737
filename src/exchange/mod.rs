use async_trait::async_trait;

use crate::error::Result;
use crate::models::Order;

pub mod estimator;
pub mod fee;
pub mod selector;
pub mod stats;

/// Which slice of the CLOB book a read should return.
#[derive(Debug, Clone)]
pub enum OrderFilter {
    /// Every active order across all listed pairs.
    All,
    /// Orders in any pair that involves the given token.
    Token(String),
    /// Orders in the unordered pair (a, b).
    Pair(String, String),
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderFilter::All => true,
            OrderFilter::Token(token) => order.involves(token),
            OrderFilter::Pair(a, b) => order.in_pair(a, b),
        }
    }
}

/// Anything that can produce an active order-book snapshot.
///
/// `CacheApi` implements this against the remote cache service; tests
/// implement it over an in-memory fixture book.
#[async_trait]
pub trait OrderBookSource: Send + Sync {
    async fn order_book(&self, filter: &OrderFilter) -> Result<Vec<Order>>;
}

use anyhow::anyhow;
use async_trait::async_trait;
use serde_json::Value;

use crate::config::ExchangeConfig;
use crate::error::{Error, Result};
use crate::exchange::{OrderBookSource, OrderFilter};
use crate::models::{ClobState, Order, TokenState};
use crate::utils::is_valid_address;

/// HTTP client for the remote cache/indexing service.
///
/// The cache serves pre-aggregated contract state snapshots keyed by
/// contract ID. A missing contract is a `None`, not an error; rate limiting
/// surfaces as `rate_limited` and is retried with backoff.
pub struct CacheApi {
    api_url: String,
    clob_contract: String,
    community_contract: String,
    client: reqwest::Client,
}

impl CacheApi {
    pub fn new(config: &ExchangeConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to build HTTP client");
        Self::with_client(config, client)
    }

    pub fn with_client(config: &ExchangeConfig, client: reqwest::Client) -> Self {
        Self {
            api_url: crate::utils::remove_trailing_slash(&config.cache_url),
            clob_contract: config.clob_contract.clone(),
            community_contract: config.community_contract.clone(),
            client,
        }
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn build_state_url(&self, contract_id: &str) -> String {
        format!("{}/{}", self.api_url, contract_id)
    }

    async fn fetch_state(&self, contract_id: &str) -> Result<Option<Value>> {
        let url = self.build_state_url(contract_id);
        let response = self.client.get(&url).send().await?;
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(anyhow!("rate_limited").into());
        }
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let body = response.text().await?;
        let parsed: Value = serde_json::from_str(&body)?;
        if parsed.is_null() {
            Ok(None)
        } else {
            Ok(Some(parsed))
        }
    }

    /// Fetch a contract state snapshot. `Ok(None)` means the cache does not
    /// know the contract.
    pub async fn contract_state(&self, contract_id: &str) -> Result<Option<Value>> {
        if !is_valid_address(contract_id) {
            return Err(Error::Validation(format!(
                "'{}' is not a valid contract address",
                contract_id
            )));
        }
        crate::utils::retry(10, 1000, || self.fetch_state(contract_id)).await
    }

    /// Typed snapshot of the CLOB contract.
    pub async fn clob_state(&self) -> Result<ClobState> {
        let state = self
            .contract_state(&self.clob_contract)
            .await?
            .ok_or_else(|| anyhow!("CLOB contract {} not in cache", self.clob_contract))?;
        Ok(serde_json::from_value(state)?)
    }

    /// Typed snapshot of a token contract (balances + vaults).
    pub async fn token_state(&self, token_id: &str) -> Result<TokenState> {
        let state = self
            .contract_state(token_id)
            .await?
            .ok_or_else(|| anyhow!("token contract {} not in cache", token_id))?;
        Ok(serde_json::from_value(state)?)
    }

    /// Token state of the community (protocol token) contract, the weight
    /// source for holder-fee distribution.
    pub async fn community_state(&self) -> Result<TokenState> {
        self.token_state(&self.community_contract).await
    }
}

#[async_trait]
impl OrderBookSource for CacheApi {
    /// Active orders across the CLOB snapshot, narrowed by `filter`.
    /// Fully-filled orders are dropped here so the estimator never sees a
    /// zero-quantity entry.
    async fn order_book(&self, filter: &OrderFilter) -> Result<Vec<Order>> {
        let state = self.clob_state().await?;
        let mut orders = Vec::new();
        for pair_state in state.pairs {
            for order in pair_state.orders {
                if order.is_active() && filter.matches(&order) {
                    orders.push(order);
                }
            }
        }
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_malformed_contract_address_before_any_request() {
        let api = CacheApi::new(&ExchangeConfig::default());
        let result = api.contract_state("not-an-address").await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }
}

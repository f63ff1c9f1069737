use serde::{Deserialize, Serialize};

/// Fee rate charged on every swap (0.5%), applied once per fee target.
pub const EXCHANGE_FEE: f64 = 0.005;

const CACHE_URL: &str = "https://v2.cache.verto.exchange";
const GATEWAY_URL: &str = "https://arweave.net";
const CLOB_CONTRACT: &str = "t9T7DIOGxx4VWXoCEeYYarFYeERTpWIC1V3y-BPZgKE";
const COMMUNITY_CONTRACT: &str = "usjm4PCxUd5mtaon7zc97-dt-3qf67yPyqgzLnLqk5A";
const EXCHANGE_WALLET: &str = "aLemOhg9OGovn-0o4cOCbueiHT9VgdYnpJpq7NgMA1A";

/// Explicit configuration for every SDK component.
///
/// All protocol constants live here instead of module-level statics, so a
/// caller can point the SDK at a different cache deployment, contract fork
/// or fee schedule without touching process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeConfig {
    /// Base URL of the remote cache/indexing service.
    pub cache_url: String,
    /// Base URL of the ledger gateway (interaction submission, GraphQL).
    pub gateway_url: String,
    /// CLOB order-matching contract ID.
    pub clob_contract: String,
    /// Community (protocol token) contract ID, source of holder balances.
    pub community_contract: String,
    /// Fixed recipient for `FeeTarget::Exchange`.
    pub exchange_wallet: String,
    /// Fee rate applied per swap, as a fraction of the sent amount.
    pub exchange_fee: f64,
    /// Fallback recipient when weighted selection exhausts without a match.
    /// Defaults to the exchange wallet (protocol treasury).
    pub fee_fallback: String,
    /// Optional webhook notified (best-effort) after a swap submission.
    pub webhook_url: Option<String>,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            cache_url: CACHE_URL.to_string(),
            gateway_url: GATEWAY_URL.to_string(),
            clob_contract: CLOB_CONTRACT.to_string(),
            community_contract: COMMUNITY_CONTRACT.to_string(),
            exchange_wallet: EXCHANGE_WALLET.to_string(),
            exchange_fee: EXCHANGE_FEE,
            fee_fallback: EXCHANGE_WALLET.to_string(),
            webhook_url: None,
        }
    }
}

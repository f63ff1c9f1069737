use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A time-locked balance entry, unlocked once the ledger reaches `end`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vault {
    pub balance: u64,
    pub start: u64,
    pub end: u64,
}

impl Vault {
    pub fn is_locked(&self, current_height: u64) -> bool {
        self.end > current_height
    }
}

/// Snapshot of a token contract's state: direct balances plus vaulted
/// (time-locked) balances per holder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenState {
    pub ticker: String,
    #[serde(default)]
    pub name: Option<String>,
    pub balances: BTreeMap<String, u64>,
    #[serde(default)]
    pub vaults: BTreeMap<String, Vec<Vault>>,
}

impl TokenState {
    pub fn balance_of(&self, holder: &str) -> u64 {
        self.balances.get(holder).copied().unwrap_or(0)
    }

    /// Sum of the holder's vault entries still locked at `current_height`.
    pub fn locked_of(&self, holder: &str, current_height: u64) -> u64 {
        self.vaults
            .get(holder)
            .map(|entries| {
                entries
                    .iter()
                    .filter(|v| v.is_locked(current_height))
                    .map(|v| v.balance)
                    .sum()
            })
            .unwrap_or(0)
    }
}

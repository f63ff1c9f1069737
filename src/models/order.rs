use serde::{Deserialize, Serialize};

/// A single resting order in a pair's order book.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub creator: String,
    /// The two pair tokens, in the order the CLOB contract lists them.
    pub pair: [String; 2],
    /// Which of the two pair tokens this order is offering.
    /// Must equal `pair[0]` or `pair[1]`.
    pub token: String,
    /// Units of the *other* pair token per unit of `token`.
    /// Absent for pure market orders.
    #[serde(default)]
    pub price: Option<f64>,
    /// Remaining unfilled amount, in units of `token`.
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: f64,
}

// The cache service encodes quantities as either a JSON number or a string,
// depending on the contract version that created the order.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Q {
        Num(f64),
        Str(String),
    }
    let q = Q::deserialize(deserializer)?;
    match q {
        Q::Num(n) => Ok(n),
        Q::Str(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

impl Order {
    /// A fully filled order (`quantity == 0`) must not appear in an
    /// active order-book snapshot.
    pub fn is_active(&self) -> bool {
        self.quantity > 0.0
    }

    pub fn involves(&self, token: &str) -> bool {
        self.pair[0] == token || self.pair[1] == token
    }

    /// Unordered pair membership.
    pub fn in_pair(&self, a: &str, b: &str) -> bool {
        (self.pair[0] == a && self.pair[1] == b) || (self.pair[0] == b && self.pair[1] == a)
    }
}

/// One listed pair and its resting orders, as exposed by the CLOB contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairState {
    pub pair: [String; 2],
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Snapshot of the CLOB contract state, fetched from the cache service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClobState {
    #[serde(default)]
    pub pairs: Vec<PairState>,
}

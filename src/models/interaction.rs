use serde::{Deserialize, Serialize};

/// A name/value tag attached to a submitted interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Well-formed input payload for the CLOB / token contract entry points.
///
/// Serializes to the wire shape the contracts expect:
/// `{"function": "createOrder", ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "function")]
pub enum InteractionInput {
    #[serde(rename = "createOrder")]
    CreateOrder {
        pair: [String; 2],
        /// Limit price; omitted for market orders.
        #[serde(skip_serializing_if = "Option::is_none")]
        price: Option<f64>,
        quantity: f64,
        /// The token-transfer interaction funding this order.
        transaction: String,
    },
    #[serde(rename = "cancelOrder")]
    CancelOrder {
        #[serde(rename = "orderID")]
        order_id: String,
    },
    #[serde(rename = "addPair")]
    AddPair { pair: [String; 2] },
    #[serde(rename = "transfer")]
    Transfer { target: String, qty: u64 },
    #[serde(rename = "list")]
    List {
        id: String,
        #[serde(rename = "type")]
        listing_type: String,
    },
}

impl InteractionInput {
    /// The contract entry point this payload targets, used as the
    /// `Action` tag value.
    pub fn action(&self) -> &'static str {
        match self {
            InteractionInput::CreateOrder { .. } => "createOrder",
            InteractionInput::CancelOrder { .. } => "cancelOrder",
            InteractionInput::AddPair { .. } => "addPair",
            InteractionInput::Transfer { .. } => "transfer",
            InteractionInput::List { .. } => "list",
        }
    }

    /// Protocol tags carried by every submission. Caller-supplied tags
    /// are appended after these.
    pub fn base_tags(&self) -> Vec<Tag> {
        vec![
            Tag::new("Exchange", "Verto"),
            Tag::new("Action", self.action()),
        ]
    }
}

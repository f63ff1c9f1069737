use anyhow::anyhow;
use serde_json::{json, Value};

use crate::config::ExchangeConfig;
use crate::error::{Error, Result};
use crate::exchange::stats::TradePoint;
use crate::models::{InteractionInput, Tag};
use crate::utils::is_valid_address;

/// HTTP client for the ledger gateway: dispatches prepared write
/// interactions and runs GraphQL queries over confirmed ones.
///
/// Signing and ordering are the gateway's business. This client only
/// constructs a well-formed payload and tag set; a rejected or dropped
/// interaction surfaces as a collaborator error.
pub struct GatewayApi {
    gateway_url: String,
    webhook_url: Option<String>,
    client: reqwest::Client,
}

/// A confirmed interaction against a contract, as returned by the
/// gateway's GraphQL endpoint.
#[derive(Debug, Clone)]
pub struct OrderInteraction {
    pub id: String,
    pub owner: String,
    pub height: u64,
    /// Block timestamp, unix seconds.
    pub timestamp: u64,
    /// Parsed `Input` tag; `None` when the tag is missing or malformed.
    pub input: Option<InteractionInput>,
}

impl GatewayApi {
    pub fn new(config: &ExchangeConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to build HTTP client");
        Self::with_client(config, client)
    }

    pub fn with_client(config: &ExchangeConfig, client: reqwest::Client) -> Self {
        Self {
            gateway_url: crate::utils::remove_trailing_slash(&config.gateway_url),
            webhook_url: config.webhook_url.clone(),
            client,
        }
    }

    pub fn gateway_url(&self) -> &str {
        &self.gateway_url
    }

    /// Submit a write interaction against `contract_id`. Every submission
    /// carries the protocol tags (`Exchange: Verto`, `Action: <entry point>`)
    /// followed by `extra_tags`. Returns the interaction ID assigned by the
    /// gateway.
    pub async fn submit_interaction(
        &self,
        contract_id: &str,
        input: &InteractionInput,
        extra_tags: &[Tag],
    ) -> Result<String> {
        if !is_valid_address(contract_id) {
            return Err(Error::Validation(format!(
                "'{}' is not a valid contract address",
                contract_id
            )));
        }

        let mut tags = input.base_tags();
        tags.extend_from_slice(extra_tags);

        let body = json!({
            "contract": contract_id,
            "input": input,
            "tags": tags,
        });

        let url = format!("{}/interactions", self.gateway_url);
        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!("gateway returned status {}", response.status()).into());
        }
        let parsed: Value = serde_json::from_str(&response.text().await?)?;
        let id = parsed
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow!("gateway response missing interaction id"))?
            .to_string();

        self.notify(json!({ "interaction": id, "contract": contract_id }));
        Ok(id)
    }

    /// Best-effort webhook POST. Fired in the background; a failure is
    /// logged and has no effect on the caller's result.
    pub fn notify(&self, payload: Value) {
        let Some(url) = self.webhook_url.clone() else {
            return;
        };
        let client = self.client.clone();
        tokio::spawn(async move {
            if let Err(e) = client.post(&url).json(&payload).send().await {
                eprintln!("[gateway] webhook notify failed: {}", e);
            }
        });
    }

    /// Confirmed interactions against `contract_id` carrying the protocol's
    /// `Exchange: Verto` tag, newest first.
    pub async fn query_order_interactions(
        &self,
        contract_id: &str,
        limit: u32,
    ) -> Result<Vec<OrderInteraction>> {
        if !is_valid_address(contract_id) {
            return Err(Error::Validation(format!(
                "'{}' is not a valid contract address",
                contract_id
            )));
        }

        let query = json!({
            "query": r#"query($contract: String!, $first: Int!) {
                transactions(
                    tags: [
                        { name: "Contract", values: [$contract] },
                        { name: "Exchange", values: ["Verto"] }
                    ]
                    first: $first
                ) {
                    edges {
                        node {
                            id
                            owner { address }
                            block { height timestamp }
                            tags { name value }
                        }
                    }
                }
            }"#,
            "variables": { "contract": contract_id, "first": limit },
        });

        let url = format!("{}/graphql", self.gateway_url);
        let response = self.client.post(&url).json(&query).send().await?;
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(anyhow!("rate_limited").into());
        }
        let body: Value = serde_json::from_str(&response.text().await?)?;

        let edges = body
            .pointer("/data/transactions/edges")
            .and_then(|e| e.as_array())
            .ok_or_else(|| anyhow!("gateway GraphQL response missing edges"))?;

        let mut interactions = Vec::with_capacity(edges.len());
        for edge in edges {
            let node = match edge.get("node") {
                Some(n) => n,
                None => continue,
            };
            let id = node
                .get("id")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            let owner = node
                .pointer("/owner/address")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            let height = node
                .pointer("/block/height")
                .and_then(|v| v.as_u64())
                .unwrap_or(0);
            let timestamp = node
                .pointer("/block/timestamp")
                .and_then(|v| v.as_u64())
                .unwrap_or(0);
            let input = node
                .get("tags")
                .and_then(|t| t.as_array())
                .and_then(|tags| {
                    tags.iter().find(|t| {
                        t.get("name").and_then(|n| n.as_str()) == Some("Input")
                    })
                })
                .and_then(|t| t.get("value"))
                .and_then(|v| v.as_str())
                .and_then(|raw| serde_json::from_str(raw).ok());

            interactions.push(OrderInteraction {
                id,
                owner,
                height,
                timestamp,
                input,
            });
        }

        Ok(interactions)
    }
}

/// Reduce confirmed interactions to trade points for volume/price
/// aggregation. Only `createOrder` interactions count as trades.
pub fn trade_points(interactions: &[OrderInteraction]) -> Vec<TradePoint> {
    interactions
        .iter()
        .filter_map(|interaction| match &interaction.input {
            Some(InteractionInput::CreateOrder {
                price, quantity, ..
            }) => Some(TradePoint {
                timestamp: interaction.timestamp,
                quantity: *quantity,
                price: *price,
            }),
            _ => None,
        })
        .collect()
}

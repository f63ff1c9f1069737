//! # verto-rs
//!
//! A Rust SDK for the Verto decentralized token exchange protocol.
//! Reads order books and token state via the remote cache service, predicts
//! swap outcomes client-side, and prepares write interactions for the CLOB
//! and token contracts.
//!
//! ## Components
//!
//! | Component | Role |
//! |-----------|------|
//! | `CacheApi` | Contract state snapshots from the cache/indexing service |
//! | `GatewayApi` | Interaction submission + GraphQL queries over the ledger gateway |
//! | `OrderEstimator` | Predicts fill price/quantity from an order-book snapshot |
//! | `WeightedSelector` | Stake-weighted random participant selection |
//! | `FeeCalculator` | Fee amounts and fee-recipient resolution |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use verto_rs::{CacheApi, ExchangeConfig, OrderEstimator, SwapRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ExchangeConfig::default();
//!     let estimator = OrderEstimator::new(CacheApi::new(&config));
//!
//!     let estimate = estimator
//!         .estimate_swap(&SwapRequest {
//!             from: "usjm4PCxUd5mtaon7zc97-dt-3qf67yPyqgzLnLqk5A".into(),
//!             to: "t9T7DIOGxx4VWXoCEeYYarFYeERTpWIC1V3y-BPZgKE".into(),
//!             amount: 100.0,
//!             price: None,
//!         })
//!         .await?;
//!
//!     println!("immediate fill: {}", estimate.immediate);
//!     if let Some(rest) = estimate.rest {
//!         println!("remainder at market: {}", rest);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Estimation never mutates remote state: the SDK fetches a snapshot, walks
//! it, and leaves submitting the actual `createOrder` interaction to the
//! caller (see [`GatewayApi::submit_interaction`]).

pub mod cache;
pub mod config;
pub mod error;
pub mod exchange;
pub mod gateway;
pub mod models;
pub mod utils;

pub use cache::CacheApi;
pub use config::ExchangeConfig;
pub use error::{Error, Result};
pub use exchange::estimator::{EstimateResult, OrderEstimator, SwapRequest};
pub use exchange::fee::{Fee, FeeCalculator, FeeSpec, FeeTarget};
pub use exchange::selector::{WeightMap, WeightedSelector};
pub use exchange::stats::{daily_points, DayPoint, TradePoint};
pub use exchange::{OrderBookSource, OrderFilter};
pub use gateway::{trade_points, GatewayApi, OrderInteraction};
pub use models::{ClobState, InteractionInput, Order, PairState, Tag, TokenState, Vault};

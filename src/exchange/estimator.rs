/// Swap estimation over a fetched order-book snapshot.
///
/// The estimator never mutates remote state: it fetches the active orders
/// for the requested pair and walks the reverse side of the book to predict
/// what an actual `createOrder` interaction would fill immediately, and what
/// the unmatched remainder would be worth at the limit or average price.
///
/// Matching order is whatever the snapshot returns — the CLOB contract
/// exposes orders best-price-first, so the walk performs no re-sorting.
use serde::{Deserialize, Serialize};

use super::{OrderBookSource, OrderFilter};
use crate::error::{Error, Result};
use crate::models::Order;
use crate::utils::is_valid_address;

/// Caller input: swap `amount` units of `from` into `to`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapRequest {
    /// Token the caller sends.
    pub from: String,
    /// Token the caller wants to receive.
    pub to: String,
    /// Quantity of `from` to send. Must be positive.
    pub amount: f64,
    /// Optional limit price. When present, only resting orders priced at
    /// exactly this value participate in the immediate fill.
    pub price: Option<f64>,
}

/// Predicted outcome of a swap, in units of the `to` token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    /// Receivable from immediately-matchable resting orders.
    pub immediate: f64,
    /// Receivable for the unmatched remainder at the limit price, or at the
    /// average same-direction price when no limit was given. Absent when
    /// the entire amount fills immediately. May be NaN when no limit was
    /// given and the book holds no priced same-direction orders.
    pub rest: Option<f64>,
}

pub struct OrderEstimator<S> {
    source: S,
}

impl<S: OrderBookSource> OrderEstimator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Estimate a swap against the current order book.
    ///
    /// Validation runs before any external call; collaborator failures from
    /// the snapshot fetch propagate unchanged.
    pub async fn estimate_swap(&self, request: &SwapRequest) -> Result<EstimateResult> {
        validate_request(request)?;
        let orders = self
            .source
            .order_book(&OrderFilter::Pair(
                request.from.clone(),
                request.to.clone(),
            ))
            .await?;
        estimate_from_orders(&request.from, request.amount, request.price, &orders)
    }
}

fn validate_request(request: &SwapRequest) -> Result<()> {
    if !is_valid_address(&request.from) {
        return Err(Error::Validation(format!(
            "'{}' is not a valid token address",
            request.from
        )));
    }
    if !is_valid_address(&request.to) {
        return Err(Error::Validation(format!(
            "'{}' is not a valid token address",
            request.to
        )));
    }
    if request.from == request.to {
        return Err(Error::Validation(
            "swap pair must name two distinct tokens".to_string(),
        ));
    }
    if !(request.amount > 0.0) {
        return Err(Error::Validation(format!(
            "swap amount must be positive, got {}",
            request.amount
        )));
    }
    Ok(())
}

/// Pure estimation walk over an already-fetched snapshot.
///
/// `orders` is the pair's active book; orders offering the `from` token are
/// the caller's own side and only contribute to the fallback average price,
/// orders offering the other token are what the swap would match against.
pub fn estimate_from_orders(
    from: &str,
    amount: f64,
    limit: Option<f64>,
    orders: &[Order],
) -> Result<EstimateResult> {
    let (reverse, same): (Vec<&Order>, Vec<&Order>) =
        orders.iter().partition(|o| o.token != from);

    // Fallback pricing reference for an unmatched remainder. NaN when the
    // same-direction side has no priced orders; callers must treat that as
    // "no average available" rather than a number.
    let priced: Vec<f64> = same.iter().filter_map(|o| o.price).collect();
    let avg_price = if priced.is_empty() {
        f64::NAN
    } else {
        priced.iter().sum::<f64>() / priced.len() as f64
    };

    let mut remaining = amount;
    let mut immediate = 0.0;

    for order in &reverse {
        if remaining <= 0.0 {
            break;
        }
        // A limit order only matches resting orders at the exact same price.
        if let Some(limit) = limit {
            if order.price != Some(limit) {
                continue;
            }
        }
        let order_price = match order.price {
            Some(p) if p == 0.0 => {
                return Err(Error::Computation(format!(
                    "order {} is priced at zero",
                    order.id
                )));
            }
            Some(p) => p,
            // A pure market order quotes no rate of its own; it cannot
            // price this walk and is passed over.
            None => continue,
        };
        // Units of `to` received per unit of `from` sent, from this
        // order's perspective.
        let reverse_price = 1.0 / order_price;

        if remaining * limit.unwrap_or(reverse_price) <= order.quantity {
            // This order covers the whole remainder.
            immediate += remaining * reverse_price;
            remaining = 0.0;
            break;
        } else {
            // This order is fully consumed.
            immediate += order.quantity;
            remaining -= order.quantity * order_price;
        }
    }

    // A remainder that undershoots to a negative value counts as fully
    // filled; only a strictly positive remainder is re-priced.
    let rest = if remaining > 0.0 {
        Some(remaining * limit.unwrap_or(avg_price))
    } else {
        None
    };

    Ok(EstimateResult { immediate, rest })
}

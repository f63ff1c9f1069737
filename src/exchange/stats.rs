/// Client-side volume/price aggregation over confirmed order interactions.
///
/// The ledger has no "give me yesterday's volume" query; the SDK fetches
/// raw order interactions and buckets them into day windows itself. Days
/// with no trades are skipped, and the backward scan is bounded by
/// `MAX_LOOKBACK_DAYS` so sparse or empty histories terminate instead of
/// walking back forever.
use serde::{Deserialize, Serialize};

pub const DAY_SECS: u64 = 86_400;
/// Hard cap on how many day windows a scan may visit.
pub const MAX_LOOKBACK_DAYS: u32 = 90;

/// One confirmed trade, extracted from an order interaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradePoint {
    /// Unix timestamp (seconds) of the interaction's block.
    pub timestamp: u64,
    /// Sent quantity.
    pub quantity: f64,
    /// Limit price, when the order carried one.
    pub price: Option<f64>,
}

/// Aggregated activity for one day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPoint {
    /// Start of the day window (unix seconds).
    pub day_start: u64,
    /// Total quantity traded in the window.
    pub volume: f64,
    /// Arithmetic mean of the priced trades in the window; absent when the
    /// window held only market orders.
    pub price: Option<f64>,
}

/// Collect up to `days` non-empty day windows, newest first, starting from
/// the window ending at `now` and scanning back at most `MAX_LOOKBACK_DAYS`
/// windows.
pub fn daily_points(trades: &[TradePoint], now: u64, days: u32) -> Vec<DayPoint> {
    let mut points = Vec::new();

    for back in 0..MAX_LOOKBACK_DAYS {
        if points.len() >= days as usize {
            break;
        }
        let span = (back as u64 + 1) * DAY_SECS;
        if span > now {
            break;
        }
        let window_start = now - span;
        let window_end = window_start + DAY_SECS;

        let mut volume = 0.0;
        let mut price_sum = 0.0;
        let mut priced = 0u32;
        for trade in trades {
            if trade.timestamp >= window_start && trade.timestamp < window_end {
                volume += trade.quantity;
                if let Some(p) = trade.price {
                    price_sum += p;
                    priced += 1;
                }
            }
        }

        if volume > 0.0 {
            points.push(DayPoint {
                day_start: window_start,
                volume,
                price: (priced > 0).then(|| price_sum / priced as f64),
            });
        }
    }

    points
}

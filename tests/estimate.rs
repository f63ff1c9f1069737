use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::SeedableRng;

use verto_rs::{
    Error, ExchangeConfig, FeeCalculator, FeeTarget, Order, OrderBookSource, OrderEstimator,
    OrderFilter, SwapRequest, TokenState,
};

const TOKEN_A: &str = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
const TOKEN_B: &str = "BBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB";
const TOKEN_C: &str = "CCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCCC";

/// In-memory order book standing in for the cache service.
struct FixtureBook {
    orders: Vec<Order>,
    fetches: AtomicUsize,
}

impl FixtureBook {
    fn new(orders: Vec<Order>) -> Self {
        Self {
            orders,
            fetches: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl OrderBookSource for FixtureBook {
    async fn order_book(&self, filter: &OrderFilter) -> verto_rs::Result<Vec<Order>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .orders
            .iter()
            .filter(|o| o.is_active() && filter.matches(o))
            .cloned()
            .collect())
    }
}

fn order(id: &str, pair: (&str, &str), token: &str, price: Option<f64>, quantity: f64) -> Order {
    Order {
        id: id.to_string(),
        creator: TOKEN_C.to_string(),
        pair: [pair.0.to_string(), pair.1.to_string()],
        token: token.to_string(),
        price,
        quantity,
    }
}

fn fixture() -> FixtureBook {
    FixtureBook::new(vec![
        // The (A, B) book.
        order("ab1", (TOKEN_A, TOKEN_B), TOKEN_B, Some(2.0), 100.0),
        order("ab2", (TOKEN_A, TOKEN_B), TOKEN_A, Some(2.0), 40.0),
        // A fully filled order the source must drop.
        order("ab3", (TOKEN_A, TOKEN_B), TOKEN_B, Some(1.0), 0.0),
        // A different pair that must not leak into (A, B) estimates.
        order("ac1", (TOKEN_A, TOKEN_C), TOKEN_C, Some(0.5), 1000.0),
    ])
}

#[tokio::test]
async fn estimate_uses_only_the_requested_pair() {
    let estimator = OrderEstimator::new(fixture());
    let estimate = estimator
        .estimate_swap(&SwapRequest {
            from: TOKEN_A.to_string(),
            to: TOKEN_B.to_string(),
            amount: 10.0,
            price: None,
        })
        .await
        .unwrap();

    // Only ab1 is matchable: 10 * (1/2) = 5 <= 100 → full fill.
    assert_eq!(estimate.immediate, 5.0);
    assert_eq!(estimate.rest, None);
}

#[tokio::test]
async fn estimate_prices_remainder_from_same_direction_average() {
    let estimator = OrderEstimator::new(fixture());
    let estimate = estimator
        .estimate_swap(&SwapRequest {
            from: TOKEN_A.to_string(),
            to: TOKEN_B.to_string(),
            amount: 300.0,
            price: None,
        })
        .await
        .unwrap();

    // ab1 consumed fully: immediate = 100, remaining = 300 - 200 = 100.
    // Same-direction average price is ab2's 2.0 → rest = 200.
    assert_eq!(estimate.immediate, 100.0);
    assert_eq!(estimate.rest, Some(200.0));
}

#[tokio::test]
async fn validation_fails_before_the_snapshot_is_fetched() {
    let source = fixture();
    let estimator = OrderEstimator::new(source);
    let result = estimator
        .estimate_swap(&SwapRequest {
            from: "not-an-address".to_string(),
            to: TOKEN_B.to_string(),
            amount: 10.0,
            price: None,
        })
        .await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(estimator.source().fetches.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn concurrent_estimates_are_independent() {
    let estimator = std::sync::Arc::new(OrderEstimator::new(fixture()));
    let request = SwapRequest {
        from: TOKEN_A.to_string(),
        to: TOKEN_B.to_string(),
        amount: 10.0,
        price: None,
    };

    let mut handles = Vec::new();
    for _ in 0..8 {
        let estimator = std::sync::Arc::clone(&estimator);
        let request = request.clone();
        handles.push(tokio::spawn(async move {
            estimator.estimate_swap(&request).await.unwrap()
        }));
    }
    for handle in handles {
        let estimate = handle.await.unwrap();
        assert_eq!(estimate.immediate, 5.0);
        assert_eq!(estimate.rest, None);
    }
}

#[test]
fn fee_pipeline_resolves_holder_from_snapshot() {
    let state: TokenState = serde_json::from_str(
        r#"{
            "ticker": "VRT",
            "balances": {"holder-one": 100},
            "vaults": {"holder-two": [{"balance": 900, "start": 0, "end": 999999}]}
        }"#,
    )
    .unwrap();

    let calculator = FeeCalculator::new(ExchangeConfig::default());
    let mut rng = StdRng::seed_from_u64(1);

    let mut holder_two = 0u32;
    const DRAWS: u32 = 10_000;
    for _ in 0..DRAWS {
        let fee = calculator.compute_fee(999.0, FeeTarget::TokenHolder, &state, 100, &mut rng);
        assert_eq!(fee.amount, 5.0);
        if fee.recipient == "holder-two" {
            holder_two += 1;
        } else {
            assert_eq!(fee.recipient, "holder-one");
        }
    }
    // holder-two carries 90% of the weight (all of it vault-locked).
    assert!((8700..=9300).contains(&holder_two), "holder-two drawn {} times", holder_two);
}

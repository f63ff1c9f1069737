/// Fee derivation and fee-target resolution.
///
/// Every swap owes a percentage fee. The recipient is either the fixed
/// exchange wallet or a weighted-random holder of the protocol token,
/// where a holder's weight is their direct balance plus any still-locked
/// vault balances.
use rand::Rng;

use super::selector::{WeightMap, WeightedSelector};
use crate::config::ExchangeConfig;
use crate::models::TokenState;

/// Whom a fee is owed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeTarget {
    /// The fixed, well-known exchange wallet.
    Exchange,
    /// A weighted-random protocol token holder.
    TokenHolder,
}

/// One fee obligation derived from a submitted order.
#[derive(Debug, Clone)]
pub struct FeeSpec {
    /// Fee amount, in units of `token`.
    pub amount: f64,
    pub token: String,
    /// The order interaction this fee settles.
    pub order_id: String,
    pub target: FeeTarget,
}

/// A fee target resolved to a concrete recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct Fee {
    pub recipient: String,
    pub amount: f64,
}

/// `ceil(ceil(amount) * rate)`.
///
/// The double ceiling is part of the protocol's numeric contract: the sent
/// amount is rounded up to a whole unit before the rate is applied, and the
/// product is rounded up again. This is NOT the same as a single
/// `ceil(amount * rate)`.
pub fn fee_amount(amount: f64, fee_rate: f64) -> f64 {
    (amount.ceil() * fee_rate).ceil()
}

/// Holder → weight map for fee distribution: direct balance plus the sum of
/// vault entries whose unlock height has not yet passed.
pub fn holder_weights(state: &TokenState, current_height: u64) -> WeightMap {
    let mut weights = WeightMap::new();
    for (holder, balance) in &state.balances {
        if *balance > 0 {
            weights.insert(holder.clone(), *balance as f64);
        }
    }
    for (holder, entries) in &state.vaults {
        let locked: u64 = entries
            .iter()
            .filter(|v| v.is_locked(current_height))
            .map(|v| v.balance)
            .sum();
        if locked > 0 {
            *weights.entry(holder.clone()).or_insert(0.0) += locked as f64;
        }
    }
    weights
}

pub struct FeeCalculator {
    config: ExchangeConfig,
    selector: WeightedSelector,
}

impl FeeCalculator {
    pub fn new(config: ExchangeConfig) -> Self {
        let selector = WeightedSelector::new(&config.fee_fallback);
        Self { config, selector }
    }

    /// Fee owed on `amount` at the configured exchange rate.
    pub fn fee_amount(&self, amount: f64) -> f64 {
        fee_amount(amount, self.config.exchange_fee)
    }

    /// The two fee obligations a swap of `amount` incurs: one to the
    /// exchange wallet, one to a weighted-random token holder.
    pub fn fees_for_order(&self, order_id: &str, token: &str, amount: f64) -> Vec<FeeSpec> {
        let fee = self.fee_amount(amount);
        [FeeTarget::Exchange, FeeTarget::TokenHolder]
            .into_iter()
            .map(|target| FeeSpec {
                amount: fee,
                token: token.to_string(),
                order_id: order_id.to_string(),
                target,
            })
            .collect()
    }

    /// Resolve a fee target to a recipient wallet. `state` is the protocol
    /// token's snapshot; `current_height` gates which vaults still count.
    pub fn recipient<R: Rng + ?Sized>(
        &self,
        target: FeeTarget,
        state: &TokenState,
        current_height: u64,
        rng: &mut R,
    ) -> String {
        match target {
            FeeTarget::Exchange => self.config.exchange_wallet.clone(),
            FeeTarget::TokenHolder => {
                let weights = holder_weights(state, current_height);
                self.selector.select(&weights, rng)
            }
        }
    }

    /// `computeFee`: fee amount plus resolved recipient in one call.
    pub fn compute_fee<R: Rng + ?Sized>(
        &self,
        amount: f64,
        target: FeeTarget,
        state: &TokenState,
        current_height: u64,
        rng: &mut R,
    ) -> Fee {
        Fee {
            recipient: self.recipient(target, state, current_height, rng),
            amount: self.fee_amount(amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::BTreeMap;

    use crate::models::Vault;

    fn token_state(balances: &[(&str, u64)], vaults: &[(&str, Vec<Vault>)]) -> TokenState {
        TokenState {
            ticker: "VRT".to_string(),
            name: None,
            balances: balances
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
            vaults: vaults
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn test_fee_amount_double_ceiling() {
        // ceil(ceil(999) * 0.005) = ceil(4.995) = 5
        assert_eq!(fee_amount(999.0, 0.005), 5.0);
        // ceil(ceil(801) * 0.005) = ceil(4.005) = 5
        assert_eq!(fee_amount(801.0, 0.005), 5.0);
        // The case where double and single ceiling disagree:
        // double: ceil(ceil(3.2) * 0.3) = ceil(1.2) = 2
        // single: ceil(3.2 * 0.3) = ceil(0.96) = 1
        assert_eq!(fee_amount(3.2, 0.3), 2.0);
        assert_eq!((3.2f64 * 0.3).ceil(), 1.0);
    }

    #[test]
    fn test_holder_weights_sum_balance_and_locked_vaults() {
        let state = token_state(
            &[("alice", 100), ("bob", 0), ("carol", 40)],
            &[
                (
                    "alice",
                    vec![
                        Vault { balance: 50, start: 0, end: 500 },
                        Vault { balance: 25, start: 0, end: 50 },
                    ],
                ),
                ("bob", vec![Vault { balance: 10, start: 0, end: 500 }]),
            ],
        );
        let weights = holder_weights(&state, 100);
        // alice: 100 direct + 50 locked (the end-50 vault has unlocked).
        assert_eq!(weights["alice"], 150.0);
        // bob: zero balance but a live vault still makes him eligible.
        assert_eq!(weights["bob"], 10.0);
        assert_eq!(weights["carol"], 40.0);
    }

    #[test]
    fn test_recipient_resolution() {
        let config = ExchangeConfig::default();
        let exchange_wallet = config.exchange_wallet.clone();
        let calculator = FeeCalculator::new(config);
        let state = token_state(&[("alice", 100)], &[]);
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(
            calculator.recipient(FeeTarget::Exchange, &state, 100, &mut rng),
            exchange_wallet
        );
        // Single positive-weight holder: selection is deterministic.
        assert_eq!(
            calculator.recipient(FeeTarget::TokenHolder, &state, 100, &mut rng),
            "alice"
        );
    }

    #[test]
    fn test_empty_holder_set_falls_back() {
        let calculator = FeeCalculator::new(ExchangeConfig::default());
        let state = token_state(&[], &[]);
        let mut rng = StdRng::seed_from_u64(7);
        let fee = calculator.compute_fee(999.0, FeeTarget::TokenHolder, &state, 100, &mut rng);
        assert_eq!(fee.recipient, ExchangeConfig::default().fee_fallback);
        assert_eq!(fee.amount, 5.0);
    }

    #[test]
    fn test_fees_for_order_cover_both_targets() {
        let calculator = FeeCalculator::new(ExchangeConfig::default());
        let fees = calculator.fees_for_order("order1", "tokenA", 999.0);
        assert_eq!(fees.len(), 2);
        assert!(fees.iter().all(|f| f.amount == 5.0));
        assert_eq!(fees[0].target, FeeTarget::Exchange);
        assert_eq!(fees[1].target, FeeTarget::TokenHolder);
    }
}

/// Weighted-random participant selection by cumulative-probability sampling.
///
/// Used to pick the token holder receiving the holder fee, and historically
/// to recommend a trading post by reputation. Weights are raw balances or
/// scores; they are normalized to their sum before sampling so the
/// exhausted-walk fallback only triggers on floating-point rounding or
/// degenerate (empty / all-zero) maps.
use rand::Rng;
use std::collections::BTreeMap;

/// Participant → non-negative weight. `BTreeMap` fixes the iteration order
/// (ascending by key), which makes a given draw reproducible.
pub type WeightMap = BTreeMap<String, f64>;

pub struct WeightedSelector {
    fallback: String,
}

impl WeightedSelector {
    /// `fallback` is returned whenever the walk exhausts without a match.
    /// Callers must supply one (typically the protocol treasury wallet).
    pub fn new(fallback: &str) -> Self {
        Self {
            fallback: fallback.to_string(),
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Draw uniformly from [0, 1) and select. Never fails: an empty or
    /// all-zero weight map yields the fallback identifier.
    pub fn select<R: Rng + ?Sized>(&self, weights: &WeightMap, rng: &mut R) -> String {
        self.select_with_draw(weights, rng.gen::<f64>())
    }

    /// Inverse-CDF walk for a fixed draw in [0, 1). Split out so tests can
    /// pin the draw instead of the generator.
    pub fn select_with_draw(&self, weights: &WeightMap, draw: f64) -> String {
        let total: f64 = weights.values().filter(|w| **w > 0.0).sum();
        if !(total > 0.0) || !total.is_finite() {
            return self.fallback.clone();
        }

        let mut sum = 0.0;
        for (participant, weight) in weights {
            sum += weight / total;
            if draw <= sum && *weight > 0.0 {
                return participant.clone();
            }
        }
        // Reachable only when rounding leaves sum just below the draw.
        self.fallback.clone()
    }
}

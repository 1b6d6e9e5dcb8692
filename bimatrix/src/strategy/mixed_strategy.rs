use crate::game::{ActionId, NUM_ACTIONS};

use assert_approx_eq::assert_approx_eq;

const THRESHOLD_ACCURACY: f64 = 1e-6;
const EFFECTIVELY_ZERO: f64 = 1e-6;

/// A probability distribution over one player's actions.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MixedStrategy([f64; NUM_ACTIONS]);

impl MixedStrategy {
    pub fn from_probabilities(probabilities: [f64; NUM_ACTIONS]) -> MixedStrategy {
        let strategy = MixedStrategy(probabilities);
        strategy.validate();
        strategy
    }

    /// The degenerate strategy playing `action` with probability one.
    pub fn pure(action: ActionId) -> MixedStrategy {
        let mut probabilities = [0f64; NUM_ACTIONS];
        probabilities[action] = 1.0;
        MixedStrategy(probabilities)
    }

    /// Validate that the entries form a probability vector. Panics upon
    /// failure.
    fn validate(&self) {
        let mut total_mass = 0f64;
        for &probability in self.0.iter() {
            assert!(
                probability >= -EFFECTIVELY_ZERO,
                "action probabilities must be non-negative, got {}",
                probability
            );
            total_mass += probability;
        }
        assert_approx_eq!(total_mass, 1.0, THRESHOLD_ACCURACY);
    }

    pub fn probability(&self, action: ActionId) -> f64 {
        self.0[action]
    }

    /// Actions played with positive probability.
    pub fn support(&self) -> Vec<ActionId> {
        (0..NUM_ACTIONS)
            .filter(|&action| self.0[action] > EFFECTIVELY_ZERO)
            .collect()
    }

    pub fn is_pure(&self) -> bool {
        self.support().len() == 1
    }

    pub fn inner(&self) -> &[f64; NUM_ACTIONS] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::MixedStrategy;

    #[test]
    fn pure_strategies_have_singleton_support() {
        let strategy = MixedStrategy::pure(1);
        assert_eq!(strategy.inner(), &[0.0, 1.0]);
        assert_eq!(strategy.support(), vec![1]);
        assert!(strategy.is_pure());
    }

    #[test]
    fn mixed_strategies_have_full_support() {
        let strategy = MixedStrategy::from_probabilities([0.25, 0.75]);
        assert_eq!(strategy.support(), vec![0, 1]);
        assert!(!strategy.is_pure());
    }

    #[test]
    #[should_panic]
    fn mass_must_sum_to_one() {
        MixedStrategy::from_probabilities([0.5, 0.1]);
    }

    #[test]
    #[should_panic]
    fn negative_mass_is_rejected() {
        MixedStrategy::from_probabilities([1.5, -0.5]);
    }
}

use crate::game::{ActionId, PayoffMatrix, Player, NUM_ACTIONS};
use crate::strategy::MixedStrategy;

/// A two-player game in normal form: one payoff matrix per player. The two
/// matrices need not be related by A = -B; `is_zero_sum` reports whether
/// they are.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MatrixGame {
    payoffs_row: PayoffMatrix,
    payoffs_column: PayoffMatrix,
}

impl MatrixGame {
    pub fn new(payoffs_row: PayoffMatrix, payoffs_column: PayoffMatrix) -> MatrixGame {
        MatrixGame {
            payoffs_row,
            payoffs_column,
        }
    }

    pub fn payoffs(&self, player: Player) -> &PayoffMatrix {
        match player {
            Player::Row => &self.payoffs_row,
            Player::Column => &self.payoffs_column,
        }
    }

    /// Payoff to `player` under a pure profile.
    pub fn pure_payoff(&self, player: Player, row: ActionId, column: ActionId) -> f64 {
        self.payoffs(player).entry(row, column)
    }

    /// Expected payoff to `player` under mixed play, the bilinear form
    /// s_row' * M * s_column.
    pub fn expected_payoff(
        &self,
        player: Player,
        row_strategy: &MixedStrategy,
        column_strategy: &MixedStrategy,
    ) -> f64 {
        let payoffs = self.payoffs(player);
        let mut accum = 0f64;
        for row in 0..NUM_ACTIONS {
            for column in 0..NUM_ACTIONS {
                accum += row_strategy.probability(row)
                    * column_strategy.probability(column)
                    * payoffs.entry(row, column);
            }
        }
        accum
    }

    /// Expected payoff to `player` for committing to `action` while the
    /// opponent keeps playing `opponent_strategy`.
    pub fn action_payoff(
        &self,
        player: Player,
        action: ActionId,
        opponent_strategy: &MixedStrategy,
    ) -> f64 {
        let payoffs = self.payoffs(player);
        let mut accum = 0f64;
        for opponent_action in 0..NUM_ACTIONS {
            let entry = match player {
                Player::Row => payoffs.entry(action, opponent_action),
                Player::Column => payoffs.entry(opponent_action, action),
            };
            accum += opponent_strategy.probability(opponent_action) * entry;
        }
        accum
    }

    pub fn is_zero_sum(&self) -> bool {
        for row in 0..NUM_ACTIONS {
            for column in 0..NUM_ACTIONS {
                let payoff_row = self.payoffs_row.entry(row, column);
                let payoff_column = self.payoffs_column.entry(row, column);
                if !relative_eq!(payoff_row, -payoff_column) {
                    return false;
                }
            }
        }
        true
    }
}

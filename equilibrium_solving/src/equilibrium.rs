use bimatrix::{MatrixGame, MixedStrategy, Player};

/// A pair of strategies jointly stable under unilateral deviation, together
/// with both players' expected payoffs at that profile.
#[derive(Debug, Clone, PartialEq)]
pub struct Equilibrium {
    row_strategy: MixedStrategy,
    column_strategy: MixedStrategy,
    row_payoff: f64,
    column_payoff: f64,
}

impl Equilibrium {
    pub fn new(
        game: &MatrixGame,
        row_strategy: MixedStrategy,
        column_strategy: MixedStrategy,
    ) -> Equilibrium {
        let row_payoff = game.expected_payoff(Player::Row, &row_strategy, &column_strategy);
        let column_payoff = game.expected_payoff(Player::Column, &row_strategy, &column_strategy);
        Equilibrium {
            row_strategy,
            column_strategy,
            row_payoff,
            column_payoff,
        }
    }

    pub fn strategy(&self, player: Player) -> &MixedStrategy {
        match player {
            Player::Row => &self.row_strategy,
            Player::Column => &self.column_strategy,
        }
    }

    pub fn payoff(&self, player: Player) -> f64 {
        match player {
            Player::Row => self.row_payoff,
            Player::Column => self.column_payoff,
        }
    }
}

use std::error::Error;
use std::fmt;

use log::{debug, warn};

use crate::equilibrium::Equilibrium;
use crate::solver::Solver;
use bimatrix::{ActionId, MatrixGame, MixedStrategy, Player, NUM_ACTIONS};

const EFFECTIVELY_ZERO: f64 = 1e-9;

/// The full-support indifference system is singular: some payoff comparison
/// collapsed (for instance under extreme sentinel entries) and the equations
/// do not pin down a mixed profile.
#[derive(Debug, Clone, PartialEq)]
pub struct DegenerateGameError {
    pub player: Player,
}

impl fmt::Display for DegenerateGameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "indifference equations for the {:?} player are singular",
            self.player
        )
    }
}

impl Error for DegenerateGameError {}

/// Support enumeration specialized to the 2x2 case. The candidate supports
/// reduce to the four pure profiles plus the single candidate where both
/// supports are full, solved by equalizing each player's payoffs across
/// their own two actions.
pub struct SupportEnumerationSolver<'a> {
    game: &'a MatrixGame,
}

impl<'a> SupportEnumerationSolver<'a> {
    /// Pure profiles where neither player's lone deviation strictly improves
    /// their payoff.
    pub fn pure_equilibria(&self) -> Vec<Equilibrium> {
        let mut equilibria = Vec::new();
        for row in 0..NUM_ACTIONS {
            for column in 0..NUM_ACTIONS {
                if self.is_pure_equilibrium(row, column) {
                    equilibria.push(Equilibrium::new(
                        self.game,
                        MixedStrategy::pure(row),
                        MixedStrategy::pure(column),
                    ));
                }
            }
        }
        equilibria
    }

    fn is_pure_equilibrium(&self, row: ActionId, column: ActionId) -> bool {
        let row_payoff = self.game.pure_payoff(Player::Row, row, column);
        let row_deviation = self.game.pure_payoff(Player::Row, other(row), column);
        let column_payoff = self.game.pure_payoff(Player::Column, row, column);
        let column_deviation = self.game.pure_payoff(Player::Column, row, other(column));
        row_deviation <= row_payoff + EFFECTIVELY_ZERO
            && column_deviation <= column_payoff + EFFECTIVELY_ZERO
    }

    /// The full-support candidate. Equalizing the row player's payoffs across
    /// their two actions determines the column player's mix and vice versa:
    ///
    ///   q * (a00 - a01 - a10 + a11) = a11 - a01
    ///   p * (b00 - b10 - b01 + b11) = b11 - b10
    ///
    /// with `a`/`b` the row/column player's payoffs, `p` the probability on
    /// the row player's first action and `q` on the column player's first.
    /// A vanishing denominator leaves the system singular, whether or not a
    /// right-hand side remains. Probabilities outside the open unit interval
    /// mean no full-support equilibrium exists; boundary solutions coincide
    /// with a pure support and are reported there instead.
    pub fn mixed_equilibrium(&self) -> Result<Option<Equilibrium>, DegenerateGameError> {
        let a = self.game.payoffs(Player::Row);
        let b = self.game.payoffs(Player::Column);

        let q_denominator = a.entry(0, 0) - a.entry(0, 1) - a.entry(1, 0) + a.entry(1, 1);
        if q_denominator.abs() <= EFFECTIVELY_ZERO {
            return Err(DegenerateGameError {
                player: Player::Row,
            });
        }
        let q = (a.entry(1, 1) - a.entry(0, 1)) / q_denominator;

        let p_denominator = b.entry(0, 0) - b.entry(1, 0) - b.entry(0, 1) + b.entry(1, 1);
        if p_denominator.abs() <= EFFECTIVELY_ZERO {
            return Err(DegenerateGameError {
                player: Player::Column,
            });
        }
        let p = (b.entry(1, 1) - b.entry(1, 0)) / p_denominator;

        if !is_interior(p) || !is_interior(q) {
            debug!("full-support candidate rejected: p = {}, q = {}", p, q);
            return Ok(None);
        }

        let row_strategy = MixedStrategy::from_probabilities([p, 1.0 - p]);
        let column_strategy = MixedStrategy::from_probabilities([q, 1.0 - q]);
        Ok(Some(Equilibrium::new(
            self.game,
            row_strategy,
            column_strategy,
        )))
    }
}

impl<'a> Solver<'a> for SupportEnumerationSolver<'a> {
    fn new(game: &'a MatrixGame) -> SupportEnumerationSolver<'a> {
        SupportEnumerationSolver { game }
    }

    /// Every equilibrium reachable by support enumeration, pure supports
    /// first. A singular indifference system downgrades to the pure
    /// equilibria rather than failing.
    fn solve(&self) -> Vec<Equilibrium> {
        let mut equilibria = self.pure_equilibria();
        match self.mixed_equilibrium() {
            Ok(Some(equilibrium)) => equilibria.push(equilibrium),
            Ok(None) => {}
            Err(err) => warn!("{}; reporting pure equilibria only", err),
        }
        equilibria
    }
}

fn other(action: ActionId) -> ActionId {
    1 - action
}

fn is_interior(probability: f64) -> bool {
    probability > EFFECTIVELY_ZERO && probability < 1.0 - EFFECTIVELY_ZERO
}

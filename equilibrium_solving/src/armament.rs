use bimatrix::{MatrixGame, PayoffMatrix};

/// Stands in for an outcome a country must avoid at any cost. Large enough
/// to dominate every comparison while staying ordinary finite arithmetic.
const FORBIDDEN: f64 = -1e9;

/// Action labels in payoff-matrix order.
pub const ACTION_LABELS: [&str; 2] = ["arm", "disarm"];

/// The armament race between countries A (rows) and B (columns). Arming
/// against a disarmed opponent is worth 10000, mutual armament costs each
/// side 3000, mutual disarmament costs nothing, and disarming against an
/// armed opponent is ruled out with the forbidden sentinel.
pub fn armament_game() -> MatrixGame {
    let payoffs_a = PayoffMatrix::new([[-3000.0, 10000.0], [FORBIDDEN, 0.0]]);
    let payoffs_b = PayoffMatrix::new([[-3000.0, FORBIDDEN], [10000.0, 0.0]]);
    MatrixGame::new(payoffs_a, payoffs_b)
}

#[cfg(test)]
mod tests {
    use super::armament_game;
    use crate::solver::Solver;
    use crate::support_enumeration::SupportEnumerationSolver;
    use assert_approx_eq::assert_approx_eq;
    use bimatrix::Player;

    #[test]
    fn the_race_is_not_zero_sum() {
        assert!(!armament_game().is_zero_sum());
    }

    #[test]
    fn payoffs_match_the_exercise_tables() {
        let game = armament_game();
        assert_eq!(game.pure_payoff(Player::Row, 0, 1), 10000.0);
        assert_eq!(game.pure_payoff(Player::Row, 1, 0), -1e9);
        assert_eq!(game.pure_payoff(Player::Column, 0, 1), -1e9);
        assert_eq!(game.pure_payoff(Player::Column, 1, 0), 10000.0);
    }

    #[test]
    fn mutual_armament_is_the_unique_equilibrium() {
        let game = armament_game();
        let equilibria = SupportEnumerationSolver::new(&game).solve();

        assert_eq!(equilibria.len(), 1);
        let equilibrium = &equilibria[0];
        assert_eq!(equilibrium.strategy(Player::Row).inner(), &[1.0, 0.0]);
        assert_eq!(equilibrium.strategy(Player::Column).inner(), &[1.0, 0.0]);
        assert_approx_eq!(equilibrium.payoff(Player::Row), -3000.0);
        assert_approx_eq!(equilibrium.payoff(Player::Column), -3000.0);
    }

    #[test]
    fn best_responses_recomputed_from_the_matrices() {
        let game = armament_game();

        // Against an armed opponent, arming beats the forbidden outcome.
        assert!(game.pure_payoff(Player::Row, 0, 0) > game.pure_payoff(Player::Row, 1, 0));
        assert!(game.pure_payoff(Player::Column, 0, 0) > game.pure_payoff(Player::Column, 0, 1));
        // Mutual disarmament is not stable: arming against a disarmed
        // opponent pays 10000 over 0 for either side.
        assert!(game.pure_payoff(Player::Row, 0, 1) > game.pure_payoff(Player::Row, 1, 1));
        assert!(game.pure_payoff(Player::Column, 1, 0) > game.pure_payoff(Player::Column, 1, 1));
    }
}

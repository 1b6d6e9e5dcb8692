use crate::equilibrium::Equilibrium;
use bimatrix::MatrixGame;

/// Equilibrium-enumeration backends plug in here. `solve` reports every
/// equilibrium found, not just the first.
pub trait Solver<'a> {
    fn new(game: &'a MatrixGame) -> Self;
    fn solve(&self) -> Vec<Equilibrium>;
}

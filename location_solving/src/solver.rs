use covering::{InfeasibleInstanceError, PointId, SetCoverProgram};

/// Exact backends for the covering program plug in here. `solve` returns the
/// selected points of a minimum cover, or the infeasibility it detected.
pub trait Solver<'a> {
    fn new(program: &'a SetCoverProgram) -> Self;
    fn solve(&self) -> Result<Vec<PointId>, InfeasibleInstanceError>;
}

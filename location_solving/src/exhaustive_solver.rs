use crate::solver::Solver;

use covering::{InfeasibleInstanceError, PointId, SetCoverProgram};
use itertools::Itertools;
use log::debug;

/// Exact backend enumerating candidate selections in increasing cardinality,
/// lexicographic within each cardinality. The first feasible selection is a
/// minimum cover, and the enumeration order makes the answer deterministic:
/// the lexicographically least among the optima.
pub struct ExhaustiveSolver<'a> {
    program: &'a SetCoverProgram,
}

impl<'a> Solver<'a> for ExhaustiveSolver<'a> {
    fn new(program: &'a SetCoverProgram) -> ExhaustiveSolver<'a> {
        ExhaustiveSolver { program }
    }

    fn solve(&self) -> Result<Vec<PointId>, InfeasibleInstanceError> {
        let uncovered = self.program.unsatisfiable_points();
        if !uncovered.is_empty() {
            return Err(InfeasibleInstanceError { uncovered });
        }

        let num_points = self.program.num_variables();
        for size in 0..=num_points {
            for selection in (0..num_points).combinations(size) {
                if self.program.is_satisfied_by(&selection) {
                    debug!("minimum cover of size {}: {:?}", size, selection);
                    return Ok(selection);
                }
            }
        }

        // Every covering row is non-empty at this point, so the full
        // selection was feasible and the loop returned.
        unreachable!("full selection satisfies every non-empty covering row");
    }
}

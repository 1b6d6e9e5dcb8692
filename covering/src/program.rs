use crate::instance::{CoverageInstance, PointId};

use log::debug;
use std::error::Error;
use std::fmt;

/// One covering row: at least one point in `coverers` must be selected for
/// `point` to be served.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverConstraint {
    pub point: PointId,
    pub coverers: Vec<PointId>,
}

/// The 0/1 program behind the facility-location exercise: one binary
/// selection variable per point, one `>= 1` covering row per point, and the
/// number of selected points as the minimization objective. The rows do not
/// bound how many selected points may cover the same point.
#[derive(Debug, Clone, PartialEq)]
pub struct SetCoverProgram {
    num_variables: usize,
    constraints: Vec<CoverConstraint>,
}

impl SetCoverProgram {
    pub fn from_instance(instance: &CoverageInstance) -> SetCoverProgram {
        let mut constraints = Vec::with_capacity(instance.num_points());
        for point in 0..instance.num_points() {
            let coverers = instance.coverers_of(point);
            debug!("covering row for point {}: {:?}", point, coverers);
            constraints.push(CoverConstraint { point, coverers });
        }
        SetCoverProgram {
            num_variables: instance.num_points(),
            constraints,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn constraints(&self) -> &[CoverConstraint] {
        &self.constraints
    }

    /// Whether the given selection satisfies every covering row.
    pub fn is_satisfied_by(&self, selection: &[PointId]) -> bool {
        self.constraints.iter().all(|constraint| {
            constraint
                .coverers
                .iter()
                .any(|coverer| selection.contains(coverer))
        })
    }

    /// Points whose covering row no selection can satisfy. Non-empty only on
    /// inconsistent data, e.g. a negative threshold; with a non-negative
    /// threshold every point covers itself.
    pub fn unsatisfiable_points(&self) -> Vec<PointId> {
        self.constraints
            .iter()
            .filter(|constraint| constraint.coverers.is_empty())
            .map(|constraint| constraint.point)
            .collect()
    }
}

/// The covering program has no feasible selection. Surfaced to the caller,
/// never silently treated as an empty cover.
#[derive(Debug, Clone, PartialEq)]
pub struct InfeasibleInstanceError {
    pub uncovered: Vec<PointId>,
}

impl fmt::Display for InfeasibleInstanceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "covering program is infeasible; no selection covers points {:?}",
            self.uncovered
        )
    }
}

impl Error for InfeasibleInstanceError {}

#[cfg(test)]
pub mod test_fixtures {
    use crate::distance::DistanceMatrix;
    use crate::instance::CoverageInstance;
    use lazy_static::lazy_static;

    lazy_static! {
        // Point 2 sits within reach of everyone; points 0 and 1 are far from
        // each other. The unique minimum cover is {2}.
        pub static ref STAR_INSTANCE: CoverageInstance = CoverageInstance::new(
            vec![String::from("a"), String::from("b"), String::from("c")],
            DistanceMatrix::from_rows(vec![
                vec![0.0, 9.0, 5.0],
                vec![9.0, 0.0, 5.0],
                vec![5.0, 5.0, 0.0],
            ]),
            6.0,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::STAR_INSTANCE;
    use super::SetCoverProgram;

    #[test]
    fn rows_collect_the_coverers_of_each_point() {
        let program = SetCoverProgram::from_instance(&STAR_INSTANCE);
        assert_eq!(program.num_variables(), 3);
        assert_eq!(program.constraints()[0].coverers, vec![0, 2]);
        assert_eq!(program.constraints()[1].coverers, vec![1, 2]);
        assert_eq!(program.constraints()[2].coverers, vec![0, 1, 2]);
    }

    #[test]
    fn satisfaction_requires_every_row() {
        let program = SetCoverProgram::from_instance(&STAR_INSTANCE);
        assert!(program.is_satisfied_by(&[2]));
        assert!(program.is_satisfied_by(&[0, 1]));
        assert!(!program.is_satisfied_by(&[0]));
        assert!(!program.is_satisfied_by(&[]));
    }

    #[test]
    fn a_negative_threshold_empties_every_row() {
        let instance = crate::instance::CoverageInstance::new(
            vec![String::from("a"), String::from("b")],
            crate::distance::DistanceMatrix::from_rows(vec![
                vec![0.0, 1.0],
                vec![1.0, 0.0],
            ]),
            -1.0,
        );
        let program = SetCoverProgram::from_instance(&instance);
        assert_eq!(program.unsatisfiable_points(), vec![0, 1]);
        assert!(!program.is_satisfied_by(&[0, 1]));
    }
}

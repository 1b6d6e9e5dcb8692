use covering::{CoverageInstance, PointId};
use noisy_float::prelude::*;

/// A solved covering instance: the selected centers, sorted ascending, and
/// the nearest-center assignment derived from them for reporting. The
/// assignment has no bearing on optimality of the cover.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverSolution {
    centers: Vec<PointId>,
    assignment: Vec<PointId>,
}

impl CoverSolution {
    /// Assign every point to the selected center with the smallest travel
    /// time. Equidistant centers tie-break to the lowest point id: the
    /// centers are kept sorted and the argmin keeps the first minimum.
    pub fn new(instance: &CoverageInstance, mut centers: Vec<PointId>) -> CoverSolution {
        assert!(
            !centers.is_empty() || instance.num_points() == 0,
            "a non-empty instance needs at least one center"
        );
        centers.sort();

        let assignment = (0..instance.num_points())
            .map(|point| {
                *centers
                    .iter()
                    .min_by_key(|&&center| r64(instance.distance(point, center)))
                    .unwrap()
            })
            .collect();

        CoverSolution {
            centers,
            assignment,
        }
    }

    pub fn centers(&self) -> &[PointId] {
        &self.centers
    }

    pub fn assignment(&self) -> &[PointId] {
        &self.assignment
    }

    pub fn assigned_center(&self, point: PointId) -> PointId {
        self.assignment[point]
    }
}

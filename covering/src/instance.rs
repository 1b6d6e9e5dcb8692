use crate::distance::DistanceMatrix;

pub type PointId = usize;

/// An immutable coverage instance: labelled points, their pairwise travel
/// times and the coverage threshold. Points are referred to by index; the
/// labels exist for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageInstance {
    labels: Vec<String>,
    distances: DistanceMatrix,
    threshold: f64,
}

impl CoverageInstance {
    pub fn new(labels: Vec<String>, distances: DistanceMatrix, threshold: f64) -> CoverageInstance {
        assert_eq!(
            labels.len(),
            distances.dimension(),
            "one label per distance matrix row"
        );
        CoverageInstance {
            labels,
            distances,
            threshold,
        }
    }

    pub fn num_points(&self) -> usize {
        self.labels.len()
    }

    pub fn label(&self, point: PointId) -> &str {
        &self.labels[point]
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Travel time from `point` to `center`.
    pub fn distance(&self, point: PointId, center: PointId) -> f64 {
        self.distances.entry(point, center)
    }

    /// A center placed at `center` covers `point` when the travel time from
    /// the point to the center is within the threshold. Travel times are not
    /// assumed symmetric, so the direction matters.
    pub fn covers(&self, center: PointId, point: PointId) -> bool {
        self.distance(point, center) <= self.threshold
    }

    /// Points whose selection would cover `point`, in ascending order.
    pub fn coverers_of(&self, point: PointId) -> Vec<PointId> {
        (0..self.num_points())
            .filter(|&center| self.covers(center, point))
            .collect()
    }
}

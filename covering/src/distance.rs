/// A square matrix of pairwise travel times, stored row-major.
///
/// `entry(from, to)` is the travel time from the first point to the second.
/// Nothing here assumes symmetry; the reference data happens to be symmetric
/// but the formulation never relies on it.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    dimension: usize,
    entries: Vec<f64>,
}

impl DistanceMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> DistanceMatrix {
        let dimension = rows.len();
        let mut entries = Vec::with_capacity(dimension * dimension);
        for row in rows.iter() {
            assert_eq!(row.len(), dimension, "distance matrix must be square");
            entries.extend_from_slice(&row[..]);
        }
        let matrix = DistanceMatrix { dimension, entries };
        matrix.validate();
        matrix
    }

    /// Travel times are non-negative and zero from any point to itself.
    /// Panics upon failure.
    fn validate(&self) {
        for from in 0..self.dimension {
            for to in 0..self.dimension {
                assert!(
                    self.entry(from, to) >= 0.0,
                    "travel time from {} to {} must be non-negative",
                    from,
                    to
                );
            }
            assert_eq!(
                self.entry(from, from),
                0.0,
                "travel time from {} to itself must be zero",
                from
            );
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn entry(&self, from: usize, to: usize) -> f64 {
        self.entries[from * self.dimension + to]
    }
}

// Facility-coverage instances and their 0/1 set-cover formulation.
//
// The instance side is pure data: labelled points, a pairwise travel-time
// matrix and a coverage threshold. The program side turns an instance into
// binary selection variables and one covering row per point, which an exact
// solver consumes.

pub mod distance;
pub mod instance;
pub mod program;

pub use self::distance::DistanceMatrix;
pub use self::instance::{CoverageInstance, PointId};
pub use self::program::{CoverConstraint, InfeasibleInstanceError, SetCoverProgram};

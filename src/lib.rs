mod error;
pub mod problem;
mod solution;

pub use error::ProblemError;
pub use problem::wfg::wfg1::Wfg1;
pub use problem::Problem;
pub use solution::{ArraySolution, Solution};

/// Tolerance used when snapping near-boundary intermediate values to exact 0.0 / 1.0.
pub const EPSILON: f64 = 1e-10;

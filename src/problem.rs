pub mod wfg;

use dyn_clone::DynClone;

use crate::error::ProblemError;
use crate::solution::Solution;

/// A benchmark problem: a pure mapping from decision space to objective space.
pub trait Problem: DynClone
{
    fn name(&self) -> &str;

    fn variable_count(&self) -> usize;

    fn objective_count(&self) -> usize;

    /// Per-variable `(lower, upper)` bounds, one entry per decision variable.
    fn bounds(&self) -> &[(f64, f64)];

    /// Compute the objective vector for `solution`.
    ///
    /// Reads exactly `variable_count()` decision values, writes exactly
    /// `objective_count()` objectives and sets the evaluated flag. On error
    /// the solution's objectives are left untouched.
    fn evaluate(&self, solution: &mut dyn Solution) -> Result<(), ProblemError>;
}

dyn_clone::clone_trait_object!(Problem);

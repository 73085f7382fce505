#[cfg(test)]
mod tests;

use crate::error::ProblemError;
use crate::problem::wfg::{
    b_flat, b_poly, calculate_f, calculate_x, coefficient_vector, convex, ensure_unit_range,
    mixed, normalize_z, reduce_to_objectives, s_linear, scale_factors, WfgConfig,
};
use crate::problem::Problem;
use crate::solution::Solution;

/// WFG1: biased position parameters, a flat region in the transition
/// space and a convex, mixed (rippled) Pareto front.
#[derive(Clone)]
pub struct Wfg1
{
    name: String,
    config: WfgConfig,
    bounds: Vec<(f64, f64)>
}

impl Wfg1
{
    /// The WFG1 reference formulation fixes l = 10 distance parameters.
    pub const DISTANCE_PARAMETERS: usize = 10;

    pub fn new(objective_count: usize) -> Result<Self, ProblemError>
    {
        if objective_count < 2
        {
            return Err(ProblemError::Configuration(format!(
                "WFG1 needs at least 2 objectives, got {}", objective_count)));
        }

        let config = WfgConfig::new(objective_count - 1, Self::DISTANCE_PARAMETERS, objective_count)?;

        Ok(Wfg1 {
            name: format!("WFG1 ({} {})", config.variable_count(), objective_count),
            bounds: config.bounds(),
            config
        })
    }

    /// Shape row: convex coordinates of increasing degree for the first
    /// m - 1 objectives, the five-region mixed coordinate for the last.
    fn shape(&self, x: &[f64]) -> Vec<f64>
    {
        let m = self.config.objective_count();
        let mut h = Vec::with_capacity(m);

        for degree in 1..m
        {
            h.push(convex(x, degree));
        }

        h.push(mixed(x, 5, 1.0));

        h
    }
}

impl Problem for Wfg1
{
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn variable_count(&self) -> usize {
        self.config.variable_count()
    }

    fn objective_count(&self) -> usize {
        self.config.objective_count()
    }

    fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    fn evaluate(&self, solution: &mut dyn Solution) -> Result<(), ProblemError>
    {
        let z = solution.variables();

        if z.len() != self.config.variable_count()
        {
            return Err(ProblemError::InputLength {
                expected: self.config.variable_count(),
                actual: z.len()
            });
        }

        let mut y = normalize_z(z);

        // A normalized value outside [0, 1] means the caller violated the
        // variable bounds; the bias transforms assume the unit domain.
        ensure_unit_range(&y, "the shift transform")?;

        for y_i in y.iter_mut()
        {
            *y_i = s_linear(*y_i, 0.35);
        }

        for y_i in y.iter_mut()
        {
            *y_i = b_flat(*y_i, 0.8, 0.75, 0.85);
        }

        for y_i in y.iter_mut()
        {
            *y_i = b_poly(*y_i, 0.02);
        }

        let t = reduce_to_objectives(&y,
                                     self.config.position_count(),
                                     self.config.objective_count())?;

        let a = coefficient_vector(self.config.objective_count(), false);
        let x = calculate_x(&t, &a);
        let h = self.shape(&x);
        let f = calculate_f(1.0, &x, &h, &scale_factors(self.config.objective_count()));

        let objectives = solution.objectives_mut();

        if objectives.len() != f.len()
        {
            objectives.resize(f.len(), 0.0);
        }

        objectives.copy_from_slice(&f);
        solution.set_evaluated(true);

        Ok(())
    }
}

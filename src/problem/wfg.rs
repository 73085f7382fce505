pub mod wfg1;


use itertools::Itertools;

use crate::error::ProblemError;
use crate::EPSILON;

/// Immutable parameterization shared by the WFG problem family.
///
/// `k` position parameters shape the front geometry, `l` distance
/// parameters control convergence, `m` is the objective count. The
/// reduction transform partitions the k position parameters into m - 1
/// groups, so k must be a positive multiple of m - 1 or the floor-based
/// group boundaries would produce empty slices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WfgConfig
{
    k: usize,
    l: usize,
    m: usize
}

impl WfgConfig
{
    pub fn new(k: usize, l: usize, m: usize) -> Result<Self, ProblemError>
    {
        if m < 2
        {
            return Err(ProblemError::Configuration(format!(
                "a WFG problem needs at least 2 objectives, got {}", m)));
        }

        if l == 0
        {
            return Err(ProblemError::Configuration(
                "a WFG problem needs at least one distance parameter".to_string()));
        }

        if k == 0 || k % (m - 1) != 0
        {
            return Err(ProblemError::Configuration(format!(
                "position parameter count {} is not a positive multiple of {}", k, m - 1)));
        }

        Ok(WfgConfig { k, l, m })
    }

    pub fn position_count(&self) -> usize {
        self.k
    }

    pub fn distance_count(&self) -> usize {
        self.l
    }

    pub fn objective_count(&self) -> usize {
        self.m
    }

    pub fn variable_count(&self) -> usize {
        self.k + self.l
    }

    /// Decision variable bounds: variable i lives in [0, 2 * (i + 1)].
    pub fn bounds(&self) -> Vec<(f64, f64)>
    {
        let mut bounds = Vec::with_capacity(self.variable_count());

        for i in 0..self.variable_count()
        {
            bounds.push((0.0, 2.0 * (i + 1) as f64));
        }

        bounds
    }
}

/// Snap values that drifted just past 0 or 1 back onto the boundary.
///
/// Values outside the tolerance band pass through unchanged; this is a
/// floating-point cleanup, not validation.
pub fn correct_to_01(a: f64) -> f64
{
    if a <= 0.0 && a >= -EPSILON
    {
        0.0
    }
    else if a >= 1.0 && a <= 1.0 + EPSILON
    {
        1.0
    }
    else
    {
        a
    }
}

/// Rescale raw decision variables into the unit domain.
pub fn normalize_z(z: &[f64]) -> Vec<f64>
{
    let mut y = Vec::with_capacity(z.len());

    for (i, z_i) in z.iter().enumerate()
    {
        y.push(z_i / (2.0 * (i + 1) as f64));
    }

    y
}

pub fn ensure_unit_range(y: &[f64], stage: &'static str) -> Result<(), ProblemError>
{
    for value in y
    {
        if *value < 0.0 || *value > 1.0
        {
            return Err(ProblemError::NumericDomain { stage, value: *value });
        }
    }

    Ok(())
}

/// Shift transform: distance from the focus point `a`, rescaled so the
/// image covers [0, 1] on either side of the focus.
pub fn s_linear(y: f64, a: f64) -> f64
{
    correct_to_01((y - a).abs() / ((a - y).floor() + a).abs())
}

/// Plateau transform: flat region of value `a` between `b` and `c`,
/// linear ramps outside it.
pub fn b_flat(y: f64, a: f64, b: f64, c: f64) -> f64
{
    let value = a
        + (y - b).floor().min(0.0) * a * (b - y) / b
        - (c - y).floor().min(0.0) * (1.0 - a) * (y - c);

    correct_to_01(value)
}

/// Power transform: warps parameter density toward 0 or 1.
pub fn b_poly(y: f64, alpha: f64) -> f64
{
    correct_to_01(y.powf(alpha))
}

/// Weighted mean of a parameter group.
pub fn r_sum(y: &[f64], w: &[f64]) -> f64
{
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    for (y_i, w_i) in y.iter().zip_eq(w.iter())
    {
        numerator += w_i * y_i;
        denominator += w_i;
    }

    correct_to_01(numerator / denominator)
}

/// Reduce a length k + l parameter vector to m entries: m - 1 weighted
/// position aggregates followed by one distance aggregate.
///
/// Weights grow with the original index position and are not reset per
/// group. Group boundaries are floor(i * k / (m - 1)); every group must
/// cover a non-empty range.
pub fn reduce_to_objectives(y: &[f64], k: usize, m: usize) -> Result<Vec<f64>, ProblemError>
{
    if k >= y.len()
    {
        return Err(ProblemError::Configuration(format!(
            "no distance parameters left after {} position parameters in a length {} vector",
            k, y.len())));
    }

    let mut w = Vec::with_capacity(y.len());

    for i in 0..y.len()
    {
        w.push(2.0 * (i + 1) as f64);
    }

    let mut t = Vec::with_capacity(m);

    for i in 0..m - 1
    {
        let head = i * k / (m - 1);
        let tail = (i + 1) * k / (m - 1);

        if head >= tail || tail > k
        {
            return Err(ProblemError::Configuration(format!(
                "reduction group {} covers the empty range [{}, {})", i, head, tail)));
        }

        t.push(r_sum(&y[head..tail], &w[head..tail]));
    }

    t.push(r_sum(&y[k..], &w[k..]));

    Ok(t)
}

/// Geometry coefficient vector of length m - 1. The degenerate form
/// collapses all but the first front dimension.
pub fn coefficient_vector(m: usize, degenerate: bool) -> Vec<f64>
{
    let mut a = vec![1.0; m - 1];

    if degenerate
    {
        for a_i in a.iter_mut().skip(1)
        {
            *a_i = 0.0;
        }
    }

    a
}

/// Map reduced parameters into geometry-domain positions. The final
/// entry is the distance parameter, passed through unchanged.
pub fn calculate_x(t: &[f64], a: &[f64]) -> Vec<f64>
{
    let distance = t[t.len() - 1];
    let mut x = Vec::with_capacity(t.len());

    for i in 0..t.len() - 1
    {
        x.push(distance.max(a[i]) * (t[i] - 0.5) + 0.5);
    }

    x.push(distance);

    x
}

/// One coordinate of a convex front shape.
pub fn convex(x: &[f64], degree: usize) -> f64
{
    let mut result = 1.0;

    for x_i in &x[..x.len() - degree]
    {
        result *= 1.0 - (x_i * std::f64::consts::PI / 2.0).cos();
    }

    if degree != 1
    {
        result *= 1.0 - (x[x.len() - degree] * std::f64::consts::PI / 2.0).sin();
    }

    correct_to_01(result)
}

/// One coordinate of a disconnected front shape with `regions` ripples.
pub fn mixed(x: &[f64], regions: usize, alpha: f64) -> f64
{
    let tmp = 2.0 * regions as f64 * std::f64::consts::PI;
    let value = 1.0 - x[0] - (tmp * x[0] + std::f64::consts::PI / 2.0).cos() / tmp;

    correct_to_01(value.powf(alpha))
}

/// Per-objective scale factors stretching the front outward.
pub fn scale_factors(m: usize) -> Vec<f64>
{
    let mut s = Vec::with_capacity(m);

    for i in 0..m
    {
        s.push(2.0 * (i + 1) as f64);
    }

    s
}

/// Combine the distance position, scale factors and shape values into
/// the final objective vector.
pub fn calculate_f(d: f64, x: &[f64], h: &[f64], s: &[f64]) -> Vec<f64>
{
    let distance = x[x.len() - 1];
    let mut f = Vec::with_capacity(h.len());

    for (h_i, s_i) in h.iter().zip_eq(s.iter())
    {
        f.push(d * distance + s_i * h_i);
    }

    f
}

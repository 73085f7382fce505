/// The evaluation contract between a problem and a candidate solution.
///
/// A problem reads the decision variables, writes one objective value
/// per objective slot and flips the evaluated flag. Bound management and
/// population bookkeeping stay with the caller.
pub trait Solution
{
    fn variables(&self) -> &[f64];
    fn objectives_mut(&mut self) -> &mut Vec<f64>;
    fn set_evaluated(&mut self, evaluated: bool);
}

/// A plain vector-backed solution.
#[derive(Clone, Debug)]
pub struct ArraySolution
{
    pub x: Vec<f64>,
    pub f: Vec<f64>,
    pub evaluated: bool
}

impl ArraySolution
{
    pub fn new(x: Vec<f64>) -> Self
    {
        ArraySolution {
            x,
            f: Vec::new(),
            evaluated: false
        }
    }
}

impl Solution for ArraySolution
{
    fn variables(&self) -> &[f64] {
        &self.x
    }

    fn objectives_mut(&mut self) -> &mut Vec<f64> {
        &mut self.f
    }

    fn set_evaluated(&mut self, evaluated: bool) {
        self.evaluated = evaluated;
    }
}

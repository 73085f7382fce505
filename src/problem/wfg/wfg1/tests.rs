use crate::error::ProblemError;
use crate::problem::wfg::wfg1::Wfg1;
use crate::problem::Problem;
use crate::solution::ArraySolution;

/// Decision vector with every component at the midpoint of its bound.
fn mid_bound_solution(problem: &Wfg1) -> ArraySolution
{
    let mut x = Vec::with_capacity(problem.variable_count());

    for (lower, upper) in problem.bounds()
    {
        x.push((lower + upper) / 2.0);
    }

    ArraySolution::new(x)
}

fn assert_close(actual: &[f64], expected: &[f64])
{
    assert_eq!(actual.len(), expected.len());

    for (a, e) in actual.iter().zip(expected.iter())
    {
        assert!((a - e).abs() < 1e-9, "got {:?}, expected {:?}", actual, expected);
    }
}

// Golden values come from an independent re-derivation of the WFG1
// formulas, evaluated at full f64 precision.

#[test]
fn test_two_objective_golden_mid_bounds()
{
    let problem = Wfg1::new(2).unwrap();
    let mut solution = mid_bound_solution(&problem);

    problem.evaluate(&mut solution).unwrap();

    assert_close(&solution.f, &[2.8855262993738817, 0.9857421015710053]);
    assert!(solution.evaluated);
}

#[test]
fn test_two_objective_golden_quarter_bounds()
{
    let problem = Wfg1::new(2).unwrap();
    let mut x = Vec::new();

    for (_, upper) in problem.bounds()
    {
        x.push(upper / 4.0);
    }

    let mut solution = ArraySolution::new(x);

    problem.evaluate(&mut solution).unwrap();

    assert_close(&solution.f, &[2.9027541738771863, 0.9848087461130205]);
}

#[test]
fn test_three_objective_golden_mid_bounds()
{
    let problem = Wfg1::new(3).unwrap();
    let mut solution = mid_bound_solution(&problem);

    problem.evaluate(&mut solution).unwrap();

    assert_close(&solution.f,
                 &[2.8024686808605135, 0.9759609159764479, 0.9924364575095196]);
}

#[test]
fn test_objective_count_matches_configuration()
{
    for objective_count in [2, 3, 5]
    {
        let problem = Wfg1::new(objective_count).unwrap();

        assert_eq!(problem.variable_count(), objective_count - 1 + Wfg1::DISTANCE_PARAMETERS);
        assert_eq!(problem.objective_count(), objective_count);

        let mut solution = mid_bound_solution(&problem);

        problem.evaluate(&mut solution).unwrap();

        assert_eq!(solution.f.len(), objective_count);
        assert!(solution.f.iter().all(|f| f.is_finite()));
    }
}

#[test]
fn test_bounds_grow_with_variable_position()
{
    let problem = Wfg1::new(2).unwrap();
    let bounds = problem.bounds();

    assert_eq!(bounds.len(), 11);

    for (i, bound) in bounds.iter().enumerate()
    {
        assert_eq!(*bound, (0.0, 2.0 * (i + 1) as f64));
    }
}

#[test]
fn test_name_includes_dimensions()
{
    let problem = Wfg1::new(2).unwrap();

    assert_eq!(problem.name(), "WFG1 (11 2)");
}

#[test]
fn test_rejects_too_few_objectives()
{
    assert!(matches!(Wfg1::new(0), Err(ProblemError::Configuration(_))));
    assert!(matches!(Wfg1::new(1), Err(ProblemError::Configuration(_))));
}

#[test]
fn test_rejects_wrong_decision_vector_length()
{
    let problem = Wfg1::new(2).unwrap();
    let mut solution = ArraySolution::new(vec![0.5; 5]);

    let err = problem.evaluate(&mut solution).unwrap_err();

    assert_eq!(err, ProblemError::InputLength { expected: 11, actual: 5 });
    assert!(solution.f.is_empty());
    assert!(!solution.evaluated);
}

#[test]
fn test_rejects_out_of_bound_variables()
{
    let problem = Wfg1::new(2).unwrap();
    let mut solution = mid_bound_solution(&problem);

    solution.x[0] = 3.0;

    let err = problem.evaluate(&mut solution).unwrap_err();

    assert!(matches!(err, ProblemError::NumericDomain { value, .. } if value == 1.5));
    assert!(solution.f.is_empty());
    assert!(!solution.evaluated);
}

#[test]
fn test_boxed_problem_clones_and_evaluates()
{
    let problem: Box<dyn Problem> = Box::new(Wfg1::new(2).unwrap());
    let cloned = problem.clone();

    let original_problem = Wfg1::new(2).unwrap();
    let mut expected = mid_bound_solution(&original_problem);
    original_problem.evaluate(&mut expected).unwrap();

    let mut solution = mid_bound_solution(&original_problem);
    cloned.evaluate(&mut solution).unwrap();

    assert_eq!(solution.f, expected.f);
}

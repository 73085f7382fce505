use thiserror::Error;

/// Errors produced by problem construction and evaluation.
///
/// Every pipeline stage is pure, so a failed evaluation leaves the
/// solution's objectives untouched and can simply be retried with
/// corrected inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProblemError
{
    #[error("invalid problem configuration: {0}")]
    Configuration(String),

    #[error("decision vector has {actual} values but the problem declares {expected}")]
    InputLength { expected: usize, actual: usize },

    #[error("value {value} is outside [0, 1] entering {stage}")]
    NumericDomain { stage: &'static str, value: f64 },
}

use crate::{FrequencyError, WeightError};

/// Reasons why a training goal is rejected before any plan is generated.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Target max must be higher than current max")]
    NonPositiveGoal,
    #[error("Gain of {0} is not attainable in one cycle (must be less than 50)")]
    UnrealisticGoal(f32),
    #[error("Invalid exercise choice ({0})")]
    UnknownExercise(String),
    #[error(transparent)]
    Weight(#[from] WeightError),
    #[error(transparent)]
    Frequency(#[from] FrequencyError),
}

use std::fmt;

use strum::{AsRefStr, EnumIter, EnumString};

use crate::ValidationError;

/// The main lifts a program can be generated for.
#[derive(
    AsRefStr, Clone, Copy, Debug, EnumIter, EnumString, Eq, Hash, Ord, PartialEq, PartialOrd,
)]
#[strum(ascii_case_insensitive)]
pub enum ExerciseId {
    #[strum(to_string = "BenchPress", serialize = "bench-press", serialize = "bench_press")]
    BenchPress,
    #[strum(to_string = "Squat")]
    Squat,
    #[strum(to_string = "Deadlift")]
    Deadlift,
    #[strum(
        to_string = "OverheadPress",
        serialize = "overhead-press",
        serialize = "overhead_press"
    )]
    OverheadPress,
}

impl ExerciseId {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed_value = value.trim();
        trimmed_value
            .parse()
            .map_err(|_| ValidationError::UnknownExercise(trimmed_value.to_string()))
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ExerciseId::BenchPress => "Bench Press",
            ExerciseId::Squat => "Squat",
            ExerciseId::Deadlift => "Deadlift",
            ExerciseId::OverheadPress => "Overhead Press",
        }
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

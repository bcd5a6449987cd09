use derive_more::{Deref, Display, Into};

use crate::{ExerciseId, ValidationError, round_to_tenth};

/// Gains at or above this are rejected as not attainable in a single program.
pub const MAX_GAIN: f32 = 50.0;

#[derive(Debug, Deref, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(WeightError::NotPositive);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.replace(',', ".").trim().parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be a positive decimal number")]
    NotPositive,
    #[error("Weight must be a decimal number")]
    ParseError,
}

/// Training sessions per week.
#[derive(Debug, Deref, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Frequency(u32);

impl Frequency {
    pub fn new(value: u32) -> Result<Self, FrequencyError> {
        if !(1..=7).contains(&value) {
            return Err(FrequencyError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Frequency {
    type Error = FrequencyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().parse::<u32>() {
            Ok(parsed_value) => Frequency::new(parsed_value),
            Err(_) => Err(FrequencyError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FrequencyError {
    #[error("Frequency must be in the range 1 to 7 sessions per week")]
    OutOfRange,
    #[error("Frequency must be an integer")]
    ParseError,
}

/// Validated request for a program.
///
/// The only way to obtain a value is through [`TrainingInput::new`] or
/// [`TrainingInput::parse`], so every instance satisfies `0 < target - current < 50`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingInput {
    current_max: Weight,
    target_max: Weight,
    frequency: Frequency,
    exercise: ExerciseId,
}

impl TrainingInput {
    pub fn new(
        current_max: Weight,
        target_max: Weight,
        frequency: Frequency,
        exercise: ExerciseId,
    ) -> Result<Self, ValidationError> {
        validate_goal(current_max, target_max)?;

        Ok(Self {
            current_max,
            target_max,
            frequency,
            exercise,
        })
    }

    /// Validates raw text as entered by a user.
    ///
    /// Field syntax is checked first, then the goal, then the exercise.
    pub fn parse(
        current_max: &str,
        target_max: &str,
        frequency: &str,
        exercise: &str,
    ) -> Result<Self, ValidationError> {
        let current_max = Weight::try_from(current_max)?;
        let target_max = Weight::try_from(target_max)?;
        let frequency = Frequency::try_from(frequency)?;
        validate_goal(current_max, target_max)?;
        let exercise = ExerciseId::parse(exercise)?;

        Ok(Self {
            current_max,
            target_max,
            frequency,
            exercise,
        })
    }

    #[must_use]
    pub fn current_max(&self) -> Weight {
        self.current_max
    }

    #[must_use]
    pub fn target_max(&self) -> Weight {
        self.target_max
    }

    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    #[must_use]
    pub fn exercise(&self) -> ExerciseId {
        self.exercise
    }

    #[must_use]
    pub fn gain(&self) -> f32 {
        goal_gain(self.current_max, self.target_max)
    }
}

/// Difference between target and current max at the 0.1 resolution loads are entered with.
#[must_use]
pub fn goal_gain(current_max: Weight, target_max: Weight) -> f32 {
    round_to_tenth(*target_max - *current_max)
}

/// Returns the gain between the current and the target max if it can be trained for.
pub fn validate_goal(current_max: Weight, target_max: Weight) -> Result<f32, ValidationError> {
    let gain = goal_gain(current_max, target_max);

    if gain <= 0.0 {
        return Err(ValidationError::NonPositiveGoal);
    }

    if gain >= MAX_GAIN {
        return Err(ValidationError::UnrealisticGoal(gain));
    }

    Ok(gain)
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.1, Ok(Weight(0.1)))]
    #[case(142.5, Ok(Weight(142.5)))]
    #[case(0.0, Err(WeightError::NotPositive))]
    #[case(-10.0, Err(WeightError::NotPositive))]
    #[case(f32::NAN, Err(WeightError::NotPositive))]
    #[case(f32::INFINITY, Err(WeightError::NotPositive))]
    fn test_weight_new(#[case] input: f32, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::new(input), expected);
    }

    #[rstest]
    #[case("90", Ok(Weight(90.0)))]
    #[case(" 92.5 ", Ok(Weight(92.5)))]
    #[case("92,5", Ok(Weight(92.5)))]
    #[case("0", Err(WeightError::NotPositive))]
    #[case("", Err(WeightError::ParseError))]
    #[case("heavy", Err(WeightError::ParseError))]
    fn test_weight_from_str(#[case] input: &str, #[case] expected: Result<Weight, WeightError>) {
        assert_eq!(Weight::try_from(input), expected);
    }

    #[rstest]
    #[case(0, Err(FrequencyError::OutOfRange))]
    #[case(1, Ok(Frequency(1)))]
    #[case(7, Ok(Frequency(7)))]
    #[case(8, Err(FrequencyError::OutOfRange))]
    fn test_frequency_new(#[case] input: u32, #[case] expected: Result<Frequency, FrequencyError>) {
        assert_eq!(Frequency::new(input), expected);
    }

    #[rstest]
    #[case("3", Ok(Frequency(3)))]
    #[case(" 7", Ok(Frequency(7)))]
    #[case("9", Err(FrequencyError::OutOfRange))]
    #[case("2.5", Err(FrequencyError::ParseError))]
    #[case("", Err(FrequencyError::ParseError))]
    fn test_frequency_from_str(
        #[case] input: &str,
        #[case] expected: Result<Frequency, FrequencyError>,
    ) {
        assert_eq!(Frequency::try_from(input), expected);
    }

    #[rstest]
    #[case(90.0, 100.0, Ok(10.0))]
    #[case(100.0, 100.5, Ok(0.5))]
    #[case(100.0, 100.0, Err(ValidationError::NonPositiveGoal))]
    #[case(100.0, 90.0, Err(ValidationError::NonPositiveGoal))]
    #[case(100.0, 150.0, Err(ValidationError::UnrealisticGoal(50.0)))]
    #[case(100.0, 200.0, Err(ValidationError::UnrealisticGoal(100.0)))]
    fn test_validate_goal(
        #[case] current: f32,
        #[case] target: f32,
        #[case] expected: Result<f32, ValidationError>,
    ) {
        assert_eq!(
            validate_goal(Weight(current), Weight(target)),
            expected
        );
    }

    #[rstest]
    #[case(60.0)]
    #[case(100.0)]
    #[case(250.0)]
    fn test_validate_goal_boundary(#[case] current: f32) {
        let gain = validate_goal(Weight(current), Weight(current + 49.9));
        assert!(gain.is_ok());
        assert_approx_eq!(gain.unwrap_or_default(), 49.9, 0.001);
        assert_eq!(
            validate_goal(Weight(current), Weight(current + 50.0)),
            Err(ValidationError::UnrealisticGoal(50.0))
        );
    }

    #[rstest]
    #[case("14.2", "64.2")]
    #[case("14.7", "64.7")]
    #[case("15.2", "65.2")]
    #[case("0.1", "50.1")]
    #[case("949.9", "999.9")]
    fn test_validate_goal_decimal_boundary(#[case] current: &str, #[case] target: &str) {
        assert_eq!(
            validate_goal(
                Weight::try_from(current).unwrap(),
                Weight::try_from(target).unwrap()
            ),
            Err(ValidationError::UnrealisticGoal(50.0))
        );
    }

    #[test]
    fn test_validate_goal_decimal_inputs() {
        for i in 1..10_000 {
            #[allow(clippy::cast_precision_loss)]
            let current = i as f32 / 10.0;
            let weight = |value: f32| Weight::try_from(format!("{value:.1}").as_str()).unwrap();

            assert_eq!(
                validate_goal(weight(current), weight(current + 50.0)),
                Err(ValidationError::UnrealisticGoal(50.0)),
                "{current:.1}"
            );
            assert_eq!(
                validate_goal(weight(current), weight(current + 49.9)),
                Ok(49.9),
                "{current:.1}"
            );
        }
    }

    #[test]
    fn test_validate_goal_error_message() {
        assert_eq!(
            validate_goal(
                Weight::try_from("14.2").unwrap(),
                Weight::try_from("64.3").unwrap()
            )
            .unwrap_err()
            .to_string(),
            "Gain of 50.1 is not attainable in one cycle (must be less than 50)"
        );
    }

    #[rstest]
    #[case("3.4", "8.4", 5.0)]
    #[case("0.3", "10.3", 10.0)]
    #[case("82.7", "102.7", 20.0)]
    #[case("90", "92.5", 2.5)]
    fn test_goal_gain(#[case] current: &str, #[case] target: &str, #[case] expected: f32) {
        assert_eq!(
            goal_gain(
                Weight::try_from(current).unwrap(),
                Weight::try_from(target).unwrap()
            ),
            expected
        );
    }

    #[test]
    fn test_training_input_new() {
        let input = TrainingInput::new(
            Weight(90.0),
            Weight(100.0),
            Frequency(2),
            ExerciseId::BenchPress,
        )
        .unwrap();

        assert_eq!(input.current_max(), Weight(90.0));
        assert_eq!(input.target_max(), Weight(100.0));
        assert_eq!(input.frequency(), Frequency(2));
        assert_eq!(input.exercise(), ExerciseId::BenchPress);
        assert_approx_eq!(input.gain(), 10.0);
    }

    #[rstest]
    #[case(
        ("90", "100", "2", "BenchPress"),
        Ok(TrainingInput {
            current_max: Weight(90.0),
            target_max: Weight(100.0),
            frequency: Frequency(2),
            exercise: ExerciseId::BenchPress,
        })
    )]
    #[case(("ninety", "100", "2", "Squat"), Err(ValidationError::Weight(WeightError::ParseError)))]
    #[case(("90", "-1", "2", "Squat"), Err(ValidationError::Weight(WeightError::NotPositive)))]
    #[case(("90", "100", "8", "Squat"), Err(ValidationError::Frequency(FrequencyError::OutOfRange)))]
    #[case(("100", "100", "3", "Squat"), Err(ValidationError::NonPositiveGoal))]
    #[case(("100", "160", "3", "Squat"), Err(ValidationError::UnrealisticGoal(60.0)))]
    #[case(("100", "160", "3", "Curl"), Err(ValidationError::UnrealisticGoal(60.0)))]
    #[case(("100", "110", "3", "Curl"), Err(ValidationError::UnknownExercise("Curl".to_string())))]
    fn test_training_input_parse(
        #[case] input: (&str, &str, &str, &str),
        #[case] expected: Result<TrainingInput, ValidationError>,
    ) {
        assert_eq!(
            TrainingInput::parse(input.0, input.1, input.2, input.3),
            expected
        );
    }
}

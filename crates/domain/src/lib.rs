#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod error;
pub mod exercise;
pub mod input;
pub mod program;
pub mod template;
pub mod unit;
pub mod warm_up;

pub use catalog::{Accessory, accessories_for};
pub use error::ValidationError;
pub use exercise::ExerciseId;
pub use input::{
    Frequency, FrequencyError, TrainingInput, Weight, WeightError, goal_gain, validate_goal,
};
pub use program::{
    DaySession, Program, WeekPlan, generate, interpolate, program_weeks, round_to_tenth,
    week_fraction,
};
pub use template::{DAY_TEMPLATES, DayTemplate, TAPER_TEMPLATE, day_template};
pub use unit::Unit;
pub use warm_up::{WARM_UP_LADDER, WarmUpSet, warm_up_sets};

use log::{debug, warn};

use crate::{
    Accessory, DayTemplate, ExerciseId, Frequency, TAPER_TEMPLATE, TrainingInput, WarmUpSet,
    Weight, accessories_for, day_template, goal_gain, warm_up_sets,
};

/// Regular days lose one set and one rep once the program has progressed beyond this fraction.
const VOLUME_FADE_THRESHOLD: f32 = 0.6;

pub const PR_ATTEMPT_LABEL: &str = "PR Attempt";

/// A complete program for one lift, together with the suggested accessories.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub exercise: ExerciseId,
    pub current_max: Weight,
    pub target_max: Weight,
    pub frequency: Frequency,
    pub weeks: Vec<WeekPlan>,
}

impl Program {
    #[must_use]
    pub fn new(input: &TrainingInput) -> Self {
        Self {
            exercise: input.exercise(),
            current_max: input.current_max(),
            target_max: input.target_max(),
            frequency: input.frequency(),
            weeks: generate(input.current_max(), input.target_max(), input.frequency()),
        }
    }

    #[must_use]
    pub fn total_weeks(&self) -> usize {
        self.weeks.len()
    }

    #[must_use]
    pub fn accessories(&self) -> &'static [Accessory] {
        accessories_for(self.exercise)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekPlan {
    pub week_number: u32,
    pub days: Vec<DaySession>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DaySession {
    /// Regular or taper day. Loads are relative to the current max.
    Training {
        day_number: u32,
        label: &'static str,
        sets: u32,
        reps: u32,
        percentage: f32,
        weight: f32,
    },
    /// Single max effort lift at the target max after a fixed warm-up.
    PrAttempt {
        day_number: u32,
        warm_up_sets: Vec<WarmUpSet>,
        final_attempt_weight: f32,
    },
}

impl DaySession {
    #[must_use]
    pub fn day_number(&self) -> u32 {
        match self {
            DaySession::Training { day_number, .. } | DaySession::PrAttempt { day_number, .. } => {
                *day_number
            }
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DaySession::Training { label, .. } => *label,
            DaySession::PrAttempt { .. } => PR_ATTEMPT_LABEL,
        }
    }
}

/// Number of weeks needed to gain the given load.
#[must_use]
pub fn program_weeks(gain: f32) -> u32 {
    if gain < 5.0 {
        6
    } else if gain < 10.0 {
        8
    } else if gain < 20.0 {
        10
    } else {
        12
    }
}

#[must_use]
pub fn interpolate(start: f32, end: f32, fraction: f32) -> f32 {
    start + (end - start) * fraction
}

/// Position of a 0-based week within a program, from 0 for the first to 1 for the last week.
///
/// A single-week program has no progression, its only week is at 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn week_fraction(week_idx: u32, total_weeks: u32) -> f32 {
    if total_weeks <= 1 {
        return 0.0;
    }

    week_idx as f32 / (total_weeks - 1) as f32
}

#[must_use]
pub fn round_to_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

/// Generates a plan that ramps up from the current max and ends with an attempt at the
/// target max on the last session of the last week.
///
/// The first session of the last week is a taper day if there is more than one session per
/// week.
#[must_use]
pub fn generate(current_max: Weight, target_max: Weight, frequency: Frequency) -> Vec<WeekPlan> {
    let total_weeks = program_weeks(goal_gain(current_max, target_max));

    debug!(
        "generating {total_weeks}-week program from {current_max} to {target_max} with {frequency} session(s) per week"
    );

    (0..total_weeks)
        .map(|week_idx| WeekPlan {
            week_number: week_idx + 1,
            days: week_days(week_idx, total_weeks, *current_max, *target_max, *frequency),
        })
        .collect()
}

fn week_days(
    week_idx: u32,
    total_weeks: u32,
    current_max: f32,
    target_max: f32,
    frequency: u32,
) -> Vec<DaySession> {
    let last_week = week_idx + 1 == total_weeks;
    let fraction = week_fraction(week_idx, total_weeks);
    let mut days = vec![];

    for day_idx in 0..frequency {
        let day_number = day_idx + 1;
        let last_day = day_number == frequency;

        if last_week && last_day {
            days.push(DaySession::PrAttempt {
                day_number,
                warm_up_sets: warm_up_sets(target_max),
                final_attempt_weight: target_max,
            });
        } else if last_week && day_idx == 0 && frequency > 1 {
            days.push(training_day(
                day_number,
                &TAPER_TEMPLATE,
                fraction,
                current_max,
                false,
            ));
        } else {
            // Sessions without a template are omitted for the rest of the week, including a
            // PR attempt scheduled after them.
            let Some(template) = day_template(day_idx as usize) else {
                warn!(
                    "no template for session {day_number} of week {}, omitting {} session(s)",
                    week_idx + 1,
                    frequency - day_idx
                );
                break;
            };
            days.push(training_day(
                day_number,
                template,
                fraction,
                current_max,
                fraction > VOLUME_FADE_THRESHOLD,
            ));
        }
    }

    days
}

fn training_day(
    day_number: u32,
    template: &DayTemplate,
    fraction: f32,
    current_max: f32,
    volume_fade: bool,
) -> DaySession {
    let percentage = interpolate(template.start_percentage, template.end_percentage, fraction);
    let (sets, reps) = if volume_fade {
        (
            template.base_sets.saturating_sub(1).max(1),
            template.base_reps.saturating_sub(1).max(1),
        )
    } else {
        (template.base_sets, template.base_reps)
    };

    DaySession::Training {
        day_number,
        label: template.label,
        sets,
        reps,
        percentage,
        weight: round_to_tenth(current_max * percentage),
    }
}

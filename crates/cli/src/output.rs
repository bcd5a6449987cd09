use liftplan_domain::{self as domain, Unit};

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Program {
    pub exercise: String,
    pub name: String,
    pub unit: String,
    pub current_max: f32,
    pub target_max: f32,
    pub frequency: u32,
    pub total_weeks: usize,
    pub weeks: Vec<Week>,
    pub accessories: Vec<Accessory>,
}

impl Program {
    #[must_use]
    pub fn new(program: &domain::Program, unit: Unit) -> Self {
        Self {
            exercise: program.exercise.as_ref().to_string(),
            name: program.exercise.name().to_string(),
            unit: unit.to_string(),
            current_max: *program.current_max,
            target_max: *program.target_max,
            frequency: *program.frequency,
            total_weeks: program.total_weeks(),
            weeks: program.weeks.iter().map(Week::from).collect(),
            accessories: program.accessories().iter().map(Accessory::from).collect(),
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Week {
    pub week: u32,
    pub days: Vec<Day>,
}

impl From<&domain::WeekPlan> for Week {
    fn from(value: &domain::WeekPlan) -> Self {
        Self {
            week: value.week_number,
            days: value.days.iter().map(Day::from).collect(),
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Day {
    Training {
        day_number: u32,
        label: String,
        sets: u32,
        reps: u32,
        percentage: f32,
        weight: f32,
    },
    PrAttempt {
        day_number: u32,
        label: String,
        warm_up_sets: Vec<WarmUpSet>,
        final_attempt_weight: f32,
    },
}

impl From<&domain::DaySession> for Day {
    fn from(value: &domain::DaySession) -> Self {
        match value {
            domain::DaySession::Training {
                day_number,
                label,
                sets,
                reps,
                percentage,
                weight,
            } => Day::Training {
                day_number: *day_number,
                label: (*label).to_string(),
                sets: *sets,
                reps: *reps,
                percentage: *percentage,
                weight: *weight,
            },
            domain::DaySession::PrAttempt {
                day_number,
                warm_up_sets,
                final_attempt_weight,
            } => Day::PrAttempt {
                day_number: *day_number,
                label: value.label().to_string(),
                warm_up_sets: warm_up_sets.iter().map(WarmUpSet::from).collect(),
                final_attempt_weight: *final_attempt_weight,
            },
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct WarmUpSet {
    pub weight: f32,
    pub reps: u32,
    pub percentage: f32,
}

impl From<&domain::WarmUpSet> for WarmUpSet {
    fn from(value: &domain::WarmUpSet) -> Self {
        Self {
            weight: value.weight,
            reps: value.reps,
            percentage: value.percentage,
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct Accessory {
    pub name: String,
    pub details: String,
}

impl From<&domain::Accessory> for Accessory {
    fn from(value: &domain::Accessory) -> Self {
        Self {
            name: value.name.to_string(),
            details: value.details.to_string(),
        }
    }
}

pub fn to_json(program: &domain::Program, unit: Unit) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&Program::new(program, unit))
}

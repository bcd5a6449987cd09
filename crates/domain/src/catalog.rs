use crate::ExerciseId;

/// Secondary movement suggested alongside the main lift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accessory {
    pub name: &'static str,
    pub details: &'static str,
}

const fn accessory(name: &'static str, details: &'static str) -> Accessory {
    Accessory { name, details }
}

static BENCH_PRESS: [Accessory; 4] = [
    accessory("Close-Grip Bench Press", "3x8 @ ~65%"),
    accessory("Incline Dumbbell Press", "3x10-12"),
    accessory("Triceps Extensions", "3x15"),
    accessory("Face Pulls", "3x15"),
];

static SQUAT: [Accessory; 4] = [
    accessory("Lunges", "3x8 per leg"),
    accessory("Leg Press", "4x10-12"),
    accessory("Hamstring Curls", "3x12"),
    accessory("Calf Raises", "3x15"),
];

static DEADLIFT: [Accessory; 4] = [
    accessory("Romanian Deadlift", "3x8"),
    accessory("Pull-Ups", "3 sets to failure"),
    accessory("Bent-Over Rows", "3x10"),
    accessory("Planks", "3x30 sec"),
];

static OVERHEAD_PRESS: [Accessory; 4] = [
    accessory("Seated Dumbbell Press", "3x10"),
    accessory("Lateral Raises", "3x12"),
    accessory("Triceps Pushdowns", "3x15"),
    accessory("Face Pulls", "3x15"),
];

#[must_use]
pub fn accessories_for(exercise: ExerciseId) -> &'static [Accessory] {
    match exercise {
        ExerciseId::BenchPress => &BENCH_PRESS,
        ExerciseId::Squat => &SQUAT,
        ExerciseId::Deadlift => &DEADLIFT,
        ExerciseId::OverheadPress => &OVERHEAD_PRESS,
    }
}

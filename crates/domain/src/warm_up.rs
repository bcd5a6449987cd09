use crate::round_to_tenth;

/// Percentage of the target max and reps for each warm-up set before a PR attempt.
pub static WARM_UP_LADDER: [(f32, u32); 4] = [(0.5, 5), (0.6, 3), (0.7, 2), (0.8, 1)];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WarmUpSet {
    pub weight: f32,
    pub reps: u32,
    pub percentage: f32,
}

#[must_use]
pub fn warm_up_sets(target_max: f32) -> Vec<WarmUpSet> {
    WARM_UP_LADDER
        .iter()
        .map(|&(percentage, reps)| WarmUpSet {
            weight: round_to_tenth(target_max * percentage),
            reps,
            percentage,
        })
        .collect()
}

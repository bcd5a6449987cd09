/// Load and volume prescription for one training day.
///
/// The load percentage moves linearly from `start_percentage` in the first week to
/// `end_percentage` in the last week of a program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTemplate {
    pub label: &'static str,
    pub start_percentage: f32,
    pub end_percentage: f32,
    pub base_sets: u32,
    pub base_reps: u32,
}

impl DayTemplate {
    const fn new(
        label: &'static str,
        start_percentage: f32,
        end_percentage: f32,
        base_sets: u32,
        base_reps: u32,
    ) -> Self {
        Self {
            label,
            start_percentage,
            end_percentage,
            base_sets,
            base_reps,
        }
    }
}

/// Templates for the first to seventh session of a training week.
pub static DAY_TEMPLATES: [DayTemplate; 7] = [
    DayTemplate::new("Heavy", 0.70, 0.95, 4, 4),
    DayTemplate::new("Volume", 0.65, 0.85, 5, 5),
    DayTemplate::new("Moderate", 0.75, 0.90, 4, 5),
    DayTemplate::new("Power", 0.80, 0.95, 3, 3),
    DayTemplate::new("Volume", 0.65, 0.85, 4, 6),
    DayTemplate::new("Moderate", 0.70, 0.90, 4, 4),
    DayTemplate::new("Heavy", 0.70, 0.95, 3, 3),
];

/// Replaces the first session of the last week if that week has more than one session.
pub static TAPER_TEMPLATE: DayTemplate = DayTemplate::new("Taper", 0.50, 0.65, 2, 3);

/// Looks up the template for a 0-based position within a training week.
///
/// Returns `None` for positions beyond the table. A [`crate::Frequency`] never exceeds the
/// table size, so callers only see `None` if the permitted frequency range grows.
#[must_use]
pub fn day_template(day_idx: usize) -> Option<&'static DayTemplate> {
    DAY_TEMPLATES.get(day_idx)
}

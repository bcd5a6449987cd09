use std::fmt::Write;

use liftplan_domain::{DaySession, Program, Unit};

/// Renders a program as plain text.
#[must_use]
pub fn render(program: &Program, unit: Unit) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{} Program", program.exercise.name());
    let _ = writeln!(
        output,
        "Going from {}{unit} → {}{unit}.",
        program.current_max, program.target_max
    );
    let _ = writeln!(
        output,
        "{} total weeks, {} day(s)/week.",
        program.total_weeks(),
        program.frequency
    );

    for week in &program.weeks {
        let _ = write!(output, "\nWeek {}\n", week.week_number);
        for day in &week.days {
            output.push_str(&render_day(day, unit));
        }
    }

    output.push_str("\nSuggested Accessories\n");
    for accessory in program.accessories() {
        let _ = writeln!(output, "- {}: {}", accessory.name, accessory.details);
    }

    output
}

#[must_use]
pub fn render_day(day: &DaySession, unit: Unit) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Day {} ({})", day.day_number(), day.label());
    match day {
        DaySession::Training {
            sets,
            reps,
            percentage,
            weight,
            ..
        } => {
            let _ = writeln!(
                output,
                "{sets} x {reps} @ ~{}% = {weight} {unit}",
                percent(*percentage)
            );
        }
        DaySession::PrAttempt {
            warm_up_sets,
            final_attempt_weight,
            ..
        } => {
            output.push_str("Warm-Up Sets:\n");
            for set in warm_up_sets {
                let _ = writeln!(
                    output,
                    "- {}{unit} x {} reps (~{}%)",
                    set.weight,
                    set.reps,
                    percent(set.percentage)
                );
            }
            let _ = writeln!(
                output,
                "Final Attempt: {final_attempt_weight} {unit} x 1 rep"
            );
        }
    }

    output
}

fn percent(fraction: f32) -> f32 {
    (fraction * 100.0).round()
}

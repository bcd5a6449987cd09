#![warn(clippy::pedantic)]

use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use log::{debug, info};

use liftplan_domain::{Program, TrainingInput, Unit};

use settings::{Format, Settings};

mod logger;
mod output;
mod render;
mod settings;

#[derive(Parser, Debug)]
#[command(author, version, about = "Strength training program generator", long_about = None)]
struct Cli {
    /// Lift to train (BenchPress, Squat, Deadlift, OverheadPress)
    #[arg(short, long, default_value = "BenchPress")]
    exercise: String,

    /// Current one-rep max
    #[arg(short, long, allow_negative_numbers = true)]
    current: String,

    /// Target one-rep max
    #[arg(short, long, allow_negative_numbers = true)]
    target: String,

    /// Training sessions per week (1 to 7)
    #[arg(short, long)]
    frequency: Option<String>,

    /// Unit label for all loads (kg or lbs)
    #[arg(short, long)]
    units: Option<Unit>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Settings file providing defaults for frequency, units and format
    #[arg(long, value_hint = ValueHint::FilePath)]
    settings: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Command line options merged with the settings.
#[derive(Debug, PartialEq)]
struct Options {
    frequency: String,
    units: Unit,
    format: Format,
}

impl Options {
    fn new(cli: &Cli, settings: &Settings) -> Self {
        Self {
            frequency: cli
                .frequency
                .clone()
                .unwrap_or_else(|| settings.frequency.to_string()),
            units: cli.units.unwrap_or(settings.units),
            format: cli.format.unwrap_or(settings.format),
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = Settings::load(cli.settings.as_deref()).context("failed to load settings")?;
    let options = Options::new(cli, &settings);
    debug!("{options:?}");

    let input = TrainingInput::parse(&cli.current, &cli.target, &options.frequency, &cli.exercise)?;
    let program = Program::new(&input);
    info!(
        "generated {}-week {} program for a gain of {}",
        program.total_weeks(),
        program.exercise.name(),
        input.gain()
    );

    let output = match options.format {
        Format::Text => render::render(&program, options.units),
        Format::Json => {
            output::to_json(&program, options.units).context("failed to serialize program")?
        }
    };
    println!("{}", output.trim_end());

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logger::init(cli.verbose) {
        eprintln!("failed to initialize logger: {err}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

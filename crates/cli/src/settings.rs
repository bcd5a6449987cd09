use std::{fs, io, path::Path};

use liftplan_domain::Unit;
use log::debug;

/// Defaults that apply when an option is not given on the command line.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Settings {
    #[serde(with = "UnitDef")]
    pub units: Unit,
    pub frequency: u32,
    pub format: Format,
}

impl Settings {
    /// Reads the settings from a JSON file.
    ///
    /// A missing file results in the default settings.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };

        match fs::read_to_string(path) {
            Ok(content) => Self::from_json(&content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no settings at {}, using defaults", path.display());
                Ok(Settings::default())
            }
            Err(err) => Err(SettingsError::Io(err)),
        }
    }

    pub fn from_json(content: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(content)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            units: Unit::Kilogram,
            frequency: 2,
            format: Format::Text,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Text,
    Json,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(remote = "Unit")]
enum UnitDef {
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "lbs")]
    Pound,
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

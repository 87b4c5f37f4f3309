use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::sim::state::SimulationParameters;

/// Name of the settings file inside the input directory.
pub const SETTINGS_FILE: &str = "simsetting.txt";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot read settings: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected \"name,value\", got {text:?}")]
    MalformedLine { line: usize, text: String },

    #[error("line {line}: {value:?} is not a number for key {key:?}")]
    BadNumber {
        line: usize,
        key: String,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// simsetting.txt parser
// ---------------------------------------------------------------------------

/// Parse `name,value` settings lines into simulation parameters.
///
/// Double quotes are stripped before parsing, blank lines and `#` comments
/// are skipped, key matching is case-insensitive, and unknown keys are
/// ignored. Keys absent from the listing keep their 0.0 default.
pub fn read_settings<R: BufRead>(reader: R) -> Result<SimulationParameters, SettingsError> {
    let mut params = SimulationParameters::default();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let raw = line?;
        let text = raw.replace('"', "");
        let text = text.trim();

        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let (key, value) = text
            .split_once(',')
            .ok_or_else(|| SettingsError::MalformedLine {
                line: line_no,
                text: raw.clone(),
            })?;
        let key = key.trim();
        let value = value.trim();

        let parsed: f64 = value.parse().map_err(|_| SettingsError::BadNumber {
            line: line_no,
            key: key.to_string(),
            value: value.to_string(),
        })?;

        match key.to_ascii_lowercase().as_str() {
            "gravity" => params.gravity = parsed,
            "mass" => params.mass = parsed,
            "velocity" => params.velocity = parsed,
            "angle" => params.angle = parsed,
            "height" => params.height = parsed,
            "air_resistance" => params.air_resistance = parsed,
            "time_step" => params.time_step = parsed,
            _ => {} // unknown keys are ignored
        }
    }

    Ok(params)
}

/// Read `simsetting.txt` from the given input directory.
pub fn read_settings_dir(input_dir: &Path) -> Result<SimulationParameters, SettingsError> {
    let path = input_dir.join(SETTINGS_FILE);
    let file = File::open(path)?;
    read_settings(BufReader::new(file))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Loader for the RON movement tuning file at startup.

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use crate::controller::MovementTuning;

const TUNING_PATH: &str = "assets/data/movement.ron";

/// Error type for tuning load failures.
#[derive(Debug)]
pub struct TuningLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for TuningLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

/// Parse and validate a tuning file's contents.
fn parse_tuning(contents: &str, file: &str) -> Result<MovementTuning, TuningLoadError> {
    let tuning: MovementTuning = ron::from_str(contents).map_err(|e| TuningLoadError {
        file: file.to_string(),
        message: format!("Parse error: {}", e),
    })?;

    if let Err(errors) = tuning.validate() {
        let joined = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(TuningLoadError {
            file: file.to_string(),
            message: joined,
        });
    }

    Ok(tuning)
}

fn read_tuning(path: &Path) -> Result<MovementTuning, TuningLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| TuningLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;
    parse_tuning(&contents, &file_name)
}

/// Load movement tuning at startup. A missing file falls back to defaults;
/// a present but invalid file is a configuration error and aborts startup.
pub(crate) fn load_movement_tuning(mut commands: Commands) {
    let path = Path::new(TUNING_PATH);

    let tuning = if path.exists() {
        match read_tuning(path) {
            Ok(tuning) => {
                info!("Loaded movement tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                error!("{}", e);
                panic!("movement tuning rejected, fix {} and restart", path.display());
            }
        }
    } else {
        info!(
            "No tuning file at {}, using built-in defaults",
            path.display()
        );
        MovementTuning::default()
    };

    commands.insert_resource(tuning);
}

#[cfg(test)]
mod tests {
    use super::parse_tuning;

    const VALID: &str = "(
        base_speed: 240.0,
        sprint_multiplier: 1.5,
        acceleration: 6.0,
        deceleration: 8.0,
        dash_power: 900.0,
        dash_duration: 0.15,
        dash_cooldown: 1.0,
    )";

    #[test]
    fn test_parse_valid_tuning() {
        let tuning = parse_tuning(VALID, "movement.ron").unwrap();
        assert_eq!(tuning.base_speed, 240.0);
        assert_eq!(tuning.dash_duration, 0.15);
    }

    #[test]
    fn test_parse_rejects_malformed_ron() {
        let err = parse_tuning("(base_speed: )", "movement.ron").unwrap_err();
        assert!(err.message.starts_with("Parse error"));
    }

    #[test]
    fn test_parse_rejects_non_positive_values() {
        let contents = VALID.replace("dash_cooldown: 1.0", "dash_cooldown: -1.0");
        let err = parse_tuning(&contents, "movement.ron").unwrap_err();
        assert!(err.message.contains("dash_cooldown"));
    }
}

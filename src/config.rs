use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Sweep parameters that can be loaded from a TOML file.
///
/// The parser rejects unknown keys to catch typos, and validates that at
/// least one date is listed. Date tokens themselves are passed through
/// as-is; a malformed token produces a malformed directory name downstream
/// rather than an error here.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepConfig {
    /// Base directory to save the downloaded files under
    pub save: PathBuf,
    /// Forecast dates in `YYYYMMDD` format
    pub dates: Vec<String>,
}

impl SweepConfig {
    /// Loads and validates configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the TOML is malformed, required fields are
    /// missing, unknown keys are present, or the date list is empty.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: SweepConfig = toml::from_str(&contents)
            .map_err(|e| AppError::InvalidInput(format!("Failed to parse config: {e}")))?;

        if config.dates.is_empty() {
            return Err(AppError::InvalidInput(
                "At least one date must be listed".into(),
            ));
        }

        Ok(config)
    }
}

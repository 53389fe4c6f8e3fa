use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A city/state entry from the zip directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZipLocation {
    /// Five-digit zip code, kept as text exactly as the directory lists it.
    pub zipcode: String,
    pub city: String,
    pub state: String,
    pub state_abbr: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Returns `true` when `s` is exactly five ASCII digits.
///
/// Zip codes are keyed by this shape, so site ids must never match it.
#[must_use]
pub fn is_zip_shaped(s: &str) -> bool {
    s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Load and validate the zip directory from a JSON array file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_zip_locations(path: &Path) -> Result<Vec<ZipLocation>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DatasetIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let locations: Vec<ZipLocation> =
        serde_json::from_str(&content).map_err(|e| ConfigError::DatasetParse {
            path: path.display().to_string(),
            source: e,
        })?;

    validate_zip_locations(&locations)?;

    tracing::info!(
        path = %path.display(),
        count = locations.len(),
        "loaded zip directory"
    );
    Ok(locations)
}

fn validate_zip_locations(locations: &[ZipLocation]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for location in locations {
        if !is_zip_shaped(&location.zipcode) {
            return Err(ConfigError::Validation(format!(
                "zip code '{}' must be exactly five digits",
                location.zipcode
            )));
        }
        if !seen.insert(location.zipcode.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate zip code: '{}'",
                location.zipcode
            )));
        }
    }

    Ok(())
}

//! Charging sites and the GeoJSON data source they are loaded from.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chargers::ChargerRecord;
use crate::zipcodes::is_zip_shaped;
use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A charging location and its charger inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Stable upstream id. Never zip-shaped; see [`is_zip_shaped`].
    pub id: String,
    pub name: String,
    pub chargers: Vec<ChargerRecord>,
    pub coordinates: Coordinates,
}

impl Site {
    #[must_use]
    pub fn has_chargers(&self) -> bool {
        !self.chargers.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    properties: SiteProperties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct SiteProperties {
    id: String,
    name: String,
    #[serde(default)]
    chargers: Vec<ChargerRecord>,
}

/// Load and validate charging sites from a GeoJSON `FeatureCollection`.
///
/// Sites are returned in file order; search results depend on that order.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_sites(path: &Path) -> Result<Vec<Site>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::DatasetIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let sites = parse_sites(&content, &path.display().to_string())?;

    tracing::info!(
        path = %path.display(),
        count = sites.len(),
        "loaded charging sites"
    );
    Ok(sites)
}

fn parse_sites(content: &str, origin: &str) -> Result<Vec<Site>, ConfigError> {
    let collection: FeatureCollection =
        serde_json::from_str(content).map_err(|e| ConfigError::DatasetParse {
            path: origin.to_string(),
            source: e,
        })?;

    let sites = collection
        .features
        .into_iter()
        .map(feature_to_site)
        .collect::<Result<Vec<_>, _>>()?;

    validate_sites(&sites)?;
    Ok(sites)
}

fn feature_to_site(feature: Feature) -> Result<Site, ConfigError> {
    let Feature {
        geometry,
        properties,
    } = feature;

    if geometry.kind != "Point" {
        return Err(ConfigError::Validation(format!(
            "site '{}' has geometry type '{}'; expected 'Point'",
            properties.id, geometry.kind
        )));
    }
    // GeoJSON positions are [longitude, latitude].
    let [longitude, latitude] = geometry.coordinates.as_slice() else {
        return Err(ConfigError::Validation(format!(
            "site '{}' must have exactly two coordinates, got {}",
            properties.id,
            geometry.coordinates.len()
        )));
    };

    Ok(Site {
        id: properties.id,
        name: properties.name,
        chargers: properties.chargers,
        coordinates: Coordinates {
            latitude: *latitude,
            longitude: *longitude,
        },
    })
}

fn validate_sites(sites: &[Site]) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for site in sites {
        if site.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site id must be non-empty".to_string(),
            ));
        }

        if site.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "site '{}' must have a non-empty name",
                site.id
            )));
        }

        if is_zip_shaped(&site.id) {
            return Err(ConfigError::Validation(format!(
                "site id '{}' collides with the zip code key format",
                site.id
            )));
        }

        if !seen_ids.insert(site.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate site id: '{}'",
                site.id
            )));
        }

        let Coordinates {
            latitude,
            longitude,
        } = site.coordinates;
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(ConfigError::Validation(format!(
                "site '{}' has out-of-range coordinates ({latitude}, {longitude})",
                site.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "sites_test.rs"]
mod tests;

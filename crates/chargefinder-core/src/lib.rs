pub mod app_config;
pub mod chargers;
pub mod config;
pub mod sites;
pub mod zipcodes;

pub use app_config::{AppConfig, Environment};
pub use chargers::{ChargerLevel, ChargerRecord, ChargerStatus};
pub use config::{load_app_config, load_app_config_from_env};
pub use sites::{load_sites, Coordinates, Site};
pub use zipcodes::{is_zip_shaped, load_zip_locations, ZipLocation};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {path}: {source}")]
    DatasetIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    DatasetParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("validation error: {0}")]
    Validation(String),
}

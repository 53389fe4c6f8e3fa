use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Fallback `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
    /// GeoJSON `FeatureCollection` of charging sites.
    pub sites_path: PathBuf,
    /// JSON array of zip directory entries.
    pub zipcodes_path: PathBuf,
}

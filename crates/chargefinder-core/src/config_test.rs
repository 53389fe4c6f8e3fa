use std::collections::HashMap;
use std::env::VarError;
use std::path::Path;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "CHARGEFINDER_ENV"));
}

#[test]
fn build_app_config_uses_defaults_for_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.sites_path, Path::new("./config/sites.geojson"));
    assert_eq!(cfg.zipcodes_path, Path::new("./config/zipcodes.json"));
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("CHARGEFINDER_ENV", "production");
    map.insert("CHARGEFINDER_LOG_LEVEL", "chargefinder_search=debug");
    map.insert("CHARGEFINDER_SITES_PATH", "/data/sites.geojson");
    map.insert("CHARGEFINDER_ZIPCODES_PATH", "/data/zips.json");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "chargefinder_search=debug");
    assert_eq!(cfg.sites_path, Path::new("/data/sites.geojson"));
    assert_eq!(cfg.zipcodes_path, Path::new("/data/zips.json"));
}

#[test]
fn build_app_config_rejects_unknown_env() {
    let mut map = HashMap::new();
    map.insert("CHARGEFINDER_ENV", "qa");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CHARGEFINDER_ENV"),
        "expected InvalidEnvVar(CHARGEFINDER_ENV), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_blank_log_level() {
    let mut map = HashMap::new();
    map.insert("CHARGEFINDER_LOG_LEVEL", "  ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "CHARGEFINDER_LOG_LEVEL"),
        "expected InvalidEnvVar(CHARGEFINDER_LOG_LEVEL), got: {result:?}"
    );
}

#[test]
fn environment_display() {
    assert_eq!(Environment::Development.to_string(), "development");
    assert_eq!(Environment::Test.to_string(), "test");
    assert_eq!(Environment::Production.to_string(), "production");
}

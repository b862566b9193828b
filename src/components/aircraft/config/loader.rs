use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Top level layout of an aircraft YAML file.
#[derive(Debug, Deserialize)]
pub struct RawAircraftFile {
    pub aircraft: Vec<RawAircraftSpec>,
}

/// Flat, unvalidated aircraft record as written in YAML.
#[derive(Debug, Deserialize)]
pub struct RawAircraftSpec {
    /// Aircraft identification
    pub name: String,

    /// Speeds [kt]
    pub max_speed: f64,
    pub cruise_speed: f64,
    pub stall_speed: f64,

    /// Envelope
    pub max_altitude: f64,
    #[serde(default)]
    pub climb_rate: f64,
    #[serde(default)]
    pub turn_rate: f64,

    /// Fuel [gal]
    #[serde(default)]
    pub fuel_capacity: f64,

    /// Geometry and mass
    #[serde(default)]
    pub wingspan: f64,
    #[serde(default)]
    pub length: f64,
    #[serde(default)]
    pub weight: f64,

    /// Field performance [ft]
    #[serde(default)]
    pub takeoff_distance: f64,
    #[serde(default)]
    pub landing_distance: f64,

    #[serde(default = "default_color")]
    pub color: [u8; 3],
}

fn default_color() -> [u8; 3] {
    [200, 200, 200]
}

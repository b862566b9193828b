use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::components::aircraft::config::{ConfigError, RawAircraftFile, RawAircraftSpec};

/// Performance data for one aircraft model.
///
/// Specs are created once when the catalog is built and never mutated; active
/// flights hold a shared handle to the spec of the model they fly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftSpec {
    /// Display name, also the catalog key.
    pub name: String,
    /// Maximum speed [kt]
    pub max_speed: f64,
    /// Cruise speed [kt]
    pub cruise_speed: f64,
    /// Service ceiling [ft]
    pub max_altitude: f64,
    /// Fuel capacity [gal]
    pub fuel_capacity: f64,
    /// Wingspan [ft]
    pub wingspan: f64,
    /// Fuselage length [ft]
    pub length: f64,
    /// Gross weight [lb]
    pub weight: f64,
    /// Climb rate [ft/min]
    pub climb_rate: f64,
    /// Turn rate [deg/s]
    pub turn_rate: f64,
    /// Stall speed [kt]
    pub stall_speed: f64,
    /// Takeoff distance [ft]
    pub takeoff_distance: f64,
    /// Landing distance [ft]
    pub landing_distance: f64,
    /// RGB colour used when drawing the aircraft.
    pub color: [u8; 3],
}

impl AircraftSpec {
    pub fn boeing_737() -> Self {
        Self {
            name: "Boeing 737-800".to_string(),
            max_speed: 544.0,
            cruise_speed: 453.0,
            max_altitude: 41000.0,
            fuel_capacity: 6875.0,
            wingspan: 112.7,
            length: 129.5,
            weight: 174200.0,
            climb_rate: 2500.0,
            turn_rate: 3.0,
            stall_speed: 132.0,
            takeoff_distance: 7200.0,
            landing_distance: 4800.0,
            color: [0, 100, 200],
        }
    }

    pub fn airbus_a320() -> Self {
        Self {
            name: "Airbus A320".to_string(),
            max_speed: 537.0,
            cruise_speed: 447.0,
            max_altitude: 39800.0,
            fuel_capacity: 6400.0,
            wingspan: 117.5,
            length: 123.3,
            weight: 166400.0,
            climb_rate: 2400.0,
            turn_rate: 3.2,
            stall_speed: 127.0,
            takeoff_distance: 6900.0,
            landing_distance: 4600.0,
            color: [150, 0, 0],
        }
    }

    pub fn boeing_777() -> Self {
        Self {
            name: "Boeing 777-300ER".to_string(),
            max_speed: 590.0,
            cruise_speed: 490.0,
            max_altitude: 43100.0,
            fuel_capacity: 45220.0,
            wingspan: 212.7,
            length: 242.4,
            weight: 775000.0,
            climb_rate: 2000.0,
            turn_rate: 2.0,
            stall_speed: 156.0,
            takeoff_distance: 10400.0,
            landing_distance: 6200.0,
            color: [100, 50, 150],
        }
    }

    pub fn cessna_172() -> Self {
        Self {
            name: "Cessna 172".to_string(),
            max_speed: 163.0,
            cruise_speed: 122.0,
            max_altitude: 14200.0,
            fuel_capacity: 56.0,
            wingspan: 36.0,
            length: 27.2,
            weight: 2550.0,
            climb_rate: 720.0,
            turn_rate: 15.0,
            stall_speed: 47.0,
            takeoff_distance: 960.0,
            landing_distance: 1335.0,
            color: [255, 255, 0],
        }
    }

    pub fn embraer_e190() -> Self {
        Self {
            name: "Embraer E190".to_string(),
            max_speed: 487.0,
            cruise_speed: 459.0,
            max_altitude: 41000.0,
            fuel_capacity: 3284.0,
            wingspan: 94.3,
            length: 118.99,
            weight: 114640.0,
            climb_rate: 2800.0,
            turn_rate: 4.0,
            stall_speed: 108.0,
            takeoff_distance: 4685.0,
            landing_distance: 4199.0,
            color: [0, 150, 100],
        }
    }

    /// Airliners get engine pods when drawn.
    pub fn is_jet_transport(&self) -> bool {
        self.max_speed > 400.0
    }

    /// Loads every aircraft listed in a YAML file.
    ///
    /// # Arguments
    /// * `path` - Path to a YAML document with a top level `aircraft` list.
    ///
    /// # Returns
    /// The validated specs in file order, or the first read, parse or validation error.
    pub fn load_all<P: AsRef<Path>>(path: P) -> Result<Vec<Self>, ConfigError> {
        let file_contents = std::fs::read_to_string(path)?;
        let raw: RawAircraftFile = serde_yaml::from_str(&file_contents)?;
        raw.aircraft.into_iter().map(Self::from_raw).collect()
    }

    /// Converts a raw record into a spec, rejecting values the integrator cannot use.
    pub fn from_raw(raw: RawAircraftSpec) -> Result<Self, ConfigError> {
        if raw.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "aircraft name must not be empty".to_string(),
            ));
        }
        for (field, value) in [
            ("max_speed", raw.max_speed),
            ("cruise_speed", raw.cruise_speed),
            ("stall_speed", raw.stall_speed),
            ("max_altitude", raw.max_altitude),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{}: {} must be positive, got {}",
                    raw.name, field, value
                )));
            }
        }
        if raw.fuel_capacity < 0.0 || raw.turn_rate < 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "{}: fuel_capacity and turn_rate must not be negative",
                raw.name
            )));
        }

        Ok(Self {
            name: raw.name,
            max_speed: raw.max_speed,
            cruise_speed: raw.cruise_speed,
            max_altitude: raw.max_altitude,
            fuel_capacity: raw.fuel_capacity,
            wingspan: raw.wingspan,
            length: raw.length,
            weight: raw.weight,
            climb_rate: raw.climb_rate,
            turn_rate: raw.turn_rate,
            stall_speed: raw.stall_speed,
            takeoff_distance: raw.takeoff_distance,
            landing_distance: raw.landing_distance,
            color: raw.color,
        })
    }
}

/// The models that ship with the simulator, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AircraftModel {
    Boeing737,
    AirbusA320,
    Boeing777,
    Cessna172,
    EmbraerE190,
}

impl AircraftModel {
    pub const ALL: [AircraftModel; 5] = [
        AircraftModel::Boeing737,
        AircraftModel::AirbusA320,
        AircraftModel::Boeing777,
        AircraftModel::Cessna172,
        AircraftModel::EmbraerE190,
    ];

    pub fn spec(&self) -> AircraftSpec {
        match self {
            AircraftModel::Boeing737 => AircraftSpec::boeing_737(),
            AircraftModel::AirbusA320 => AircraftSpec::airbus_a320(),
            AircraftModel::Boeing777 => AircraftSpec::boeing_777(),
            AircraftModel::Cessna172 => AircraftSpec::cessna_172(),
            AircraftModel::EmbraerE190 => AircraftSpec::embraer_e190(),
        }
    }
}

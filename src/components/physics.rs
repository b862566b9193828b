use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::{AircraftState, FlightPhase};
use crate::resources::PhysicsConfig;
use crate::utils::{SEA_LEVEL_AIR_DENSITY, SPEED_OF_SOUND_KT};

/// Per-flight physics environment and the last classified flight phase.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct FlightPhysics {
    pub phase: FlightPhase,
    /// Terrain height under the aircraft [ft]
    pub ground_elevation: f64,
    /// [slug/ft³]
    pub sea_level_density: f64,
}

impl Default for FlightPhysics {
    fn default() -> Self {
        Self {
            phase: FlightPhase::Ground,
            ground_elevation: 0.0,
            sea_level_density: SEA_LEVEL_AIR_DENSITY,
        }
    }
}

impl FlightPhysics {
    pub fn new(config: &PhysicsConfig) -> Self {
        Self {
            phase: FlightPhase::Ground,
            ground_elevation: config.ground_elevation,
            sea_level_density: config.sea_level_density,
        }
    }

    /// Derived instrument values. Pure read of the aircraft state.
    pub fn get_flight_info(&self, aircraft: &AircraftState) -> FlightInfo {
        let vertical_speed = if aircraft.spec.cruise_speed > 0.0 {
            aircraft.pitch * (aircraft.speed / aircraft.spec.cruise_speed) * 1000.0
        } else {
            0.0
        };
        let mach_number = if aircraft.altitude > 30000.0 {
            aircraft.speed / SPEED_OF_SOUND_KT
        } else {
            0.0
        };

        FlightInfo {
            phase: self.phase,
            vertical_speed,
            ground_speed: aircraft.speed,
            true_airspeed: aircraft.speed,
            mach_number,
            angle_of_attack: aircraft.pitch,
            bank_angle: aircraft.roll,
        }
    }
}

/// Snapshot of the values shown on the instruments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightInfo {
    pub phase: FlightPhase,
    /// Approximate vertical speed [ft/min]
    pub vertical_speed: f64,
    /// [kt]
    pub ground_speed: f64,
    /// [kt]
    pub true_airspeed: f64,
    pub mach_number: f64,
    /// [deg]
    pub angle_of_attack: f64,
    /// [deg]
    pub bank_angle: f64,
}

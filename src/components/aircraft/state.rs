use bevy::prelude::*;
use nalgebra::Vector2;
use std::sync::Arc;

use crate::components::aircraft::AircraftSpec;
use crate::utils::{heading_vector, KNOTS_TO_WORLD_UNITS};

/// Kinematic and fuel state of the aircraft being flown.
///
/// Only the flight physics and the integration steps below mutate this
/// component; everything else reads it.
#[derive(Component, Debug, Clone)]
pub struct AircraftState {
    /// Model the aircraft was created from.
    pub spec: Arc<AircraftSpec>,
    /// Position on the world plane (y grows southward).
    pub position: Vector2<f64>,
    /// Altitude above sea level [ft]
    pub altitude: f64,
    /// Compass heading in `[0, 360)` [deg], 0 = north.
    pub heading: f64,
    /// Airspeed [kt]
    pub speed: f64,
    /// Throttle setting [%]
    pub throttle: f64,
    /// Pitch attitude [deg]
    pub pitch: f64,
    /// Bank angle [deg]
    pub roll: f64,
    /// Remaining fuel [gal]
    pub fuel: f64,
    pub gear_down: bool,
    pub engine_on: bool,
}

impl AircraftState {
    /// Creates a parked aircraft: engine off, gear down, full tanks.
    pub fn new(spec: Arc<AircraftSpec>, x: f64, y: f64, altitude: f64) -> Self {
        let fuel = spec.fuel_capacity;
        Self {
            spec,
            position: Vector2::new(x, y),
            altitude,
            heading: 0.0,
            speed: 0.0,
            throttle: 0.0,
            pitch: 0.0,
            roll: 0.0,
            fuel,
            gear_down: true,
            engine_on: false,
        }
    }

    /// Moves the aircraft along its heading.
    pub fn update_position(&mut self, dt: f64) {
        if self.speed > 0.0 {
            let world_speed = self.speed * KNOTS_TO_WORLD_UNITS;
            let (dx, dy) = heading_vector(self.heading);
            self.position.x += world_speed * dx * dt;
            self.position.y += world_speed * dy * dt;
        }
    }

    /// Pitch-driven climb while above stall speed.
    ///
    /// This climb term stacks with the lift term of the physics pipeline; both
    /// run every tick.
    pub fn update_altitude(&mut self, dt: f64) {
        if self.speed > self.spec.stall_speed {
            let speed_ratio = if self.spec.cruise_speed > 0.0 {
                self.speed / self.spec.cruise_speed
            } else {
                0.0
            };
            let climb_rate = self.pitch * 10.0 * speed_ratio;
            self.altitude += climb_rate * dt;
            self.clamp_altitude();
        }
    }

    /// Burns fuel while the engine runs. Tanks never refill.
    pub fn update_fuel(&mut self, dt: f64) {
        if self.engine_on && self.fuel > 0.0 {
            let consumption_rate = (self.throttle / 100.0) * 0.1 + 0.05; // gal/s
            self.fuel = (self.fuel - consumption_rate * dt).max(0.0);
        }
    }

    pub fn clamp_altitude(&mut self) {
        self.altitude = self.altitude.clamp(0.0, self.spec.max_altitude.max(0.0));
    }

    /// Remaining fuel as a percentage of capacity.
    pub fn fuel_percent(&self) -> f64 {
        if self.spec.fuel_capacity > 0.0 {
            self.fuel / self.spec.fuel_capacity * 100.0
        } else {
            0.0
        }
    }

    pub fn is_stall_warning(&self) -> bool {
        self.speed < self.spec.stall_speed * 1.2
    }
}

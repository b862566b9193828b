use bevy::prelude::*;
use nalgebra::Vector2;
use std::fmt;

use crate::components::AircraftState;
use crate::utils::{deg_to_rad, heading_vector};

/// View modes, cycled in declaration order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CameraMode {
    Cockpit,
    #[default]
    Chase,
    External,
    TopDown,
    Side,
}

impl CameraMode {
    pub const ALL: [CameraMode; 5] = [
        CameraMode::Cockpit,
        CameraMode::Chase,
        CameraMode::External,
        CameraMode::TopDown,
        CameraMode::Side,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CameraMode::Cockpit => "Cockpit View",
            CameraMode::Chase => "Chase Camera",
            CameraMode::External => "External View",
            CameraMode::TopDown => "Top Down",
            CameraMode::Side => "Side View",
        }
    }

    pub fn next(&self) -> CameraMode {
        let index = Self::ALL.iter().position(|mode| mode == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for CameraMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 5.0;
const COCKPIT_OFFSET: f64 = 20.0;
const SIDE_OFFSET: f64 = 150.0;
const EXTERNAL_ORBIT_RATE: f64 = 30.0; // deg/s

/// World-space camera that frames the aircraft.
///
/// Positions are on the world plane; `height` only feeds the view readout.
#[derive(Component, Debug, Clone)]
pub struct CameraComponent {
    pub mode: CameraMode,
    pub position: Vector2<f64>,
    pub target: Vector2<f64>,
    pub height: f64,
    pub zoom: f64,
    /// Pilot zoom applied on top of the per-mode zoom.
    pub zoom_scale: f64,
    /// Fraction of the remaining distance covered per 60 Hz frame.
    pub smooth_factor: f64,
    pub chase_distance: f64,
    pub chase_height: f64,
    /// Orbit angle for the external view [deg]
    pub external_angle: f64,
    pub external_distance: f64,
    pub external_height: f64,
}

impl Default for CameraComponent {
    fn default() -> Self {
        Self {
            mode: CameraMode::Chase,
            position: Vector2::zeros(),
            target: Vector2::zeros(),
            height: 100.0,
            zoom: 1.0,
            zoom_scale: 1.0,
            smooth_factor: 0.1,
            chase_distance: 150.0,
            chase_height: 50.0,
            external_angle: 0.0,
            external_distance: 200.0,
            external_height: 100.0,
        }
    }
}

impl CameraComponent {
    /// Switches to `mode` with the pilot zoom and the orbit reset.
    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
        self.zoom_scale = 1.0;
        self.reset_external_angle();
    }

    pub fn cycle_mode(&mut self) {
        self.mode = self.mode.next();
    }

    /// Jumps straight to the aircraft, used when a flight starts.
    pub fn snap_to(&mut self, aircraft: &AircraftState) {
        self.position = aircraft.position;
        self.target = aircraft.position;
    }

    pub fn update(&mut self, aircraft: &AircraftState, dt: f64) {
        // Normalised so the smoothing matches a 60 Hz frame
        let smooth_speed = self.smooth_factor * dt * 60.0;

        match self.mode {
            CameraMode::Cockpit => {
                let (dx, dy) = heading_vector(aircraft.heading);
                self.target = aircraft.position + Vector2::new(dx, dy) * COCKPIT_OFFSET;
                self.approach_target(smooth_speed);
                self.set_zoom(2.0 * self.zoom_scale);
            }
            CameraMode::Chase => {
                let (dx, dy) = heading_vector(aircraft.heading);
                self.target = aircraft.position - Vector2::new(dx, dy) * self.chase_distance;
                self.approach_target(smooth_speed);
                self.height = aircraft.altitude + self.chase_height;
                self.set_zoom(1.5 * self.zoom_scale);
            }
            CameraMode::External => {
                self.external_angle += EXTERNAL_ORBIT_RATE * dt;
                if self.external_angle >= 360.0 {
                    self.external_angle -= 360.0;
                }
                let angle = deg_to_rad(self.external_angle);
                self.target = aircraft.position
                    + Vector2::new(angle.cos(), angle.sin()) * self.external_distance;
                // Per-frame factor, faster than the other views
                self.approach_target(self.smooth_factor * 2.0);
                self.height = aircraft.altitude + self.external_height;
                self.set_zoom(1.0 * self.zoom_scale);
            }
            CameraMode::TopDown => {
                self.target = aircraft.position;
                self.approach_target(smooth_speed);
                self.height = aircraft.altitude + 500.0;
                self.set_zoom(0.5 * self.zoom_scale);
            }
            CameraMode::Side => {
                // Offset uses the raw heading, not the north-up screen angle
                let side_angle = deg_to_rad(aircraft.heading) + std::f64::consts::FRAC_PI_2;
                self.target = aircraft.position
                    + Vector2::new(side_angle.cos(), side_angle.sin()) * SIDE_OFFSET;
                self.approach_target(smooth_speed);
                self.height = aircraft.altitude + 50.0;
                self.set_zoom(1.2 * self.zoom_scale);
            }
        }
    }

    fn approach_target(&mut self, factor: f64) {
        self.position += (self.target - self.position) * factor;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self, factor: f64) {
        self.scale_zoom(factor);
    }

    pub fn zoom_out(&mut self, factor: f64) {
        self.scale_zoom(1.0 / factor);
    }

    fn scale_zoom(&mut self, factor: f64) {
        self.zoom_scale = (self.zoom_scale * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.set_zoom(self.zoom * factor);
    }

    pub fn reset_external_angle(&mut self) {
        self.external_angle = 0.0;
    }

    /// Label/value rows describing the current view.
    pub fn view_info(&self, aircraft: &AircraftState) -> Vec<(&'static str, String)> {
        let mut info = vec![
            ("Mode", self.mode.name().to_string()),
            ("Zoom", format!("{:.1}x", self.zoom)),
            ("Altitude", format!("{:.0} ft", self.height)),
        ];

        match self.mode {
            CameraMode::Chase => info.push(("Distance", format!("{:.0} ft", self.chase_distance))),
            CameraMode::External => {
                info.push(("Angle", format!("{:.0}°", self.external_angle)))
            }
            CameraMode::Cockpit => {
                let offset = (aircraft.position - self.position).norm();
                info.push(("Offset", format!("{:.0} ft", offset)));
            }
            CameraMode::TopDown | CameraMode::Side => {}
        }

        info
    }
}

mod aircraft;
mod airport;

pub use aircraft::{
    aircraft_overlay_system, aircraft_render_system, spawn_aircraft_sprite, AircraftSilhouette,
};
pub use airport::{route_render_system, spawn_flight_scenery};

use bevy::prelude::*;
use nalgebra::Vector2;

use crate::utils::deg_to_rad;

pub const AIRPORT_LAYER: f32 = 1.0;
pub const AIRCRAFT_LAYER: f32 = 10.0;
pub const LABEL_LAYER: f32 = 20.0;

/// World plane to render plane. The world's y axis points south.
pub fn world_to_render(position: &Vector2<f64>, z: f32) -> Vec3 {
    Vec3::new(position.x as f32, -position.y as f32, z)
}

/// Rotation that turns local +y onto a compass heading.
pub fn heading_rotation(heading: f64) -> Quat {
    Quat::from_rotation_z(-deg_to_rad(heading) as f32)
}

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::SEA_LEVEL_AIR_DENSITY;

/// Environment and stepping parameters for the flight model.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// [slug/ft³]
    pub sea_level_density: f64,
    /// [ft]
    pub ground_elevation: f64,
    /// Fixed update rate [Hz]
    pub fixed_hz: f64,
    /// Most virtual time a single frame may add [s]; longer frames are cut
    /// short instead of replayed as extra ticks. `None` removes the limit.
    pub max_frame_dt: Option<f64>,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            sea_level_density: SEA_LEVEL_AIR_DENSITY,
            ground_elevation: 0.0,
            fixed_hz: 60.0,
            max_frame_dt: Some(0.25),
        }
    }
}

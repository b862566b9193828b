use bevy::prelude::*;

use crate::resources::ActiveFlight;
use crate::systems::{
    aircraft_overlay_system, aircraft_render_system, route_render_system, spawn_aircraft_sprite,
    spawn_flight_scenery,
};

/// Draws airports, the route and the aircraft.
pub struct SceneryPlugin;

impl Plugin for SceneryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_flight_scenery.run_if(resource_added::<ActiveFlight>),
                spawn_aircraft_sprite,
                aircraft_render_system,
                (route_render_system, aircraft_overlay_system)
                    .run_if(resource_exists::<ActiveFlight>),
            )
                .chain(),
        );
    }
}

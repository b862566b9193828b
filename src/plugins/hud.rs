use bevy::prelude::*;

use crate::resources::ActiveFlight;
use crate::systems::{hud_update_system, spawn_hud_panels};

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_hud_panels.run_if(resource_added::<ActiveFlight>),
                hud_update_system.run_if(resource_exists::<ActiveFlight>),
            )
                .chain(),
        );
    }
}

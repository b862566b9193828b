mod aircraft;
mod camera;
mod events;
mod hud;
mod menu;
mod render;
mod staging;

pub use aircraft::FlightPlugin;
pub use camera::CameraPlugin;
pub use events::{end_flight_system, start_flight_system, StartFlight};
pub use hud::HudPlugin;
pub use menu::MenuPlugin;
pub use render::SceneryPlugin;
pub use staging::{log_state_transitions, FlightSet, SimState};

use bevy::prelude::*;

use crate::resources::{AircraftCatalog, SimConfig};

/// Everything the windowed simulator needs on top of `DefaultPlugins`.
pub struct SimulatorPlugin {
    config: SimConfig,
    catalog: AircraftCatalog,
}

impl SimulatorPlugin {
    pub fn new(config: SimConfig, catalog: AircraftCatalog) -> Self {
        Self { config, catalog }
    }
}

impl Plugin for SimulatorPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            FlightPlugin::new(self.config.clone(), self.catalog.clone()),
            CameraPlugin,
            SceneryPlugin,
            HudPlugin,
            MenuPlugin,
        ));
    }
}

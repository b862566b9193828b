use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::path::PathBuf;

use simflight::{
    plugins::SimulatorPlugin,
    resources::{AircraftCatalog, SimConfig},
    utils::SimError,
};

fn main() -> Result<(), SimError> {
    let config = SimConfig::resolve(std::env::args().nth(1).map(PathBuf::from))?;
    let catalog = AircraftCatalog::from_config(&config)?;

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: config.window.title.clone(),
                resolution: WindowResolution::new(config.window.width, config.window.height),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(SimulatorPlugin::new(config, catalog))
        .run();

    Ok(())
}

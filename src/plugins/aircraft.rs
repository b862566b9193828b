use bevy::prelude::*;

use crate::plugins::{
    end_flight_system, log_state_transitions, start_flight_system, FlightSet, SimState,
    StartFlight,
};
use crate::resources::{
    AircraftCatalog, AirportCatalog, HudSettings, MenuSelection, PhysicsConfig, RouteManager,
    SimConfig,
};
use crate::systems::{
    flight_keys_system, flight_physics_system, frame_limit_system, keyboard_controls_system,
    long_frame_warning_system,
};

/// Flight model, controls and the flight lifecycle. Needs no window.
pub struct FlightPlugin {
    config: SimConfig,
    catalog: AircraftCatalog,
}

impl Default for FlightPlugin {
    fn default() -> Self {
        Self::new(SimConfig::default(), AircraftCatalog::builtin())
    }
}

impl FlightPlugin {
    pub fn new(config: SimConfig, catalog: AircraftCatalog) -> Self {
        Self { config, catalog }
    }
}

impl Plugin for FlightPlugin {
    fn build(&self, app: &mut App) {
        let airports = AirportCatalog::builtin();
        let routes = RouteManager::new(&airports);
        info!(
            "Catalog: {} aircraft, {} airports, {} routes",
            self.catalog.len(),
            airports.len(),
            routes.len()
        );

        app.init_state::<SimState>()
            .add_event::<StartFlight>()
            .insert_resource(self.config.physics.clone())
            .insert_resource(self.catalog.clone())
            .insert_resource(airports)
            .insert_resource(routes)
            .init_resource::<MenuSelection>()
            .init_resource::<HudSettings>()
            .insert_resource(Time::<Fixed>::from_hz(self.config.physics.fixed_hz));

        app.configure_sets(
            FixedUpdate,
            (FlightSet::Input, FlightSet::Physics, FlightSet::Camera).chain(),
        )
        .add_systems(
            FixedUpdate,
            (
                keyboard_controls_system.in_set(FlightSet::Input),
                flight_physics_system.in_set(FlightSet::Physics),
            )
                .run_if(in_state(SimState::Flight)),
        )
        .add_systems(
            PreUpdate,
            frame_limit_system.run_if(resource_changed::<PhysicsConfig>),
        )
        .add_systems(
            Update,
            (
                long_frame_warning_system,
                start_flight_system,
                flight_keys_system.run_if(in_state(SimState::Flight)),
                log_state_transitions,
            ),
        )
        .add_systems(OnEnter(SimState::MainMenu), end_flight_system);
    }
}

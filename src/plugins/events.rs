use bevy::prelude::*;

use crate::components::{
    CameraComponent, CameraMode, FlightControls, FlightEntity, FlightPhysics, PlayerController,
};
use crate::plugins::SimState;
use crate::resources::{
    prepare_flight, ActiveFlight, AircraftCatalog, AirportCatalog, MenuSelection, PhysicsConfig,
    RouteManager,
};

/// Request to begin a flight with the given menu selection.
#[derive(Event, Debug, Clone, Copy)]
pub struct StartFlight(pub MenuSelection);

/// Spawns the aircraft for the latest start request and switches to flight.
#[allow(clippy::too_many_arguments)]
pub fn start_flight_system(
    mut commands: Commands,
    mut requests: EventReader<StartFlight>,
    aircraft: Res<AircraftCatalog>,
    airports: Res<AirportCatalog>,
    routes: Res<RouteManager>,
    physics_config: Res<PhysicsConfig>,
    existing: Query<Entity, With<FlightEntity>>,
    mut cameras: Query<&mut CameraComponent>,
    mut next_state: ResMut<NextState<SimState>>,
) {
    let Some(StartFlight(selection)) = requests.read().last().copied() else {
        return;
    };

    let (state, flight) = match prepare_flight(&selection, &aircraft, &airports, &routes) {
        Ok(prepared) => prepared,
        Err(e) => {
            error!("Cannot start flight: {}", e);
            return;
        }
    };

    for entity in existing.iter() {
        commands.entity(entity).despawn_recursive();
    }

    info!(
        "Starting flight {} -> {} in a {} at ({:.0}, {:.0}), heading {:.0}",
        flight.departure.code,
        flight.destination.code,
        state.spec.name,
        state.position.x,
        state.position.y,
        state.heading
    );

    for mut camera in cameras.iter_mut() {
        camera.set_mode(CameraMode::Chase);
        camera.snap_to(&state);
    }

    commands.spawn((
        Name::new(state.spec.name.clone()),
        state,
        FlightControls::new(),
        FlightPhysics::new(&physics_config),
        PlayerController::new(),
        FlightEntity,
    ));
    // Re-adding marks the resource as new for scenery and HUD setup
    commands.remove_resource::<ActiveFlight>();
    commands.insert_resource(flight);
    next_state.set(SimState::Flight);
}

/// Clears everything belonging to the last flight.
pub fn end_flight_system(mut commands: Commands, query: Query<Entity, With<FlightEntity>>) {
    let mut count = 0;
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
        count += 1;
    }
    if count > 0 {
        info!("Flight ended, despawned {} entities", count);
    }
    commands.remove_resource::<ActiveFlight>();
}

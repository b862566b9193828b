use bevy::prelude::*;

/// Ordered stages of one fixed flight tick.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum FlightSet {
    Input,
    Physics,
    Camera,
}

/// Top level screen flow of the simulator.
#[derive(States, Debug, Clone, Eq, PartialEq, Hash, Default)]
pub enum SimState {
    #[default]
    MainMenu,
    AircraftSelect,
    AirportSelect,
    Flight,
    Paused,
}

/// Logs every screen change.
pub fn log_state_transitions(mut transitions: EventReader<StateTransitionEvent<SimState>>) {
    for transition in transitions.read() {
        info!("State: {:?} -> {:?}", transition.exited, transition.entered);
    }
}

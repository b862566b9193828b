use bevy::prelude::*;

use crate::plugins::SimState;
use crate::systems::{
    aircraft_select_input_system, airport_select_input_system, main_menu_input_system,
    menu_text_system, paused_input_system, spawn_menu_text,
};

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.enable_state_scoped_entities::<SimState>();

        for state in [
            SimState::MainMenu,
            SimState::AircraftSelect,
            SimState::AirportSelect,
            SimState::Paused,
        ] {
            app.add_systems(OnEnter(state), spawn_menu_text);
        }

        app.add_systems(
            Update,
            (
                main_menu_input_system.run_if(in_state(SimState::MainMenu)),
                aircraft_select_input_system.run_if(in_state(SimState::AircraftSelect)),
                airport_select_input_system.run_if(in_state(SimState::AirportSelect)),
                paused_input_system.run_if(in_state(SimState::Paused)),
                menu_text_system,
            ),
        );
    }
}

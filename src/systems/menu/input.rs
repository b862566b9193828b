use bevy::app::AppExit;
use bevy::prelude::*;

use crate::plugins::{SimState, StartFlight};
use crate::resources::{AircraftCatalog, AirportCatalog, MenuSelection};

pub fn main_menu_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<SimState>>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Exit requested from main menu");
        exit.send(AppExit::Success);
    } else if keyboard.any_just_pressed([KeyCode::Enter, KeyCode::Space]) {
        next_state.set(SimState::AircraftSelect);
    }
}

pub fn aircraft_select_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    catalog: Res<AircraftCatalog>,
    mut selection: ResMut<MenuSelection>,
    mut next_state: ResMut<NextState<SimState>>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
        return;
    }
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        selection.cycle_aircraft(-1, catalog.len());
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        selection.cycle_aircraft(1, catalog.len());
    }
    if keyboard.just_pressed(KeyCode::Enter) {
        next_state.set(SimState::AirportSelect);
    }
}

pub fn airport_select_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    airports: Res<AirportCatalog>,
    mut selection: ResMut<MenuSelection>,
    mut start: EventWriter<StartFlight>,
    mut exit: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
        return;
    }
    let count = airports.len();
    if keyboard.just_pressed(KeyCode::ArrowUp) {
        selection.cycle_departure(-1, count);
    }
    if keyboard.just_pressed(KeyCode::ArrowDown) {
        selection.cycle_departure(1, count);
    }
    if keyboard.just_pressed(KeyCode::ArrowLeft) {
        selection.cycle_destination(-1, count);
    }
    if keyboard.just_pressed(KeyCode::ArrowRight) {
        selection.cycle_destination(1, count);
    }
    if keyboard.just_pressed(KeyCode::Enter) {
        start.send(StartFlight(*selection));
    }
}

pub fn paused_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_state: ResMut<NextState<SimState>>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        info!("Flight resumed");
        next_state.set(SimState::Flight);
    } else if keyboard.just_pressed(KeyCode::Backspace) {
        info!("Returning to main menu");
        next_state.set(SimState::MainMenu);
    }
}

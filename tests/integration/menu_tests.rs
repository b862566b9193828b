use approx::assert_relative_eq;
use bevy::prelude::*;
use pretty_assertions::assert_eq;
use simflight::{
    components::AircraftState,
    plugins::SimState,
    resources::{ActiveFlight, MenuSelection},
};

use crate::common::TestAppBuilder;

#[test]
fn test_menu_walkthrough_starts_flight() {
    let mut app = TestAppBuilder::new().with_menus().build();
    assert_eq!(app.sim_state(), SimState::MainMenu);

    app.tap(KeyCode::Enter);
    app.run_frame();
    assert_eq!(app.sim_state(), SimState::AircraftSelect);

    for _ in 0..3 {
        app.tap(KeyCode::ArrowDown);
    }
    app.tap(KeyCode::Enter);
    app.run_frame();
    assert_eq!(app.sim_state(), SimState::AirportSelect);

    app.tap(KeyCode::ArrowDown);
    app.tap(KeyCode::ArrowLeft);
    assert_eq!(
        *app.get_state::<MenuSelection>().unwrap(),
        MenuSelection {
            aircraft: 3,
            departure: 1,
            destination: 4,
        }
    );

    app.tap(KeyCode::Enter);
    app.run_steps(2);
    assert_eq!(app.sim_state(), SimState::Flight);

    let aircraft = app.query_single::<AircraftState>().unwrap();
    assert_eq!(aircraft.spec.name, "Cessna 172");
    assert_relative_eq!(aircraft.position.x, -3000.0);
    assert_relative_eq!(aircraft.position.y, 710.0);

    let flight = app.get_state::<ActiveFlight>().unwrap();
    assert_eq!(flight.departure.code, "LAX");
    assert_eq!(flight.destination.code, "NRT");
}

#[test]
fn test_aircraft_list_wraps() {
    let mut app = TestAppBuilder::new().with_menus().build();
    app.tap(KeyCode::Enter);
    app.run_frame();

    app.tap(KeyCode::ArrowUp);
    assert_eq!(app.get_state::<MenuSelection>().unwrap().aircraft, 4);
    app.tap(KeyCode::ArrowDown);
    assert_eq!(app.get_state::<MenuSelection>().unwrap().aircraft, 0);
}

#[test]
fn test_escape_resumes_from_pause() {
    let mut app = TestAppBuilder::new().with_menus().build();
    app.tap(KeyCode::Enter);
    app.tap(KeyCode::Enter);
    app.tap(KeyCode::Enter);
    app.run_steps(2);
    assert_eq!(app.sim_state(), SimState::Flight);

    app.tap(KeyCode::Escape);
    app.run_frame();
    assert_eq!(app.sim_state(), SimState::Paused);

    app.tap(KeyCode::Escape);
    app.run_frame();
    assert_eq!(app.sim_state(), SimState::Flight);
    assert_eq!(app.count::<AircraftState>(), 1);
}

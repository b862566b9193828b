use approx::assert_relative_eq;
use bevy::prelude::*;
use pretty_assertions::assert_eq;
use simflight::{
    components::{AircraftState, CameraComponent, CameraMode, FlightEntity},
    plugins::SimState,
    resources::{ActiveFlight, HudSettings, MenuSelection},
};

use crate::common::{jfk_to_lhr, TestAppBuilder};

#[test]
fn test_start_flight_lines_up_on_primary_runway() {
    let mut app = TestAppBuilder::new().build();
    assert_eq!(app.sim_state(), SimState::MainMenu);

    app.start_flight(jfk_to_lhr());
    assert_eq!(app.sim_state(), SimState::Flight);
    assert_eq!(app.count::<AircraftState>(), 1);

    let aircraft = app.query_single::<AircraftState>().unwrap();
    assert_eq!(aircraft.spec.name, "Boeing 737-800");
    assert_relative_eq!(aircraft.position.x, -100.0);
    assert_relative_eq!(aircraft.position.y, 0.0);
    assert_relative_eq!(aircraft.heading, 40.0);
    assert!(aircraft.altitude <= 13.0);

    let flight = app.get_state::<ActiveFlight>().expect("flight plan stored");
    assert_eq!(flight.departure.code, "JFK");
    assert_eq!(flight.destination.code, "LHR");
    let route = flight.route.as_ref().expect("route between distinct airports");
    assert!(route.distance > 0.0);
}

#[test]
fn test_same_airport_destination_is_moved_on() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight(MenuSelection {
        aircraft: 1,
        departure: 2,
        destination: 2,
    });

    let flight = app.get_state::<ActiveFlight>().unwrap();
    assert_eq!(flight.departure.code, "LHR");
    assert_eq!(flight.destination.code, "CDG");
}

#[test]
fn test_invalid_selection_stays_in_menu() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight(MenuSelection {
        aircraft: 99,
        ..Default::default()
    });

    assert_eq!(app.sim_state(), SimState::MainMenu);
    assert_eq!(app.count::<AircraftState>(), 0);
    assert!(app.get_state::<ActiveFlight>().is_none());
}

#[test]
fn test_restart_replaces_previous_aircraft() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight(jfk_to_lhr());
    app.run_steps(10);
    app.start_flight(MenuSelection {
        aircraft: 2,
        departure: 3,
        destination: 0,
    });

    assert_eq!(app.count::<FlightEntity>(), 1);
    assert_eq!(app.get_state::<ActiveFlight>().unwrap().departure.code, "CDG");
}

#[test]
fn test_camera_resets_and_cycles() {
    let mut app = TestAppBuilder::new().build();
    let mut camera = CameraComponent::default();
    camera.set_mode(CameraMode::TopDown);
    app.app.world_mut().spawn(camera);

    app.start_flight(jfk_to_lhr());
    assert_eq!(app.query_single::<CameraComponent>().unwrap().mode, CameraMode::Chase);

    app.tap(KeyCode::KeyC);
    assert_eq!(app.query_single::<CameraComponent>().unwrap().mode, CameraMode::External);

    for _ in 0..4 {
        app.tap(KeyCode::KeyC);
    }
    assert_eq!(app.query_single::<CameraComponent>().unwrap().mode, CameraMode::Chase);
}

#[test]
fn test_zoom_keys_scale_view() {
    let mut app = TestAppBuilder::new().build();
    app.app.world_mut().spawn(CameraComponent::default());
    app.start_flight(jfk_to_lhr());

    app.tap(KeyCode::Equal);
    app.tap(KeyCode::NumpadAdd);
    let camera = app.query_single::<CameraComponent>().unwrap();
    assert_relative_eq!(camera.zoom_scale, 1.44, epsilon = 1e-9);
    assert_relative_eq!(camera.zoom, 1.44, epsilon = 1e-9);

    app.tap(KeyCode::Minus);
    assert_relative_eq!(
        app.query_single::<CameraComponent>().unwrap().zoom_scale,
        1.2,
        epsilon = 1e-9
    );

    // A new flight starts from the chase view's own zoom
    app.start_flight(jfk_to_lhr());
    assert_eq!(app.query_single::<CameraComponent>().unwrap().zoom_scale, 1.0);
}

#[test]
fn test_hud_toggles() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight(jfk_to_lhr());

    app.tap(KeyCode::KeyH);
    app.tap(KeyCode::KeyN);
    let hud = *app.get_state::<HudSettings>().unwrap();
    assert!(!hud.show_hud);
    assert!(hud.show_instruments);
    assert!(!hud.show_navigation);

    app.tap(KeyCode::KeyH);
    assert!(app.get_state::<HudSettings>().unwrap().show_hud);
}

#[test]
fn test_return_to_menu_clears_flight() {
    let mut app = TestAppBuilder::new().with_menus().build();
    app.start_flight(jfk_to_lhr());
    app.run_steps(5);

    app.tap(KeyCode::Escape);
    app.run_frame();
    assert_eq!(app.sim_state(), SimState::Paused);
    assert_eq!(app.count::<AircraftState>(), 1);

    app.tap(KeyCode::Backspace);
    app.run_frame();
    assert_eq!(app.sim_state(), SimState::MainMenu);
    assert_eq!(app.count::<AircraftState>(), 0);
    assert!(app.get_state::<ActiveFlight>().is_none());
}

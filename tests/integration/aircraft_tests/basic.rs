use approx::assert_relative_eq;
use bevy::prelude::*;
use simflight::{
    components::{AircraftState, FlightControls, FlightPhase, FlightPhysics, PlayerController},
    plugins::SimState,
    resources::PhysicsConfig,
};

use crate::common::{
    assert_aircraft_state_valid, assert_controls_valid, cessna_from_lax, jfk_to_lhr,
    TestAppBuilder,
};

#[test]
fn test_parked_aircraft_settles_on_ground() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight(jfk_to_lhr());
    app.run_steps(120);

    let aircraft = app.query_single::<AircraftState>().expect("aircraft spawned");
    assert_aircraft_state_valid(aircraft);
    // Airport elevation sits above the flat ground plane
    assert_eq!(aircraft.altitude, 0.0);
    assert_eq!(aircraft.speed, 0.0);
    assert!(!aircraft.engine_on);
    assert_eq!(app.query_single::<FlightPhysics>().unwrap().phase, FlightPhase::Ground);
}

#[test]
fn test_takeoff_roll_with_throttle() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight(cessna_from_lax());
    let start = app.query_single::<AircraftState>().unwrap().position;

    app.hold(KeyCode::KeyR);
    app.run_steps(180);

    let controls = app.query_single::<FlightControls>().unwrap();
    assert_controls_valid(controls);
    assert_relative_eq!(controls.throttle_input, 1.0);

    let aircraft = app.query_single::<AircraftState>().unwrap();
    assert_aircraft_state_valid(aircraft);
    assert!(aircraft.engine_on);
    assert_eq!(aircraft.throttle, 100.0);
    assert!(aircraft.speed > 10.0, "speed {}", aircraft.speed);
    assert!(aircraft.fuel < aircraft.spec.fuel_capacity);

    // Runway 07L points east-north-east: x grows, y (south) shrinks
    assert!(aircraft.position.x > start.x);
    assert!(aircraft.position.y < start.y);
    assert_relative_eq!(aircraft.heading, 70.0);
}

#[test]
fn test_throttle_holds_after_release() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight(jfk_to_lhr());

    app.hold(KeyCode::KeyR);
    app.run_steps(30);
    app.release(KeyCode::KeyR);
    let throttle = app.query_single::<FlightControls>().unwrap().throttle_input;
    assert!(throttle > 0.0);

    app.run_steps(60);
    assert_eq!(app.query_single::<FlightControls>().unwrap().throttle_input, throttle);
}

#[test]
fn test_rudder_steers_on_ground() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight(jfk_to_lhr());

    app.hold(KeyCode::KeyD);
    app.run_steps(60);
    app.release(KeyCode::KeyD);

    let aircraft = app.query_single::<AircraftState>().unwrap();
    assert_aircraft_state_valid(aircraft);
    // D is negative yaw: heading winds back from 40
    assert!(aircraft.heading < 40.0, "heading {}", aircraft.heading);
}

#[test]
fn test_disabled_controller_ignores_keys() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight(jfk_to_lhr());
    *app.query_single_mut::<PlayerController>().unwrap() = PlayerController::disabled();

    app.hold(KeyCode::KeyR);
    app.hold(KeyCode::KeyW);
    app.run_steps(30);

    let controls = app.query_single::<FlightControls>().unwrap();
    assert_eq!(controls.throttle_input, 0.0);
    assert_eq!(controls.pitch_input, 0.0);
}

#[test]
fn test_gear_toggle_key() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight(jfk_to_lhr());
    app.run_steps(5);
    // Controls start with the gear lever up
    assert!(!app.query_single::<AircraftState>().unwrap().gear_down);

    app.tap(KeyCode::Space);
    app.run_steps(5);
    assert!(app.query_single::<FlightControls>().unwrap().gear_toggle);
    assert!(app.query_single::<AircraftState>().unwrap().gear_down);

    app.tap(KeyCode::KeyP);
    assert!(app.query_single::<FlightControls>().unwrap().autopilot);
}

#[test]
fn test_pause_freezes_physics() {
    let mut app = TestAppBuilder::new().build();
    app.start_flight(cessna_from_lax());
    app.hold(KeyCode::KeyR);
    app.run_steps(60);
    app.release(KeyCode::KeyR);

    app.tap(KeyCode::Escape);
    app.run_frame();
    assert_eq!(app.sim_state(), SimState::Paused);

    let paused = app.query_single::<AircraftState>().unwrap().clone();
    app.hold(KeyCode::KeyW);
    app.run_steps(60);
    app.release(KeyCode::KeyW);

    let aircraft = app.query_single::<AircraftState>().unwrap();
    assert_eq!(aircraft.position, paused.position);
    assert_eq!(aircraft.speed, paused.speed);
    assert_eq!(app.query_single::<FlightControls>().unwrap().pitch_input, 0.0);
}

#[test]
fn test_physics_config_reaches_flight() {
    let config = PhysicsConfig {
        sea_level_density: 0.0012,
        max_frame_dt: None,
        ..Default::default()
    };
    let mut app = TestAppBuilder::new().with_physics(config.clone()).build();
    app.start_flight(cessna_from_lax());

    let physics = app.query_single::<FlightPhysics>().unwrap();
    assert_eq!(physics.sea_level_density, 0.0012);
    assert_eq!(physics.ground_elevation, 0.0);
    assert_eq!(app.get_state::<PhysicsConfig>(), Some(&config));
}

#[test]
fn test_long_frame_is_cut_to_limit() {
    let config = PhysicsConfig {
        max_frame_dt: Some(0.1),
        ..Default::default()
    };
    let mut app = TestAppBuilder::new().with_physics(config).build();
    app.start_flight(cessna_from_lax());
    {
        let mut aircraft = app.query_single_mut::<AircraftState>().unwrap();
        aircraft.altitude = 3000.0;
        aircraft.speed = 100.0;
    }
    let start = app.query_single::<AircraftState>().unwrap().position;

    app.set_frame_time(2.0);
    app.run_frame();

    let virtual_dt = app.app.world().resource::<Time<Virtual>>().delta_secs_f64();
    assert_relative_eq!(virtual_dt, 0.1, epsilon = 1e-6);

    // 0.1 world units per knot-second, at most one tick of leftover time
    let moved = (app.query_single::<AircraftState>().unwrap().position - start).norm();
    assert!(moved > 100.0 * 0.1 * 0.08, "aircraft kept flying: {}", moved);
    assert!(moved < 100.0 * 0.1 * (0.1 + 1.0 / 60.0) + 1e-6, "long frame replayed: {}", moved);
}

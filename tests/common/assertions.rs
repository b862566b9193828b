use simflight::components::{AircraftState, FlightControls};
use simflight::systems::physics::{MAX_PITCH, MAX_ROLL};

/// Assert that the aircraft is inside its flight envelope
#[track_caller]
pub fn assert_aircraft_state_valid(aircraft: &AircraftState) {
    assert!(aircraft.position.x.is_finite(), "Position x is not finite");
    assert!(aircraft.position.y.is_finite(), "Position y is not finite");
    assert!(aircraft.speed.is_finite() && aircraft.speed >= 0.0, "Invalid speed {}", aircraft.speed);
    assert!(
        (0.0..=aircraft.spec.max_altitude).contains(&aircraft.altitude),
        "Altitude {} outside envelope",
        aircraft.altitude
    );
    assert!((-MAX_PITCH..=MAX_PITCH).contains(&aircraft.pitch), "Pitch {}", aircraft.pitch);
    assert!((-MAX_ROLL..=MAX_ROLL).contains(&aircraft.roll), "Roll {}", aircraft.roll);
    assert!((0.0..360.0).contains(&aircraft.heading), "Heading {}", aircraft.heading);
    assert!(
        (0.0..=aircraft.spec.fuel_capacity).contains(&aircraft.fuel),
        "Fuel {}",
        aircraft.fuel
    );
}

/// Assert that every control axis is in range
#[track_caller]
pub fn assert_controls_valid(controls: &FlightControls) {
    for (name, value) in [
        ("pitch", controls.pitch_input),
        ("yaw", controls.yaw_input),
        ("roll", controls.roll_input),
    ] {
        assert!((-1.0..=1.0).contains(&value), "{} input {}", name, value);
    }
    assert!(
        (0.0..=1.0).contains(&controls.throttle_input),
        "throttle input {}",
        controls.throttle_input
    );
}

use bevy::prelude::*;
use std::time::Duration;

use crate::components::{AircraftState, FlightControls, FlightPhase, FlightPhysics};
use crate::resources::PhysicsConfig;
use crate::systems::physics::air_density;
use crate::utils::wrap_degrees;

/// Pitch attitude limit [deg]
pub const MAX_PITCH: f64 = 30.0;
/// Bank angle limit [deg]
pub const MAX_ROLL: f64 = 45.0;

const MAX_PITCH_RATE: f64 = 10.0; // deg/s at full deflection
const MAX_ROLL_RATE: f64 = 20.0; // deg/s at full deflection
const GROUND_YAW_RATE: f64 = 30.0; // deg/s, nosewheel steering
const GROUND_STEERING_ALTITUDE: f64 = 10.0; // ft
const MIN_CONTROL_EFFECTIVENESS: f64 = 0.3;
const ENGINE_ON_THRESHOLD: f64 = 0.05;
const BANK_TURN_THRESHOLD: f64 = 5.0; // deg
const STALL_NOSE_DROP_RATE: f64 = 20.0; // deg/s
const GROUND_FRICTION_DECEL: f64 = 20.0; // kt/s
const NOMINAL_FRAME_TIME: f64 = 1.0 / 60.0;

/// Caps how much virtual time one frame may add, so a long stall of the app
/// does not turn into a burst of catch-up physics ticks.
pub fn frame_limit_system(config: Res<PhysicsConfig>, mut time: ResMut<Time<Virtual>>) {
    let max_delta = config
        .max_frame_dt
        .and_then(|max_dt| Duration::try_from_secs_f64(max_dt).ok())
        .filter(|max_delta| !max_delta.is_zero())
        .unwrap_or(Duration::MAX);
    time.set_max_delta(max_delta);
    info!("Frame time limit: {:?}", config.max_frame_dt);
}

pub fn long_frame_warning_system(real: Res<Time<Real>>, config: Res<PhysicsConfig>) {
    let Some(max_dt) = config.max_frame_dt else {
        return;
    };
    let frame_dt = real.delta_secs_f64();
    if frame_dt > max_dt {
        warn!("Frame time {:.3}s clamped to {:.3}s", frame_dt, max_dt);
    }
}

/// Advances every flown aircraft by one fixed tick.
pub fn flight_physics_system(
    time: Res<Time>,
    mut query: Query<(&mut AircraftState, &mut FlightPhysics, &FlightControls)>,
) {
    let dt = time.delta_secs_f64();

    for (mut aircraft, mut physics, controls) in query.iter_mut() {
        let previous_phase = physics.phase;
        update_aircraft_physics(&mut physics, &mut aircraft, controls, dt);

        if physics.phase != previous_phase {
            info!("{}: {} -> {}", aircraft.spec.name, previous_phase, physics.phase);
        }
        debug!(
            "alt {:.1} ft, spd {:.1} kt, hdg {:.1}, pitch {:.1}, roll {:.1}, fuel {:.1}",
            aircraft.altitude,
            aircraft.speed,
            aircraft.heading,
            aircraft.pitch,
            aircraft.roll,
            aircraft.fuel
        );
    }
}

/// Runs the flight model pipeline once.
///
/// Stage order matters: every stage reads the state left by the previous one.
/// Never fails; degenerate inputs are clamped or guarded.
pub fn update_aircraft_physics(
    physics: &mut FlightPhysics,
    aircraft: &mut AircraftState,
    controls: &FlightControls,
    dt: f64,
) {
    apply_control_state(aircraft, controls);

    let air_density = air_density(aircraft.altitude, physics.sea_level_density);
    let density_ratio = if physics.sea_level_density > 0.0 {
        air_density / physics.sea_level_density
    } else {
        0.0
    };

    update_attitude(aircraft, controls, dt);
    physics.phase = FlightPhase::classify(physics.phase, aircraft);

    apply_aerodynamics(aircraft, air_density, dt);
    apply_engine_thrust(aircraft, density_ratio, dt);
    apply_gravity_and_lift(aircraft, density_ratio, dt);

    aircraft.update_position(dt);
    aircraft.update_altitude(dt);
    aircraft.clamp_altitude();
    aircraft.update_fuel(dt);

    handle_ground_collision(aircraft, physics.ground_elevation);
}

fn apply_control_state(aircraft: &mut AircraftState, controls: &FlightControls) {
    aircraft.engine_on = controls.throttle_input > ENGINE_ON_THRESHOLD;
    aircraft.throttle = controls.throttle_input * 100.0;
    aircraft.gear_down = controls.gear_toggle;
}

fn control_effectiveness(aircraft: &AircraftState) -> f64 {
    if aircraft.spec.stall_speed > 0.0 {
        (aircraft.speed / aircraft.spec.stall_speed).clamp(MIN_CONTROL_EFFECTIVENESS, 1.0)
    } else {
        1.0
    }
}

fn update_attitude(aircraft: &mut AircraftState, controls: &FlightControls, dt: f64) {
    let effectiveness = control_effectiveness(aircraft);
    let turn_rate = aircraft.spec.turn_rate;

    let pitch_rate = controls.pitch_input * controls.pitch_sensitivity * effectiveness;
    aircraft.pitch = (aircraft.pitch + pitch_rate * MAX_PITCH_RATE * dt).clamp(-MAX_PITCH, MAX_PITCH);

    // Nosewheel steering on the ground works at any speed
    let (yaw_effectiveness, max_yaw_rate) = if aircraft.altitude < GROUND_STEERING_ALTITUDE {
        (1.0, GROUND_YAW_RATE)
    } else {
        (effectiveness, turn_rate)
    };
    let yaw_rate = controls.yaw_input * controls.yaw_sensitivity * yaw_effectiveness;
    aircraft.heading = wrap_degrees(aircraft.heading + yaw_rate * max_yaw_rate * dt);

    let roll_rate = controls.roll_input * controls.roll_sensitivity * effectiveness;
    aircraft.roll = (aircraft.roll + roll_rate * MAX_ROLL_RATE * dt).clamp(-MAX_ROLL, MAX_ROLL);

    // Bank-induced turn, stacks with rudder
    if aircraft.roll.abs() > BANK_TURN_THRESHOLD {
        let bank_turn_rate = (aircraft.roll / MAX_ROLL) * turn_rate * 0.5;
        aircraft.heading = wrap_degrees(aircraft.heading + bank_turn_rate * dt);
    }
}

fn apply_aerodynamics(aircraft: &mut AircraftState, air_density: f64, dt: f64) {
    if aircraft.speed > 0.0 {
        let drag_coefficient = 0.02 + 0.001 * aircraft.pitch.abs();
        let drag_force = 0.5 * air_density * aircraft.speed.powi(2) * drag_coefficient;
        aircraft.speed = (aircraft.speed - drag_force * dt * 0.1).max(0.0);
    }

    let stall_speed = aircraft.spec.stall_speed;
    if aircraft.speed < stall_speed && aircraft.altitude > 0.0 {
        let stall_sink_rate = (stall_speed - aircraft.speed) * 10.0;
        aircraft.altitude -= stall_sink_rate * dt;
        aircraft.pitch =
            (aircraft.pitch - STALL_NOSE_DROP_RATE * dt).clamp(-MAX_PITCH, MAX_PITCH);
    }
}

/// Accelerates towards a throttle-dependent target speed without overshooting it.
///
/// The density ratio scales both the achievable speed and the thrust factor,
/// so altitude is penalised twice.
fn apply_engine_thrust(aircraft: &mut AircraftState, density_ratio: f64, dt: f64) {
    if !(aircraft.engine_on && aircraft.fuel > 0.0) {
        return;
    }

    let throttle_fraction = aircraft.throttle / 100.0;
    let max_thrust_speed = aircraft.spec.max_speed * density_ratio;
    let thrust_factor = throttle_fraction * density_ratio;
    let target_speed = max_thrust_speed * thrust_factor;

    let base_acceleration = 50.0 * throttle_fraction;
    let differential_acceleration = (target_speed - aircraft.speed) * 1.0 * dt;
    aircraft.speed += (base_acceleration + differential_acceleration) * dt;

    if aircraft.speed > target_speed {
        aircraft.speed = target_speed;
    }
}

fn apply_gravity_and_lift(aircraft: &mut AircraftState, density_ratio: f64, dt: f64) {
    if aircraft.altitude <= 0.0 {
        return;
    }

    let spec = &aircraft.spec;
    if aircraft.speed >= spec.stall_speed {
        let speed_ratio = if spec.cruise_speed > 0.0 {
            aircraft.speed / spec.cruise_speed
        } else {
            0.0
        };
        let lift_factor = speed_ratio.powi(2) * density_ratio;
        let climb_rate = aircraft.pitch * lift_factor * 20.0; // ft/min
        aircraft.altitude += climb_rate / 60.0 * dt;
    } else {
        let sink_rate = 500.0 * (1.0 - aircraft.speed / spec.stall_speed); // ft/min
        aircraft.altitude -= sink_rate / 60.0 * dt;
    }
}

fn handle_ground_collision(aircraft: &mut AircraftState, ground_elevation: f64) {
    if aircraft.altitude > ground_elevation {
        return;
    }
    aircraft.altitude = ground_elevation;

    if aircraft.speed > 80.0 || aircraft.pitch.abs() > 10.0 {
        // Hard landing
        aircraft.speed *= 0.8;
        aircraft.pitch = 0.0;
        aircraft.roll = 0.0;
    } else if aircraft.speed > 40.0 {
        // Rollout
        aircraft.speed *= 0.95;
        aircraft.pitch = 0.0;
        aircraft.roll = 0.0;
    } else if aircraft.throttle < 10.0 {
        aircraft.speed = (aircraft.speed - GROUND_FRICTION_DECEL * NOMINAL_FRAME_TIME).max(0.0);
    }
}

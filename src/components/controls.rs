use bevy::prelude::*;

/// Change applied to an axis for each frame its key is held.
const AXIS_STEP: f64 = 0.02;
/// Per-frame return-to-centre factor for released stick axes.
const AXIS_DECAY: f64 = 0.95;

/// Held state of the two keys driving one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisKeys {
    pub positive: bool,
    pub negative: bool,
}

impl AxisKeys {
    pub fn new(positive: bool, negative: bool) -> Self {
        Self { positive, negative }
    }
}

/// Snapshot of every key the flight controls read, taken once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlKeys {
    /// W / S
    pub pitch: AxisKeys,
    /// A / D
    pub yaw: AxisKeys,
    /// Q / E
    pub roll: AxisKeys,
    /// R / F
    pub throttle: AxisKeys,
    /// Either shift key
    pub brakes: bool,
}

impl ControlKeys {
    pub fn from_input(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            pitch: AxisKeys::new(
                keyboard.pressed(KeyCode::KeyW),
                keyboard.pressed(KeyCode::KeyS),
            ),
            yaw: AxisKeys::new(
                keyboard.pressed(KeyCode::KeyA),
                keyboard.pressed(KeyCode::KeyD),
            ),
            roll: AxisKeys::new(
                keyboard.pressed(KeyCode::KeyQ),
                keyboard.pressed(KeyCode::KeyE),
            ),
            throttle: AxisKeys::new(
                keyboard.pressed(KeyCode::KeyR),
                keyboard.pressed(KeyCode::KeyF),
            ),
            brakes: keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        }
    }
}

/// Normalised pilot inputs consumed by the flight physics.
///
/// Stick axes (pitch, yaw, roll) self-centre when released; the throttle is a
/// lever and holds its last position.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct FlightControls {
    /// Nose up/down, [-1, 1]
    pub pitch_input: f64,
    /// Heading change, [-1, 1]
    pub yaw_input: f64,
    /// Bank, [-1, 1]
    pub roll_input: f64,
    /// Power, [0, 1]
    pub throttle_input: f64,

    pub gear_toggle: bool,
    pub autopilot: bool,
    pub brakes: bool,

    pub pitch_sensitivity: f64,
    pub yaw_sensitivity: f64,
    pub roll_sensitivity: f64,
    pub throttle_sensitivity: f64,
}

impl Default for FlightControls {
    fn default() -> Self {
        Self {
            pitch_input: 0.0,
            yaw_input: 0.0,
            roll_input: 0.0,
            throttle_input: 0.0,
            gear_toggle: false,
            autopilot: false,
            brakes: false,
            pitch_sensitivity: 1.0,
            yaw_sensitivity: 1.0,
            roll_sensitivity: 1.0,
            throttle_sensitivity: 0.5,
        }
    }
}

impl FlightControls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances every axis by one frame of held keys.
    pub fn update_from_keyboard(&mut self, keys: &ControlKeys) {
        self.pitch_input = step_stick_axis(self.pitch_input, keys.pitch);
        self.yaw_input = step_stick_axis(self.yaw_input, keys.yaw);
        self.roll_input = step_stick_axis(self.roll_input, keys.roll);
        self.throttle_input = step_lever_axis(self.throttle_input, keys.throttle);
        self.brakes = keys.brakes;
    }

    /// Handles a single key-down event. Returns whether the key was consumed.
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Space | KeyCode::KeyG => {
                self.gear_toggle = !self.gear_toggle;
                true
            }
            KeyCode::KeyP => {
                self.autopilot = !self.autopilot;
                true
            }
            _ => false,
        }
    }
}

fn step_stick_axis(value: f64, keys: AxisKeys) -> f64 {
    if keys.positive {
        (value + AXIS_STEP).min(1.0)
    } else if keys.negative {
        (value - AXIS_STEP).max(-1.0)
    } else {
        value * AXIS_DECAY
    }
}

fn step_lever_axis(value: f64, keys: AxisKeys) -> f64 {
    if keys.positive {
        (value + AXIS_STEP).min(1.0)
    } else if keys.negative {
        (value - AXIS_STEP).max(0.0)
    } else {
        value
    }
}

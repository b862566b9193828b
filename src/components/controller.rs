use bevy::prelude::*;

/// Marks the aircraft driven by the keyboard.
#[derive(Component, Debug)]
pub struct PlayerController {
    pub active: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerController {
    pub fn new() -> Self {
        Self { active: true }
    }

    pub fn disabled() -> Self {
        Self { active: false }
    }
}

/// Everything spawned for the current flight. Despawned when the flight ends.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct FlightEntity;

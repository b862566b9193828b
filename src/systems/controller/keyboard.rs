use bevy::prelude::*;

use crate::components::{CameraComponent, ControlKeys, FlightControls, PlayerController};
use crate::plugins::SimState;
use crate::resources::HudSettings;

const ZOOM_STEP: f64 = 1.2;

/// Samples the held keys once per fixed tick and advances the control axes.
pub fn keyboard_controls_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(&mut FlightControls, &PlayerController)>,
) {
    let keys = ControlKeys::from_input(&keyboard);
    for (mut controls, controller) in query.iter_mut() {
        if controller.active {
            controls.update_from_keyboard(&keys);
        }
    }
}

/// Handles the one-shot keys available while flying.
pub fn flight_keys_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut controls_query: Query<(&mut FlightControls, &PlayerController)>,
    mut camera_query: Query<&mut CameraComponent>,
    mut hud: ResMut<HudSettings>,
    mut next_state: ResMut<NextState<SimState>>,
) {
    for key in keyboard.get_just_pressed() {
        match key {
            KeyCode::Escape => {
                info!("Flight paused");
                next_state.set(SimState::Paused);
            }
            KeyCode::KeyC => {
                for mut camera in camera_query.iter_mut() {
                    camera.cycle_mode();
                    info!("Camera mode: {}", camera.mode);
                }
            }
            KeyCode::Equal | KeyCode::NumpadAdd => {
                for mut camera in camera_query.iter_mut() {
                    camera.zoom_in(ZOOM_STEP);
                }
            }
            KeyCode::Minus | KeyCode::NumpadSubtract => {
                for mut camera in camera_query.iter_mut() {
                    camera.zoom_out(ZOOM_STEP);
                }
            }
            KeyCode::KeyH => hud.toggle_hud(),
            KeyCode::KeyI => hud.toggle_instruments(),
            KeyCode::KeyN => hud.toggle_navigation(),
            _ => {
                for (mut controls, controller) in controls_query.iter_mut() {
                    if controller.active && controls.handle_key_press(*key) {
                        debug!(
                            "{:?}: gear {}, autopilot {}",
                            key, controls.gear_toggle, controls.autopilot
                        );
                    }
                }
            }
        }
    }
}

mod keyboard;

pub use keyboard::{flight_keys_system, keyboard_controls_system};

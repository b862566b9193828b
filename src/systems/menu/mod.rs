mod display;
mod input;
pub mod screens;

pub use display::{menu_text_system, spawn_menu_text, MenuText};
pub use input::{
    aircraft_select_input_system, airport_select_input_system, main_menu_input_system,
    paused_input_system,
};

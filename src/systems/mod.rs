mod camera;
mod controller;
pub mod hud;
pub mod menu;
pub mod physics;
pub mod render;

pub use camera::{camera_follow_system, camera_transform_system};
pub use controller::{flight_keys_system, keyboard_controls_system};
pub use hud::{hud_update_system, spawn_hud_panels, HudPanel};
pub use menu::{
    aircraft_select_input_system, airport_select_input_system, main_menu_input_system,
    menu_text_system, paused_input_system, spawn_menu_text, MenuText,
};
pub use physics::{
    air_density, flight_physics_system, frame_limit_system, long_frame_warning_system,
    update_aircraft_physics,
};
pub use render::{
    aircraft_overlay_system, aircraft_render_system, route_render_system, spawn_aircraft_sprite,
    spawn_flight_scenery,
};

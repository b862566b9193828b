mod display;
pub mod format;

pub use display::{hud_update_system, spawn_hud_panels, tone_color, HudPanel};

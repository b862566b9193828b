use bevy::prelude::*;

/// Which HUD panels are drawn.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HudSettings {
    pub show_hud: bool,
    pub show_instruments: bool,
    pub show_navigation: bool,
}

impl Default for HudSettings {
    fn default() -> Self {
        Self {
            show_hud: true,
            show_instruments: true,
            show_navigation: true,
        }
    }
}

impl HudSettings {
    pub fn toggle_hud(&mut self) {
        self.show_hud = !self.show_hud;
    }

    pub fn toggle_instruments(&mut self) {
        self.show_instruments = !self.show_instruments;
    }

    pub fn toggle_navigation(&mut self) {
        self.show_navigation = !self.show_navigation;
    }
}

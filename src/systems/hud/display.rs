use bevy::prelude::*;

use crate::components::{AircraftState, CameraComponent, FlightEntity, FlightPhysics, PlayerController};
use crate::resources::{ActiveFlight, HudSettings};
use crate::systems::hud::format::{
    aircraft_info_lines, camera_info_lines, controls_help_lines, engine_lines, navigation_lines,
    panel_text, panel_tone, primary_flight_lines, HudLine, Tone,
};

const PANEL_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HudPanel {
    PrimaryFlight,
    Engine,
    Navigation,
    AircraftInfo,
    Controls,
    Camera,
}

impl HudPanel {
    pub const ALL: [HudPanel; 6] = [
        HudPanel::PrimaryFlight,
        HudPanel::Engine,
        HudPanel::Navigation,
        HudPanel::AircraftInfo,
        HudPanel::Controls,
        HudPanel::Camera,
    ];

    fn anchor(&self) -> Node {
        let mut node = Node {
            position_type: PositionType::Absolute,
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        };
        match self {
            HudPanel::PrimaryFlight => {
                node.left = Val::Px(10.0);
                node.top = Val::Px(10.0);
            }
            HudPanel::Engine => {
                node.right = Val::Px(10.0);
                node.top = Val::Px(10.0);
            }
            HudPanel::Navigation => {
                node.left = Val::Px(10.0);
                node.bottom = Val::Px(10.0);
            }
            HudPanel::AircraftInfo => {
                node.right = Val::Px(10.0);
                node.bottom = Val::Px(10.0);
            }
            HudPanel::Controls => {
                node.right = Val::Px(10.0);
                node.top = Val::Px(150.0);
            }
            HudPanel::Camera => {
                node.left = Val::Px(10.0);
                node.top = Val::Px(230.0);
            }
        }
        node
    }

    /// Whether the panel is drawn under the current toggles.
    pub fn is_shown(&self, settings: &HudSettings) -> bool {
        if !settings.show_hud {
            return *self == HudPanel::Camera;
        }
        match self {
            HudPanel::PrimaryFlight | HudPanel::Engine => settings.show_instruments,
            HudPanel::Navigation => settings.show_navigation,
            _ => true,
        }
    }
}

pub fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Normal => Color::WHITE,
        Tone::Good => Color::srgb(0.0, 1.0, 0.0),
        Tone::Warning => Color::srgb(1.0, 1.0, 0.0),
        Tone::Danger => Color::srgb(1.0, 0.0, 0.0),
    }
}

pub fn spawn_hud_panels(mut commands: Commands) {
    for panel in HudPanel::ALL {
        commands.spawn((
            Text::new(""),
            TextFont::from_font_size(16.0),
            TextColor(Color::WHITE),
            panel.anchor(),
            BackgroundColor(PANEL_BACKGROUND),
            panel,
            FlightEntity,
        ));
    }
}

pub fn hud_update_system(
    settings: Res<HudSettings>,
    flight: Res<ActiveFlight>,
    aircraft_query: Query<(&AircraftState, &FlightPhysics), With<PlayerController>>,
    camera_query: Query<&CameraComponent>,
    mut panels: Query<(&HudPanel, &mut Text, &mut TextColor, &mut Visibility)>,
) {
    let Ok((aircraft, physics)) = aircraft_query.get_single() else {
        return;
    };
    let camera = camera_query.get_single().ok();

    for (panel, mut text, mut color, mut visibility) in panels.iter_mut() {
        if !panel.is_shown(&settings) {
            *visibility = Visibility::Hidden;
            continue;
        }
        *visibility = Visibility::Inherited;

        let lines: Vec<HudLine> = match panel {
            HudPanel::PrimaryFlight => {
                primary_flight_lines(aircraft, &physics.get_flight_info(aircraft))
            }
            HudPanel::Engine => engine_lines(aircraft),
            HudPanel::Navigation => navigation_lines(aircraft, &flight.destination),
            HudPanel::AircraftInfo => aircraft_info_lines(&aircraft.spec),
            HudPanel::Controls => controls_help_lines(),
            HudPanel::Camera => match camera {
                Some(camera) => camera_info_lines(camera, aircraft),
                None => Vec::new(),
            },
        };

        text.0 = panel_text(&lines);
        color.0 = tone_color(panel_tone(&lines));
    }
}

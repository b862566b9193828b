use bevy::prelude::*;

use crate::plugins::SimState;
use crate::resources::{AircraftCatalog, AirportCatalog, MenuSelection};
use crate::systems::menu::screens::{
    aircraft_select_lines, airport_select_lines, main_menu_lines, pause_lines,
};

/// Full screen text of the current menu.
#[derive(Component, Debug, Default)]
pub struct MenuText;

pub fn spawn_menu_text(mut commands: Commands, state: Res<State<SimState>>) {
    let background = match state.get() {
        SimState::Paused => Color::srgba(0.0, 0.0, 0.0, 0.5),
        _ => Color::srgb(0.0, 0.1, 0.2),
    };

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(background),
            StateScoped(state.get().clone()),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont::from_font_size(24.0),
                TextColor(Color::WHITE),
                TextLayout::new_with_justify(JustifyText::Center),
                MenuText,
            ));
        });
}

pub fn menu_text_system(
    state: Res<State<SimState>>,
    selection: Res<MenuSelection>,
    aircraft: Res<AircraftCatalog>,
    airports: Res<AirportCatalog>,
    mut query: Query<&mut Text, With<MenuText>>,
) {
    let lines = match state.get() {
        SimState::MainMenu => main_menu_lines(),
        SimState::AircraftSelect => aircraft_select_lines(&aircraft, selection.aircraft),
        SimState::AirportSelect => airport_select_lines(&airports, &selection),
        SimState::Paused => pause_lines(),
        SimState::Flight => return,
    };
    let content = lines.join("\n");

    for mut text in query.iter_mut() {
        if text.0 != content {
            text.0 = content.clone();
        }
    }
}

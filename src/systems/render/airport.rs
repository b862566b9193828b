use bevy::prelude::*;

use crate::components::{Airport, FlightEntity};
use crate::resources::ActiveFlight;
use crate::systems::render::{heading_rotation, world_to_render, AIRPORT_LAYER, LABEL_LAYER};

const TERMINAL_SIZE: f32 = 20.0;
const RUNWAY_COLOR: Color = Color::srgb(100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0);
const ROUTE_COLOR: Color = Color::WHITE;

fn spawn_airport(commands: &mut Commands, airport: &Airport) {
    let [r, g, b] = airport.color;
    let center = world_to_render(&airport.position, AIRPORT_LAYER);

    commands.spawn((
        Sprite {
            color: Color::srgb_u8(r, g, b),
            custom_size: Some(Vec2::splat(TERMINAL_SIZE)),
            ..default()
        },
        Transform::from_translation(center + Vec3::Z * 0.1),
        FlightEntity,
        Name::new(format!("{} terminal", airport.code)),
    ));

    for runway in &airport.runways {
        let (length, width) = runway.display_size();
        let position = world_to_render(&airport.runway_start_position(runway), AIRPORT_LAYER);
        commands.spawn((
            Sprite {
                color: RUNWAY_COLOR,
                custom_size: Some(Vec2::new(width as f32, length as f32)),
                ..default()
            },
            Transform::from_translation(position).with_rotation(heading_rotation(runway.heading)),
            FlightEntity,
            Name::new(format!("{} runway {}", airport.code, runway.number)),
        ));
    }

    commands.spawn((
        Text2d::new(airport.code.clone()),
        TextFont::from_font_size(24.0),
        TextColor(Color::WHITE),
        Transform::from_xyz(center.x, center.y - TERMINAL_SIZE - 10.0, LABEL_LAYER),
        FlightEntity,
    ));
}

/// Lays out both airports and the route label once a flight starts.
pub fn spawn_flight_scenery(mut commands: Commands, flight: Res<ActiveFlight>) {
    info!(
        "Spawning scenery for {} -> {}",
        flight.departure.code, flight.destination.code
    );
    spawn_airport(&mut commands, &flight.departure);
    spawn_airport(&mut commands, &flight.destination);

    if let Some(route) = &flight.route {
        if let Some(mid) = route.waypoints.get(route.waypoints.len() / 2) {
            let position = world_to_render(mid, LABEL_LAYER);
            commands.spawn((
                Text2d::new(route.summary()),
                TextFont::from_font_size(24.0),
                TextColor(ROUTE_COLOR),
                Transform::from_translation(position),
                FlightEntity,
            ));
        }
    }
}

pub fn route_render_system(mut gizmos: Gizmos, flight: Res<ActiveFlight>) {
    let Some(route) = &flight.route else {
        return;
    };
    for leg in route.waypoints.windows(2) {
        gizmos.line_2d(
            world_to_render(&leg[0], 0.0).truncate(),
            world_to_render(&leg[1], 0.0).truncate(),
            ROUTE_COLOR,
        );
    }
}

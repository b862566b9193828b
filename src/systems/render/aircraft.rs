use bevy::prelude::*;

use crate::components::{AircraftSpec, AircraftState, PlayerController};
use crate::systems::render::{heading_rotation, world_to_render, AIRCRAFT_LAYER};

const ENGINE_COLOR: [u8; 3] = [80, 80, 80];
const COCKPIT_COLOR: [u8; 3] = [200, 200, 255];
const GEAR_COLOR: [u8; 3] = [150, 150, 150];
const INDICATOR_COLOR: [u8; 3] = [255, 255, 0];
const SHADOW_COLOR: [u8; 3] = [100, 100, 0];

/// Part sizes of the top-down aircraft drawing, in world units.
///
/// The nose points along local +y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AircraftSilhouette {
    pub fuselage_length: f32,
    pub fuselage_width: f32,
    pub wing_span: f32,
    pub wing_chord: f32,
    pub tail_length: f32,
    pub tail_width: f32,
    pub stabilizer_span: f32,
    /// Engine pod radius and lateral offset, for jet transports only.
    pub engines: Option<(f32, f32)>,
}

impl AircraftSilhouette {
    pub fn from_spec(spec: &AircraftSpec) -> Self {
        let fuselage_length = (spec.length * 0.15).max(20.0) as f32;
        let fuselage_width = (fuselage_length * 0.2).max(4.0);
        let wing_span = (spec.wingspan * 0.12).max(16.0) as f32;
        let wing_chord = (wing_span * 0.15).max(3.0);
        let tail_width = (fuselage_width / 2.0).max(2.0);

        Self {
            fuselage_length,
            fuselage_width,
            wing_span,
            wing_chord,
            tail_length: (fuselage_length / 3.0).max(6.0),
            tail_width,
            stabilizer_span: (wing_span / 4.0).max(3.0),
            engines: spec
                .is_jet_transport()
                .then(|| ((fuselage_width / 3.0).max(2.0), wing_span / 3.0)),
        }
    }
}

fn darker(color: [u8; 3]) -> Color {
    let [r, g, b] = color.map(|c| c.saturating_sub(30));
    Color::srgb_u8(r, g, b)
}

fn rgb(color: [u8; 3]) -> Color {
    Color::srgb_u8(color[0], color[1], color[2])
}

fn part(color: Color, size: Vec2, x: f32, y: f32, z: f32) -> (Sprite, Transform) {
    (
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(x, y, z),
    )
}

/// Gives newly spawned aircraft their drawing.
pub fn spawn_aircraft_sprite(
    mut commands: Commands,
    query: Query<(Entity, &AircraftState), (With<PlayerController>, Without<Sprite>)>,
) {
    for (entity, aircraft) in query.iter() {
        info!("Spawning sprite for {}", aircraft.spec.name);
        let shape = AircraftSilhouette::from_spec(&aircraft.spec);
        let body = rgb(aircraft.spec.color);
        let wings = darker(aircraft.spec.color);

        commands
            .entity(entity)
            .insert((
                Sprite {
                    color: body,
                    custom_size: Some(Vec2::new(shape.fuselage_width, shape.fuselage_length)),
                    ..default()
                },
                Transform::from_translation(world_to_render(&aircraft.position, AIRCRAFT_LAYER))
                    .with_rotation(heading_rotation(aircraft.heading)),
                Visibility::Visible,
            ))
            .with_children(|parent| {
                parent.spawn(part(
                    wings,
                    Vec2::new(shape.wing_span, shape.wing_chord),
                    0.0,
                    0.0,
                    -0.1,
                ));
                let tail_y = -shape.fuselage_length / 2.0 + shape.tail_width / 2.0;
                parent.spawn(part(
                    wings,
                    Vec2::new(shape.tail_width, shape.tail_length),
                    0.0,
                    tail_y,
                    0.1,
                ));
                parent.spawn(part(
                    wings,
                    Vec2::new(shape.stabilizer_span, (shape.tail_width / 2.0).max(1.0)),
                    0.0,
                    tail_y,
                    0.1,
                ));
                let cockpit = (shape.fuselage_width / 3.0).max(2.0);
                parent.spawn(part(
                    rgb(COCKPIT_COLOR),
                    Vec2::splat(cockpit * 2.0),
                    0.0,
                    shape.fuselage_length / 2.0 - cockpit,
                    0.2,
                ));
                if let Some((radius, offset)) = shape.engines {
                    for side in [-1.0, 1.0] {
                        parent.spawn(part(
                            rgb(ENGINE_COLOR),
                            Vec2::splat(radius * 2.0),
                            side * offset,
                            -shape.wing_chord / 4.0,
                            0.2,
                        ));
                    }
                }
            });
    }
}

pub fn aircraft_render_system(
    mut query: Query<(&AircraftState, &mut Transform), With<PlayerController>>,
) {
    for (aircraft, mut transform) in query.iter_mut() {
        transform.translation = world_to_render(&aircraft.position, AIRCRAFT_LAYER);
        transform.rotation = heading_rotation(aircraft.heading);
    }
}

/// Altitude marker and landing gear drawn over the aircraft.
pub fn aircraft_overlay_system(
    mut gizmos: Gizmos,
    query: Query<&AircraftState, With<PlayerController>>,
) {
    for aircraft in query.iter() {
        let center = world_to_render(&aircraft.position, 0.0).truncate();

        if aircraft.altitude > 0.0 {
            let shadow_offset = (aircraft.altitude / 1000.0).max(1.0) as f32;
            gizmos.circle_2d(
                center + Vec2::new(shadow_offset, -shadow_offset),
                4.0,
                rgb(SHADOW_COLOR),
            );
            gizmos.circle_2d(center, 4.0, rgb(INDICATOR_COLOR));
        }

        if aircraft.gear_down && aircraft.altitude < 100.0 {
            let rotation = heading_rotation(aircraft.heading);
            for offset in [
                Vec3::new(-8.0, -6.0, 0.0),
                Vec3::new(8.0, -6.0, 0.0),
                Vec3::new(0.0, 12.0, 0.0),
            ] {
                let wheel = center + (rotation * offset).truncate();
                gizmos.circle_2d(wheel, 2.0, rgb(GEAR_COLOR));
            }
        }
    }
}

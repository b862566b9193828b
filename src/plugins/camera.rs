use bevy::prelude::*;

use crate::components::CameraComponent;
use crate::plugins::{FlightSet, SimState};
use crate::systems::{camera_follow_system, camera_transform_system};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(
                FixedUpdate,
                camera_follow_system
                    .in_set(FlightSet::Camera)
                    .run_if(in_state(SimState::Flight)),
            )
            .add_systems(
                PostUpdate,
                camera_transform_system
                    .before(bevy::transform::TransformSystem::TransformPropagate),
            );
    }
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb_u8(50, 150, 255)),
            ..default()
        },
        CameraComponent::default(),
        Name::new("View Camera"),
    ));
}

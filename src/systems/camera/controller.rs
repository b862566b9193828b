use bevy::prelude::*;

use crate::components::{AircraftState, CameraComponent, PlayerController};

/// Moves the view camera towards its target for the current mode.
pub fn camera_follow_system(
    time: Res<Time>,
    mut camera_query: Query<&mut CameraComponent>,
    target_query: Query<&AircraftState, With<PlayerController>>,
) {
    let Ok(aircraft) = target_query.get_single() else {
        return;
    };
    let dt = time.delta_secs_f64();
    for mut camera in camera_query.iter_mut() {
        camera.update(aircraft, dt);
    }
}

/// Copies the world camera into the render camera.
///
/// The world plane has y growing south, the render plane has y growing up.
pub fn camera_transform_system(
    mut query: Query<
        (&CameraComponent, &mut Transform, &mut OrthographicProjection),
        Changed<CameraComponent>,
    >,
) {
    for (camera, mut transform, mut projection) in query.iter_mut() {
        transform.translation.x = camera.position.x as f32;
        transform.translation.y = -camera.position.y as f32;
        projection.scale = (1.0 / camera.zoom) as f32;
    }
}

//! Fixed 3D camera and the cube transform driven by the session orientation.

use bevy::prelude::*;

use crate::utils::objects::{PersistentCamera, RotableComponent, SessionResource};
use puzzlebox_engine::constants::camera_3d_constants::{
    CAMERA_3D_FOV_Y_RAD, CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z,
};

/// The camera never moves; the cube rotates in front of it. Its projection
/// matches the engine's own pick camera.
pub fn spawn_persistent_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_3D_FOV_Y_RAD,
            ..default()
        }),
        Transform::from_xyz(CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z)
            .looking_at(Vec3::ZERO, Vec3::Y),
        PersistentCamera,
    ));
}

/// Copies the session orientation onto every rotable entity.
pub fn apply_orientation(
    session: Res<SessionResource>,
    mut rot_entities: Query<&mut Transform, (With<RotableComponent>, Without<Camera3d>)>,
) {
    let rotation = session.0.orientation().rotation();
    for mut transform in rot_entities.iter_mut() {
        if transform.rotation != rotation {
            transform.rotation = rotation;
        }
    }
}

/// Keeps the engine's pick camera in step with the window, for picking
/// without a render camera.
pub fn sync_viewport(mut session: ResMut<SessionResource>, windows: Query<&Window>) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = window.size();
    if session.0.camera().viewport != size {
        session.0.set_viewport(size);
    }
}

//! Debug functions for the game.
use bevy::prelude::*;

use crate::utils::objects::{EnvironmentState, SessionResource};
use puzzlebox_engine::constants::cube_constants::CUBE_HALF_EXTENT;
use puzzlebox_engine::Face;

pub struct DebugFunctionsPlugin;

impl Plugin for DebugFunctionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, visualize_front_normal);
    }
}

/// Draws the rotated front normal against world down when 'G' is toggled on.
/// Green once the facing-down predicate holds.
fn visualize_front_normal(
    mut gizmos: Gizmos,
    session: Res<SessionResource>,
    environment: Res<EnvironmentState>,
    input: Res<ButtonInput<KeyCode>>,
    mut show: Local<bool>,
) {
    if input.just_pressed(KeyCode::KeyG) {
        *show = !*show;
        info!("Front normal visualization: {}", *show);
    }
    if !*show {
        return;
    }

    let length = CUBE_HALF_EXTENT * 2.0;
    let normal = session.0.orientation().rotate_normal(Face::Front.normal());
    let facing_down = environment.0.is_some_and(|reading| reading.facing_down);
    let color = if facing_down {
        Color::srgb(0.2, 1.0, 0.3)
    } else {
        Color::srgb(1.0, 0.3, 0.2)
    };

    gizmos.arrow(Vec3::ZERO, normal * length, color);
    gizmos.arrow(Vec3::ZERO, Vec3::NEG_Y * length, Color::WHITE);
}

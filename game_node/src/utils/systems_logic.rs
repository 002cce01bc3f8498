//! Systems logic: startup, per-frame ordering and the global key actions.
//!
//! Per frame: pointer events and key actions update the session, then the
//! environment is ticked, then the orientation is applied to the box, then the
//! puzzle form and visuals read the updated state.

use bevy::prelude::*;
use core::sync::atomic::Ordering;

use crate::log;
use crate::pointer_input::apply_pending_pointer;
use crate::utils::camera::{apply_orientation, spawn_persistent_camera, sync_viewport};
use crate::utils::game_functions::{
    apply_puzzle_messages, close_certificate, handle_form_input, update_face_panels,
    update_form_text, update_lighting, update_status_text, update_ui_scale,
};
use crate::utils::objects::{
    AmbientTrack, CompletionFlag, EnvironmentState, PuzzleForm, SessionResource,
};
use crate::utils::setup::{setup_ambient_track, setup_box, setup_environment, setup_ui};
use puzzlebox_engine::constants::environment_constants::TIME_DIAL_STEP_HOURS;

// Plugin for managing all the game systems.
pub struct SystemsLogicPlugin;

impl Plugin for SystemsLogicPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PuzzleForm>()
            .init_resource::<EnvironmentState>()
            .init_resource::<CompletionFlag>()
            .add_systems(
                Startup,
                (
                    spawn_persistent_camera,
                    setup_environment,
                    setup_box,
                    setup_ui,
                    setup_ambient_track,
                ),
            )
            .add_systems(Update, update_ui_scale)
            .add_systems(
                Update,
                (
                    (sync_viewport, apply_pending_pointer, handle_time_dial, handle_reset_key).chain(),
                    tick_environment,
                    apply_orientation,
                    (handle_form_input, apply_puzzle_messages).chain(),
                    (update_face_panels, update_lighting, update_status_text, update_form_text),
                )
                    .chain(),
            )
            .add_systems(Update, (toggle_audio, react_to_completion, close_certificate));
    }
}

/// `[` and `]` turn the time dial back and forward.
fn handle_time_dial(keys: Res<ButtonInput<KeyCode>>, mut session: ResMut<SessionResource>) {
    let step = if keys.just_pressed(KeyCode::BracketRight) {
        TIME_DIAL_STEP_HOURS
    } else if keys.just_pressed(KeyCode::BracketLeft) {
        -TIME_DIAL_STEP_HOURS
    } else {
        return;
    };
    let hour = session.0.hour() + step;
    session.0.set_hour(hour);
    debug!("Time dial at {:.1}h", session.0.hour());
}

/// R puts the box back in its home orientation.
fn handle_reset_key(keys: Res<ButtonInput<KeyCode>>, mut session: ResMut<SessionResource>) {
    if keys.just_pressed(KeyCode::KeyR) {
        session.0.reset_orientation();
        log!("🔄 Box returned to its resting position");
    }
}

fn tick_environment(mut session: ResMut<SessionResource>, mut environment: ResMut<EnvironmentState>) {
    let reading = session.0.tick();
    if environment.0.map(|last| last.front_state) != Some(reading.front_state) {
        info!("Front face is now {}", reading.front_state.as_str());
    }
    environment.0 = Some(reading);
}

/// M pauses or resumes the ambient track.
fn toggle_audio(keys: Res<ButtonInput<KeyCode>>, sinks: Query<&AudioSink, With<AmbientTrack>>) {
    if !keys.just_pressed(KeyCode::KeyM) {
        return;
    }
    for sink in &sinks {
        if sink.is_paused() {
            sink.play();
        } else {
            sink.pause();
        }
    }
}

/// Reacts to the completion hook: the ambient track stops for the certificate.
fn react_to_completion(flag: Res<CompletionFlag>, sinks: Query<&AudioSink, With<AmbientTrack>>) {
    if !flag.0.swap(false, Ordering::Relaxed) {
        return;
    }
    for sink in &sinks {
        sink.pause();
    }
    info!("All faces solved, ambient track paused");
}

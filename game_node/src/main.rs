//! Start-up for the puzzle box, with window, plugins, and resources.
//! Loads the puzzle configuration and wires the engine session into Bevy.

use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::*,
};
use core::sync::atomic::Ordering;

use puzzlebox_engine::{PuzzleConfig, Session};
use puzzlebox_node::{
    pointer_input::PointerInputPlugin,
    state_emitter::StateEmitterPlugin,
    utils::{
        debug_functions::DebugFunctionsPlugin,
        objects::{CompletionFlag, SessionResource},
        systems_logic::SystemsLogicPlugin,
    },
};

/// Configuration from `PUZZLEBOX_CONFIG` or `puzzlebox.toml`; defaults on any error.
fn load_config() -> PuzzleConfig {
    let path = PuzzleConfig::default_path();
    match PuzzleConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load {}: {}. Using defaults.", path.display(), e);
            PuzzleConfig::default()
        }
    }
}

/// Entry point for the application
fn main() {
    let window = Some(Window {
        title: "Puzzle Box".into(),
        #[cfg(target_arch = "wasm32")]
        canvas: Some("#game-canvas".into()),
        fit_canvas_to_parent: true,
        prevent_default_event_handling: true,
        present_mode: PresentMode::AutoVsync,
        ..default()
    });

    let mut app = App::new();
    app.add_plugins((
        DefaultPlugins.set(WindowPlugin {
            primary_window: window,
            ..default()
        }),
        LogDiagnosticsPlugin::default(),
        FrameTimeDiagnosticsPlugin::default(),
    ));

    // Logging is only up once the default plugins are in
    let mut session = Session::new(load_config());
    let completion = CompletionFlag::default();
    let flag = completion.0.clone();
    session.set_completion_hook(Box::new(move || flag.store(true, Ordering::Relaxed)));

    app.insert_resource(SessionResource(session))
        .insert_resource(completion)
        .add_plugins((
            PointerInputPlugin,
            StateEmitterPlugin,
            SystemsLogicPlugin,
            DebugFunctionsPlugin,
        ))
        .run();
}

//! Bevy front end of the puzzle box: input capture, the box itself, the
//! keyboard puzzle form and the status UI around a `puzzlebox_engine::Session`.

/// Mouse and touch capture
pub mod pointer_input;

/// Forwards engine events into the ECS
pub mod state_emitter;

/// Various utility functions and objects
pub mod utils {
    pub mod camera;
    pub mod cube;
    pub mod debug_functions;
    pub mod game_functions;
    pub mod macros;
    pub mod objects;
    pub mod setup;
    pub mod systems_logic;
}

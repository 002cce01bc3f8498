//! Interaction and puzzle-gating engine for the puzzle box.
//!
//! A cube with six faces, each bound to a small puzzle. Pointer drags rotate
//! the cube, plain clicks pick a face and open its puzzle, and solving all six
//! raises a one-shot completion event.
//!
//! ## Layout
//!
//! orientation   -> drag gestures to (pitch, yaw)
//! picker        -> screen point / ray + orientation to a face
//! environment   -> time dial x orientation predicates, brightness
//! puzzles       -> one validator per face
//! state_machine -> solve state, dependency gating, completion
//! session       -> context object owning all of the above
//!
//! The crate has no ECS dependency; the game node wraps `Session` in a Bevy
//! resource.

pub mod config;
pub mod constants;
pub mod environment;
pub mod face;
pub mod orientation;
pub mod picker;
pub mod puzzles;
pub mod session;
pub mod state_machine;

pub use config::{ConfigError, PuzzleConfig};
pub use environment::{EnvironmentReading, FrontState, TimeDial};
pub use face::Face;
pub use orientation::{Orientation, OrientationController};
pub use picker::{FacePicker, PickCamera};
pub use puzzles::PuzzleInput;
pub use session::{ClickOutcome, Session};
pub use state_machine::{
    AttemptOutcome, ConfirmOutcome, EditOutcome, FaceStatus, OpenOutcome, ParamStatus,
    PuzzleEvent, PuzzleStateMachine,
};

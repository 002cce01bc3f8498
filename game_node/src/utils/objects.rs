//! Resources, components and messages shared by the game node systems.
use bevy::prelude::*;

use puzzlebox_engine::puzzles::ValveDials;
use puzzlebox_engine::{EnvironmentReading, Face, PuzzleEvent, Session};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// The engine session for this play-through.
#[derive(Resource, Default)]
pub struct SessionResource(pub Session);

/// Raised by the engine's completion hook, cleared by the audio system.
#[derive(Resource, Clone, Default)]
pub struct CompletionFlag(pub Arc<AtomicBool>);

/// Engine event forwarded into the ECS.
#[derive(Message, Clone, Debug)]
pub struct PuzzleMessage(pub PuzzleEvent);

/// Keyboard-driven editor for the open face.
#[derive(Resource, Default)]
pub struct PuzzleForm {
    pub face: Option<Face>,
    /// Selected field within the face's inputs.
    pub field: usize,
    pub valves: ValveDials,
    pub ward: usize,
    pub rice: String,
    pub tincture: [i32; 3],
    /// Last validator or state machine message shown under the form.
    pub feedback: Option<String>,
    pub awaiting_confirmation: bool,
}

impl PuzzleForm {
    pub fn open(&mut self, face: Face) {
        *self = Self {
            face: Some(face),
            ..Self::default()
        };
    }

    pub fn close(&mut self) {
        let feedback = self.feedback.take();
        *self = Self {
            feedback,
            ..Self::default()
        };
    }
}

/// The rotating cube root
#[derive(Component)]
pub struct PuzzleCube;

// Marks an entity to be rotated with the session orientation
#[derive(Component)]
pub struct RotableComponent;

/// One face panel of the cube
#[derive(Component)]
pub struct FacePanel {
    pub face: Face,
}

/// A component that marks an entity as a game entity, which is cleared on reset
#[derive(Component)]
pub struct GameEntity;

/// A component that marks an entity as a UI entity
#[derive(Component)]
pub struct UIEntity;

/// A component that marks the camera (not despawned on reset)
#[derive(Component)]
pub struct PersistentCamera;

#[derive(Component)]
pub struct StatusText;

#[derive(Component)]
pub struct FormText;

#[derive(Component)]
pub struct CertificateOverlay;

#[derive(Component)]
pub struct AmbientTrack;

/// Reading produced by the last environment tick.
#[derive(Resource, Default)]
pub struct EnvironmentState(pub Option<EnvironmentReading>);

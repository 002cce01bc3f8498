//! Session context owning all engine state for one play-through.
//!
//! Two independent update paths share it: `tick` for per-frame environment
//! recomputation, and the pointer / puzzle methods for discrete user actions.

use bevy_math::Vec2;
use log::debug;

use crate::config::PuzzleConfig;
use crate::constants::cube_constants::CUBE_HALF_EXTENT;
use crate::environment::{evaluate, EnvironmentMonitor, EnvironmentReading, TimeDial};
use crate::face::Face;
use crate::orientation::{Orientation, OrientationController};
use crate::picker::{FacePicker, PickCamera};
use crate::puzzles::PuzzleInput;
use crate::state_machine::{
    AttemptOutcome, CompletionHook, ConfirmOutcome, EditOutcome, OpenOutcome, PuzzleEvent,
    PuzzleStateMachine,
};

/// What a pointer release turned out to be.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Release without a preceding press.
    Ignored,
    /// The gesture rotated the cube, so no face is picked.
    Dragged,
    /// Nothing under the pointer.
    Missed,
    Opened(Face),
    AlreadySolved { face: Face, notice: String },
}

pub struct Session {
    config: PuzzleConfig,
    controller: OrientationController,
    picker: FacePicker,
    camera: PickCamera,
    machine: PuzzleStateMachine,
    dial: TimeDial,
    monitor: EnvironmentMonitor,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PuzzleConfig::default())
    }
}

impl Session {
    pub fn new(config: PuzzleConfig) -> Self {
        Self {
            controller: OrientationController::new(config.home_orientation(), config.drag_sensitivity),
            picker: FacePicker::new(CUBE_HALF_EXTENT),
            camera: PickCamera::default(),
            machine: PuzzleStateMachine::new(&config),
            dial: TimeDial::default(),
            monitor: EnvironmentMonitor::new(config.brightness),
            config,
        }
    }

    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    pub fn orientation(&self) -> Orientation {
        self.controller.orientation()
    }

    pub fn controller(&self) -> &OrientationController {
        &self.controller
    }

    pub fn machine(&self) -> &PuzzleStateMachine {
        &self.machine
    }

    pub fn camera(&self) -> &PickCamera {
        &self.camera
    }

    pub fn set_camera(&mut self, camera: PickCamera) {
        self.camera = camera;
    }

    pub fn set_viewport(&mut self, size: Vec2) {
        self.camera.viewport = size;
    }

    pub fn hour(&self) -> f32 {
        self.dial.hour()
    }

    pub fn set_hour(&mut self, hour: f32) {
        self.dial.set(hour);
    }

    pub fn set_completion_hook(&mut self, hook: CompletionHook) {
        self.machine.set_completion_hook(hook);
    }

    // Gestures

    pub fn pointer_down(&mut self, point: Vec2) {
        self.controller.on_gesture_start(point);
    }

    pub fn pointer_move(&mut self, point: Vec2) {
        self.controller.on_gesture_move(point);
    }

    /// Pointer left the surface or the touch was cancelled.
    pub fn pointer_leave(&mut self) {
        self.controller.on_gesture_end();
    }

    /// Ends the gesture and, if it was a plain click, picks with the session camera.
    pub fn pointer_up(&mut self, point: Vec2) -> ClickOutcome {
        let camera = self.camera;
        self.pointer_up_with(|picker, orientation| picker.pick(point, &camera, orientation))
    }

    /// Same as `pointer_up`, with the pick delegated to the caller (e.g. a ray
    /// built by the renderer's own camera).
    pub fn pointer_up_with<F>(&mut self, pick: F) -> ClickOutcome
    where
        F: FnOnce(&FacePicker, &Orientation) -> Option<Face>,
    {
        let was_dragging = self.controller.is_dragging();
        self.controller.on_gesture_end();
        // Always consume the flag so it cannot leak into the next click
        let moved = self.controller.take_moved();
        if !was_dragging {
            return ClickOutcome::Ignored;
        }
        if moved {
            return ClickOutcome::Dragged;
        }

        let orientation = self.controller.orientation();
        let Some(face) = pick(&self.picker, &orientation) else {
            debug!("click missed the cube");
            return ClickOutcome::Missed;
        };
        match self.machine.open(face) {
            OpenOutcome::Opened(face) => ClickOutcome::Opened(face),
            OpenOutcome::AlreadySolved(notice) => ClickOutcome::AlreadySolved { face, notice },
        }
    }

    pub fn reset_orientation(&mut self) {
        self.controller.reset();
    }

    // Environment

    /// Fresh reading for the current dial and orientation.
    pub fn environment(&self) -> EnvironmentReading {
        evaluate(self.dial, &self.controller.orientation(), self.monitor.curve())
    }

    /// Per-frame reading for the visuals; frozen once the front face is solved.
    pub fn tick(&mut self) -> EnvironmentReading {
        let front_solved = self.machine.is_solved(Face::Front);
        self.monitor
            .tick(self.dial, &self.controller.orientation(), front_solved)
    }

    pub fn monitor(&self) -> &EnvironmentMonitor {
        &self.monitor
    }

    // Puzzles

    pub fn open(&mut self, face: Face) -> OpenOutcome {
        self.machine.open(face)
    }

    pub fn close(&mut self) {
        self.machine.close();
    }

    pub fn attempt(&mut self, face: Face, input: PuzzleInput) -> AttemptOutcome {
        let environment = self.environment();
        self.machine.attempt(face, input, environment)
    }

    pub fn confirm(&mut self, face: Face, accept: bool) -> ConfirmOutcome {
        let environment = self.environment();
        self.machine.confirm(face, accept, environment)
    }

    pub fn edit_parameter(&mut self, index: usize, value: f32) -> EditOutcome {
        self.machine.edit_parameter(index, value)
    }

    pub fn check_completion(&mut self) -> bool {
        self.machine.check_completion()
    }

    pub fn drain_events(&mut self) -> Vec<PuzzleEvent> {
        self.machine.drain_events()
    }
}

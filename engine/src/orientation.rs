//! Orientation controller: turns pointer drags into cube rotation.

use bevy_math::{Quat, Vec2, Vec3};
use log::debug;

use crate::constants::orientation_constants::{
    DRAG_SENSITIVITY_RAD_PER_PX, HOME_PITCH_DEG, HOME_YAW_DEG,
};

/// Two independent rotation angles in radians. Never normalized.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    pub const fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    pub fn from_degrees(pitch_deg: f32, yaw_deg: f32) -> Self {
        Self::new(pitch_deg.to_radians(), yaw_deg.to_radians())
    }

    /// Rotation applied to the cube: yaw first, then pitch.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch) * Quat::from_rotation_y(self.yaw)
    }

    /// Rotates a cube-local vector into world space.
    pub fn rotate_normal(&self, local: Vec3) -> Vec3 {
        self.rotation() * local
    }
}

/// Whether a drag is in progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Idle,
    Dragging,
}

impl Default for GesturePhase {
    fn default() -> Self {
        GesturePhase::Idle
    }
}

/// Gesture tracking owned by the controller
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    pub phase: GesturePhase,
    pub last_point: Option<Vec2>,
    /// Set once a drag produced a nonzero delta, consumed by the click handler.
    pub moved: bool,
}

/// Accumulates drag deltas into an `Orientation`.
#[derive(Clone, Debug)]
pub struct OrientationController {
    orientation: Orientation,
    home: Orientation,
    gesture: GestureState,
    sensitivity: f32,
}

impl Default for OrientationController {
    fn default() -> Self {
        Self::new(
            Orientation::from_degrees(HOME_PITCH_DEG, HOME_YAW_DEG),
            DRAG_SENSITIVITY_RAD_PER_PX,
        )
    }
}

impl OrientationController {
    /// The home orientation is captured here and never changes afterwards.
    pub fn new(home: Orientation, sensitivity: f32) -> Self {
        Self {
            orientation: home,
            home,
            gesture: GestureState::default(),
            sensitivity,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn home(&self) -> Orientation {
        self.home
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.phase == GesturePhase::Dragging
    }

    pub fn on_gesture_start(&mut self, point: Vec2) {
        self.gesture = GestureState {
            phase: GesturePhase::Dragging,
            last_point: Some(point),
            moved: false,
        };
    }

    pub fn on_gesture_move(&mut self, point: Vec2) {
        if self.gesture.phase != GesturePhase::Dragging {
            return;
        }
        let Some(last) = self.gesture.last_point else {
            self.gesture.last_point = Some(point);
            return;
        };

        let delta = point - last;
        self.orientation.yaw += delta.x * self.sensitivity;
        self.orientation.pitch += delta.y * self.sensitivity;
        self.gesture.last_point = Some(point);

        if delta != Vec2::ZERO {
            self.gesture.moved = true;
        }
    }

    /// Ends the drag. Also used for pointer leave and touch cancel.
    pub fn on_gesture_end(&mut self) {
        self.gesture.phase = GesturePhase::Idle;
    }

    /// Returns whether the last gesture rotated the cube, clearing the flag.
    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.gesture.moved)
    }

    pub fn reset(&mut self) {
        debug!("orientation reset to home {:?}", self.home);
        self.orientation = self.home;
    }
}

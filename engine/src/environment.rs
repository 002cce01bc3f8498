//! Environmental evaluator: time of day crossed with cube orientation.
//!
//! The same predicates drive the front face's visual state on every render
//! tick and decide the bloom puzzle when it is attempted.

use bevy_math::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::constants::environment_constants::{
    BRIGHTNESS_AMPLITUDE, BRIGHTNESS_BASE, COSINE_FACING_DOWN_THRESHOLD, DAYTIME_END_HOUR,
    DAYTIME_START_HOUR, HOURS_PER_DAY, INITIAL_HOUR, MIDDAY_END_HOUR, MIDDAY_START_HOUR,
};
use crate::face::Face;
use crate::orientation::Orientation;

/// Hour of the day in `[0, 24)`, set from outside the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeDial(f32);

impl TimeDial {
    /// Wraps any finite hour into `[0, 24)`. Non-finite input falls back to midnight.
    pub fn new(hour: f32) -> Self {
        if !hour.is_finite() {
            return Self(0.0);
        }
        let wrapped = hour.rem_euclid(HOURS_PER_DAY);
        // rem_euclid can round up to exactly 24.0 for tiny negative inputs
        Self(if wrapped >= HOURS_PER_DAY { 0.0 } else { wrapped })
    }

    pub fn hour(&self) -> f32 {
        self.0
    }

    /// Sets a new hour, ignoring non-finite values.
    pub fn set(&mut self, hour: f32) {
        if hour.is_finite() {
            *self = Self::new(hour);
        }
    }
}

impl Default for TimeDial {
    fn default() -> Self {
        Self::new(INITIAL_HOUR)
    }
}

/// Symbolic visual state of the front face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontState {
    Awake,
    DormantClosed,
    DormantOpen,
}

impl FrontState {
    pub const fn as_str(self) -> &'static str {
        match self {
            FrontState::Awake => "awake",
            FrontState::DormantClosed => "dormant-closed",
            FrontState::DormantOpen => "dormant-open",
        }
    }
}

/// `brightness = base + amplitude * sin(hour / 24 * PI)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightnessCurve {
    pub base: f32,
    pub amplitude: f32,
}

impl Default for BrightnessCurve {
    fn default() -> Self {
        Self {
            base: BRIGHTNESS_BASE,
            amplitude: BRIGHTNESS_AMPLITUDE,
        }
    }
}

impl BrightnessCurve {
    pub fn at(&self, hour: f32) -> f32 {
        self.base + self.amplitude * (hour / HOURS_PER_DAY * PI).sin()
    }

    /// The sine term spans `[0, 1]` over a day, so both ends must stay positive.
    pub fn is_strictly_positive(&self) -> bool {
        self.base > 0.0 && self.base + self.amplitude > 0.0
    }
}

/// Everything derived from one `(hour, orientation)` pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvironmentReading {
    pub hour: f32,
    pub daytime: bool,
    pub midday: bool,
    pub facing_down: bool,
    pub front_state: FrontState,
    pub brightness: f32,
}

pub fn is_daytime(hour: f32) -> bool {
    (DAYTIME_START_HOUR..=DAYTIME_END_HOUR).contains(&hour)
}

pub fn is_midday(hour: f32) -> bool {
    (MIDDAY_START_HOUR..=MIDDAY_END_HOUR).contains(&hour)
}

/// Front normal rotated by `orientation`, compared against world down.
pub fn is_facing_down(orientation: &Orientation) -> bool {
    orientation.rotate_normal(Face::Front.normal()).dot(Vec3::NEG_Y) > COSINE_FACING_DOWN_THRESHOLD
}

pub fn evaluate(dial: TimeDial, orientation: &Orientation, curve: &BrightnessCurve) -> EnvironmentReading {
    let hour = dial.hour();
    let daytime = is_daytime(hour);
    let midday = is_midday(hour);
    let facing_down = is_facing_down(orientation);

    let front_state = if !daytime {
        FrontState::Awake
    } else if midday && facing_down {
        FrontState::DormantOpen
    } else {
        FrontState::DormantClosed
    };

    EnvironmentReading {
        hour,
        daytime,
        midday,
        facing_down,
        front_state,
        brightness: curve.at(hour),
    }
}

/// Recomputes the reading every tick until the bound face is solved, then
/// keeps returning the last reading.
#[derive(Clone, Debug, Default)]
pub struct EnvironmentMonitor {
    curve: BrightnessCurve,
    last: Option<EnvironmentReading>,
    frozen: bool,
}

impl EnvironmentMonitor {
    pub fn new(curve: BrightnessCurve) -> Self {
        Self {
            curve,
            last: None,
            frozen: false,
        }
    }

    pub fn curve(&self) -> &BrightnessCurve {
        &self.curve
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn last(&self) -> Option<EnvironmentReading> {
        self.last
    }

    pub fn tick(&mut self, dial: TimeDial, orientation: &Orientation, bound_face_solved: bool) -> EnvironmentReading {
        if let (true, Some(last)) = (self.frozen || bound_face_solved, self.last) {
            self.frozen = true;
            return last;
        }
        let reading = evaluate(dial, orientation, &self.curve);
        self.last = Some(reading);
        self.frozen = bound_face_solved;
        reading
    }
}

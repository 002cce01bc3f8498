//! Valve puzzle: four ternary dials steering blood pressure through three phases.

use std::ops::RangeInclusive;

use super::{wrong_input, FacePuzzle, PuzzleInput, ValidationContext, Verdict};
use crate::constants::valve_constants::*;
use crate::face::Face;

/// Dial position, doubling as the index into the offset tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialPosition {
    Low = 0,
    #[default]
    Med = 1,
    High = 2,
}

impl DialPosition {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Next position, wrapping High back to Low.
    pub const fn cycle(self) -> Self {
        match self {
            DialPosition::Low => DialPosition::Med,
            DialPosition::Med => DialPosition::High,
            DialPosition::High => DialPosition::Low,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValveDials {
    pub heart: DialPosition,
    pub resistance: DialPosition,
    pub compliance: DialPosition,
    pub shunt: DialPosition,
}

impl ValveDials {
    pub const fn new(
        heart: DialPosition,
        resistance: DialPosition,
        compliance: DialPosition,
        shunt: DialPosition,
    ) -> Self {
        Self {
            heart,
            resistance,
            compliance,
            shunt,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pressures {
    pub systolic: i32,
    pub diastolic: i32,
    pub mean_arterial: f32,
}

pub fn mean_arterial(systolic: i32, diastolic: i32) -> f32 {
    diastolic as f32 + (systolic - diastolic) as f32 / 3.0
}

pub fn pressures(dials: &ValveDials) -> Pressures {
    let systolic = SYSTOLIC_BASE
        + HEART_SYSTOLIC[dials.heart.index()]
        + RESISTANCE_SYSTOLIC[dials.resistance.index()]
        + COMPLIANCE_SYSTOLIC[dials.compliance.index()]
        + SHUNT_SYSTOLIC[dials.shunt.index()];
    let diastolic = DIASTOLIC_BASE
        + HEART_DIASTOLIC[dials.heart.index()]
        + RESISTANCE_DIASTOLIC[dials.resistance.index()]
        + COMPLIANCE_DIASTOLIC[dials.compliance.index()]
        + SHUNT_DIASTOLIC[dials.shunt.index()];
    Pressures {
        systolic,
        diastolic,
        mean_arterial: mean_arterial(systolic, diastolic),
    }
}

/// Target bands of one phase.
#[derive(Clone, Debug, PartialEq)]
pub struct PhaseTarget {
    pub systolic: RangeInclusive<i32>,
    pub diastolic: RangeInclusive<i32>,
}

impl PhaseTarget {
    /// MAP band derived from the S/D band edges with the same formula.
    pub fn mean_arterial(&self) -> RangeInclusive<f32> {
        mean_arterial(*self.systolic.start(), *self.diastolic.start())
            ..=mean_arterial(*self.systolic.end(), *self.diastolic.end())
    }

    pub fn accepts(&self, p: &Pressures) -> bool {
        self.systolic.contains(&p.systolic)
            && self.diastolic.contains(&p.diastolic)
            && self.mean_arterial().contains(&p.mean_arterial)
    }
}

pub struct ValvePuzzle {
    phases: Vec<PhaseTarget>,
}

impl Default for ValvePuzzle {
    fn default() -> Self {
        Self {
            phases: PHASE_TARGETS
                .iter()
                .map(|&((s_lo, s_hi), (d_lo, d_hi))| PhaseTarget {
                    systolic: s_lo..=s_hi,
                    diastolic: d_lo..=d_hi,
                })
                .collect(),
        }
    }
}

impl ValvePuzzle {
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    pub fn phase(&self, index: usize) -> Option<&PhaseTarget> {
        self.phases.get(index)
    }
}

impl FacePuzzle for ValvePuzzle {
    fn face(&self) -> Face {
        Face::Back
    }

    fn title(&self) -> &'static str {
        "valves"
    }

    fn verify(&self, input: &PuzzleInput, context: &ValidationContext) -> Verdict {
        let PuzzleInput::Valves(dials) = input else {
            return wrong_input(self);
        };
        let phase = context.phase;
        let Some(target) = self.phases.get(phase) else {
            return Verdict::rejected("The circulation is already stable.");
        };

        let p = pressures(dials);
        if !target.accepts(&p) {
            return Verdict::rejected(format!(
                "Phase {}: {}/{} (MAP {:.1}) misses the target {}-{}/{}-{}.",
                phase + 1,
                p.systolic,
                p.diastolic,
                p.mean_arterial,
                target.systolic.start(),
                target.systolic.end(),
                target.diastolic.start(),
                target.diastolic.end(),
            ));
        }

        let next = phase + 1;
        if next == self.phases.len() {
            Verdict::solved(format!("{}/{} holds. The heart beats steady.", p.systolic, p.diastolic))
        } else {
            Verdict::advanced(
                next,
                format!("Phase {} stable at {}/{}. On to phase {}.", next, p.systolic, p.diastolic, next + 1),
            )
        }
    }
}

//! Constellation puzzle: five continuous star parameters, each unlocked by
//! solving another face.

use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{wrong_input, FacePuzzle, PuzzleInput, ValidationContext, Verdict};
use crate::constants::constellation_constants::{
    PARAM_COUNT, PARAM_MAX, PARAM_MIN, PARAM_NAMES, PARAM_TARGETS, PARAM_TOLERANCES,
};
use crate::face::Face;

/// Face whose solve unlocks each parameter.
pub const DEPENDENCY_MAP: [Face; PARAM_COUNT] =
    [Face::Front, Face::Back, Face::Left, Face::Right, Face::Bottom];

pub struct ConstellationPuzzle {
    targets: [f32; PARAM_COUNT],
    tolerances: [f32; PARAM_COUNT],
}

impl Default for ConstellationPuzzle {
    fn default() -> Self {
        Self {
            targets: PARAM_TARGETS,
            tolerances: PARAM_TOLERANCES,
        }
    }
}

impl ConstellationPuzzle {
    pub fn within_band(&self, index: usize, value: f32) -> bool {
        (value - self.targets[index]).abs() <= self.tolerances[index]
    }

    pub fn aligned(&self, values: &[f32; PARAM_COUNT]) -> bool {
        values
            .iter()
            .enumerate()
            .all(|(index, value)| self.within_band(index, *value))
    }
}

pub fn clamp_param(value: f32) -> f32 {
    value.clamp(PARAM_MIN, PARAM_MAX)
}

/// Deterministic starting values that never begin aligned.
pub fn scrambled_start(seed: u64) -> [f32; PARAM_COUNT] {
    let puzzle = ConstellationPuzzle::default();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    loop {
        let mut values = [0.0; PARAM_COUNT];
        for value in values.iter_mut() {
            *value = rng.random_range(PARAM_MIN..=PARAM_MAX).round();
        }
        if !puzzle.aligned(&values) {
            return values;
        }
    }
}

impl FacePuzzle for ConstellationPuzzle {
    fn face(&self) -> Face {
        Face::Top
    }

    fn title(&self) -> &'static str {
        "constellation"
    }

    fn verify(&self, input: &PuzzleInput, _context: &ValidationContext) -> Verdict {
        let PuzzleInput::Constellation(values) = input else {
            return wrong_input(self);
        };
        let stray: Vec<&str> = values
            .iter()
            .enumerate()
            .filter(|(index, value)| !self.within_band(*index, **value))
            .map(|(index, _)| PARAM_NAMES[index])
            .collect();

        if stray.is_empty() {
            Verdict::solved("The stars settle into her sign.")
        } else {
            Verdict::rejected(format!("The sky is wrong: {}.", stray.join(", ")))
        }
    }
}

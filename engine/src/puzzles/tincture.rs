//! Tincture puzzle: three sliders must match the recipe ratio exactly.

use super::{wrong_input, FacePuzzle, PuzzleInput, ValidationContext, Verdict};
use crate::constants::tincture_constants::{
    TINCTURE_SLIDER_MAX, TINCTURE_SLIDER_MIN, TINCTURE_TARGET,
};
use crate::face::Face;

pub struct TincturePuzzle;

impl FacePuzzle for TincturePuzzle {
    fn face(&self) -> Face {
        Face::Bottom
    }

    fn title(&self) -> &'static str {
        "tincture"
    }

    fn verify(&self, input: &PuzzleInput, _context: &ValidationContext) -> Verdict {
        let PuzzleInput::Tincture(parts) = input else {
            return wrong_input(self);
        };
        let slider_range = TINCTURE_SLIDER_MIN..=TINCTURE_SLIDER_MAX;
        if !parts.iter().all(|part| slider_range.contains(part)) {
            return Verdict::rejected("The measures only go from 0 to 5.");
        }
        if *parts == TINCTURE_TARGET {
            Verdict::solved("The tincture turns clear.")
        } else {
            Verdict::rejected(format!(
                "{}:{}:{} turns cloudy.",
                parts[0], parts[1], parts[2]
            ))
        }
    }
}

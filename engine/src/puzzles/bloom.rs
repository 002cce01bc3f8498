//! Bloom puzzle: the front face opens only when turned to the floor at midday.

use super::{wrong_input, FacePuzzle, PuzzleInput, ValidationContext, Verdict};
use crate::face::Face;

pub struct BloomPuzzle;

impl FacePuzzle for BloomPuzzle {
    fn face(&self) -> Face {
        Face::Front
    }

    fn title(&self) -> &'static str {
        "bloom"
    }

    fn verify(&self, input: &PuzzleInput, context: &ValidationContext) -> Verdict {
        if !matches!(input, PuzzleInput::Bloom) {
            return wrong_input(self);
        }
        let env = &context.environment;
        match (env.facing_down, env.midday) {
            (true, true) => Verdict::solved("The flower opens to the noon shade."),
            (false, true) => Verdict::rejected("The sun is high, but the flower still faces it."),
            (true, false) => Verdict::rejected("Facing down, but the hour is wrong."),
            (false, false) => Verdict::rejected("The flower stays shut."),
        }
    }
}

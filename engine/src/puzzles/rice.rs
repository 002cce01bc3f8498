//! Rice puzzle: count the spilled grains exactly.

use super::{wrong_input, FacePuzzle, PuzzleInput, ValidationContext, Verdict};
use crate::face::Face;

pub struct RicePuzzle {
    target: i64,
}

impl RicePuzzle {
    pub fn new(target: i64) -> Self {
        Self { target }
    }
}

impl FacePuzzle for RicePuzzle {
    fn face(&self) -> Face {
        Face::Right
    }

    fn title(&self) -> &'static str {
        "rice"
    }

    fn verify(&self, input: &PuzzleInput, _context: &ValidationContext) -> Verdict {
        let PuzzleInput::Rice(text) = input else {
            return wrong_input(self);
        };
        match text.trim().parse::<i64>() {
            Ok(count) if count == self.target => Verdict::solved("Every grain is counted."),
            Ok(count) => Verdict::rejected(format!("{count} grains? Count again.")),
            Err(_) => Verdict::rejected("That is not a number of grains."),
        }
    }
}

//! Ward puzzle: pick the one charm that holds her back.

use std::fmt;
use std::str::FromStr;

use super::{wrong_input, FacePuzzle, PuzzleInput, ValidationContext, Verdict};
use crate::constants::ward_constants::{WARD_CORRECT, WARD_OPTIONS};
use crate::face::Face;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ward {
    Garlic,
    Hawthorn,
    Silver,
    Rowan,
    Mirror,
    Salt,
}

impl Ward {
    pub const ALL: [Ward; 6] = [
        Ward::Garlic,
        Ward::Hawthorn,
        Ward::Silver,
        Ward::Rowan,
        Ward::Mirror,
        Ward::Salt,
    ];

    pub const fn token(self) -> &'static str {
        WARD_OPTIONS[self as usize]
    }
}

impl fmt::Display for Ward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Ward {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Ward::ALL
            .into_iter()
            .find(|ward| ward.token().eq_ignore_ascii_case(token))
            .ok_or(())
    }
}

pub struct WardPuzzle;

impl FacePuzzle for WardPuzzle {
    fn face(&self) -> Face {
        Face::Left
    }

    fn title(&self) -> &'static str {
        "ward"
    }

    fn requires_confirmation(&self) -> bool {
        true
    }

    fn verify(&self, input: &PuzzleInput, _context: &ValidationContext) -> Verdict {
        let PuzzleInput::Ward(token) = input else {
            return wrong_input(self);
        };
        match token.parse::<Ward>() {
            Ok(ward) if ward.token() == WARD_CORRECT => {
                Verdict::solved(format!("The {ward} holds. The lid on this side gives way."))
            }
            Ok(ward) => Verdict::rejected(format!("The {ward} crumbles to dust.")),
            Err(()) => Verdict::rejected(format!("`{}` is not among the charms.", token.trim())),
        }
    }
}

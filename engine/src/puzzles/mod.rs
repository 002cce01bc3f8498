//! Per-face puzzle validators and the lookup table binding them to faces.

pub mod bloom;
pub mod constellation;
pub mod rice;
pub mod tincture;
pub mod valves;
pub mod ward;

use crate::config::PuzzleConfig;
use crate::constants::constellation_constants::PARAM_COUNT;
use crate::environment::EnvironmentReading;
use crate::face::Face;

pub use bloom::BloomPuzzle;
pub use constellation::{ConstellationPuzzle, DEPENDENCY_MAP};
pub use rice::RicePuzzle;
pub use tincture::TincturePuzzle;
pub use valves::{DialPosition, ValveDials, ValvePuzzle};
pub use ward::{Ward, WardPuzzle};

/// Typed snapshot of what the player entered on a face.
#[derive(Clone, Debug, PartialEq)]
pub enum PuzzleInput {
    Valves(ValveDials),
    /// The bloom reads only the environment.
    Bloom,
    /// Option token, e.g. `"hawthorn"`.
    Ward(String),
    Constellation([f32; PARAM_COUNT]),
    /// Raw text as typed; parsing is part of validation.
    Rice(String),
    Tincture([i32; 3]),
}

/// Read-only state a validator may consult besides its input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValidationContext {
    pub environment: EnvironmentReading,
    /// Next phase to pass, for multi-phase puzzles.
    pub phase: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerdictStatus {
    Solved,
    /// A multi-phase puzzle passed a phase; `phase` is the next one to pass.
    Advanced { phase: usize },
    Rejected,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub status: VerdictStatus,
    pub message: String,
}

impl Verdict {
    pub fn solved(message: impl Into<String>) -> Self {
        Self {
            status: VerdictStatus::Solved,
            message: message.into(),
        }
    }

    pub fn advanced(phase: usize, message: impl Into<String>) -> Self {
        Self {
            status: VerdictStatus::Advanced { phase },
            message: message.into(),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            status: VerdictStatus::Rejected,
            message: message.into(),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.status == VerdictStatus::Solved
    }
}

/// One puzzle bound to one face. Implementations must be pure.
pub trait FacePuzzle: Send + Sync {
    fn face(&self) -> Face;

    fn title(&self) -> &'static str;

    /// Whether attempts are held until the player confirms them.
    fn requires_confirmation(&self) -> bool {
        false
    }

    fn verify(&self, input: &PuzzleInput, context: &ValidationContext) -> Verdict;
}

pub(crate) fn wrong_input(puzzle: &dyn FacePuzzle) -> Verdict {
    Verdict::rejected(format!("That does not fit the {} puzzle.", puzzle.title()))
}

/// Lookup table of validators indexed by `Face::index`.
pub struct PuzzleSet {
    puzzles: [Box<dyn FacePuzzle>; 6],
}

impl PuzzleSet {
    pub fn new(config: &PuzzleConfig) -> Self {
        Self {
            puzzles: [
                Box::new(BloomPuzzle),
                Box::new(ValvePuzzle::default()),
                Box::new(WardPuzzle),
                Box::new(RicePuzzle::new(config.rice_target)),
                Box::new(ConstellationPuzzle::default()),
                Box::new(TincturePuzzle),
            ],
        }
    }

    pub fn get(&self, face: Face) -> &dyn FacePuzzle {
        self.puzzles[face.index()].as_ref()
    }
}

impl Default for PuzzleSet {
    fn default() -> Self {
        Self::new(&PuzzleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_binds_each_face_to_its_own_puzzle() {
        let set = PuzzleSet::default();
        for face in Face::ALL {
            assert_eq!(set.get(face).face(), face);
        }
    }
}

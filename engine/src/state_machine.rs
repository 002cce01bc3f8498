//! Puzzle state machine: per-face solve state, dependency gating and the
//! one-shot completion event.
//!
//! `SolveState` is only ever written by the success path of `attempt` /
//! `confirm`, and a solved face never becomes unsolved again.

use log::{debug, info};

use crate::config::PuzzleConfig;
use crate::constants::constellation_constants::{PARAM_COUNT, PARAM_NAMES};
use crate::environment::EnvironmentReading;
use crate::face::Face;
use crate::puzzles::constellation::{clamp_param, scrambled_start};
use crate::puzzles::{PuzzleInput, PuzzleSet, ValidationContext, VerdictStatus, DEPENDENCY_MAP};

/// Monotonic per-face solved flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveState([bool; 6]);

impl SolveState {
    pub fn is_solved(&self, face: Face) -> bool {
        self.0[face.index()]
    }

    /// Flags are never cleared.
    fn mark(&mut self, face: Face) {
        self.0[face.index()] = true;
    }

    pub fn all_solved(&self) -> bool {
        self.0.iter().all(|solved| *solved)
    }

    pub fn solved_count(&self) -> usize {
        self.0.iter().filter(|solved| **solved).count()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceStatus {
    Available,
    Solved,
}

/// Edit status of one constellation parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamStatus {
    Locked,
    Editable,
}

/// Everything the presentation layer may want to react to, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum PuzzleEvent {
    Opened(Face),
    Closed(Face),
    AlreadySolved { face: Face, notice: String },
    AwaitingConfirmation(Face),
    PhaseAdvanced { face: Face, phase: usize, message: String },
    Rejected { face: Face, message: String },
    FaceSolved { face: Face, message: String },
    AllSolved,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OpenOutcome {
    Opened(Face),
    AlreadySolved(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttemptOutcome {
    Solved(String),
    Advanced { phase: usize, message: String },
    Rejected(String),
    AlreadySolved(String),
    /// The attempt is held until `confirm` is called for the face.
    NeedsConfirmation,
    /// The snapshot changed a constellation parameter that is still locked.
    ParameterLocked { index: usize, requires: Face },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Resolved(AttemptOutcome),
    Withdrawn,
    NothingPending,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EditOutcome {
    Stored(f32),
    Locked { requires: Face },
    FaceSolved,
    UnknownParameter,
}

/// Called once, on the check that first finds every face solved.
pub type CompletionHook = Box<dyn FnMut() + Send + Sync>;

fn already_solved_notice(face: Face) -> String {
    format!("You've already solved the {face} puzzle!")
}

pub struct PuzzleStateMachine {
    puzzles: PuzzleSet,
    solved: SolveState,
    /// Next phase per face, only advanced by multi-phase puzzles.
    phases: [usize; 6],
    constellation: [f32; PARAM_COUNT],
    active: Option<Face>,
    pending: Option<(Face, PuzzleInput)>,
    completion_fired: bool,
    completion_hook: Option<CompletionHook>,
    events: Vec<PuzzleEvent>,
}

impl Default for PuzzleStateMachine {
    fn default() -> Self {
        Self::new(&PuzzleConfig::default())
    }
}

impl PuzzleStateMachine {
    pub fn new(config: &PuzzleConfig) -> Self {
        Self {
            puzzles: PuzzleSet::new(config),
            solved: SolveState::default(),
            phases: [0; 6],
            constellation: scrambled_start(config.seed),
            active: None,
            pending: None,
            completion_fired: false,
            completion_hook: None,
            events: Vec::new(),
        }
    }

    pub fn set_completion_hook(&mut self, hook: CompletionHook) {
        self.completion_hook = Some(hook);
    }

    pub fn puzzles(&self) -> &PuzzleSet {
        &self.puzzles
    }

    pub fn solve_state(&self) -> SolveState {
        self.solved
    }

    pub fn is_solved(&self, face: Face) -> bool {
        self.solved.is_solved(face)
    }

    pub fn is_complete(&self) -> bool {
        self.solved.all_solved()
    }

    pub fn status(&self, face: Face) -> FaceStatus {
        if self.solved.is_solved(face) {
            FaceStatus::Solved
        } else {
            FaceStatus::Available
        }
    }

    pub fn param_status(&self, index: usize) -> Option<ParamStatus> {
        let requires = DEPENDENCY_MAP.get(index)?;
        Some(if self.solved.is_solved(*requires) {
            ParamStatus::Editable
        } else {
            ParamStatus::Locked
        })
    }

    pub fn phase(&self, face: Face) -> usize {
        self.phases[face.index()]
    }

    /// Next valve phase to pass.
    pub fn valve_phase(&self) -> usize {
        self.phase(Face::Back)
    }

    pub fn constellation_params(&self) -> [f32; PARAM_COUNT] {
        self.constellation
    }

    pub fn active_face(&self) -> Option<Face> {
        self.active
    }

    pub fn pending_face(&self) -> Option<Face> {
        self.pending.as_ref().map(|(face, _)| *face)
    }

    /// Hands over queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<PuzzleEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn open(&mut self, face: Face) -> OpenOutcome {
        if self.solved.is_solved(face) {
            let notice = already_solved_notice(face);
            self.events.push(PuzzleEvent::AlreadySolved {
                face,
                notice: notice.clone(),
            });
            return OpenOutcome::AlreadySolved(notice);
        }
        if self.pending_face().is_some_and(|pending| pending != face) {
            self.pending = None;
        }
        self.active = Some(face);
        self.events.push(PuzzleEvent::Opened(face));
        debug!("opened {face} puzzle");
        OpenOutcome::Opened(face)
    }

    pub fn close(&mut self) {
        self.pending = None;
        if let Some(face) = self.active.take() {
            self.events.push(PuzzleEvent::Closed(face));
        }
    }

    /// Stores one constellation parameter if its dependency face is solved.
    pub fn edit_parameter(&mut self, index: usize, value: f32) -> EditOutcome {
        let Some(requires) = DEPENDENCY_MAP.get(index).copied() else {
            return EditOutcome::UnknownParameter;
        };
        if !self.solved.is_solved(requires) {
            debug!("{} is locked until {requires} is solved", PARAM_NAMES[index]);
            return EditOutcome::Locked { requires };
        }
        if self.solved.is_solved(Face::Top) {
            return EditOutcome::FaceSolved;
        }
        if !value.is_finite() {
            return EditOutcome::Stored(self.constellation[index]);
        }
        let value = clamp_param(value);
        self.constellation[index] = value;
        EditOutcome::Stored(value)
    }

    /// Applies a full constellation snapshot. If any changed parameter is
    /// still locked, the first one is reported and nothing is stored.
    fn apply_constellation(&mut self, values: &[f32; PARAM_COUNT]) -> Result<(), (usize, Face)> {
        let locked = values
            .iter()
            .zip(self.constellation)
            .zip(DEPENDENCY_MAP)
            .position(|((value, stored), requires)| *value != stored && !self.solved.is_solved(requires));
        if let Some(index) = locked {
            return Err((index, DEPENDENCY_MAP[index]));
        }

        for (stored, value) in self.constellation.iter_mut().zip(values) {
            if *value != *stored && value.is_finite() {
                *stored = clamp_param(*value);
            }
        }
        Ok(())
    }

    pub fn attempt(
        &mut self,
        face: Face,
        input: PuzzleInput,
        environment: EnvironmentReading,
    ) -> AttemptOutcome {
        if self.solved.is_solved(face) {
            let notice = already_solved_notice(face);
            self.events.push(PuzzleEvent::AlreadySolved {
                face,
                notice: notice.clone(),
            });
            return AttemptOutcome::AlreadySolved(notice);
        }

        let input = match input {
            PuzzleInput::Constellation(values) if face == Face::Top => {
                if let Err((index, requires)) = self.apply_constellation(&values) {
                    let message = format!("{} is locked until {requires} is solved.", PARAM_NAMES[index]);
                    self.events.push(PuzzleEvent::Rejected { face, message });
                    return AttemptOutcome::ParameterLocked { index, requires };
                }
                PuzzleInput::Constellation(self.constellation)
            }
            other => other,
        };

        if self.puzzles.get(face).requires_confirmation() {
            self.pending = Some((face, input));
            self.events.push(PuzzleEvent::AwaitingConfirmation(face));
            return AttemptOutcome::NeedsConfirmation;
        }

        self.validate(face, &input, environment)
    }

    /// Second step of a held attempt. `accept = false` withdraws it.
    pub fn confirm(&mut self, face: Face, accept: bool, environment: EnvironmentReading) -> ConfirmOutcome {
        if self.pending_face() != Some(face) {
            return ConfirmOutcome::NothingPending;
        }
        let Some((_, input)) = self.pending.take() else {
            return ConfirmOutcome::NothingPending;
        };
        if !accept {
            debug!("{face} attempt withdrawn");
            return ConfirmOutcome::Withdrawn;
        }
        ConfirmOutcome::Resolved(self.validate(face, &input, environment))
    }

    fn validate(&mut self, face: Face, input: &PuzzleInput, environment: EnvironmentReading) -> AttemptOutcome {
        let context = ValidationContext {
            environment,
            phase: self.phases[face.index()],
        };
        let verdict = self.puzzles.get(face).verify(input, &context);

        match verdict.status {
            VerdictStatus::Solved => {
                self.solved.mark(face);
                if self.active == Some(face) {
                    self.active = None;
                }
                info!("{face} puzzle solved ({}/6)", self.solved.solved_count());
                self.events.push(PuzzleEvent::FaceSolved {
                    face,
                    message: verdict.message.clone(),
                });
                self.check_completion();
                AttemptOutcome::Solved(verdict.message)
            }
            VerdictStatus::Advanced { phase } => {
                self.phases[face.index()] = phase;
                self.events.push(PuzzleEvent::PhaseAdvanced {
                    face,
                    phase,
                    message: verdict.message.clone(),
                });
                AttemptOutcome::Advanced {
                    phase,
                    message: verdict.message,
                }
            }
            VerdictStatus::Rejected => {
                self.events.push(PuzzleEvent::Rejected {
                    face,
                    message: verdict.message.clone(),
                });
                AttemptOutcome::Rejected(verdict.message)
            }
        }
    }

    /// Returns `true` only on the call that first sees every face solved.
    pub fn check_completion(&mut self) -> bool {
        if self.completion_fired || !self.solved.all_solved() {
            return false;
        }
        self.completion_fired = true;
        info!("all six puzzles solved");
        self.events.push(PuzzleEvent::AllSolved);
        if let Some(hook) = self.completion_hook.as_mut() {
            hook();
        }
        true
    }
}

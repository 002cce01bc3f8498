use pretty_assertions::assert_eq;
use puzzlebox_engine::environment::{evaluate, BrightnessCurve};
use puzzlebox_engine::puzzles::valves::{pressures, ValvePuzzle};
use puzzlebox_engine::puzzles::{
    BloomPuzzle, ConstellationPuzzle, DialPosition::*, FacePuzzle, PuzzleInput, RicePuzzle,
    TincturePuzzle, ValidationContext, ValveDials, VerdictStatus, WardPuzzle,
};
use puzzlebox_engine::{Orientation, TimeDial};
use std::f32::consts::FRAC_PI_2;

fn context(hour: f32, orientation: Orientation, phase: usize) -> ValidationContext {
    ValidationContext {
        environment: evaluate(TimeDial::new(hour), &orientation, &BrightnessCurve::default()),
        phase,
    }
}

fn plain() -> ValidationContext {
    context(20.0, Orientation::default(), 0)
}

fn status(puzzle: &dyn FacePuzzle, input: PuzzleInput, ctx: &ValidationContext) -> VerdictStatus {
    puzzle.verify(&input, ctx).status
}

#[test]
fn valves_compute_pressures_from_offset_tables() {
    let all_med = pressures(&ValveDials::default());
    assert_eq!((all_med.systolic, all_med.diastolic), (112, 77));

    let pumped = pressures(&ValveDials::new(High, High, Med, Med));
    assert_eq!(pumped.systolic, 128);
    assert_eq!(pumped.diastolic, 87);
    assert!((pumped.mean_arterial - (87.0 + 41.0 / 3.0)).abs() < 1e-4);
}

#[test]
fn valves_reject_all_med_in_first_phase() {
    let puzzle = ValvePuzzle::default();
    let verdict = puzzle.verify(&PuzzleInput::Valves(ValveDials::default()), &plain());
    assert_eq!(verdict.status, VerdictStatus::Rejected);
    assert!(verdict.message.contains("112/77"), "{}", verdict.message);
}

#[test]
fn valves_pass_phases_in_order() {
    let puzzle = ValvePuzzle::default();
    let phase_one = ValveDials::new(High, Low, Med, Low);
    let phase_two = ValveDials::new(Low, Low, Med, Low);
    let phase_three = ValveDials::new(High, High, Low, Low);

    let at = |phase| context(20.0, Orientation::default(), phase);

    assert_eq!(status(&puzzle, PuzzleInput::Valves(phase_one), &at(0)), VerdictStatus::Advanced { phase: 1 });
    assert_eq!(status(&puzzle, PuzzleInput::Valves(phase_two), &at(1)), VerdictStatus::Advanced { phase: 2 });
    assert_eq!(status(&puzzle, PuzzleInput::Valves(phase_three), &at(2)), VerdictStatus::Solved);

    // Out of order settings do not count
    assert_eq!(status(&puzzle, PuzzleInput::Valves(phase_three), &at(0)), VerdictStatus::Rejected);
    assert_eq!(status(&puzzle, PuzzleInput::Valves(phase_one), &at(1)), VerdictStatus::Rejected);
}

#[test]
fn valve_map_band_is_derived_from_pressure_bands() {
    let puzzle = ValvePuzzle::default();
    let first = puzzle.phase(0).unwrap();
    let map = first.mean_arterial();
    assert!((map.start() - 90.0).abs() < 1e-4);
    assert!((map.end() - 94.0).abs() < 1e-4);
    assert_eq!(puzzle.phase_count(), 3);
}

#[test]
fn bloom_needs_midday_and_facing_down() {
    let puzzle = BloomPuzzle;
    let down = Orientation::new(FRAC_PI_2, 0.0);
    assert_eq!(status(&puzzle, PuzzleInput::Bloom, &context(12.0, down, 0)), VerdictStatus::Solved);
    assert_eq!(
        status(&puzzle, PuzzleInput::Bloom, &context(12.0, Orientation::default(), 0)),
        VerdictStatus::Rejected
    );
    assert_eq!(status(&puzzle, PuzzleInput::Bloom, &context(14.0, down, 0)), VerdictStatus::Rejected);
}

#[test]
fn ward_accepts_only_hawthorn() {
    let puzzle = WardPuzzle;
    assert!(puzzle.requires_confirmation());
    assert_eq!(status(&puzzle, PuzzleInput::Ward("Hawthorn ".into()), &plain()), VerdictStatus::Solved);
    for wrong in ["garlic", "silver", "rowan", "mirror", "salt", "stake", ""] {
        assert_eq!(status(&puzzle, PuzzleInput::Ward(wrong.into()), &plain()), VerdictStatus::Rejected);
    }
}

#[test]
fn constellation_needs_every_parameter_in_band() {
    let puzzle = ConstellationPuzzle::default();
    let target = [42.0, 17.0, 73.0, 58.0, 25.0];
    assert_eq!(status(&puzzle, PuzzleInput::Constellation(target), &plain()), VerdictStatus::Solved);

    let edges = [45.0, 13.0, 70.0, 62.0, 28.0];
    assert_eq!(status(&puzzle, PuzzleInput::Constellation(edges), &plain()), VerdictStatus::Solved);

    for index in 0..5 {
        let mut off = target;
        off[index] += 5.0;
        let verdict = puzzle.verify(&PuzzleInput::Constellation(off), &plain());
        assert_eq!(verdict.status, VerdictStatus::Rejected, "parameter {index}");
    }
}

#[test]
fn rice_parses_leniently_and_fails_quietly() {
    let puzzle = RicePuzzle::new(313);
    assert_eq!(status(&puzzle, PuzzleInput::Rice(" 313\n".into()), &plain()), VerdictStatus::Solved);
    assert_eq!(status(&puzzle, PuzzleInput::Rice("312".into()), &plain()), VerdictStatus::Rejected);
    assert_eq!(status(&puzzle, PuzzleInput::Rice("three hundred".into()), &plain()), VerdictStatus::Rejected);
    assert_eq!(status(&puzzle, PuzzleInput::Rice("".into()), &plain()), VerdictStatus::Rejected);
}

#[test]
fn tincture_matches_exact_ratio() {
    let puzzle = TincturePuzzle;
    assert_eq!(status(&puzzle, PuzzleInput::Tincture([2, 3, 1]), &plain()), VerdictStatus::Solved);
    assert_eq!(status(&puzzle, PuzzleInput::Tincture([3, 2, 1]), &plain()), VerdictStatus::Rejected);
    assert_eq!(status(&puzzle, PuzzleInput::Tincture([2, 3, 2]), &plain()), VerdictStatus::Rejected);
    assert_eq!(status(&puzzle, PuzzleInput::Tincture([4, 6, 2]), &plain()), VerdictStatus::Rejected);
}

#[test]
fn mismatched_input_is_rejected_not_panicking() {
    let verdict = TincturePuzzle.verify(&PuzzleInput::Rice("2".into()), &plain());
    assert_eq!(verdict.status, VerdictStatus::Rejected);
    assert!(verdict.message.contains("tincture"));
}

#[test]
fn failures_are_repeatable() {
    let puzzle = ValvePuzzle::default();
    let input = PuzzleInput::Valves(ValveDials::default());
    let first = puzzle.verify(&input, &plain());
    let second = puzzle.verify(&input, &plain());
    assert_eq!(first, second);
}

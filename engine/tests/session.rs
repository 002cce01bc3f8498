use bevy_math::Vec2;
use pretty_assertions::assert_eq;
use puzzlebox_engine::environment::BrightnessCurve;
use puzzlebox_engine::{
    AttemptOutcome, ClickOutcome, ConfigError, Face, FrontState, Orientation, PuzzleConfig,
    PuzzleEvent, PuzzleInput, Session,
};
use std::path::Path;

fn near_center() -> Vec2 {
    Vec2::new(640.0 + 13.0, 360.0 + 7.0)
}

fn facing_down_config() -> PuzzleConfig {
    PuzzleConfig {
        home_pitch_deg: 90.0,
        home_yaw_deg: 0.0,
        ..PuzzleConfig::default()
    }
}

#[test]
fn plain_click_opens_the_front() {
    let mut session = Session::default();
    session.pointer_down(near_center());
    assert_eq!(session.pointer_up(near_center()), ClickOutcome::Opened(Face::Front));
    assert_eq!(session.machine().active_face(), Some(Face::Front));
}

#[test]
fn drag_never_counts_as_a_click() {
    let mut session = Session::default();
    let start = session.orientation();
    session.pointer_down(near_center());
    session.pointer_move(near_center() + Vec2::new(40.0, 0.0));
    session.pointer_move(near_center());
    assert_eq!(session.pointer_up(near_center()), ClickOutcome::Dragged);
    assert_eq!(session.machine().active_face(), None);
    // Returned to the start point, so the net rotation is zero
    assert!((session.orientation().yaw - start.yaw).abs() < 1e-5);

    // The next plain click is not suppressed
    session.pointer_down(near_center());
    assert_eq!(session.pointer_up(near_center()), ClickOutcome::Opened(Face::Front));
}

#[test]
fn release_without_press_is_ignored() {
    let mut session = Session::default();
    assert_eq!(session.pointer_up(near_center()), ClickOutcome::Ignored);

    session.pointer_down(near_center());
    session.pointer_leave();
    assert_eq!(session.pointer_up(near_center()), ClickOutcome::Ignored);
}

#[test]
fn click_outside_the_cube_misses() {
    let mut session = Session::default();
    session.pointer_down(Vec2::new(5.0, 5.0));
    assert_eq!(session.pointer_up(Vec2::new(5.0, 5.0)), ClickOutcome::Missed);
}

#[test]
fn custom_pick_is_used_on_release() {
    let mut session = Session::default();
    session.pointer_down(Vec2::ZERO);
    let outcome = session.pointer_up_with(|_, _| Some(Face::Bottom));
    assert_eq!(outcome, ClickOutcome::Opened(Face::Bottom));
}

#[test]
fn clicking_a_solved_face_reports_the_notice() {
    let mut session = Session::default();
    session.attempt(Face::Bottom, PuzzleInput::Tincture([2, 3, 1]));
    session.pointer_down(Vec2::ZERO);
    match session.pointer_up_with(|_, _| Some(Face::Bottom)) {
        ClickOutcome::AlreadySolved { face, notice } => {
            assert_eq!(face, Face::Bottom);
            assert_eq!(notice, "You've already solved the bottom puzzle!");
        }
        other => panic!("expected notice, got {other:?}"),
    }
}

#[test]
fn reset_returns_to_home_orientation() {
    let mut session = Session::default();
    let home = session.orientation();
    session.pointer_down(Vec2::ZERO);
    session.pointer_move(Vec2::new(120.0, -80.0));
    session.pointer_up(Vec2::new(120.0, -80.0));
    assert_ne!(session.orientation(), home);

    session.reset_orientation();
    assert_eq!(session.orientation(), home);
}

#[test]
fn bloom_uses_the_session_dial_and_orientation() {
    let mut session = Session::new(facing_down_config());
    session.set_hour(9.0);
    let outcome = session.attempt(Face::Front, PuzzleInput::Bloom);
    assert!(matches!(outcome, AttemptOutcome::Rejected(_)));

    session.set_hour(12.0);
    assert_eq!(session.environment().front_state, FrontState::DormantOpen);
    let outcome = session.attempt(Face::Front, PuzzleInput::Bloom);
    assert!(matches!(outcome, AttemptOutcome::Solved(_)));
}

#[test]
fn tick_freezes_after_the_front_is_solved() {
    let mut session = Session::new(facing_down_config());
    session.set_hour(22.0);
    assert_eq!(session.tick().front_state, FrontState::Awake);

    session.set_hour(12.0);
    session.attempt(Face::Front, PuzzleInput::Bloom);
    let frozen = session.tick();
    session.set_hour(3.0);
    assert_eq!(session.tick(), frozen);
    assert!(session.monitor().is_frozen());
    // A fresh evaluation still follows the dial
    assert_eq!(session.environment().front_state, FrontState::Awake);
}

#[test]
fn session_forwards_events() {
    let mut session = Session::default();
    session.open(Face::Right);
    session.attempt(Face::Right, PuzzleInput::Rice("313".into()));
    let events = session.drain_events();
    assert_eq!(events[0], PuzzleEvent::Opened(Face::Right));
    assert!(matches!(events[1], PuzzleEvent::FaceSolved { face: Face::Right, .. }));
}

#[test]
fn partial_config_keeps_defaults() {
    let config = PuzzleConfig::from_toml("rice_target = 99\n[brightness]\nbase = 0.8\n").unwrap();
    assert_eq!(config.rice_target, 99);
    assert_eq!(
        config.brightness,
        BrightnessCurve {
            base: 0.8,
            amplitude: 0.5
        }
    );
    assert_eq!(config.seed, PuzzleConfig::default().seed);
    assert_eq!(config.home_orientation(), Orientation::from_degrees(-15.0, -25.0));
}

#[test]
fn config_rejects_dark_brightness_and_bad_toml() {
    let dark = PuzzleConfig::from_toml("[brightness]\nbase = 0.1\namplitude = -0.4\n");
    assert!(matches!(dark, Err(ConfigError::Invalid(_))));

    let still = PuzzleConfig::from_toml("drag_sensitivity = 0.0\n");
    assert!(matches!(still, Err(ConfigError::Invalid(_))));

    let broken = PuzzleConfig::from_toml("rice_target = \"many\"");
    assert!(matches!(broken, Err(ConfigError::Parse(_))));
}

#[test]
fn missing_config_file_falls_back_to_defaults() {
    let config = PuzzleConfig::load(Path::new("definitely/not/here/puzzlebox.toml")).unwrap();
    assert_eq!(config, PuzzleConfig::default());
}

#[test]
fn configured_rice_target_is_used() {
    let config = PuzzleConfig {
        rice_target: 7,
        ..PuzzleConfig::default()
    };
    let mut session = Session::new(config);
    let outcome = session.attempt(Face::Right, PuzzleInput::Rice("7".into()));
    assert!(matches!(outcome, AttemptOutcome::Solved(_)));
}

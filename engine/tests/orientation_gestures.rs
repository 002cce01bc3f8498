use bevy_math::Vec2;
use puzzlebox_engine::orientation::{GesturePhase, Orientation, OrientationController};

const K: f32 = 0.01;

fn controller() -> OrientationController {
    OrientationController::new(Orientation::default(), K)
}

fn drag(controller: &mut OrientationController, points: &[Vec2]) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    controller.on_gesture_start(*first);
    for point in rest {
        controller.on_gesture_move(*point);
    }
    controller.on_gesture_end();
}

#[test]
fn drag_accumulates_sum_of_deltas() {
    let mut c = controller();
    drag(
        &mut c,
        &[Vec2::new(100.0, 100.0), Vec2::new(130.0, 90.0), Vec2::new(150.0, 140.0)],
    );
    let o = c.orientation();
    assert!((o.yaw - 50.0 * K).abs() < 1e-6);
    assert!((o.pitch - 40.0 * K).abs() < 1e-6);
}

#[test]
fn chunking_of_moves_does_not_change_result() {
    let deltas = [
        Vec2::new(3.0, -7.0),
        Vec2::new(12.0, 4.0),
        Vec2::new(-20.0, 9.0),
        Vec2::new(5.0, 5.0),
        Vec2::new(41.0, -13.0),
        Vec2::new(-2.0, 0.0),
    ];
    let total: Vec2 = deltas.iter().copied().sum();

    // Every delta as its own move event
    let mut fine = controller();
    let mut points = vec![Vec2::ZERO];
    for delta in deltas {
        points.push(*points.last().unwrap() + delta);
    }
    drag(&mut fine, &points);

    // Only every other point reported, as a coarser event stream would
    let mut coarse = controller();
    let sparse: Vec<Vec2> = points
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 0 || *i == points.len() - 1)
        .map(|(_, p)| *p)
        .collect();
    drag(&mut coarse, &sparse);

    // Same deltas split over two separate drags
    let mut split = controller();
    drag(&mut split, &points[..4]);
    let offset = Vec2::new(500.0, 500.0);
    let second: Vec<Vec2> = points[3..].iter().map(|p| *p + offset).collect();
    drag(&mut split, &second);

    for c in [&fine, &coarse, &split] {
        let o = c.orientation();
        assert!((o.yaw - total.x * K).abs() < 1e-5, "yaw {} vs {}", o.yaw, total.x * K);
        assert!((o.pitch - total.y * K).abs() < 1e-5, "pitch {} vs {}", o.pitch, total.y * K);
    }
}

#[test]
fn move_without_start_is_ignored() {
    let mut c = controller();
    c.on_gesture_move(Vec2::new(400.0, 400.0));
    assert_eq!(c.orientation(), Orientation::default());
    assert!(!c.gesture().moved);

    drag(&mut c, &[Vec2::ZERO, Vec2::new(10.0, 0.0)]);
    let after_drag = c.orientation();
    c.on_gesture_move(Vec2::new(900.0, 900.0));
    assert_eq!(c.orientation(), after_drag);
}

#[test]
fn moved_flag_is_set_by_motion_and_consumed_once() {
    let mut c = controller();
    c.on_gesture_start(Vec2::new(5.0, 5.0));
    c.on_gesture_move(Vec2::new(5.0, 5.0));
    assert!(!c.gesture().moved);
    c.on_gesture_move(Vec2::new(6.0, 5.0));
    c.on_gesture_end();
    assert_eq!(c.gesture().phase, GesturePhase::Idle);
    assert!(c.take_moved());
    assert!(!c.take_moved());
}

#[test]
fn new_gesture_clears_moved() {
    let mut c = controller();
    drag(&mut c, &[Vec2::ZERO, Vec2::new(1.0, 1.0)]);
    c.on_gesture_start(Vec2::ZERO);
    assert!(!c.gesture().moved);
    assert!(c.is_dragging());
}

#[test]
fn reset_restores_home_but_not_gesture() {
    let home = Orientation::from_degrees(-15.0, -25.0);
    let mut c = OrientationController::new(home, K);
    c.on_gesture_start(Vec2::ZERO);
    c.on_gesture_move(Vec2::new(80.0, -30.0));
    c.reset();
    assert_eq!(c.orientation(), home);
    assert!(c.is_dragging());
    assert!(c.gesture().moved);
}

#[test]
fn screen_width_drag_is_about_half_a_turn() {
    let mut c = controller();
    drag(&mut c, &[Vec2::ZERO, Vec2::new(314.0, 0.0)]);
    assert!((c.orientation().yaw - std::f32::consts::PI).abs() < 0.01);
}

use puzzlebox_engine::environment::{
    evaluate, is_daytime, is_facing_down, is_midday, BrightnessCurve, EnvironmentMonitor,
};
use puzzlebox_engine::{FrontState, Orientation, TimeDial};
use std::f32::consts::FRAC_PI_2;

fn down() -> Orientation {
    Orientation::new(FRAC_PI_2, 0.0)
}

#[test]
fn day_and_midday_bands_are_inclusive() {
    assert!(is_daytime(6.0) && is_daytime(18.0));
    assert!(!is_daytime(5.99) && !is_daytime(18.01));
    assert!(is_midday(11.0) && is_midday(13.0));
    assert!(!is_midday(10.99) && !is_midday(13.5));
}

#[test]
fn facing_down_needs_a_steep_tilt() {
    assert!(is_facing_down(&down()));
    assert!(!is_facing_down(&Orientation::default()));
    // ~20 degrees short of straight down is outside the 0.95 cone
    assert!(!is_facing_down(&Orientation::new(FRAC_PI_2 - 0.35, 0.0)));
    // yaw spins the front normal away from the tilt axis
    assert!(!is_facing_down(&Orientation::new(FRAC_PI_2, FRAC_PI_2)));
}

#[test]
fn front_state_follows_time_and_orientation() {
    let curve = BrightnessCurve::default();
    let cases = [
        (2.0, down(), FrontState::Awake),
        (20.0, Orientation::default(), FrontState::Awake),
        (8.0, down(), FrontState::DormantClosed),
        (12.0, Orientation::default(), FrontState::DormantClosed),
        (12.0, down(), FrontState::DormantOpen),
    ];
    for (hour, orientation, expected) in cases {
        let reading = evaluate(TimeDial::new(hour), &orientation, &curve);
        assert_eq!(reading.front_state, expected, "hour {hour}");
    }
    assert_eq!(FrontState::DormantOpen.as_str(), "dormant-open");
}

#[test]
fn brightness_stays_positive_and_peaks_at_noon() {
    let curve = BrightnessCurve::default();
    let mut hour = 0.0;
    while hour < 24.0 {
        let b = curve.at(hour);
        assert!(b > 0.0);
        assert!(b <= curve.at(12.0) + 1e-6);
        hour += 0.25;
    }
    assert!(curve.at(6.0) < curve.at(9.0));
    assert!(!BrightnessCurve { base: 0.2, amplitude: -0.3 }.is_strictly_positive());
}

#[test]
fn monitor_freezes_once_bound_face_is_solved() {
    let mut monitor = EnvironmentMonitor::new(BrightnessCurve::default());
    let night = monitor.tick(TimeDial::new(22.0), &Orientation::default(), false);
    assert_eq!(night.front_state, FrontState::Awake);

    let noon = monitor.tick(TimeDial::new(12.0), &down(), false);
    assert_eq!(noon.front_state, FrontState::DormantOpen);
    assert!(!monitor.is_frozen());

    let frozen = monitor.tick(TimeDial::new(3.0), &Orientation::default(), true);
    assert_eq!(frozen, noon);
    assert!(monitor.is_frozen());
    let still = monitor.tick(TimeDial::new(19.0), &Orientation::default(), true);
    assert_eq!(still, noon);
}

#[test]
fn time_dial_ignores_non_finite_updates() {
    let mut dial = TimeDial::new(9.5);
    dial.set(f32::INFINITY);
    assert_eq!(dial.hour(), 9.5);
    dial.set(30.0);
    assert_eq!(dial.hour(), 6.0);
}

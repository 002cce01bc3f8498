use bevy_math::{Dir3, Ray3d, Vec2, Vec3};
use puzzlebox_engine::picker::{face_for_triangle, FACE_TRIANGLE_RANGES};
use puzzlebox_engine::{Face, FacePicker, Orientation, PickCamera};
use std::f32::consts::{FRAC_PI_2, PI};

// Slightly off the middle so the ray never runs along a triangle diagonal
fn center(camera: &PickCamera) -> Vec2 {
    camera.viewport / 2.0 + Vec2::new(13.0, 7.0)
}

#[test]
fn center_click_hits_front_at_rest() {
    let camera = PickCamera::default();
    let picker = FacePicker::default();
    assert_eq!(
        picker.pick(center(&camera), &camera, &Orientation::default()),
        Some(Face::Front)
    );
}

#[test]
fn rotation_changes_the_face_under_the_pointer() {
    let camera = PickCamera::default();
    let picker = FacePicker::default();
    let cases = [
        (Orientation::new(0.0, FRAC_PI_2), Face::Left),
        (Orientation::new(0.0, -FRAC_PI_2), Face::Right),
        (Orientation::new(0.0, PI), Face::Back),
        (Orientation::new(FRAC_PI_2, 0.0), Face::Top),
        (Orientation::new(-FRAC_PI_2, 0.0), Face::Bottom),
    ];
    for (orientation, expected) in cases {
        assert_eq!(
            picker.pick(center(&camera), &camera, &orientation),
            Some(expected),
            "{orientation:?}"
        );
    }
}

#[test]
fn unnormalized_angles_wrap_implicitly() {
    let camera = PickCamera::default();
    let picker = FacePicker::default();
    let orientation = Orientation::new(0.0, 2.0 * PI + FRAC_PI_2);
    assert_eq!(picker.pick(center(&camera), &camera, &orientation), Some(Face::Left));
}

#[test]
fn corner_click_misses() {
    let camera = PickCamera::default();
    let picker = FacePicker::default();
    assert_eq!(picker.pick(Vec2::ZERO, &camera, &Orientation::default()), None);
}

#[test]
fn degenerate_viewport_picks_nothing() {
    let camera = PickCamera {
        viewport: Vec2::ZERO,
        ..PickCamera::default()
    };
    let picker = FacePicker::default();
    assert_eq!(picker.pick(Vec2::ZERO, &camera, &Orientation::default()), None);
}

#[test]
fn external_rays_resolve_the_same_way() {
    let picker = FacePicker::default();
    let from_above = Ray3d {
        origin: Vec3::new(0.2, 10.0, -0.3),
        direction: Dir3::NEG_Y,
    };
    assert_eq!(picker.pick_ray(&from_above, &Orientation::default()), Some(Face::Top));

    let pointing_away = Ray3d {
        origin: Vec3::new(0.0, 0.0, 10.0),
        direction: Dir3::Z,
    };
    assert_eq!(picker.pick_ray(&pointing_away, &Orientation::default()), None);
}

#[test]
fn range_table_covers_every_triangle_once() {
    let mut seen = Vec::new();
    for (range, face) in FACE_TRIANGLE_RANGES.iter() {
        for index in range.clone() {
            assert_eq!(face_for_triangle(index), Some(*face));
            seen.push(index);
        }
    }
    seen.sort_unstable();
    assert_eq!(seen, (0..12).collect::<Vec<_>>());
}

//! Face picking: screen point + camera + orientation -> face.

use bevy_math::{Dir3, Ray3d, Vec2, Vec3};
use std::ops::Range;

use crate::constants::camera_3d_constants::{
    CAMERA_3D_FOV_Y_RAD, CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z,
    DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH,
};
use crate::constants::cube_constants::{CUBE_HALF_EXTENT, CUBE_TRIANGLE_COUNT, RAY_EPSILON};
use crate::face::Face;
use crate::orientation::Orientation;

/// Triangle index ranges of each surface group, in mesh order.
pub const FACE_TRIANGLE_RANGES: [(Range<usize>, Face); 6] = [
    (0..2, Face::Front),
    (2..4, Face::Back),
    (4..6, Face::Left),
    (6..8, Face::Right),
    (8..10, Face::Top),
    (10..12, Face::Bottom),
];

/// Resolves a triangle index to its surface group.
pub fn face_for_triangle(index: usize) -> Option<Face> {
    FACE_TRIANGLE_RANGES
        .iter()
        .find(|(range, _)| range.contains(&index))
        .map(|(_, face)| *face)
}

/// Pinhole camera used to turn screen points into world rays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_y: f32,
    /// Viewport size in pixels, origin top-left.
    pub viewport: Vec2,
}

impl Default for PickCamera {
    fn default() -> Self {
        Self {
            position: Vec3::new(CAMERA_3D_INITIAL_X, CAMERA_3D_INITIAL_Y, CAMERA_3D_INITIAL_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: CAMERA_3D_FOV_Y_RAD,
            viewport: Vec2::new(DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT),
        }
    }
}

impl PickCamera {
    /// World ray through a screen point, or `None` for a degenerate camera.
    pub fn ray_through(&self, screen: Vec2) -> Option<Ray3d> {
        if self.viewport.x <= 0.0 || self.viewport.y <= 0.0 {
            return None;
        }
        let forward = (self.target - self.position).try_normalize()?;
        let right = forward.cross(self.up).try_normalize()?;
        let up = right.cross(forward);

        let ndc_x = 2.0 * screen.x / self.viewport.x - 1.0;
        let ndc_y = 1.0 - 2.0 * screen.y / self.viewport.y;
        let half_height = (self.fov_y * 0.5).tan();
        let aspect = self.viewport.x / self.viewport.y;

        let direction = forward + right * (ndc_x * half_height * aspect) + up * (ndc_y * half_height);
        let direction = Dir3::new(direction).ok()?;
        Some(Ray3d {
            origin: self.position,
            direction,
        })
    }
}

/// The cube's 12 triangles in local space, grouped per `FACE_TRIANGLE_RANGES`.
pub fn cube_triangles(half_extent: f32) -> [[Vec3; 3]; CUBE_TRIANGLE_COUNT] {
    let mut triangles = [[Vec3::ZERO; 3]; CUBE_TRIANGLE_COUNT];
    for (face_slot, (_, face)) in FACE_TRIANGLE_RANGES.iter().enumerate() {
        let normal = face.normal();
        // Any axis not parallel to the normal gives a tangent frame
        let helper = if normal.y.abs() > 0.5 { Vec3::Z } else { Vec3::Y };
        let u = normal.cross(helper).normalize() * half_extent;
        let v = normal.cross(u).normalize() * half_extent;
        let center = normal * half_extent;

        let corners = [center - u - v, center + u - v, center + u + v, center - u + v];
        triangles[face_slot * 2] = [corners[0], corners[1], corners[2]];
        triangles[face_slot * 2 + 1] = [corners[0], corners[2], corners[3]];
    }
    triangles
}

/// Möller–Trumbore; returns the distance along the ray when it hits.
fn intersect_triangle(origin: Vec3, direction: Vec3, triangle: &[Vec3; 3]) -> Option<f32> {
    let edge1 = triangle[1] - triangle[0];
    let edge2 = triangle[2] - triangle[0];
    let p = direction.cross(edge2);
    let det = edge1.dot(p);
    if det.abs() < RAY_EPSILON {
        return None;
    }
    let inv_det = 1.0 / det;
    let s = origin - triangle[0];
    let u = s.dot(p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }
    let q = s.cross(edge1);
    let v = direction.dot(q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }
    let t = edge2.dot(q) * inv_det;
    (t > RAY_EPSILON).then_some(t)
}

/// Maps pointer rays onto the rotated cube.
#[derive(Clone, Debug)]
pub struct FacePicker {
    triangles: [[Vec3; 3]; CUBE_TRIANGLE_COUNT],
}

impl Default for FacePicker {
    fn default() -> Self {
        Self::new(CUBE_HALF_EXTENT)
    }
}

impl FacePicker {
    pub fn new(half_extent: f32) -> Self {
        Self {
            triangles: cube_triangles(half_extent),
        }
    }

    pub fn pick(&self, screen: Vec2, camera: &PickCamera, orientation: &Orientation) -> Option<Face> {
        let ray = camera.ray_through(screen)?;
        self.pick_ray(&ray, orientation)
    }

    /// Nearest triangle hit by `ray` against the cube rotated by `orientation`.
    pub fn pick_ray(&self, ray: &Ray3d, orientation: &Orientation) -> Option<Face> {
        // Bring the ray into cube-local space instead of rotating every triangle
        let inverse = orientation.rotation().inverse();
        let origin = inverse * ray.origin;
        let direction = inverse * *ray.direction;

        self.triangles
            .iter()
            .enumerate()
            .filter_map(|(index, triangle)| {
                intersect_triangle(origin, direction, triangle).map(|t| (index, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .and_then(|(index, _)| face_for_triangle(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangles_face_outwards() {
        for (index, triangle) in cube_triangles(1.0).iter().enumerate() {
            let face = face_for_triangle(index).unwrap();
            let winding = (triangle[1] - triangle[0]).cross(triangle[2] - triangle[0]);
            assert!(winding.dot(face.normal()) > 0.0, "{face} triangle {index} faces inwards");
        }
    }

    #[test]
    fn out_of_table_index_has_no_face() {
        assert_eq!(face_for_triangle(CUBE_TRIANGLE_COUNT), None);
    }
}

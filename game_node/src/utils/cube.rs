//! Logic for spawning the puzzle box: a wooden body with one panel per face.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::utils::objects::{FacePanel, GameEntity, PuzzleCube, RotableComponent};
use puzzlebox_engine::constants::cube_constants::*;
use puzzlebox_engine::Face;

pub fn rgba(c: [f32; 4]) -> Color {
    Color::srgba(c[0], c[1], c[2], c[3])
}

/// Local frame of a face: (normal, right, up), with `right x up = normal`.
fn face_frame(face: Face) -> (Vec3, Vec3, Vec3) {
    let normal = face.normal();
    let (right, up) = match face {
        Face::Front => (Vec3::X, Vec3::Y),
        Face::Back => (Vec3::NEG_X, Vec3::Y),
        Face::Left => (Vec3::Z, Vec3::Y),
        Face::Right => (Vec3::NEG_Z, Vec3::Y),
        Face::Top => (Vec3::X, Vec3::NEG_Z),
        Face::Bottom => (Vec3::X, Vec3::Z),
    };
    (normal, right, up)
}

/// Glyph carved on each panel: (points, inner radius ratio). A ratio of 1 is a
/// plain polygon, anything lower a star.
fn glyph_shape(face: Face) -> (usize, f32) {
    match face {
        Face::Front => (8, 0.55),
        Face::Back => (3, 1.0),
        Face::Left => (4, 1.0),
        Face::Right => (24, 1.0),
        Face::Top => (5, 0.4),
        Face::Bottom => (6, 1.0),
    }
}

/// Flat quad centred on `center`, spanning `half` along `right` and `up`.
fn create_panel_mesh(center: Vec3, half: f32, right: Vec3, up: Vec3, normal: Vec3) -> Mesh {
    let corners = [
        center - right * half - up * half,
        center + right * half - up * half,
        center + right * half + up * half,
        center - right * half + up * half,
    ];
    let positions: Vec<[f32; 3]> = corners.iter().map(|c| c.to_array()).collect();
    let normals = vec![normal.to_array(); 4];
    let uvs = vec![[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(vec![0, 1, 2, 0, 2, 3]));
    mesh
}

/// Triangle fan around `center`; alternating vertices use `inner_ratio`.
fn create_glyph_mesh(
    center: Vec3,
    radius: f32,
    right: Vec3,
    up: Vec3,
    normal: Vec3,
    points: usize,
    inner_ratio: f32,
) -> Mesh {
    let star = inner_ratio < 1.0;
    let rim = if star { points * 2 } else { points };
    let start_angle = std::f32::consts::FRAC_PI_2; // Start from top

    let mut positions = vec![center.to_array()];
    let mut uvs = vec![[0.5, 0.5]];
    for i in 0..rim {
        let angle = start_angle + i as f32 * std::f32::consts::TAU / rim as f32;
        let r = if star && i % 2 == 1 { radius * inner_ratio } else { radius };
        let (x, y) = (angle.cos() * r, angle.sin() * r);
        positions.push((center + right * x + up * y).to_array());
        uvs.push([x / radius * 0.5 + 0.5, 0.5 - y / radius * 0.5]);
    }

    let mut indices = Vec::with_capacity(rim * 3);
    for i in 1..=rim as u32 {
        let next = if i == rim as u32 { 1 } else { i + 1 };
        indices.extend_from_slice(&[0, i, next]);
    }

    let mut mesh = Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default());
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, vec![normal.to_array(); positions.len()]);
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, positions);
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Spawns the box at the origin. Its rotation is driven by the session orientation.
pub fn spawn_cube(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    materials: &mut ResMut<Assets<StandardMaterial>>,
    rotation: Quat,
) -> Entity {
    let body = meshes.add(Cuboid::from_length(CUBE_HALF_EXTENT * 2.0));
    let body_material = materials.add(StandardMaterial {
        base_color: rgba(BODY_COLOR),
        perceptual_roughness: 0.9,
        ..default()
    });

    let mut panels = Vec::with_capacity(Face::ALL.len());
    for face in Face::ALL {
        let (normal, right, up) = face_frame(face);
        let center = normal * (CUBE_HALF_EXTENT + FACE_PANEL_OFFSET);
        let panel = create_panel_mesh(center, CUBE_HALF_EXTENT * FACE_PANEL_SCALE, right, up, normal);

        let (points, inner_ratio) = glyph_shape(face);
        let glyph = create_glyph_mesh(
            center + normal * FACE_PANEL_OFFSET,
            CUBE_HALF_EXTENT * GLYPH_RADIUS_FRACTION,
            right,
            up,
            normal,
            points,
            inner_ratio,
        );
        panels.push((face, meshes.add(panel), meshes.add(glyph)));
    }
    let glyph_material = materials.add(StandardMaterial {
        base_color: rgba(GLYPH_COLOR),
        unlit: true,
        ..default()
    });

    let mut cube = commands.spawn((
        Transform::from_rotation(rotation),
        Visibility::default(),
        PuzzleCube,
        RotableComponent,
        GameEntity,
    ));
    cube.with_children(|parent| {
        parent.spawn((Mesh3d(body), MeshMaterial3d(body_material)));
        for (face, panel, glyph) in panels {
            let color = if face == Face::Front { FRONT_AWAKE_COLOR } else { PANEL_COLOR };
            parent.spawn((
                Mesh3d(panel),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: rgba(color),
                    perceptual_roughness: 0.6,
                    ..default()
                })),
                FacePanel { face },
            ));
            parent.spawn((Mesh3d(glyph), MeshMaterial3d(glyph_material.clone())));
        }
    });
    cube.id()
}

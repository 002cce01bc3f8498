//! Setup logic: lights, the box, the UI text nodes and the ambient track.
use bevy::prelude::*;

use crate::log;
use crate::utils::cube::spawn_cube;
use crate::utils::objects::*;
use puzzlebox_engine::constants::game_constants::{
    AMBIENT_TRACK_PATH, FORM_FONT_SIZE, STATUS_FONT_SIZE, UI_MARGIN_PX,
};
use puzzlebox_engine::constants::lighting_constants::{
    AMBIENT_BRIGHTNESS_SCALE, BACKGROUND_NIGHT_COLOR, DIRECTIONAL_LIGHT_ILLUMINANCE,
};

/// Persistent scene entities: lights and background.
pub fn setup_environment(mut commands: Commands, session: Res<SessionResource>) {
    commands.spawn((
        DirectionalLight {
            illuminance: DIRECTIONAL_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(3.0, 8.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    let brightness = session.0.environment().brightness;
    commands.insert_resource(GlobalAmbientLight {
        color: Color::WHITE,
        brightness: brightness * AMBIENT_BRIGHTNESS_SCALE,
        affects_lightmapped_meshes: true,
    });

    let [r, g, b] = BACKGROUND_NIGHT_COLOR;
    commands.insert_resource(ClearColor(Color::srgb(r, g, b)));

    log!("🌍 Environment Setup Complete");
}

/// Spawns the box in its current orientation. Marked `GameEntity`.
pub fn setup_box(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    session: Res<SessionResource>,
) {
    let rotation = session.0.orientation().rotation();
    let cube = spawn_cube(&mut commands, &mut meshes, &mut materials, rotation);
    debug!("Spawned puzzle box {cube:?}");
}

/// Status line at the top left, puzzle form at the bottom.
pub fn setup_ui(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: STATUS_FONT_SIZE,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.85)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(UI_MARGIN_PX),
            left: Val::Px(UI_MARGIN_PX),
            ..default()
        },
        StatusText,
        UIEntity,
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: FORM_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(UI_MARGIN_PX),
            left: Val::Px(UI_MARGIN_PX),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.05, 0.05, 0.05, 0.6)),
        FormText,
        UIEntity,
    ));
}

/// Looping ambient track. A missing asset only produces a warning from the
/// asset server.
pub fn setup_ambient_track(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        AudioPlayer::new(asset_server.load(AMBIENT_TRACK_PATH)),
        PlaybackSettings::LOOP,
        AmbientTrack,
    ));
}

//! Core game and UI functions: the keyboard puzzle form, status text, face
//! visuals and the completion certificate.
use bevy::prelude::*;
use bevy::text::Justify;
use std::f32::consts::PI;

use crate::utils::cube::rgba;
use crate::utils::objects::*;
use puzzlebox_engine::constants::constellation_constants::{PARAM_COUNT, PARAM_NAMES};
use puzzlebox_engine::constants::cube_constants::{
    FRONT_AWAKE_COLOR, FRONT_DORMANT_CLOSED_COLOR, FRONT_DORMANT_OPEN_COLOR, PANEL_COLOR,
    SOLVED_PANEL_COLOR,
};
use puzzlebox_engine::constants::environment_constants::HOURS_PER_DAY;
use puzzlebox_engine::constants::game_constants::{CERTIFICATE_FONT_SIZE, UI_REFERENCE_HEIGHT};
use puzzlebox_engine::constants::lighting_constants::{
    AMBIENT_BRIGHTNESS_SCALE, BACKGROUND_DAY_COLOR, BACKGROUND_NIGHT_COLOR,
};
use puzzlebox_engine::constants::tincture_constants::{TINCTURE_SLIDER_MAX, TINCTURE_SLIDER_MIN};
use puzzlebox_engine::constants::valve_constants::PHASE_TARGETS;
use puzzlebox_engine::constants::ward_constants::WARD_OPTIONS;
use puzzlebox_engine::puzzles::valves::pressures;
use puzzlebox_engine::{
    ConfirmOutcome, EditOutcome, Face, FrontState, ParamStatus, PuzzleEvent, PuzzleInput, Session,
};

const DIGIT_KEYS: [(KeyCode, char); 10] = [
    (KeyCode::Digit0, '0'),
    (KeyCode::Digit1, '1'),
    (KeyCode::Digit2, '2'),
    (KeyCode::Digit3, '3'),
    (KeyCode::Digit4, '4'),
    (KeyCode::Digit5, '5'),
    (KeyCode::Digit6, '6'),
    (KeyCode::Digit7, '7'),
    (KeyCode::Digit8, '8'),
    (KeyCode::Digit9, '9'),
];

const MAX_RICE_DIGITS: usize = 6;
const TINCTURE_NAMES: [&str; 3] = ["wormwood", "rue", "honey"];

/// Number of selectable fields on a face's form.
fn field_count(face: Face) -> usize {
    match face {
        Face::Back => 4,
        Face::Left => 1,
        Face::Top => PARAM_COUNT,
        Face::Bottom => TINCTURE_NAMES.len(),
        Face::Front | Face::Right => 0,
    }
}

/// What the form currently holds for `face`, as an attempt input.
fn snapshot(face: Face, form: &PuzzleForm, session: &Session) -> PuzzleInput {
    match face {
        Face::Front => PuzzleInput::Bloom,
        Face::Back => PuzzleInput::Valves(form.valves),
        Face::Left => PuzzleInput::Ward(WARD_OPTIONS[form.ward].to_string()),
        Face::Right => PuzzleInput::Rice(form.rice.clone()),
        Face::Top => PuzzleInput::Constellation(session.machine().constellation_params()),
        Face::Bottom => PuzzleInput::Tincture(form.tincture),
    }
}

fn adjust_field(face: Face, step: i32, form: &mut PuzzleForm, session: &mut Session) {
    match face {
        Face::Back => {
            let dial = match form.field {
                0 => &mut form.valves.heart,
                1 => &mut form.valves.resistance,
                2 => &mut form.valves.compliance,
                _ => &mut form.valves.shunt,
            };
            // Three positions, so stepping back is two steps forward
            *dial = if step > 0 { dial.cycle() } else { dial.cycle().cycle() };
        }
        Face::Left => {
            let count = WARD_OPTIONS.len() as i32;
            form.ward = (form.ward as i32 + step.signum()).rem_euclid(count) as usize;
        }
        Face::Bottom => {
            let field = form.field.min(TINCTURE_NAMES.len() - 1);
            let value = &mut form.tincture[field];
            *value = (*value + step.signum()).clamp(TINCTURE_SLIDER_MIN, TINCTURE_SLIDER_MAX);
        }
        Face::Top => {
            let index = form.field;
            let Some(current) = session.machine().constellation_params().get(index).copied() else {
                return;
            };
            match session.edit_parameter(index, current + step as f32) {
                EditOutcome::Locked { requires } => {
                    form.feedback = Some(format!(
                        "The {} is locked until the {requires} face is solved.",
                        PARAM_NAMES[index]
                    ));
                }
                EditOutcome::Stored(_) | EditOutcome::FaceSolved | EditOutcome::UnknownParameter => {}
            }
        }
        Face::Front | Face::Right => {}
    }
}

fn type_digits(keys: &ButtonInput<KeyCode>, form: &mut PuzzleForm) {
    for (key, digit) in DIGIT_KEYS {
        if keys.just_pressed(key) && form.rice.len() < MAX_RICE_DIGITS {
            form.rice.push(digit);
        }
    }
    if keys.just_pressed(KeyCode::Backspace) {
        form.rice.pop();
    }
}

/// Keyboard editing of the open face. Feedback arrives later as `PuzzleMessage`s.
pub fn handle_form_input(
    keys: Res<ButtonInput<KeyCode>>,
    mut session: ResMut<SessionResource>,
    mut form: ResMut<PuzzleForm>,
) {
    let Some(face) = form.face else { return };

    if keys.just_pressed(KeyCode::Escape) {
        session.0.close();
        return;
    }

    if form.awaiting_confirmation {
        let accept = if keys.just_pressed(KeyCode::KeyY) {
            true
        } else if keys.just_pressed(KeyCode::KeyN) {
            false
        } else {
            return;
        };
        form.awaiting_confirmation = false;
        match session.0.confirm(face, accept) {
            ConfirmOutcome::Withdrawn => form.feedback = Some("You put the charm back.".into()),
            ConfirmOutcome::NothingPending => warn!("No pending {face} attempt to confirm"),
            ConfirmOutcome::Resolved(_) => {}
        }
        return;
    }

    let fields = field_count(face);
    if fields > 0 {
        if keys.just_pressed(KeyCode::ArrowDown) {
            form.field = (form.field + 1) % fields;
        }
        if keys.just_pressed(KeyCode::ArrowUp) {
            form.field = (form.field + fields - 1) % fields;
        }
    }

    let boost = if keys.pressed(KeyCode::ShiftLeft) || keys.pressed(KeyCode::ShiftRight) { 10 } else { 1 };
    let step = if keys.just_pressed(KeyCode::ArrowRight) {
        boost
    } else if keys.just_pressed(KeyCode::ArrowLeft) {
        -boost
    } else {
        0
    };
    if step != 0 {
        adjust_field(face, step, &mut form, &mut session.0);
    }

    if face == Face::Right {
        type_digits(&keys, &mut form);
    }

    if keys.just_pressed(KeyCode::Enter) {
        let input = snapshot(face, &form, &session.0);
        let outcome = session.0.attempt(face, input);
        debug!("{face} attempt: {outcome:?}");
    }
}

/// Mirrors state machine events into the form and spawns the certificate.
pub fn apply_puzzle_messages(
    mut reader: MessageReader<PuzzleMessage>,
    mut form: ResMut<PuzzleForm>,
    mut commands: Commands,
    certificates: Query<Entity, With<CertificateOverlay>>,
) {
    for PuzzleMessage(event) in reader.read() {
        match event {
            PuzzleEvent::Opened(face) => form.open(*face),
            PuzzleEvent::Closed(_) => form.close(),
            PuzzleEvent::AlreadySolved { notice, .. } => form.feedback = Some(notice.clone()),
            PuzzleEvent::AwaitingConfirmation(_) => {
                form.awaiting_confirmation = true;
                form.feedback = Some("Are you sure? Y to confirm, N to withdraw.".into());
            }
            PuzzleEvent::PhaseAdvanced { message, .. } | PuzzleEvent::Rejected { message, .. } => {
                form.feedback = Some(message.clone());
            }
            PuzzleEvent::FaceSolved { face, message } => {
                form.feedback = Some(message.clone());
                if form.face == Some(*face) {
                    form.close();
                }
            }
            PuzzleEvent::AllSolved => {
                if certificates.is_empty() {
                    spawn_certificate(&mut commands);
                }
            }
        }
    }
}

fn form_lines(face: Face, form: &PuzzleForm, session: &Session) -> Vec<String> {
    let machine = session.machine();
    let title = machine.puzzles().get(face).title();
    let marker = |index: usize| if form.field == index { ">" } else { " " };
    let mut lines = vec![format!("{face} face: the {title}")];

    match face {
        Face::Front => {
            lines.push("Find the right hour and turn the box, then press Enter.".into());
        }
        Face::Back => {
            let p = pressures(&form.valves);
            lines.push(format!(
                "Phase {}/{}: {}/{} (MAP {:.1})",
                machine.phase(face) + 1,
                PHASE_TARGETS.len(),
                p.systolic,
                p.diastolic,
                p.mean_arterial
            ));
            let dials = [
                ("heart", form.valves.heart),
                ("resistance", form.valves.resistance),
                ("compliance", form.valves.compliance),
                ("shunt", form.valves.shunt),
            ];
            for (index, (name, dial)) in dials.iter().enumerate() {
                lines.push(format!("{} {name:<11} {dial:?}", marker(index)));
            }
        }
        Face::Left => {
            for (index, option) in WARD_OPTIONS.iter().enumerate() {
                let chosen = if form.ward == index { ">" } else { " " };
                lines.push(format!("{chosen} {option}"));
            }
        }
        Face::Right => lines.push(format!("Grains: {}_", form.rice)),
        Face::Top => {
            let params = machine.constellation_params();
            for (index, value) in params.iter().enumerate() {
                let locked = match machine.param_status(index) {
                    Some(ParamStatus::Editable) => "",
                    _ => "  (locked)",
                };
                lines.push(format!("{} {:<12} {value:>5.0}{locked}", marker(index), PARAM_NAMES[index]));
            }
        }
        Face::Bottom => {
            for (index, (name, value)) in TINCTURE_NAMES.iter().zip(form.tincture).enumerate() {
                lines.push(format!("{} {name:<9} {value}", marker(index)));
            }
        }
    }

    lines.push("Up/Down select, Left/Right change, Enter try, Esc close".into());
    lines
}

pub fn update_form_text(
    session: Res<SessionResource>,
    form: Res<PuzzleForm>,
    mut query: Query<&mut Text, With<FormText>>,
) {
    let Ok(mut text) = query.single_mut() else {
        return;
    };
    let mut lines = match form.face {
        Some(face) => form_lines(face, &form, &session.0),
        None => vec!["Click a face to open its puzzle. Drag to turn the box.".into()],
    };
    if let Some(feedback) = &form.feedback {
        lines.push(feedback.clone());
    }
    let content = lines.join("\n");
    if text.0 != content {
        text.0 = content;
    }
}

pub fn update_status_text(
    session: Res<SessionResource>,
    environment: Res<EnvironmentState>,
    mut query: Query<&mut Text, With<StatusText>>,
) {
    let (Ok(mut text), Some(reading)) = (query.single_mut(), environment.0) else {
        return;
    };
    let hour = session.0.hour();
    let minutes = (hour.fract() * 60.0).round() as u32 % 60;
    let solved: Vec<String> = Face::ALL
        .into_iter()
        .filter(|face| session.0.machine().is_solved(*face))
        .map(|face| face.to_string())
        .collect();

    let content = format!(
        "{:02}:{minutes:02}  front: {}  light {:.2}\nsolved {}/6 {}\n[ ] time   R reset   M audio",
        hour.floor() as u32,
        reading.front_state.as_str(),
        reading.brightness,
        solved.len(),
        solved.join(", "),
    );
    if text.0 != content {
        text.0 = content;
    }
}

/// Solved panels are greyed out; the front panel follows the front state.
fn panel_color(face: Face, solved: bool, front_state: FrontState) -> [f32; 4] {
    if solved {
        return SOLVED_PANEL_COLOR;
    }
    match (face, front_state) {
        (Face::Front, FrontState::Awake) => FRONT_AWAKE_COLOR,
        (Face::Front, FrontState::DormantClosed) => FRONT_DORMANT_CLOSED_COLOR,
        (Face::Front, FrontState::DormantOpen) => FRONT_DORMANT_OPEN_COLOR,
        _ => PANEL_COLOR,
    }
}

pub fn update_face_panels(
    session: Res<SessionResource>,
    environment: Res<EnvironmentState>,
    panels: Query<(&FacePanel, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(reading) = environment.0 else { return };
    for (panel, material_handle) in &panels {
        let solved = session.0.machine().is_solved(panel.face);
        let color = panel_color(panel.face, solved, reading.front_state);
        let color = rgba(color);
        let stale = materials
            .get(&material_handle.0)
            .is_some_and(|material| material.base_color != color);
        if stale {
            if let Some(material) = materials.get_mut(&material_handle.0) {
                material.base_color = color;
            }
        }
    }
}

/// Ambient light follows the brightness curve; the sky fades with the sun.
pub fn update_lighting(
    environment: Res<EnvironmentState>,
    ambient_light: Option<ResMut<GlobalAmbientLight>>,
    mut clear_color: ResMut<ClearColor>,
) {
    let Some(reading) = environment.0 else { return };
    if let Some(mut ambient) = ambient_light {
        ambient.brightness = reading.brightness * AMBIENT_BRIGHTNESS_SCALE;
    }

    let t = (reading.hour / HOURS_PER_DAY * PI).sin().clamp(0.0, 1.0);
    let [nr, ng, nb] = BACKGROUND_NIGHT_COLOR;
    let [dr, dg, db] = BACKGROUND_DAY_COLOR;
    clear_color.0 = Color::srgb(nr + (dr - nr) * t, ng + (dg - ng) * t, nb + (db - nb) * t);
}

/// Fullscreen completion certificate, closed with C.
pub fn spawn_certificate(commands: &mut Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.03, 0.02, 0.85)),
            GlobalZIndex(1000),
            CertificateOverlay,
            UIEntity,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Certificate of Completion\n\nAll six faces of the box are solved.\n\nPress C to close."),
                TextFont {
                    font_size: CERTIFICATE_FONT_SIZE,
                    ..default()
                },
                TextColor(Color::srgb(0.95, 0.85, 0.5)),
                TextLayout::new_with_justify(Justify::Center),
            ));
        });
    info!("Certificate shown");
}

pub fn close_certificate(
    keys: Res<ButtonInput<KeyCode>>,
    mut commands: Commands,
    certificates: Query<Entity, With<CertificateOverlay>>,
) {
    if !keys.just_pressed(KeyCode::KeyC) {
        return;
    }
    for entity in &certificates {
        commands.entity(entity).despawn();
    }
}

/// Updates UI scale based on window size, relative to a 1080p reference.
pub fn update_ui_scale(mut ui_scale: ResMut<UiScale>, window_query: Query<&Window>) {
    let Ok(window) = window_query.single() else {
        return;
    };
    let scale = (window.height() / UI_REFERENCE_HEIGHT).clamp(0.5, 2.0);
    if ui_scale.0 != scale {
        ui_scale.0 = scale;
    }
}

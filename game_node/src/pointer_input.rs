//! Pointer input
//! Collects mouse and touch input into `PendingPointer` during `PreUpdate`; the
//! queue is applied to the session in `Update`, in arrival order.

use bevy::input::InputSystems;
use bevy::prelude::*;
use bevy::window::{CursorLeft, CursorMoved, PrimaryWindow};

use crate::utils::objects::{PersistentCamera, SessionResource};
use puzzlebox_engine::ClickOutcome;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up(Vec2),
    Leave,
}

#[derive(Resource, Default)]
pub struct PendingPointer(pub Vec<PointerEvent>);

/// Touch currently driving the gesture; other fingers are ignored.
#[derive(Resource, Default)]
pub struct ActiveTouch(pub Option<u64>);

pub struct PointerInputPlugin;

impl Plugin for PointerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingPointer>()
            .init_resource::<ActiveTouch>()
            .add_systems(
                PreUpdate,
                (clear_pending_pointer, read_mouse, read_touches)
                    .chain()
                    .after(InputSystems),
            );
    }
}

fn clear_pending_pointer(mut pending: ResMut<PendingPointer>) {
    pending.0.clear();
}

fn read_mouse(
    buttons: Res<ButtonInput<MouseButton>>,
    mut cursor_moved: MessageReader<CursorMoved>,
    mut cursor_left: MessageReader<CursorLeft>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut pending: ResMut<PendingPointer>,
) {
    let cursor = windows.single().ok().and_then(Window::cursor_position);
    let moves: Vec<Vec2> = cursor_moved.read().map(|moved| moved.position).collect();
    let frame = MouseFrame {
        pressed: buttons.just_pressed(MouseButton::Left),
        released: buttons.just_released(MouseButton::Left),
        cursor,
        left: cursor_left.read().count() > 0,
    };
    pending.0.extend(frame.events(&moves));
}

/// Mouse state sampled once per frame.
#[derive(Clone, Copy, Debug, Default)]
struct MouseFrame {
    pressed: bool,
    released: bool,
    cursor: Option<Vec2>,
    left: bool,
}

impl MouseFrame {
    /// Orders one frame of mouse input. Moves are queued before the press so
    /// the press lands where the cursor ended up and a still click stays a click.
    fn events(&self, moves: &[Vec2]) -> Vec<PointerEvent> {
        let mut events: Vec<PointerEvent> = moves.iter().copied().map(PointerEvent::Move).collect();
        let last = moves.last().copied().or(self.cursor);

        if self.pressed {
            if let Some(point) = last {
                events.push(PointerEvent::Down(point));
            }
        }
        if self.released {
            events.push(last.map_or(PointerEvent::Leave, PointerEvent::Up));
        }
        if self.left {
            events.push(PointerEvent::Leave);
        }
        events
    }
}

fn read_touches(
    touches: Res<Touches>,
    mut active: ResMut<ActiveTouch>,
    mut pending: ResMut<PendingPointer>,
) {
    for touch in touches.iter_just_pressed() {
        if active.0.is_none() {
            active.0 = Some(touch.id());
            pending.0.push(PointerEvent::Down(touch.position()));
        }
    }

    for touch in touches.iter() {
        if Some(touch.id()) == active.0 && touch.delta() != Vec2::ZERO {
            pending.0.push(PointerEvent::Move(touch.position()));
        }
    }

    for touch in touches.iter_just_released() {
        if Some(touch.id()) == active.0 {
            active.0 = None;
            pending.0.push(PointerEvent::Up(touch.position()));
        }
    }

    for touch in touches.iter_just_canceled() {
        if Some(touch.id()) == active.0 {
            active.0 = None;
            pending.0.push(PointerEvent::Leave);
        }
    }
}

/// Feeds the queued pointer events to the session. Releases that were not
/// drags are picked with a ray from the game camera, or with the engine's
/// pick camera when there is none.
pub fn apply_pending_pointer(
    pending: Res<PendingPointer>,
    mut session: ResMut<SessionResource>,
    camera_query: Query<(&Camera, &GlobalTransform), With<PersistentCamera>>,
) {
    for event in &pending.0 {
        match *event {
            PointerEvent::Down(point) => session.0.pointer_down(point),
            PointerEvent::Move(point) => session.0.pointer_move(point),
            PointerEvent::Leave => session.0.pointer_leave(),
            PointerEvent::Up(point) => {
                let ray = camera_query
                    .single()
                    .ok()
                    .and_then(|(camera, transform)| camera.viewport_to_world(transform, point).ok());
                let pick_camera = *session.0.camera();
                let outcome = session.0.pointer_up_with(|picker, orientation| match ray {
                    Some(ray) => picker.pick_ray(&ray, orientation),
                    None => picker.pick(point, &pick_camera, orientation),
                });
                match outcome {
                    ClickOutcome::Missed => debug!("Click at {point} missed the box"),
                    ClickOutcome::Opened(face) => debug!("Click at {point} opened the {face} face"),
                    ClickOutcome::Ignored | ClickOutcome::Dragged | ClickOutcome::AlreadySolved { .. } => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use puzzlebox_engine::{Face, Session};

    fn replay(session: &mut Session, events: &[PointerEvent]) -> Vec<ClickOutcome> {
        let mut outcomes = Vec::new();
        for event in events {
            match *event {
                PointerEvent::Down(point) => session.pointer_down(point),
                PointerEvent::Move(point) => session.pointer_move(point),
                PointerEvent::Leave => session.pointer_leave(),
                PointerEvent::Up(point) => outcomes.push(session.pointer_up(point)),
            }
        }
        outcomes
    }

    #[test]
    fn moves_in_the_press_frame_come_before_the_press() {
        let press = MouseFrame {
            pressed: true,
            cursor: Some(Vec2::new(653.0, 367.0)),
            ..default()
        };
        let events = press.events(&[Vec2::new(650.0, 365.0), Vec2::new(653.0, 367.0)]);
        assert_eq!(
            events,
            vec![
                PointerEvent::Move(Vec2::new(650.0, 365.0)),
                PointerEvent::Move(Vec2::new(653.0, 367.0)),
                PointerEvent::Down(Vec2::new(653.0, 367.0)),
            ]
        );
    }

    #[test]
    fn still_click_with_jitter_in_the_press_frame_opens_the_front() {
        let mut session = Session::default();
        let press = MouseFrame {
            pressed: true,
            cursor: Some(Vec2::new(653.0, 367.0)),
            ..default()
        };
        let release = MouseFrame {
            released: true,
            cursor: Some(Vec2::new(653.0, 367.0)),
            ..default()
        };

        let mut events = press.events(&[Vec2::new(650.0, 365.0), Vec2::new(653.0, 367.0)]);
        events.extend(release.events(&[]));
        assert_eq!(replay(&mut session, &events), vec![ClickOutcome::Opened(Face::Front)]);
    }

    #[test]
    fn release_without_a_cursor_ends_the_gesture() {
        let release = MouseFrame {
            released: true,
            left: true,
            ..default()
        };
        assert_eq!(release.events(&[]), vec![PointerEvent::Leave, PointerEvent::Leave]);
    }
}

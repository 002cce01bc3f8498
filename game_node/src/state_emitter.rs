//! This module forwards the engine's queued puzzle events into the ECS after
//! every game loop update, and reports them to the player.

use bevy::prelude::*;

use crate::log;
use crate::utils::objects::{PuzzleMessage, SessionResource};
use puzzlebox_engine::PuzzleEvent;

pub struct StateEmitterPlugin;

impl Plugin for StateEmitterPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<PuzzleMessage>()
            .add_systems(PostUpdate, (emit_puzzle_events, report_puzzle_events).chain());
    }
}

// Drain the session's event queue in order.
fn emit_puzzle_events(mut session: ResMut<SessionResource>, mut writer: MessageWriter<PuzzleMessage>) {
    for event in session.0.drain_events() {
        writer.write(PuzzleMessage(event));
    }
}

fn report_puzzle_events(mut reader: MessageReader<PuzzleMessage>, session: Res<SessionResource>) {
    for PuzzleMessage(event) in reader.read() {
        match event {
            PuzzleEvent::Opened(face) => {
                let puzzle = session.0.machine().puzzles().get(*face);
                log!("🔍 {face} face: the {} puzzle", puzzle.title());
            }
            PuzzleEvent::Closed(face) => debug!("Closed the {face} puzzle"),
            PuzzleEvent::AlreadySolved { notice, .. } => log!("{notice}"),
            PuzzleEvent::AwaitingConfirmation(face) => {
                log!("❓ Are you sure about the {face} face? (Y/N)")
            }
            PuzzleEvent::PhaseAdvanced { face, phase, message } => {
                info!("{face} puzzle advanced to phase {}", phase + 1);
                log!("{message}");
            }
            PuzzleEvent::Rejected { message, .. } => log!("❌ {message}"),
            PuzzleEvent::FaceSolved { face, message } => {
                log!("✅ {message}");
                info!(
                    "{face} face solved, {}/6 done",
                    session.0.machine().solve_state().solved_count()
                );
            }
            PuzzleEvent::AllSolved => log!("🎉 The box is open!"),
        }
    }
}

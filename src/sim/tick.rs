//! Fixed-order simulation tick
//!
//! One call per rendered frame. The order never changes: camera, directional
//! input, roll, support, fall, goal, then counters and HUD.

use super::block::{Direction, Roll};
use super::input::InputQueue;
use super::state::{GameEvent, GameState, Lifecycle};
use super::support::{Support, check_support};
use crate::consts::*;

/// What the shell should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

/// Advance the game by one frame.
///
/// `now` is wall-clock seconds from any fixed origin; it only drives the
/// seconds counter.
pub fn tick(state: &mut GameState, input: &mut InputQueue, now: f64) -> TickOutcome {
    state.events.clear();
    let frame = input.drain();

    if frame.quit {
        log::info!("Quit requested after {} ticks", state.time_ticks);
        return TickOutcome::Quit;
    }
    state.time_ticks += 1;

    if let Some(mode) = frame.camera {
        if mode != state.camera {
            log::debug!("Camera {} -> {}", state.camera.as_str(), mode.as_str());
        }
        state.camera = mode;
    }

    if frame.dropped > 0 {
        log::debug!("Dropped {} extra directional inputs", frame.dropped);
    }

    let landed = match frame.direction {
        Some(_) if state.is_falling() => {
            state.events.push(GameEvent::InputDiscarded);
            None
        }
        Some(direction) => Some(roll_block(state, direction)),
        None => None,
    };

    advance_fall(state);

    if landed.is_some() {
        check_goal(state);
    }

    if state.clock.advance(now) {
        state.counters.seconds += 1;
    }
    state.refresh_hud();

    TickOutcome::Continue
}

/// Roll the block, press any switch under it and test support
fn roll_block(state: &mut GameState, direction: Direction) -> Roll {
    let roll = state.block.roll(direction);
    state.counters.moves += 1;
    state.events.push(GameEvent::Rolled {
        direction,
        orientation: roll.to,
    });
    log::debug!(
        "Rolled {:?}: {:?} -> {:?} at {}",
        direction,
        roll.from,
        roll.to,
        state.block.position
    );

    let position = state.block.position;
    let orientation = state.block.orientation;

    for (id, active) in state.level.switches.press(position, orientation) {
        log::debug!("Switch {} is now {}", id.0, if active { "on" } else { "off" });
        state.events.push(GameEvent::SwitchToggled { id, active });
    }

    match check_support(&state.level, position, orientation) {
        Support::Supported => {}
        Support::Unsupported => {
            log::debug!("No support at {}", position);
            state.start_falling();
        }
        Support::GaveWay(tile) => {
            log::debug!("Fragile tile {} gave way", tile.0);
            state.level.board.start_sinking(tile);
            state.events.push(GameEvent::TileGaveWay(tile));
            state.start_falling();
        }
    }

    roll
}

/// Drop a falling block one step; respawn once it is past the floor
fn advance_fall(state: &mut GameState) {
    let Lifecycle::Falling { progress } = state.lifecycle else {
        return;
    };

    let progress = progress + FALL_STEP;
    state.level.board.advance_sinking(SINK_STEP);

    if state.block.position.y - progress <= FALL_FLOOR_Y {
        log::debug!("Block fell off the board, respawning");
        state.respawn();
    } else {
        state.lifecycle = Lifecycle::Falling { progress };
    }
}

/// Goal handling for a block that has just landed upright on the goal cell
fn check_goal(state: &mut GameState) {
    if !state.block.is_upright() || state.block.cell() != state.level.goal {
        return;
    }

    match state.level.index.next() {
        Some(next) => {
            log::info!(
                "Level {} cleared in {} moves, {}s",
                state.level.index.number(),
                state.counters.moves,
                state.counters.seconds
            );
            state.advance_level(next);
        }
        None => {
            log::info!(
                "Goal reached on level {} in {} moves",
                state.level.index.number(),
                state.counters.moves
            );
            state.reset_counters();
            state.events.push(GameEvent::Checkpoint);
        }
    }
}

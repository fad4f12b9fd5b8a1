//! # Movement and Transitions
//!
//! One-tile trainer steps with obstacle blocking, map transitions and
//! random encounter rolls.

use crate::config::TILE_SIZE;
use crate::game::{Direction, GameState, Position};
use crate::generation::{roll_encounter, Encounter};
use crate::utils::clamp;
use serde::{Deserialize, Serialize};

/// The player avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    /// Top-left pixel of the trainer within the active map
    pub position: Position,
    pub facing: Direction,
    /// Advanced once per committed step, drives the walk animation
    pub step_frame: u32,
}

impl Trainer {
    /// Creates a trainer at a pixel position.
    pub fn new(position: Position, facing: Direction) -> Self {
        Self {
            position,
            facing,
            step_frame: 0,
        }
    }

    /// Tile currently occupied by the trainer.
    pub fn tile_position(&self) -> Position {
        self.position.to_tile()
    }

    /// Walk animation phase: three frames facing up or down, two sideways.
    pub fn walk_phase(&self) -> u32 {
        match self.facing {
            Direction::Up | Direction::Down => self.step_frame % 3,
            Direction::Left | Direction::Right => self.step_frame % 2,
        }
    }

    fn commit(&mut self, position: Position) {
        self.position = position;
        self.step_frame = self.step_frame.wrapping_add(1);
    }
}

/// Result of a movement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MoveOutcome {
    /// The trainer stepped onto a new tile
    Moved { to: Position },
    /// The destination was an obstacle or outside the grid
    Blocked,
    /// The trainer entered a transition tile and switched maps
    Transitioned { from: usize, to: usize },
    /// A wild encounter started; the trainer stays on the previous tile
    Encountered(Encounter),
}

/// Attempts to move the trainer one tile in `direction`.
///
/// Facing is updated even when the move is rejected. Transition tiles skip
/// the encounter roll. When an encounter triggers, the battle is started on
/// `state` and the trainer's position is left on the tile it stepped from.
pub fn attempt_move(state: &mut GameState, direction: Direction) -> MoveOutcome {
    state.trainer.facing = direction;

    let map = match state.world.current() {
        Ok(map) => map,
        Err(e) => {
            log::debug!("No active map: {}", e);
            return MoveOutcome::Blocked;
        }
    };

    let target = state.trainer.position + direction.to_pixel_offset();
    let candidate = Position::new(
        clamp(target.x, 0, map.pixel_width() - TILE_SIZE),
        clamp(target.y, 0, map.pixel_height() - TILE_SIZE),
    );

    let tile = match map.tile_at_pixel(candidate) {
        Ok(tile) => *tile,
        Err(e) => {
            log::debug!("Invalid tile access: {}", e);
            return MoveOutcome::Blocked;
        }
    };

    if tile.is_obstacle {
        log::debug!("Blocked by an obstacle at {:?}", tile.position);
        return MoveOutcome::Blocked;
    }

    if let Some(target_map) = tile.transition {
        return enter_map(state, target_map);
    }

    if let Some(encounter) = roll_encounter(&tile.spawn, &mut state.rng) {
        state.start_battle(encounter);
        return MoveOutcome::Encountered(encounter);
    }

    state.trainer.commit(candidate);
    MoveOutcome::Moved { to: candidate }
}

fn enter_map(state: &mut GameState, target: usize) -> MoveOutcome {
    let from = state.world.current_map;
    let (from_name, to_name, entry) = match (state.world.map(from), state.world.map(target)) {
        (Ok(src), Ok(dst)) => (src.name, dst.name, dst.entry_point),
        (_, Err(e)) | (Err(e), _) => {
            log::warn!("Broken transition link: {}", e);
            return MoveOutcome::Blocked;
        }
    };

    if let Err(e) = state.world.change_map(target) {
        log::warn!("Could not change map: {}", e);
        return MoveOutcome::Blocked;
    }
    state.trainer.position = entry.to_pixel();

    log::info!("Transitioning from {} to {}", from_name, to_name);
    MoveOutcome::Transitioned { from, to: target }
}

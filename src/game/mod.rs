//! # Game Module
//!
//! Core game state, world representation, creatures and battles.
//!
//! This module contains the fundamental building blocks of Tallgrass:
//! - Creature stats, the move catalog and damage computation
//! - The world grid of maps and tiles
//! - Trainer movement, map transitions and encounter detection
//! - The battle state machine
//! - The owned game state aggregate tying them together

pub mod battle;
pub mod creature;
pub mod movement;
pub mod state;
pub mod world;

pub use battle::*;
pub use creature::*;
pub use movement::*;
pub use state::*;
pub use world::*;

use crate::config::TILE_SIZE;
use serde::{Deserialize, Serialize};

/// Represents a 2D coordinate, either in pixels or in tiles depending on context.
///
/// # Examples
///
/// ```
/// use tallgrass::Position;
///
/// let pos = Position::new(32, 48);
/// assert_eq!(pos.to_tile(), Position::new(2, 3));
/// assert_eq!(pos.to_tile().to_pixel(), pos);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Converts a pixel position to the tile containing it.
    pub fn to_tile(self) -> Self {
        Self::new(self.x.div_euclid(TILE_SIZE), self.y.div_euclid(TILE_SIZE))
    }

    /// Converts a tile position to the pixel position of its top-left corner.
    pub fn to_pixel(self) -> Self {
        Self::new(self.x * TILE_SIZE, self.y * TILE_SIZE)
    }
}

impl std::ops::Add for Position {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Position {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// The four directions a trainer can face and walk in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Converts a direction to a unit delta in tile space.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallgrass::{Direction, Position};
    ///
    /// assert_eq!(Direction::Up.to_delta(), Position::new(0, -1));
    /// ```
    pub fn to_delta(self) -> Position {
        match self {
            Direction::Up => Position::new(0, -1),
            Direction::Right => Position::new(1, 0),
            Direction::Down => Position::new(0, 1),
            Direction::Left => Position::new(-1, 0),
        }
    }

    /// Converts a direction to a one-tile offset in pixel space.
    pub fn to_pixel_offset(self) -> Position {
        self.to_delta().to_pixel()
    }

    /// Signed cursor step for a two-column menu grid.
    ///
    /// Horizontal moves step by one option, vertical moves by a full row.
    pub fn menu_step(self) -> i32 {
        match self {
            Direction::Up => -2,
            Direction::Down => 2,
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    /// Returns all four directions.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ]
    }
}

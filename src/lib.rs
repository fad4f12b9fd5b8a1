//! # Tallgrass
//!
//! The simulation core of a tile-based, turn-based creature adventure.
//!
//! ## Architecture Overview
//!
//! Tallgrass keeps every piece of mutable game data in one owned aggregate
//! and routes discrete events through a single scene switch:
//!
//! - **Creature Model**: species data, move catalog, stat derivation and damage
//! - **World Grid**: fixed-size maps of tiles with obstacles, spawn tables and links
//! - **Movement Controller**: one-tile steps, blocking, map transitions and encounter rolls
//! - **Battle State Machine**: the seven-phase lifecycle of a single wild battle
//! - **Scene Manager**: routes input and tick events to exactly one subsystem
//!
//! Drawing is left to an external collaborator. The core only produces
//! [`RenderFrame`] snapshots describing *what* should be on screen.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;
pub mod scenes;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;
pub use scenes::*;
pub use utils::*;

/// Core error type for the Tallgrass engine.
#[derive(thiserror::Error, Debug)]
pub enum TallgrassError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Game state is invalid
    #[error("Invalid game state: {0}")]
    InvalidState(String),

    /// Map index outside the map collection
    #[error("Invalid map index: {0}")]
    InvalidMap(usize),

    /// Tile coordinates outside the map grid
    #[error("Tile ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },

    /// Command script could not be parsed
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

/// Result type used throughout the Tallgrass codebase.
pub type TallgrassResult<T> = Result<T, TallgrassError>;

/// Version information for the engine.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Game configuration constants.
pub mod config {
    /// Edge length of a square tile in pixels
    pub const TILE_SIZE: i32 = 16;

    /// Map width in tiles
    pub const MAP_WIDTH: usize = 20;

    /// Map height in tiles
    pub const MAP_HEIGHT: usize = 20;

    /// Capacity of the map collection
    pub const MAX_MAPS: usize = 4;

    /// Screen width in pixels
    pub const SCREEN_WIDTH: i32 = 128;

    /// Screen height in pixels
    pub const SCREEN_HEIGHT: i32 = 64;

    /// Move slots per creature
    pub const MAX_MOVES: usize = 4;

    /// Candidate species per spawn table
    pub const MAX_SPAWN_CANDIDATES: usize = 3;

    /// The attack animation must run past this many ticks before it can be dismissed
    pub const ANIMATION_GATE_TICKS: u32 = 20;

    /// Ticks per attack animation frame
    pub const ANIMATION_FRAME_TICKS: u32 = 5;

    /// Number of animation frames during which the defender shakes
    pub const SHAKE_FRAMES: u32 = 3;

    /// Horizontal shake displacement in pixels
    pub const SHAKE_OFFSET: i32 = 2;

    /// Width of a battle HP bar in pixels
    pub const HP_BAR_WIDTH: u32 = 40;
}

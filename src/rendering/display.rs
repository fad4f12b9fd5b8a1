//! # Display Management
//!
//! Camera placement and the visible tile window of the exploration scene.

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE};
use crate::game::{Direction, GameMap, GameState, Position, TileType, Trainer};
use crate::utils::clamp;
use crate::TallgrassResult;
use serde::Serialize;

/// One tile inside the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileView {
    /// Tile coordinates within the map
    pub tile: Position,
    /// Top-left corner on screen, may be partly off screen
    pub screen: Position,
    pub terrain: TileType,
    pub obstacle: bool,
    /// Drawn as a filled box
    pub transition: bool,
}

/// What the exploration screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplorationView {
    pub map_name: &'static str,
    /// Pixel of the map at the screen's top-left corner
    pub camera: Position,
    pub tiles: Vec<TileView>,
    pub trainer_screen: Position,
    pub facing: Direction,
    pub walk_phase: u32,
}

/// Places the camera so the trainer sits near the centre of the screen.
///
/// The camera never scrolls past the map edges.
///
/// # Examples
///
/// ```
/// use tallgrass::{camera_origin, Position};
///
/// assert_eq!(camera_origin(Position::new(32, 32), 320, 320), Position::new(0, 0));
/// assert_eq!(camera_origin(Position::new(160, 160), 320, 320), Position::new(96, 128));
/// assert_eq!(camera_origin(Position::new(304, 304), 320, 320), Position::new(192, 256));
/// ```
pub fn camera_origin(focus: Position, map_pixel_width: i32, map_pixel_height: i32) -> Position {
    Position::new(
        clamp(focus.x - SCREEN_WIDTH / 2, 0, map_pixel_width - SCREEN_WIDTH),
        clamp(focus.y - SCREEN_HEIGHT / 2, 0, map_pixel_height - SCREEN_HEIGHT),
    )
}

/// Tiles intersecting the screen for a camera origin, row by row.
pub fn visible_tiles(map: &GameMap, camera: Position) -> Vec<TileView> {
    let first = camera.to_tile();
    let last = Position::new(camera.x + SCREEN_WIDTH - 1, camera.y + SCREEN_HEIGHT - 1).to_tile();

    let mut tiles = Vec::new();
    for y in first.y..=last.y {
        for x in first.x..=last.x {
            let Ok(tile) = map.tile(x, y) else {
                continue;
            };
            tiles.push(TileView {
                tile: tile.position,
                screen: tile.position.to_pixel() - camera,
                terrain: tile.tile_type,
                obstacle: tile.is_obstacle,
                transition: tile.is_transition(),
            });
        }
    }
    tiles
}

/// Builds the exploration snapshot for the trainer on a map.
pub fn exploration_view(map: &GameMap, trainer: &Trainer) -> ExplorationView {
    let camera = camera_origin(trainer.position, map.pixel_width(), map.pixel_height());
    let on_map = Position::new(
        clamp(trainer.position.x, 0, map.pixel_width() - TILE_SIZE),
        clamp(trainer.position.y, 0, map.pixel_height() - TILE_SIZE),
    );

    ExplorationView {
        map_name: map.name,
        camera,
        tiles: visible_tiles(map, camera),
        trainer_screen: on_map - camera,
        facing: trainer.facing,
        walk_phase: trainer.walk_phase(),
    }
}

/// Builds the exploration snapshot for the active map of a game.
pub fn render_exploration(state: &GameState) -> TallgrassResult<ExplorationView> {
    let map = state.world.current()?;
    Ok(exploration_view(map, &state.trainer))
}

//! # World Grid
//!
//! Fixed-size maps of tiles and the bounded collection holding them.
//!
//! All storage is preallocated: a map is a `MAP_HEIGHT x MAP_WIDTH` array
//! and the world holds at most `MAX_MAPS` maps. Raw indices never leave this
//! module unchecked; accessors return [`TallgrassError`] on a bad index.

use crate::config::{MAP_HEIGHT, MAP_WIDTH, MAX_MAPS, MAX_SPAWN_CANDIDATES, TILE_SIZE};
use crate::game::{Position, Species};
use crate::{TallgrassError, TallgrassResult};
use serde::{Deserialize, Serialize};

/// Terrain drawn for a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Grass,
    Path,
    Tree,
}

/// Wild encounter data for a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnTable {
    /// Percent chance (0-100) of an encounter per step
    pub spawn_rate: u8,
    /// Up to three candidate species
    pub candidates: [Option<Species>; MAX_SPAWN_CANDIDATES],
    pub min_level: u32,
    pub max_level: u32,
}

impl SpawnTable {
    /// A table that never spawns anything.
    pub const NONE: SpawnTable = SpawnTable {
        spawn_rate: 0,
        candidates: [None; MAX_SPAWN_CANDIDATES],
        min_level: 1,
        max_level: 1,
    };

    /// Creates a spawn table, capping the rate at 100 and ordering the level bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallgrass::{SpawnTable, Species};
    ///
    /// let table = SpawnTable::new(150, [Some(Species::Pidgey), None, None], 7, 3);
    /// assert_eq!(table.spawn_rate, 100);
    /// assert_eq!((table.min_level, table.max_level), (3, 7));
    /// ```
    pub fn new(
        spawn_rate: u8,
        candidates: [Option<Species>; MAX_SPAWN_CANDIDATES],
        min_level: u32,
        max_level: u32,
    ) -> Self {
        Self {
            spawn_rate: spawn_rate.min(100),
            candidates,
            min_level: min_level.min(max_level),
            max_level: max_level.max(min_level),
        }
    }

    /// Whether a step onto this tile can ever start an encounter.
    pub fn can_spawn(&self) -> bool {
        self.spawn_rate > 0 && self.candidates.iter().any(Option::is_some)
    }
}

impl Default for SpawnTable {
    fn default() -> Self {
        Self::NONE
    }
}

/// One cell of a map grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tile {
    /// Tile coordinates within its map
    pub position: Position,
    pub tile_type: TileType,
    pub is_obstacle: bool,
    /// Map this tile leads to, if any
    pub transition: Option<usize>,
    pub spawn: SpawnTable,
}

impl Tile {
    /// Creates a tile with no transition link.
    pub fn new(position: Position, tile_type: TileType, is_obstacle: bool, spawn: SpawnTable) -> Self {
        Self {
            position,
            tile_type,
            is_obstacle,
            transition: None,
            spawn,
        }
    }

    /// Whether entering this tile switches maps.
    pub fn is_transition(&self) -> bool {
        self.transition.is_some()
    }
}

/// A named, fixed-size grid of tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameMap {
    pub name: &'static str,
    /// Width in tiles
    pub width: usize,
    /// Height in tiles
    pub height: usize,
    /// Row-major grid, `tiles[y][x]`
    pub tiles: [[Tile; MAP_WIDTH]; MAP_HEIGHT],
    /// Tile where the trainer appears when arriving through a transition
    pub entry_point: Position,
}

impl GameMap {
    /// Creates a map where every tile has the given terrain and spawn table.
    pub fn new(name: &'static str, tile_type: TileType, spawn: SpawnTable, entry_point: Position) -> Self {
        let tiles = std::array::from_fn(|y| {
            std::array::from_fn(|x| {
                Tile::new(Position::new(x as i32, y as i32), tile_type, false, spawn)
            })
        });

        Self {
            name,
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            tiles,
            entry_point,
        }
    }

    /// Checks whether tile coordinates fall inside the grid.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Gets the tile at tile coordinates.
    pub fn tile(&self, x: i32, y: i32) -> TallgrassResult<&Tile> {
        if !self.contains(x, y) {
            return Err(TallgrassError::OutOfBounds { x, y });
        }
        Ok(&self.tiles[y as usize][x as usize])
    }

    /// Gets the tile at tile coordinates mutably.
    pub fn tile_mut(&mut self, x: i32, y: i32) -> TallgrassResult<&mut Tile> {
        if !self.contains(x, y) {
            return Err(TallgrassError::OutOfBounds { x, y });
        }
        Ok(&mut self.tiles[y as usize][x as usize])
    }

    /// Gets the tile containing a pixel position.
    pub fn tile_at_pixel(&self, pixel: Position) -> TallgrassResult<&Tile> {
        let tile = pixel.to_tile();
        self.tile(tile.x, tile.y)
    }

    /// Map width in pixels.
    pub fn pixel_width(&self) -> i32 {
        self.width as i32 * TILE_SIZE
    }

    /// Map height in pixels.
    pub fn pixel_height(&self) -> i32 {
        self.height as i32 * TILE_SIZE
    }

    /// Marks every edge tile as an obstacle.
    pub fn wall_borders(&mut self, tile_type: TileType) {
        let (w, h) = (self.width, self.height);
        for (y, row) in self.tiles.iter_mut().enumerate() {
            for (x, tile) in row.iter_mut().enumerate() {
                if x == 0 || y == 0 || x == w - 1 || y == h - 1 {
                    tile.is_obstacle = true;
                    tile.tile_type = tile_type;
                }
            }
        }
    }

    /// Links a tile to another map. A link can only be set once.
    pub fn set_transition(&mut self, x: i32, y: i32, target: usize) -> TallgrassResult<()> {
        let name = self.name;
        let tile = self.tile_mut(x, y)?;
        if let Some(existing) = tile.transition {
            return Err(TallgrassError::InvalidState(format!(
                "Tile ({}, {}) on {} already links to map {}",
                x, y, name, existing
            )));
        }
        tile.transition = Some(target);
        Ok(())
    }

    /// Iterates over every tile in row-major order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flat_map(|row| row.iter())
    }
}

/// The bounded collection of maps plus the active map index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    maps: [Option<GameMap>; MAX_MAPS],
    map_count: usize,
    /// Index of the active map
    pub current_map: usize,
}

impl World {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self {
            maps: std::array::from_fn(|_| None),
            map_count: 0,
            current_map: 0,
        }
    }

    /// Appends a map, returning its index.
    pub fn add_map(&mut self, map: GameMap) -> TallgrassResult<usize> {
        if self.map_count >= MAX_MAPS {
            return Err(TallgrassError::InvalidState(format!(
                "World already holds {} maps",
                MAX_MAPS
            )));
        }
        let index = self.map_count;
        self.maps[index] = Some(map);
        self.map_count += 1;
        Ok(index)
    }

    /// Number of maps in the world.
    pub fn map_count(&self) -> usize {
        self.map_count
    }

    /// Gets a map by index.
    pub fn map(&self, index: usize) -> TallgrassResult<&GameMap> {
        self.maps
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(TallgrassError::InvalidMap(index))
    }

    /// Gets a map by index mutably.
    pub fn map_mut(&mut self, index: usize) -> TallgrassResult<&mut GameMap> {
        self.maps
            .get_mut(index)
            .and_then(Option::as_mut)
            .ok_or(TallgrassError::InvalidMap(index))
    }

    /// Gets the active map.
    pub fn current(&self) -> TallgrassResult<&GameMap> {
        self.map(self.current_map)
    }

    /// Switches the active map.
    pub fn change_map(&mut self, index: usize) -> TallgrassResult<()> {
        self.map(index)?;
        self.current_map = index;
        Ok(())
    }

    /// Finds a map index by name.
    pub fn find_map(&self, name: &str) -> Option<usize> {
        self.maps
            .iter()
            .take(self.map_count)
            .position(|m| m.as_ref().is_some_and(|m| m.name == name))
    }

    /// Links tile (x, y) of map `from` to map `to`.
    pub fn link(&mut self, from: usize, x: i32, y: i32, to: usize) -> TallgrassResult<()> {
        self.map(to)?;
        self.map_mut(from)?.set_transition(x, y, to)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_map(name: &'static str) -> GameMap {
        let mut map = GameMap::new(name, TileType::Grass, SpawnTable::NONE, Position::new(2, 10));
        map.wall_borders(TileType::Tree);
        map
    }

    #[test]
    fn test_map_creation() {
        let map = test_map("Test");
        assert_eq!(map.width, MAP_WIDTH);
        assert_eq!(map.height, MAP_HEIGHT);
        assert_eq!(map.pixel_width(), 320);

        let corner = map.tile(0, 0).unwrap();
        assert!(corner.is_obstacle);
        assert_eq!(corner.tile_type, TileType::Tree);

        let inner = map.tile(5, 7).unwrap();
        assert!(!inner.is_obstacle);
        assert_eq!(inner.position, Position::new(5, 7));
        assert!(!inner.is_transition());
    }

    #[test]
    fn test_out_of_bounds_tile_access() {
        let map = test_map("Test");
        assert!(matches!(
            map.tile(-1, 0),
            Err(TallgrassError::OutOfBounds { x: -1, y: 0 })
        ));
        assert!(map.tile(20, 5).is_err());
        assert!(map.tile(5, 20).is_err());
        assert!(map.tile_at_pixel(Position::new(319, 319)).is_ok());
        assert!(map.tile_at_pixel(Position::new(320, 0)).is_err());
    }

    #[test]
    fn test_transition_set_once() {
        let mut map = test_map("Test");
        map.set_transition(4, 18, 1).unwrap();
        assert_eq!(map.tile(4, 18).unwrap().transition, Some(1));
        assert!(map.set_transition(4, 18, 2).is_err());
        assert_eq!(map.tile(4, 18).unwrap().transition, Some(1));
    }

    #[test]
    fn test_world_capacity_and_lookup() {
        let mut world = World::new();
        assert!(world.current().is_err());

        for _ in 0..MAX_MAPS {
            world.add_map(test_map("Filler")).unwrap();
        }
        assert_eq!(world.map_count(), MAX_MAPS);
        assert!(world.add_map(test_map("Overflow")).is_err());
        assert!(matches!(world.map(MAX_MAPS), Err(TallgrassError::InvalidMap(_))));
    }

    #[test]
    fn test_world_link_and_change() {
        let mut world = World::new();
        let a = world.add_map(test_map("A")).unwrap();
        let b = world.add_map(test_map("B")).unwrap();

        world.link(a, 4, 18, b).unwrap();
        assert!(world.link(a, 5, 5, 3).is_err());
        assert_eq!(world.find_map("B"), Some(b));
        assert_eq!(world.find_map("Nowhere"), None);

        world.change_map(b).unwrap();
        assert_eq!(world.current().unwrap().name, "B");
        assert!(world.change_map(3).is_err());
        assert_eq!(world.current_map, b);
    }

    #[test]
    fn test_spawn_table_can_spawn() {
        assert!(!SpawnTable::NONE.can_spawn());
        let empty = SpawnTable::new(50, [None; 3], 1, 2);
        assert!(!empty.can_spawn());
        let live = SpawnTable::new(50, [None, Some(Species::Zubat), None], 1, 2);
        assert!(live.can_spawn());
    }
}

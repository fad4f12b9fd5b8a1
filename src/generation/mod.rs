//! # Generation Module
//!
//! Builds the compiled-in world and rolls wild encounters.
//!
//! Map layouts are fixed tables rather than procedural output: the world is
//! assembled once at startup from a [`WorldConfig`] and never resized.

pub mod encounters;

pub use encounters::*;

use crate::game::{GameMap, Position, SpawnTable, Species, TileType, World};
use crate::{TallgrassError, TallgrassResult};
use serde::{Deserialize, Serialize};

/// Index of Route 1 in the standard world.
pub const ROUTE_1: usize = 0;

/// Index of Pallet Town in the standard world.
pub const PALLET_TOWN: usize = 1;

/// Tile on Route 1 leading to Pallet Town.
pub const ROUTE_1_EXIT: Position = Position { x: 4, y: 18 };

/// Tile in Pallet Town leading back to Route 1.
pub const PALLET_TOWN_EXIT: Position = Position { x: 17, y: 1 };

/// Configuration for building the world.
///
/// Controls the encounter tables of each map and where the trainer lands
/// after a map transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Spawn table for every walkable Route 1 tile
    pub route_spawn: SpawnTable,
    /// Spawn table for every walkable Pallet Town tile
    pub town_spawn: SpawnTable,
    /// Tile where the trainer appears after a transition
    pub entry_point: Position,
}

impl WorldConfig {
    /// Creates the default world configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallgrass::WorldConfig;
    ///
    /// let config = WorldConfig::new();
    /// assert_eq!(config.route_spawn.spawn_rate, 20);
    /// assert_eq!(config.town_spawn.spawn_rate, 10);
    /// ```
    pub fn new() -> Self {
        Self {
            route_spawn: SpawnTable::new(
                20,
                [
                    Some(Species::Pidgey),
                    Some(Species::Zubat),
                    Some(Species::Charmander),
                ],
                2,
                5,
            ),
            town_spawn: SpawnTable::new(
                10,
                [
                    Some(Species::Pidgey),
                    Some(Species::Squirtle),
                    Some(Species::Bulbasaur),
                ],
                2,
                4,
            ),
            entry_point: Position::new(2, 10),
        }
    }

    /// Creates a configuration with encounters switched off everywhere.
    pub fn for_testing() -> Self {
        Self {
            route_spawn: SpawnTable::NONE,
            town_spawn: SpawnTable::NONE,
            ..Self::new()
        }
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the standard two-map world: Route 1 and Pallet Town, linked both ways.
pub fn generate_world(config: &WorldConfig) -> TallgrassResult<World> {
    let mut world = World::new();

    let mut route = GameMap::new("Route 1", TileType::Grass, config.route_spawn, config.entry_point);
    route.wall_borders(TileType::Tree);
    let route_index = world.add_map(route)?;

    let mut town = GameMap::new("Pallet Town", TileType::Path, config.town_spawn, config.entry_point);
    town.wall_borders(TileType::Tree);
    let town_index = world.add_map(town)?;

    world.link(route_index, ROUTE_1_EXIT.x, ROUTE_1_EXIT.y, town_index)?;
    world.link(town_index, PALLET_TOWN_EXIT.x, PALLET_TOWN_EXIT.y, route_index)?;

    validate_world(&world)?;
    log::debug!("Generated world with {} maps", world.map_count());
    Ok(world)
}

/// Checks that every link targets an existing map and every entry point is walkable.
pub fn validate_world(world: &World) -> TallgrassResult<()> {
    for index in 0..world.map_count() {
        let map = world.map(index)?;

        for tile in map.iter_tiles() {
            if let Some(target) = tile.transition {
                world.map(target)?;
            }
        }

        let entry = map.tile(map.entry_point.x, map.entry_point.y)?;
        if entry.is_obstacle || entry.is_transition() {
            return Err(TallgrassError::InvalidState(format!(
                "Entry point of {} is not a plain walkable tile",
                map.name
            )));
        }
    }
    Ok(())
}

/// Utility functions for generation.
pub mod utils {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Creates the seeded random number generator shared by the game.
    pub fn create_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_standard_world_layout() {
        let world = generate_world(&WorldConfig::new()).unwrap();
        assert_eq!(world.map_count(), 2);
        assert_eq!(world.map(ROUTE_1).unwrap().name, "Route 1");
        assert_eq!(world.map(PALLET_TOWN).unwrap().name, "Pallet Town");
        assert_eq!(world.current_map, ROUTE_1);

        let route = world.map(ROUTE_1).unwrap();
        let exit = route.tile(ROUTE_1_EXIT.x, ROUTE_1_EXIT.y).unwrap();
        assert_eq!(exit.transition, Some(PALLET_TOWN));
        assert!(!exit.is_obstacle);

        let town = world.map(PALLET_TOWN).unwrap();
        let back = town.tile(PALLET_TOWN_EXIT.x, PALLET_TOWN_EXIT.y).unwrap();
        assert_eq!(back.transition, Some(ROUTE_1));
    }

    #[test]
    fn test_only_exit_tiles_transition() {
        let world = generate_world(&WorldConfig::new()).unwrap();
        let links: usize = (0..world.map_count())
            .map(|i| world.map(i).unwrap().iter_tiles().filter(|t| t.is_transition()).count())
            .sum();
        assert_eq!(links, 2);
    }

    #[test]
    fn test_testing_config_disables_spawns() {
        let world = generate_world(&WorldConfig::for_testing()).unwrap();
        for index in 0..world.map_count() {
            assert!(world.map(index).unwrap().iter_tiles().all(|t| !t.spawn.can_spawn()));
        }
    }

    #[test]
    fn test_entry_point_on_obstacle_is_rejected() {
        let config = WorldConfig {
            entry_point: Position::new(0, 0),
            ..WorldConfig::new()
        };
        assert!(generate_world(&config).is_err());
    }

    #[test]
    fn test_utils_rng_is_deterministic() {
        let mut a = utils::create_rng(12345);
        let mut b = utils::create_rng(12345);
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..100)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..100)).collect();
        assert_eq!(xs, ys);
    }
}

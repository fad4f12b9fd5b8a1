//! # Game State Module
//!
//! Central game state and its configuration.
//!
//! [`GameState`] ties together the world, the trainer, the player's creature,
//! the optional battle session and the single seeded random number generator
//! every random decision draws from.

use crate::game::{
    create_creature, create_creature_from_id, BattleSession, Creature, Direction, Species, Trainer,
    World,
};
use crate::generation::{generate_world, utils::create_rng, Encounter, WorldConfig};
use crate::{Position, TallgrassError, TallgrassResult};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Startup configuration of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seed for the game's random number generator
    pub seed: u64,
    /// Raw species index of the player's starter
    pub starter_species: u8,
    pub starter_level: u32,
    /// Trainer's starting pixel position on the first map
    pub start_position: Position,
    pub start_facing: Direction,
    pub world: WorldConfig,
}

impl GameConfig {
    /// Creates the standard configuration with the given seed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallgrass::{Direction, GameConfig, Position};
    ///
    /// let config = GameConfig::new(7);
    /// assert_eq!(config.seed, 7);
    /// assert_eq!(config.starter_level, 5);
    /// assert_eq!(config.start_position, Position::new(32, 32));
    /// assert_eq!(config.start_facing, Direction::Down);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            starter_species: Species::Bulbasaur.id(),
            starter_level: 5,
            start_position: Position::new(32, 32),
            start_facing: Direction::Down,
            world: WorldConfig::new(),
        }
    }

    /// Creates a configuration with encounters disabled, for deterministic tests.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            world: WorldConfig::for_testing(),
            ..Self::new(seed)
        }
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> TallgrassResult<Self> {
        serde_json::from_str(json).map_err(TallgrassError::from)
    }

    /// Reads a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> TallgrassResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// Everything the simulation mutates.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub world: World,
    pub trainer: Trainer,
    /// The player's creature, kept across battles
    pub player: Creature,
    /// Present only while a battle is running
    pub battle: Option<BattleSession>,
    pub rng: StdRng,
}

impl GameState {
    /// Builds a new game from a configuration.
    ///
    /// Fails when the world cannot be assembled or the start position is not
    /// a walkable tile of the first map.
    pub fn new(config: GameConfig) -> TallgrassResult<Self> {
        let world = generate_world(&config.world)?;

        let start_tile = world.current()?.tile_at_pixel(config.start_position)?;
        if start_tile.is_obstacle {
            return Err(TallgrassError::InvalidState(format!(
                "Start position {:?} is blocked",
                config.start_position
            )));
        }

        let player = create_creature_from_id(config.starter_species, config.starter_level);
        log::info!(
            "New game with seed {}: {} Lv {}",
            config.seed,
            player.name,
            player.level
        );

        Ok(Self {
            trainer: Trainer::new(config.start_position, config.start_facing),
            rng: create_rng(config.seed),
            world,
            player,
            battle: None,
            config,
        })
    }

    /// Opens a battle against the encountered creature.
    pub fn start_battle(&mut self, encounter: Encounter) {
        let wild = create_creature(encounter.species, encounter.level);
        self.battle = Some(BattleSession::start(wild));
    }

    /// Drops the battle session, if any.
    pub fn end_battle(&mut self) -> Option<BattleSession> {
        self.battle.take()
    }

    /// Whether a battle is running.
    pub fn in_battle(&self) -> bool {
        self.battle.is_some()
    }
}

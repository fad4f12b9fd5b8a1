//! # Input Module
//!
//! Abstract button presses and clock ticks fed to the scene manager.

pub mod commands;

pub use commands::*;

use crate::game::Direction;
use serde::{Deserialize, Serialize};

/// A button press on the handheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerInput {
    /// D-pad press
    Direction(Direction),
    /// OK button
    Confirm,
    /// Back button
    Back,
}

/// An event delivered to the scene manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    Key(PlayerInput),
    /// One frame of the game clock
    Tick,
}

impl From<PlayerInput> for GameEvent {
    fn from(input: PlayerInput) -> Self {
        GameEvent::Key(input)
    }
}

/// Maps keyboard characters to player inputs.
///
/// Arrow-style WASD is always active; vi-style hjkl can be switched off.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Whether to enable Vi-style movement keys (hjkl)
    pub vi_keys_enabled: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallgrass::{Direction, InputHandler, PlayerInput};
    ///
    /// let input_handler = InputHandler::new();
    /// assert_eq!(input_handler.map_key('w'), Some(PlayerInput::Direction(Direction::Up)));
    /// assert_eq!(input_handler.map_key('q'), None);
    /// ```
    pub fn new() -> Self {
        Self {
            vi_keys_enabled: true,
        }
    }

    /// Maps a key to an input, or `None` for unbound keys.
    pub fn map_key(&self, key: char) -> Option<PlayerInput> {
        let direction = match key.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            'k' if self.vi_keys_enabled => Some(Direction::Up),
            'j' if self.vi_keys_enabled => Some(Direction::Down),
            'h' if self.vi_keys_enabled => Some(Direction::Left),
            'l' if self.vi_keys_enabled => Some(Direction::Right),
            _ => None,
        };
        if let Some(direction) = direction {
            return Some(PlayerInput::Direction(direction));
        }

        match key {
            '\n' | '\r' | ' ' | 'z' | 'Z' => Some(PlayerInput::Confirm),
            '\u{1b}' | '\u{8}' | 'x' | 'X' => Some(PlayerInput::Back),
            _ => None,
        }
    }

    /// Maps a string of keys to events, skipping unbound keys.
    pub fn map_keys(&self, keys: &str) -> Vec<GameEvent> {
        keys.chars()
            .filter_map(|key| self.map_key(key))
            .map(GameEvent::from)
            .collect()
    }
}

//! # Command Scripts
//!
//! Whitespace separated command scripts for driving the game headlessly.
//!
//! Recognised commands are `up`, `down`, `left`, `right`, `ok`/`confirm`,
//! `back`/`cancel`, `tick`, and `tick*N` for `N` consecutive ticks.

use crate::game::Direction;
use crate::input::{GameEvent, PlayerInput};
use crate::{TallgrassError, TallgrassResult};
use std::str::FromStr;

/// A single script command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Input(PlayerInput),
    /// Run the clock for this many ticks
    Tick(u32),
}

impl Command {
    /// Expands the command into the events it stands for.
    pub fn events(self) -> impl Iterator<Item = GameEvent> {
        let (event, count) = match self {
            Command::Input(input) => (GameEvent::Key(input), 1),
            Command::Tick(n) => (GameEvent::Tick, n as usize),
        };
        std::iter::repeat(event).take(count)
    }
}

impl FromStr for Command {
    type Err = TallgrassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let word = s.trim().to_ascii_lowercase();
        let command = match word.as_str() {
            "up" => Command::Input(PlayerInput::Direction(Direction::Up)),
            "down" => Command::Input(PlayerInput::Direction(Direction::Down)),
            "left" => Command::Input(PlayerInput::Direction(Direction::Left)),
            "right" => Command::Input(PlayerInput::Direction(Direction::Right)),
            "ok" | "confirm" => Command::Input(PlayerInput::Confirm),
            "back" | "cancel" => Command::Input(PlayerInput::Back),
            "tick" => Command::Tick(1),
            other => match other.strip_prefix("tick*") {
                Some(count) => Command::Tick(
                    count
                        .parse()
                        .map_err(|_| TallgrassError::InvalidCommand(s.to_string()))?,
                ),
                None => return Err(TallgrassError::InvalidCommand(s.to_string())),
            },
        };
        Ok(command)
    }
}

/// Parses a script into the events it produces, in order.
///
/// # Examples
///
/// ```
/// use tallgrass::{parse_script, GameEvent, PlayerInput};
///
/// let events = parse_script("ok tick*2").unwrap();
/// assert_eq!(
///     events,
///     vec![GameEvent::Key(PlayerInput::Confirm), GameEvent::Tick, GameEvent::Tick]
/// );
/// assert!(parse_script("jump").is_err());
/// ```
pub fn parse_script(script: &str) -> TallgrassResult<Vec<GameEvent>> {
    let mut events = Vec::new();
    for word in script.split_whitespace() {
        let command: Command = word.parse()?;
        events.extend(command.events());
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_command_words() {
        let events = parse_script("up DOWN left right ok confirm back cancel tick").unwrap();
        assert_eq!(events.len(), 9);
        assert_eq!(events[1], GameEvent::Key(PlayerInput::Direction(Direction::Down)));
        assert_eq!(events[5], GameEvent::Key(PlayerInput::Confirm));
        assert_eq!(events[7], GameEvent::Key(PlayerInput::Back));
        assert_eq!(events[8], GameEvent::Tick);
    }

    #[test]
    fn test_tick_repeat() {
        assert_eq!(parse_script("tick*21").unwrap().len(), 21);
        assert!(parse_script("tick*0").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_commands() {
        assert!(matches!(
            parse_script("up fly"),
            Err(TallgrassError::InvalidCommand(word)) if word == "fly"
        ));
        assert!(parse_script("tick*x").is_err());
        assert!(parse_script("tick*-1").is_err());
    }

    #[test]
    fn test_empty_script() {
        assert!(parse_script("   ").unwrap().is_empty());
    }
}

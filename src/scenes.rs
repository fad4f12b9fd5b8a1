//! # Scene Management System
//!
//! Routes every event to the active scene and switches scenes when a
//! battle starts or ends.

use crate::game::{attempt_move, BattleExit, GameState, MoveOutcome};
use crate::input::{GameEvent, PlayerInput};
use crate::rendering::{battle_view, render_exploration, RenderFrame};
use crate::{TallgrassError, TallgrassResult};
use serde::{Deserialize, Serialize};

/// The scene currently receiving input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneType {
    /// Walking around the overworld
    Exploration,
    /// A wild battle in progress
    Battle,
    /// Alias of `Battle` for wild encounters started by a script
    WildBattle,
    /// Non-interactive scene, ignores all events
    Cutscene,
}

impl SceneType {
    /// Whether this scene is driven by the battle state machine.
    pub fn is_battle(self) -> bool {
        matches!(self, SceneType::Battle | SceneType::WildBattle)
    }
}

/// What happened in response to one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneEvent {
    /// The event was consumed with no scene change
    None,
    /// The trainer tried to move
    Moved(MoveOutcome),
    /// The battle ended and exploration resumed
    BattleEnded(BattleExit),
}

/// The main scene manager that owns the game state.
#[derive(Debug)]
pub struct SceneManager {
    current_scene: SceneType,
    game_state: GameState,
}

impl SceneManager {
    /// Starts in exploration.
    pub fn new(game_state: GameState) -> Self {
        Self {
            current_scene: SceneType::Exploration,
            game_state,
        }
    }

    /// The active scene.
    pub fn scene(&self) -> SceneType {
        self.current_scene
    }

    /// Read access to the game state.
    pub fn state(&self) -> &GameState {
        &self.game_state
    }

    /// Mutable access to the game state, for scripted setups.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.game_state
    }

    /// Switches to a scene directly.
    ///
    /// Entering a battle scene requires a battle session to exist. A running
    /// battle only ends through its own exit, so leaving a battle scene is
    /// refused.
    pub fn set_scene(&mut self, scene: SceneType) -> TallgrassResult<()> {
        if self.current_scene.is_battle() && !scene.is_battle() {
            return Err(TallgrassError::InvalidState(
                "A battle can only end from inside the battle".to_string(),
            ));
        }
        if scene.is_battle() && !self.game_state.in_battle() {
            return Err(TallgrassError::InvalidState(
                "Cannot enter a battle scene without a battle".to_string(),
            ));
        }
        if !scene.is_battle() {
            self.game_state.end_battle();
        }
        log::debug!("Scene {:?} -> {:?}", self.current_scene, scene);
        self.current_scene = scene;
        Ok(())
    }

    /// Dispatches one event to the active scene.
    pub fn handle_event(&mut self, event: GameEvent) -> SceneEvent {
        match self.current_scene {
            SceneType::Exploration => self.update_exploration(event),
            SceneType::Battle | SceneType::WildBattle => self.update_battle(event),
            SceneType::Cutscene => {
                log::trace!("Cutscene ignores {:?}", event);
                SceneEvent::None
            }
        }
    }

    /// Dispatches a sequence of events in order.
    pub fn handle_events<I>(&mut self, events: I) -> Vec<SceneEvent>
    where
        I: IntoIterator<Item = GameEvent>,
    {
        events.into_iter().map(|e| self.handle_event(e)).collect()
    }

    fn update_exploration(&mut self, event: GameEvent) -> SceneEvent {
        match event {
            GameEvent::Key(PlayerInput::Direction(direction)) => {
                let outcome = attempt_move(&mut self.game_state, direction);
                if let MoveOutcome::Encountered(_) = outcome {
                    self.current_scene = SceneType::Battle;
                }
                SceneEvent::Moved(outcome)
            }
            GameEvent::Key(input) => {
                log::trace!("Exploration ignores {:?}", input);
                SceneEvent::None
            }
            GameEvent::Tick => SceneEvent::None,
        }
    }

    fn update_battle(&mut self, event: GameEvent) -> SceneEvent {
        let state = &mut self.game_state;
        let Some(session) = state.battle.as_mut() else {
            log::warn!("Battle scene without a battle, returning to exploration");
            self.current_scene = SceneType::Exploration;
            return SceneEvent::None;
        };

        let exit = match event {
            GameEvent::Tick => {
                session.tick();
                None
            }
            GameEvent::Key(input) => session.handle_input(input, &mut state.player, &mut state.rng),
        };

        match exit {
            Some(exit) => {
                state.end_battle();
                self.current_scene = SceneType::Exploration;
                log::info!("Battle over ({:?}), back to exploring", exit);
                SceneEvent::BattleEnded(exit)
            }
            None => SceneEvent::None,
        }
    }

    /// Snapshot of what the active scene shows.
    pub fn render_frame(&self) -> TallgrassResult<RenderFrame> {
        match self.current_scene {
            SceneType::Exploration => Ok(RenderFrame::Exploration(render_exploration(
                &self.game_state,
            )?)),
            SceneType::Battle | SceneType::WildBattle => {
                let session = self.game_state.battle.as_ref().ok_or_else(|| {
                    TallgrassError::InvalidState("Battle scene without a battle".to_string())
                })?;
                Ok(RenderFrame::Battle(battle_view(session, &self.game_state.player)))
            }
            SceneType::Cutscene => Ok(RenderFrame::Cutscene),
        }
    }
}

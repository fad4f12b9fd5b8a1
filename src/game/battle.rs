//! # Battle State Machine
//!
//! Drives a single wild battle from the introduction to the end screen.
//!
//! The session owns the wild creature and borrows the player's creature for
//! each input so HP changes persist after the battle. Every transition
//! finishes inside one call; animations only gate when a Confirm is
//! accepted and are advanced by [`BattleSession::tick`].

use crate::config::{
    ANIMATION_FRAME_TICKS, ANIMATION_GATE_TICKS, MAX_MOVES, SHAKE_FRAMES, SHAKE_OFFSET,
};
use crate::game::{compute_damage, Creature, Direction};
use crate::input::PlayerInput;
use crate::utils::wrap_index;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phases of a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattlePhase {
    /// "A wild X appeared!"
    Intro,
    /// Fight / Pkmn / Item / Run menu
    ChooseAction,
    /// Pick one of the player's moves
    ChooseMove,
    /// Player's attack animation
    ExecuteMove,
    /// Wild creature attacks
    EnemyTurn,
    /// Outcome of the last attack
    Result,
    /// Someone fainted
    End,
}

/// Entries of the action menu, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleAction {
    Fight,
    Pkmn,
    Item,
    Run,
}

impl BattleAction {
    /// All actions in menu order.
    pub const ALL: [BattleAction; 4] = [
        BattleAction::Fight,
        BattleAction::Pkmn,
        BattleAction::Item,
        BattleAction::Run,
    ];

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            BattleAction::Fight => "FIGHT",
            BattleAction::Pkmn => "PKMN",
            BattleAction::Item => "ITEM",
            BattleAction::Run => "RUN",
        }
    }

    /// Action under a cursor index.
    pub fn from_index(index: usize) -> Option<BattleAction> {
        Self::ALL.get(index).copied()
    }
}

/// Why a battle handed control back to exploration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleExit {
    /// The player chose Run or backed out of the action menu
    Fled,
    /// One side fainted and the end screen was dismissed
    Finished,
}

/// Text shown in the battle dialog box.
///
/// Names are `'static` catalog strings, so a message is a small `Copy`
/// value and only becomes a `String` when displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BattleMessage {
    None,
    Appeared {
        wild: &'static str,
    },
    Used {
        attacker: &'static str,
        move_name: &'static str,
        by_wild: bool,
    },
    Damage(u32),
    NoEffect,
    Fainted {
        name: &'static str,
        wild: bool,
    },
}

impl BattleMessage {
    fn for_damage(damage: u32) -> Self {
        if damage > 0 {
            BattleMessage::Damage(damage)
        } else {
            BattleMessage::NoEffect
        }
    }
}

impl fmt::Display for BattleMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BattleMessage::None => Ok(()),
            BattleMessage::Appeared { wild } => write!(f, "A wild {} appeared!", wild),
            BattleMessage::Used {
                attacker,
                move_name,
                by_wild: true,
            } => write!(f, "Wild {} used {}!", attacker, move_name),
            BattleMessage::Used {
                attacker,
                move_name,
                by_wild: false,
            } => write!(f, "{} used {}!", attacker, move_name),
            BattleMessage::Damage(damage) => write!(f, "It did {} damage!", damage),
            BattleMessage::NoEffect => write!(f, "It had no effect..."),
            BattleMessage::Fainted { name, wild: true } => write!(f, "Wild {} fainted!", name),
            BattleMessage::Fainted { name, wild: false } => write!(f, "{} fainted!", name),
        }
    }
}

/// Cursor over a fixed number of options laid out in two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Menu {
    pub cursor: usize,
    pub option_count: usize,
}

impl Menu {
    /// Opens a menu with the cursor on the first option.
    pub fn new(option_count: usize) -> Self {
        Self {
            cursor: 0,
            option_count,
        }
    }

    /// A menu with nothing to select.
    pub fn closed() -> Self {
        Self::new(0)
    }

    /// Moves the cursor, wrapping over the option count.
    ///
    /// # Examples
    ///
    /// ```
    /// use tallgrass::{Direction, Menu};
    ///
    /// let mut menu = Menu::new(4);
    /// menu.move_cursor(Direction::Up);
    /// assert_eq!(menu.cursor, 2);
    /// menu.move_cursor(Direction::Right);
    /// assert_eq!(menu.cursor, 3);
    /// ```
    pub fn move_cursor(&mut self, direction: Direction) {
        if self.option_count == 0 {
            return;
        }
        self.cursor = wrap_index(self.cursor, direction.menu_step(), self.option_count);
    }

    /// Whether the menu has any options.
    pub fn is_open(&self) -> bool {
        self.option_count > 0
    }
}

/// Attack animation timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AnimationTimer {
    pub ticks: u32,
    /// Advances every `ANIMATION_FRAME_TICKS` ticks
    pub frame: u32,
}

impl AnimationTimer {
    /// Restarts the animation.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advances one tick.
    pub fn advance(&mut self) {
        self.ticks = self.ticks.saturating_add(1);
        if self.ticks % ANIMATION_FRAME_TICKS == 0 {
            self.frame = self.frame.saturating_add(1);
        }
    }

    /// Whether the animation has run long enough to be dismissed.
    pub fn can_dismiss(&self) -> bool {
        self.ticks > ANIMATION_GATE_TICKS
    }

    /// Horizontal shake for the creature being hit, if still shaking.
    pub fn shake_offset(&self) -> Option<i32> {
        if self.frame >= SHAKE_FRAMES {
            return None;
        }
        Some(if self.frame % 2 == 0 {
            SHAKE_OFFSET
        } else {
            -SHAKE_OFFSET
        })
    }
}

/// Presentation view of the dialog box, derived from the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialog {
    pub active: bool,
    pub message: BattleMessage,
    pub cursor: usize,
    pub option_count: usize,
}

impl Dialog {
    /// Full dialog text.
    pub fn text(&self) -> String {
        self.message.to_string()
    }

    /// Dialog text split on embedded newlines.
    pub fn lines(&self) -> Vec<String> {
        let text = self.text();
        if text.is_empty() {
            return Vec::new();
        }
        text.split('\n').map(str::to_string).collect()
    }
}

/// State of one ongoing battle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleSession {
    pub phase: BattlePhase,
    /// True while the player's attack is being resolved
    pub player_turn: bool,
    /// Slot of the move the player last chose
    pub selected_move: usize,
    /// Message shown when entering the Result phase
    pub result: BattleMessage,
    pub last_damage: u32,
    pub menu: Menu,
    /// Message currently in the dialog box
    pub message: BattleMessage,
    pub animation: AnimationTimer,
    /// The wild opponent, discarded with the session
    pub wild: Creature,
}

impl BattleSession {
    /// Starts a battle against `wild` in the Intro phase.
    pub fn start(wild: Creature) -> Self {
        log::info!("Wild {} (Lv {}) appeared!", wild.name, wild.level);
        Self {
            phase: BattlePhase::Intro,
            player_turn: true,
            selected_move: 0,
            result: BattleMessage::None,
            last_damage: 0,
            menu: Menu::closed(),
            message: BattleMessage::Appeared { wild: wild.name },
            animation: AnimationTimer::default(),
            wild,
        }
    }

    /// Whether either side has fainted.
    pub fn is_decided(&self, player: &Creature) -> bool {
        self.wild.is_fainted() || player.is_fainted()
    }

    /// The dialog box as it should currently be drawn.
    pub fn dialog(&self) -> Dialog {
        Dialog {
            active: true,
            message: self.message,
            cursor: self.menu.cursor,
            option_count: self.menu.option_count,
        }
    }

    /// Advances the attack animation. Only the attack phases animate.
    pub fn tick(&mut self) {
        if matches!(self.phase, BattlePhase::ExecuteMove | BattlePhase::EnemyTurn) {
            self.animation.advance();
        }
    }

    /// Handles one input. Returns `Some` when the battle should end.
    ///
    /// Inputs a phase does not accept are ignored.
    pub fn handle_input<R: Rng + ?Sized>(
        &mut self,
        input: PlayerInput,
        player: &mut Creature,
        rng: &mut R,
    ) -> Option<BattleExit> {
        match (self.phase, input) {
            (BattlePhase::Intro, PlayerInput::Confirm) => {
                self.enter_phase(BattlePhase::ChooseAction, player, rng);
            }

            (BattlePhase::ChooseAction | BattlePhase::ChooseMove, PlayerInput::Direction(d)) => {
                self.menu.move_cursor(d);
            }

            (BattlePhase::ChooseAction, PlayerInput::Confirm) => {
                match BattleAction::from_index(self.menu.cursor) {
                    Some(BattleAction::Fight) => {
                        self.enter_phase(BattlePhase::ChooseMove, player, rng);
                    }
                    Some(BattleAction::Run) => {
                        log::info!("Got away safely from wild {}", self.wild.name);
                        return Some(BattleExit::Fled);
                    }
                    other => log::trace!("Action {:?} is not available", other),
                }
            }

            (BattlePhase::ChooseAction, PlayerInput::Back) => {
                log::info!("Backed out of battle with wild {}", self.wild.name);
                return Some(BattleExit::Fled);
            }

            (BattlePhase::ChooseMove, PlayerInput::Confirm) => {
                match player.nth_move_slot(self.menu.cursor) {
                    Some(slot) => self.execute_player_move(slot, player, rng),
                    None => log::trace!("No move under cursor {}", self.menu.cursor),
                }
            }

            (BattlePhase::ChooseMove, PlayerInput::Back) => {
                self.enter_phase(BattlePhase::ChooseAction, player, rng);
            }

            (BattlePhase::ExecuteMove | BattlePhase::EnemyTurn, PlayerInput::Confirm)
                if self.animation.can_dismiss() =>
            {
                self.enter_phase(BattlePhase::Result, player, rng);
            }

            (BattlePhase::Result, PlayerInput::Confirm) => {
                if self.is_decided(player) {
                    self.enter_phase(BattlePhase::End, player, rng);
                } else if self.player_turn {
                    self.player_turn = false;
                    self.enter_phase(BattlePhase::EnemyTurn, player, rng);
                } else {
                    self.player_turn = true;
                    self.enter_phase(BattlePhase::ChooseAction, player, rng);
                }
            }

            (BattlePhase::End, PlayerInput::Confirm) => {
                return Some(BattleExit::Finished);
            }

            (phase, input) => {
                log::trace!("Ignoring {:?} during {:?}", input, phase);
            }
        }
        None
    }

    /// Resolves the player's attack with the move in `slot` and shows its animation.
    pub fn execute_player_move<R: Rng + ?Sized>(
        &mut self,
        slot: usize,
        player: &mut Creature,
        rng: &mut R,
    ) {
        if slot >= MAX_MOVES || player.moves[slot].is_empty() {
            log::trace!("Move slot {} is empty", slot);
            return;
        }
        self.selected_move = slot;

        let chosen = player.moves[slot];
        let damage = compute_damage(&chosen, player, &self.wild, rng);
        self.last_damage = self.wild.apply_damage(damage);
        self.result = BattleMessage::for_damage(damage);

        self.enter_phase(BattlePhase::ExecuteMove, player, rng);
    }

    fn enter_phase<R: Rng + ?Sized>(&mut self, phase: BattlePhase, player: &mut Creature, rng: &mut R) {
        log::debug!("Battle phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;

        match phase {
            BattlePhase::Intro => {
                self.message = BattleMessage::Appeared {
                    wild: self.wild.name,
                };
                self.menu = Menu::closed();
            }

            BattlePhase::ChooseAction => {
                self.message = BattleMessage::None;
                self.menu = Menu::new(BattleAction::ALL.len());
            }

            BattlePhase::ChooseMove => {
                self.message = BattleMessage::None;
                self.menu = Menu::new(player.move_count());
            }

            BattlePhase::ExecuteMove => {
                self.message = BattleMessage::Used {
                    attacker: player.name,
                    move_name: player.moves[self.selected_move].name,
                    by_wild: false,
                };
                self.menu = Menu::closed();
                self.animation.reset();
            }

            BattlePhase::EnemyTurn => self.run_enemy_turn(player, rng),

            BattlePhase::Result => {
                self.message = self.result;
                self.menu = Menu::closed();
            }

            BattlePhase::End => {
                self.message = if self.wild.is_fainted() {
                    BattleMessage::Fainted {
                        name: self.wild.name,
                        wild: true,
                    }
                } else {
                    BattleMessage::Fainted {
                        name: player.name,
                        wild: false,
                    }
                };
                self.menu = Menu::closed();
            }
        }
    }

    fn run_enemy_turn<R: Rng + ?Sized>(&mut self, player: &mut Creature, rng: &mut R) {
        let usable = self.wild.move_count();
        if usable == 0 {
            log::warn!("Wild {} has no usable moves, skipping its turn", self.wild.name);
            self.player_turn = true;
            self.enter_phase(BattlePhase::ChooseAction, player, rng);
            return;
        }

        let pick = rng.gen_range(0..usable);
        let Some(slot) = self.wild.nth_move_slot(pick) else {
            self.player_turn = true;
            self.enter_phase(BattlePhase::ChooseAction, player, rng);
            return;
        };
        let chosen = self.wild.moves[slot];

        let damage = compute_damage(&chosen, &self.wild, player, rng);
        self.last_damage = player.apply_damage(damage);
        self.result = BattleMessage::Damage(damage);

        self.message = BattleMessage::Used {
            attacker: self.wild.name,
            move_name: chosen.name,
            by_wild: true,
        };
        self.menu = Menu::closed();
        self.animation.reset();
    }
}

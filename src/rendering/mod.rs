//! # Rendering Module
//!
//! Describes what the screen should show for the active scene.
//!
//! Nothing here draws pixels. A [`RenderFrame`] is a serializable snapshot
//! a front end turns into sprites and text; the headless runner prints it as
//! JSON.

pub mod display;
pub mod ui;

pub use display::*;
pub use ui::*;

use serde::Serialize;

/// Snapshot of one screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "scene", rename_all = "snake_case")]
pub enum RenderFrame {
    Exploration(ExplorationView),
    Battle(BattleView),
    Cutscene,
}

impl RenderFrame {
    /// The exploration view, if this frame shows the overworld.
    pub fn exploration(&self) -> Option<&ExplorationView> {
        match self {
            RenderFrame::Exploration(view) => Some(view),
            _ => None,
        }
    }

    /// The battle view, if this frame shows a battle.
    pub fn battle(&self) -> Option<&BattleView> {
        match self {
            RenderFrame::Battle(view) => Some(view),
            _ => None,
        }
    }
}

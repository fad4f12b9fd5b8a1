//! # User Interface Elements
//!
//! Battle HUD: name plates, HP bars, the dialog box and menus.

use crate::config::HP_BAR_WIDTH;
use crate::game::{BattleAction, BattlePhase, BattleSession, Creature};
use serde::Serialize;

/// Name plate and HP bar of one combatant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatureView {
    /// "Wild Pidgey LV3" or "Bulbasaur LV5"
    pub label: String,
    pub name: &'static str,
    pub level: u32,
    pub current_hp: u32,
    pub max_hp: u32,
    /// Filled pixels of the HP bar
    pub hp_fill: u32,
}

impl CreatureView {
    /// Builds the plate for a creature.
    pub fn new(creature: &Creature, wild: bool) -> Self {
        let label = if wild {
            format!("Wild {} LV{}", creature.name, creature.level)
        } else {
            format!("{} LV{}", creature.name, creature.level)
        };
        Self {
            label,
            name: creature.name,
            level: creature.level,
            current_hp: creature.current_hp,
            max_hp: creature.max_hp,
            hp_fill: creature.hp_bar_fill(HP_BAR_WIDTH),
        }
    }
}

/// An open menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuView {
    pub options: Vec<&'static str>,
    pub cursor: usize,
}

/// Which combatant is shaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShakeTarget {
    Wild,
    Player,
}

/// Horizontal shake applied to a sprite during an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Shake {
    pub target: ShakeTarget,
    pub offset: i32,
}

/// What the battle screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BattleView {
    pub phase: BattlePhase,
    pub wild: CreatureView,
    pub player: CreatureView,
    pub dialog: Vec<String>,
    pub menu: Option<MenuView>,
    pub animation_frame: u32,
    pub shake: Option<Shake>,
}

/// Options of the menu open in the current phase, if any.
pub fn menu_view(session: &BattleSession, player: &Creature) -> Option<MenuView> {
    let options: Vec<&'static str> = match session.phase {
        BattlePhase::ChooseAction => BattleAction::ALL.iter().map(|a| a.label()).collect(),
        BattlePhase::ChooseMove => player.usable_moves().map(|(_, m)| m.name).collect(),
        _ => return None,
    };
    Some(MenuView {
        options,
        cursor: session.menu.cursor,
    })
}

/// Shake of the defending sprite, while the attack animation is young.
pub fn shake(session: &BattleSession) -> Option<Shake> {
    let target = match session.phase {
        BattlePhase::ExecuteMove => ShakeTarget::Wild,
        BattlePhase::EnemyTurn => ShakeTarget::Player,
        _ => return None,
    };
    session
        .animation
        .shake_offset()
        .map(|offset| Shake { target, offset })
}

/// Builds the battle snapshot.
pub fn battle_view(session: &BattleSession, player: &Creature) -> BattleView {
    BattleView {
        phase: session.phase,
        wild: CreatureView::new(&session.wild, true),
        player: CreatureView::new(player, false),
        dialog: session.dialog().lines(),
        menu: menu_view(session, player),
        animation_frame: session.animation.frame,
        shake: shake(session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{create_creature, Species};

    #[test]
    fn test_intro_view() {
        let session = BattleSession::start(create_creature(Species::Zubat, 3));
        let player = create_creature(Species::Bulbasaur, 5);
        let view = battle_view(&session, &player);

        assert_eq!(view.phase, BattlePhase::Intro);
        assert_eq!(view.wild.label, "Wild Zubat LV3");
        assert_eq!(view.player.label, "Bulbasaur LV5");
        assert_eq!(view.player.hp_fill, HP_BAR_WIDTH);
        assert_eq!(view.dialog, vec!["A wild Zubat appeared!".to_string()]);
        assert!(view.menu.is_none());
        assert!(view.shake.is_none());
    }

    #[test]
    fn test_hp_bar_fill_is_proportional() {
        let mut player = create_creature(Species::Bulbasaur, 5);
        player.current_hp = player.max_hp / 2;
        let view = CreatureView::new(&player, false);
        assert_eq!(view.hp_fill, player.current_hp * HP_BAR_WIDTH / player.max_hp);

        player.current_hp = 0;
        assert_eq!(CreatureView::new(&player, false).hp_fill, 0);
    }

    #[test]
    fn test_menus_per_phase() {
        let mut session = BattleSession::start(create_creature(Species::Pidgey, 3));
        let player = create_creature(Species::Charmander, 5);

        session.phase = BattlePhase::ChooseAction;
        let menu = menu_view(&session, &player).unwrap();
        assert_eq!(menu.options, vec!["FIGHT", "PKMN", "ITEM", "RUN"]);

        session.phase = BattlePhase::ChooseMove;
        let menu = menu_view(&session, &player).unwrap();
        assert_eq!(menu.options.len(), player.move_count());
        assert_eq!(menu.options[0], player.moves[0].name);
    }

    #[test]
    fn test_shake_targets_defender() {
        let mut session = BattleSession::start(create_creature(Species::Pidgey, 3));
        session.phase = BattlePhase::ExecuteMove;
        assert_eq!(
            shake(&session),
            Some(Shake {
                target: ShakeTarget::Wild,
                offset: 2
            })
        );

        session.phase = BattlePhase::EnemyTurn;
        session.animation.frame = 1;
        assert_eq!(
            shake(&session),
            Some(Shake {
                target: ShakeTarget::Player,
                offset: -2
            })
        );

        session.animation.frame = 3;
        assert_eq!(shake(&session), None);
    }
}

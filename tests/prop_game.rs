//! Property-based tests for creatures, menus, movement and battles.

use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

use tallgrass::{
    compute_damage, create_creature, create_creature_from_id, wrap_index, Direction, GameConfig,
    GameEvent, GameState, PlayerInput, SceneManager, Species, MOVE_CATALOG,
};

fn species() -> impl Strategy<Value = Species> {
    prop::sample::select(Species::ALL.to_vec())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::all().to_vec())
}

fn event() -> impl Strategy<Value = GameEvent> {
    prop_oneof![
        direction().prop_map(|d| GameEvent::Key(PlayerInput::Direction(d))),
        Just(GameEvent::Key(PlayerInput::Confirm)),
        Just(GameEvent::Key(PlayerInput::Back)),
        Just(GameEvent::Tick),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// HP never leaves `0..=max_hp`, however much damage is applied.
    #[test]
    fn prop_hp_stays_in_bounds(
        id in any::<u8>(),
        level in 1u32..=100,
        hits in prop::collection::vec(0u32..500, 0..20)
    ) {
        let mut creature = create_creature_from_id(id, level);
        for hit in hits {
            let before = creature.current_hp;
            let dealt = creature.apply_damage(hit);
            prop_assert!(dealt <= before);
            prop_assert!(creature.current_hp <= creature.max_hp);
            prop_assert_eq!(creature.current_hp, before - dealt);
        }
    }

    /// Damaging moves always deal at least 1, status moves always 0.
    #[test]
    fn prop_damage_bounds(
        attacker in species(),
        defender in species(),
        attacker_level in 1u32..=100,
        defender_level in 1u32..=100,
        move_index in 0usize..MOVE_CATALOG.len(),
        seed in any::<u64>()
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let attacker = create_creature(attacker, attacker_level);
        let defender = create_creature(defender, defender_level);
        let chosen = MOVE_CATALOG[move_index];

        let damage = compute_damage(&chosen, &attacker, &defender, &mut rng);
        if chosen.is_status() {
            prop_assert_eq!(damage, 0);
        } else {
            prop_assert!(damage >= 1);
        }
    }

    /// Wrapped cursors always land inside the option range.
    #[test]
    fn prop_cursor_in_range(
        count in 1usize..8,
        steps in prop::collection::vec(direction(), 0..50)
    ) {
        let mut cursor = 0;
        for step in steps {
            cursor = wrap_index(cursor, step.menu_step(), count);
            prop_assert!(cursor < count);
        }
    }

    /// Random input never puts the trainer on an obstacle or off the map,
    /// and battles only exist while a battle scene is active.
    #[test]
    fn prop_random_play_is_consistent(
        seed in any::<u64>(),
        events in prop::collection::vec(event(), 0..200)
    ) {
        let mut scenes = SceneManager::new(GameState::new(GameConfig::new(seed)).unwrap());
        for event in events {
            scenes.handle_event(event);

            let state = scenes.state();
            let map = state.world.current().unwrap();
            let tile = map.tile_at_pixel(state.trainer.position).unwrap();
            prop_assert!(!tile.is_obstacle);
            prop_assert_eq!(scenes.scene().is_battle(), state.battle.is_some());

            if let Some(battle) = &state.battle {
                prop_assert!(battle.wild.current_hp <= battle.wild.max_hp);
                prop_assert!(battle.menu.option_count == 0 || battle.menu.cursor < battle.menu.option_count);
            }
            prop_assert!(state.player.current_hp <= state.player.max_hp);
        }
    }
}

//! Integration tests for wild battles driven through the scene manager.

use tallgrass::{
    parse_script, BattleExit, BattlePhase, GameConfig, GameState, Position, SceneEvent,
    SceneManager, SceneType, SpawnTable, Species, TallgrassResult, WorldConfig,
};

/// A game where every grass step meets a level 2 Pidgey.
fn ambush_config(starter_level: u32) -> GameConfig {
    GameConfig {
        starter_level,
        world: WorldConfig {
            route_spawn: SpawnTable::new(100, [Some(Species::Pidgey), None, None], 2, 2),
            ..WorldConfig::for_testing()
        },
        ..GameConfig::for_testing(2024)
    }
}

fn run(scenes: &mut SceneManager, script: &str) -> TallgrassResult<Vec<SceneEvent>> {
    Ok(scenes.handle_events(parse_script(script)?))
}

fn phase(scenes: &SceneManager) -> Option<BattlePhase> {
    scenes.state().battle.as_ref().map(|b| b.phase)
}

#[test]
fn test_step_into_grass_starts_battle() -> TallgrassResult<()> {
    let mut scenes = SceneManager::new(GameState::new(ambush_config(5))?);
    run(&mut scenes, "right")?;

    assert_eq!(scenes.scene(), SceneType::Battle);
    assert_eq!(phase(&scenes), Some(BattlePhase::Intro));
    assert_eq!(scenes.state().trainer.position, Position::new(32, 32));

    let battle = scenes.state().battle.as_ref().map(|b| b.dialog().text());
    assert_eq!(battle.as_deref(), Some("A wild Pidgey appeared!"));
    Ok(())
}

#[test]
fn test_menus_and_fleeing() -> TallgrassResult<()> {
    let mut scenes = SceneManager::new(GameState::new(ambush_config(5))?);
    run(&mut scenes, "right ok")?;
    assert_eq!(phase(&scenes), Some(BattlePhase::ChooseAction));

    run(&mut scenes, "ok")?;
    assert_eq!(phase(&scenes), Some(BattlePhase::ChooseMove));

    // Four moves: four steps right come back to the first one.
    run(&mut scenes, "right right right right")?;
    let cursor = scenes.state().battle.as_ref().map(|b| b.menu.cursor);
    assert_eq!(cursor, Some(0));

    run(&mut scenes, "back")?;
    assert_eq!(phase(&scenes), Some(BattlePhase::ChooseAction));

    let events = run(&mut scenes, "left ok")?;
    assert_eq!(events[1], SceneEvent::BattleEnded(BattleExit::Fled));
    assert_eq!(scenes.scene(), SceneType::Exploration);
    assert!(scenes.state().battle.is_none());
    Ok(())
}

#[test]
fn test_knockout_then_back_to_exploring() -> TallgrassResult<()> {
    let mut scenes = SceneManager::new(GameState::new(ambush_config(60))?);
    run(&mut scenes, "right ok ok ok")?;
    assert_eq!(phase(&scenes), Some(BattlePhase::ExecuteMove));

    // Confirm is ignored until the animation has run.
    run(&mut scenes, "ok tick*20 ok")?;
    assert_eq!(phase(&scenes), Some(BattlePhase::ExecuteMove));

    run(&mut scenes, "tick ok")?;
    assert_eq!(phase(&scenes), Some(BattlePhase::Result));

    run(&mut scenes, "ok")?;
    assert_eq!(phase(&scenes), Some(BattlePhase::End));
    let text = scenes.state().battle.as_ref().map(|b| b.dialog().text());
    assert_eq!(text.as_deref(), Some("Wild Pidgey fainted!"));

    let events = run(&mut scenes, "ok")?;
    assert_eq!(events[0], SceneEvent::BattleEnded(BattleExit::Finished));
    assert_eq!(scenes.scene(), SceneType::Exploration);

    // The player's creature keeps its state after the battle.
    let player = &scenes.state().player;
    assert_eq!(player.level, 60);
    assert_eq!(player.current_hp, player.max_hp);
    Ok(())
}

#[test]
fn test_end_only_after_a_faint() -> TallgrassResult<()> {
    let mut scenes = SceneManager::new(GameState::new(ambush_config(5))?);
    // Growl twice in a row: nobody can faint from it.
    run(
        &mut scenes,
        "right ok ok right ok tick*21 ok ok tick*21 ok ok ok right ok tick*21 ok",
    )?;
    assert_eq!(phase(&scenes), Some(BattlePhase::Result));

    let state = scenes.state();
    let battle = state.battle.as_ref().map(|b| (b.wild.current_hp, b.wild.max_hp));
    assert_eq!(battle.map(|(hp, max)| hp == max), Some(true));
    assert!(!state.player.is_fainted());
    assert_eq!(
        state.battle.as_ref().map(|b| b.dialog().text()),
        Some("It had no effect...".to_string())
    );
    Ok(())
}

#[test]
fn test_damage_persists_between_battles() -> TallgrassResult<()> {
    let mut scenes = SceneManager::new(GameState::new(ambush_config(5))?);
    run(&mut scenes, "right ok ok right ok tick*21 ok ok tick*21 ok ok")?;
    assert_eq!(phase(&scenes), Some(BattlePhase::ChooseAction));
    let hurt = scenes.state().player.current_hp;
    assert!(hurt < scenes.state().player.max_hp);

    run(&mut scenes, "back right ok")?;
    assert_eq!(scenes.scene(), SceneType::Battle);
    assert_eq!(scenes.state().player.current_hp, hurt);
    Ok(())
}

//! Integration tests for walking between Route 1 and Pallet Town.

use tallgrass::{
    Direction, GameConfig, GameEvent, GameState, MoveOutcome, PlayerInput, Position,
    SceneEvent, SceneManager, SceneType, TallgrassResult, PALLET_TOWN, ROUTE_1,
};

fn quiet_manager() -> TallgrassResult<SceneManager> {
    Ok(SceneManager::new(GameState::new(GameConfig::for_testing(98765))?))
}

fn walk(scenes: &mut SceneManager, direction: Direction, steps: usize) -> Vec<SceneEvent> {
    (0..steps)
        .map(|_| scenes.handle_event(GameEvent::Key(PlayerInput::Direction(direction))))
        .collect()
}

/// Walk from the start tile onto the Route 1 exit at (4, 18).
#[test]
fn test_route_exit_leads_to_pallet_town() -> TallgrassResult<()> {
    let mut scenes = quiet_manager()?;

    walk(&mut scenes, Direction::Right, 2);
    walk(&mut scenes, Direction::Down, 15);
    assert_eq!(scenes.state().trainer.tile_position(), Position::new(4, 17));
    assert_eq!(scenes.state().world.current_map, ROUTE_1);

    let events = walk(&mut scenes, Direction::Down, 1);
    assert_eq!(
        events[0],
        SceneEvent::Moved(MoveOutcome::Transitioned {
            from: ROUTE_1,
            to: PALLET_TOWN
        })
    );

    let state = scenes.state();
    assert_eq!(state.world.current_map, PALLET_TOWN);
    assert_eq!(state.world.current()?.name, "Pallet Town");
    assert_eq!(state.trainer.position, Position::new(32, 160));
    assert_eq!(scenes.scene(), SceneType::Exploration);
    Ok(())
}

/// Walk back from Pallet Town through the return link at (17, 1).
#[test]
fn test_round_trip_through_both_links() -> TallgrassResult<()> {
    let mut scenes = quiet_manager()?;
    walk(&mut scenes, Direction::Right, 2);
    walk(&mut scenes, Direction::Down, 16);
    assert_eq!(scenes.state().world.current_map, PALLET_TOWN);

    walk(&mut scenes, Direction::Right, 15);
    walk(&mut scenes, Direction::Up, 8);
    assert_eq!(scenes.state().trainer.tile_position(), Position::new(17, 2));

    let events = walk(&mut scenes, Direction::Up, 1);
    assert_eq!(
        events[0],
        SceneEvent::Moved(MoveOutcome::Transitioned {
            from: PALLET_TOWN,
            to: ROUTE_1
        })
    );
    assert_eq!(scenes.state().world.current_map, ROUTE_1);
    assert_eq!(scenes.state().trainer.position, Position::new(32, 160));
    Ok(())
}

#[test]
fn test_border_trees_block_movement() -> TallgrassResult<()> {
    let mut scenes = quiet_manager()?;
    let start = scenes.state().trainer.position;

    walk(&mut scenes, Direction::Up, 1);
    let events = walk(&mut scenes, Direction::Up, 3);
    assert!(events
        .iter()
        .all(|e| *e == SceneEvent::Moved(MoveOutcome::Blocked)));
    assert_eq!(scenes.state().trainer.position, start - Position::new(0, 16));
    assert_eq!(scenes.state().trainer.facing, Direction::Up);
    Ok(())
}

#[test]
fn test_walking_the_whole_map_never_leaves_bounds() -> TallgrassResult<()> {
    let mut scenes = quiet_manager()?;
    for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
        walk(&mut scenes, direction, 25);
        let tile = scenes.state().trainer.tile_position();
        assert!((0..20).contains(&tile.x) && (0..20).contains(&tile.y));
    }
    Ok(())
}

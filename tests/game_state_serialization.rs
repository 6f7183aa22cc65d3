use alexandria::{GameEngine, GameError, GameState, PlayerId};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #[test]
    fn game_state_roundtrip(seed in any::<u64>(), players in 1usize..6, turns in 0usize..20) {
        let mut engine = GameEngine::from_seed(seed);
        engine.start_game(players).unwrap();
        for i in 0..turns {
            engine.next_player().unwrap();
            engine.next_player_turn((i % 6) as i32 + 1).unwrap();
        }
        let state = engine.state();
        let json = serde_json::to_string(&state).unwrap();
        let decoded: GameState = serde_json::from_str(&json).unwrap();
        let restored = GameEngine::from_state(decoded, SmallRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(engine.state(), restored.state());
    }
}

#[test]
fn restored_engine_keeps_playing() {
    let mut engine = GameEngine::from_seed(10);
    engine.start_game(3).unwrap();
    engine.set_current_player(PlayerId(2)).unwrap();

    let mut restored = GameEngine::from_state(engine.state(), SmallRng::seed_from_u64(10)).unwrap();
    assert_eq!(restored.current_player().unwrap().id(), PlayerId(2));
    assert_eq!(restored.board(), engine.board());
    assert!(restored.next_player_turn(1).is_ok());
}

#[test]
fn restoring_unknown_current_player_fails() {
    let mut engine = GameEngine::from_seed(10);
    engine.start_game(2).unwrap();
    let mut state = engine.state();
    state.current = Some(PlayerId(9));

    let restored = GameEngine::from_state(state, SmallRng::seed_from_u64(0));
    assert!(matches!(restored, Err(GameError::UnknownPlayer(PlayerId(9)))));
}

fn player_json(id: u32) -> String {
    format!(r#"{{"id":{},"position":0,"skip_next_round":false,"has_joker":false}}"#, id)
}

#[test]
fn restoring_invalid_layout_fails() {
    let json = format!(
        r#"{{"players":[{},{}],"board":{{"bonus_fields":[7,7,7,40,-3],"trap_fields":[7,7,7,7,7]}},"current":null}}"#,
        player_json(1),
        player_json(2)
    );
    let state: GameState = serde_json::from_str(&json).unwrap();

    let restored = GameEngine::from_state(state, SmallRng::seed_from_u64(0));
    assert!(matches!(restored, Err(GameError::InvalidBoard)));
}

#[test]
fn restoring_misnumbered_roster_fails() {
    let board = r#"{"bonus_fields":[1,2,3,4,5],"trap_fields":[6,7,8,9,10]}"#;
    for ids in [vec![1, 1], vec![0, 1], vec![2, 1], vec![1, 3]] {
        let players: Vec<String> = ids.iter().map(|id| player_json(*id)).collect();
        let json = format!(
            r#"{{"players":[{}],"board":{},"current":null}}"#,
            players.join(","),
            board
        );
        let state: GameState = serde_json::from_str(&json).unwrap();

        let restored = GameEngine::from_state(state, SmallRng::seed_from_u64(0));
        assert!(matches!(restored, Err(GameError::InvalidRoster)), "ids {:?}", ids);
    }
}

#[test]
fn restoring_board_without_players_fails() {
    let mut engine = GameEngine::from_seed(4);
    engine.start_game(2).unwrap();
    let mut state = engine.state();
    state.players.clear();

    let restored = GameEngine::from_state(state, SmallRng::seed_from_u64(0));
    assert!(matches!(restored, Err(GameError::InvalidPlayerCount)));
}

use alexandria::{DieRoller, GameEngine, GameSession, PlayerId, ScriptedRoller};

#[test]
fn scripted_single_turn_finishes_the_game() {
    let engine = GameEngine::from_seed(17);
    let roller = ScriptedRoller::new(vec![31]);
    let mut session = GameSession::new(engine, Box::new(roller), 10);
    let mut out = Vec::new();

    let summary = session.run(1, &mut out).unwrap();

    assert!(summary.finished);
    assert_eq!(summary.turns, 1);
    assert_eq!(summary.leader, Some(PlayerId(1)));
    assert_eq!(summary.positions, vec![(PlayerId(1), 31)]);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("Bonus fields are located at: "));
    assert_eq!(lines[1], "Player 1");
    assert_eq!(lines[2], "Current position for player 1 is 31");
}

#[test]
fn turn_limit_stops_an_endless_game() {
    let engine = GameEngine::from_seed(3);
    let roller = ScriptedRoller::new(vec![0, 0, 0, 0]);
    let mut session = GameSession::new(engine, Box::new(roller), 3);

    let summary = session.run(2, &mut std::io::sink()).unwrap();

    assert!(!summary.finished);
    assert_eq!(summary.turns, 3);
    assert!(summary.positions.iter().all(|(_, pos)| *pos == 0));
    assert!(session.engine().game_is_running());
}

#[test]
fn exhausted_roller_is_an_error() {
    let engine = GameEngine::from_seed(3);
    let mut session = GameSession::new(engine, Box::new(ScriptedRoller::new(vec![])), 5);
    assert!(session.run(2, &mut std::io::sink()).is_err());
}

#[test]
fn zero_players_is_an_error() {
    let engine = GameEngine::from_seed(3);
    let mut session = GameSession::new(engine, Box::new(DieRoller::from_seed(1)), 5);
    assert!(session.run(0, &mut std::io::sink()).is_err());
}

#[test]
fn die_rolled_game_reaches_the_end() {
    for seed in [1u64, 7, 42] {
        let engine = GameEngine::from_seed(seed);
        let roller = DieRoller::from_seed(seed + 1);
        let mut session = GameSession::new(engine, Box::new(roller), 1_000);

        let summary = session.run(3, &mut std::io::sink()).unwrap();

        assert!(summary.finished);
        let leader = summary.leader.unwrap();
        let engine = session.into_engine();
        assert!(engine.player(leader).unwrap().position() > 30);
    }
}

#[test]
fn seeded_sessions_are_reproducible() {
    let play = || {
        let mut session = GameSession::new(
            GameEngine::from_seed(2024),
            Box::new(DieRoller::from_seed(2025)),
            1_000,
        );
        let mut out = Vec::new();
        let summary = session.run(4, &mut out).unwrap();
        (summary, out)
    };
    assert_eq!(play(), play());
}

#[test]
fn transcript_has_no_blank_lines_after_group_effects() {
    let mut group_effects = 0;
    for seed in 0..20u64 {
        let mut session = GameSession::new(
            GameEngine::from_seed(seed),
            Box::new(DieRoller::from_seed(seed + 100)),
            1_000,
        );
        let mut out = Vec::new();
        session.run(3, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        group_effects += text.matches("All other players move").count();
        assert!(text.lines().all(|line| !line.is_empty()), "blank line in:\n{}", text);
    }
    assert!(group_effects > 0);
}

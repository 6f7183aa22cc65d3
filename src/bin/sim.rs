use alexandria::{DieRoller, GameEngine, GameSession, DEFAULT_MAX_TURNS};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed> <players>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let players: usize = args[2].parse()?;

    let engine = GameEngine::from_seed(seed);
    let roller = DieRoller::from_seed(seed.wrapping_add(1));
    let mut session = GameSession::new(engine, Box::new(roller), DEFAULT_MAX_TURNS);
    let summary = session.run(players, &mut std::io::sink())?;

    let result = json!({
        "seed": seed,
        "players": players,
        "turns": summary.turns,
        "finished": summary.finished,
        "winner": summary.leader.filter(|_| summary.finished).map(|id| id.0),
        "positions": summary.positions.iter().map(|(id, pos)| json!({"player": id.0, "position": pos})).collect::<Vec<_>>(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

use broadside::{play_match, Autopilot, MatchSummary, Outcome, FLEET};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [matches]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let matches: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut summaries: Vec<MatchSummary> = Vec::with_capacity(matches);
    for i in 0..matches as u64 {
        let pilot_rng = SmallRng::seed_from_u64(seed.wrapping_add(i + 1));
        let mut pilot = Autopilot::new(pilot_rng);
        summaries.push(play_match(&mut pilot, &mut rng, "Autopilot", &FLEET)?);
    }

    let count = |o: Outcome| summaries.iter().filter(|s| s.outcome == o).count();
    let result = json!({
        "seed": seed,
        "matches": summaries,
        "player_wins": count(Outcome::PlayerWins),
        "opponent_wins": count(Outcome::OpponentWins),
        "draws": count(Outcome::Draw),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}

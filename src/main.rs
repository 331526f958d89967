#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, Match, Player};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::{Rng, SeedableRng};
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play computer-vs-computer matches and print a JSON summary.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: usize,
        #[arg(long, default_value_t = 200)]
        max_turns: usize,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim {
            seed,
            games,
            max_turns,
        } => {
            let base = seed.unwrap_or_else(|| rand::rng().random());
            log::info!("simulating {} game(s) from seed {}", games, base);

            let mut results = Vec::with_capacity(games);
            let mut wins = [0usize; 2];
            let mut total_turns = 0usize;
            for game in 0..games {
                let mut rng = SmallRng::seed_from_u64(base.wrapping_add(game as u64));
                let mut first = Player::automated("Computer 1");
                let mut second = Player::automated("Computer 2");
                first.deploy_fleet(&mut rng)?;
                second.deploy_fleet(&mut rng)?;

                let mut battle = Match::new(first, second);
                let winner = battle.run(&mut rng, max_turns)?;
                wins[winner] += 1;
                total_turns += battle.turns();
                results.push(json!({
                    "game": game,
                    "winner": battle.player(winner).name(),
                    "turns": battle.turns(),
                    "status": battle.status(),
                    "shots": [
                        battle.player(0).opponent_view().shot_count(),
                        battle.player(1).opponent_view().shot_count(),
                    ],
                }));
            }

            let summary = json!({
                "seed": base,
                "games": results,
                "wins": wins,
                "average_turns": total_turns as f64 / games.max(1) as f64,
            });
            println!("{}", serde_json::to_string(&summary)?);
        }
    }
    Ok(())
}

use clap::{Parser, ValueEnum};
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

use seabattle::{init_logging, Player, StrategyKind, DEFAULT_GRID};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Run simulated Battleship games and report shot-count statistics",
    long_about = None
)]
struct Cli {
    /// Targeting strategy to simulate.
    #[arg(long, value_enum, default_value_t = StrategyArg::Density)]
    strategy: StrategyArg,
    /// Board side length.
    #[arg(long, default_value_t = DEFAULT_GRID)]
    size: usize,
    /// Number of games to run.
    #[arg(long, default_value_t = 100)]
    games: u32,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Emit the summary as JSON instead of text.
    #[arg(long)]
    json: bool,
    /// Also print raw per-game shot counts, one per line.
    #[arg(long)]
    raw: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StrategyArg {
    Random,
    Hunt,
    Density,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Random => StrategyKind::Random,
            StrategyArg::Hunt => StrategyKind::Hunt,
            StrategyArg::Density => StrategyKind::Density,
        }
    }
}

/// Aggregate shot-count statistics over one run of games.
#[derive(Serialize)]
struct RunSummary {
    strategy: &'static str,
    size: usize,
    games: u32,
    mean: f64,
    std_dev: f64,
    min: u32,
    max: u32,
    median: u32,
}

fn strategy_name(kind: StrategyKind) -> &'static str {
    match kind {
        StrategyKind::Random => "random",
        StrategyKind::Hunt => "hunt",
        StrategyKind::Density => "density",
    }
}

fn summarize(kind: StrategyKind, size: usize, counts: &[u32]) -> RunSummary {
    let n = counts.len() as f64;
    let mut sorted = counts.to_vec();
    sorted.sort_unstable();
    let mean = sorted.iter().map(|&count| count as f64).sum::<f64>() / n;
    let variance = sorted
        .iter()
        .map(|&count| (count as f64 - mean).powi(2))
        .sum::<f64>()
        / n;
    RunSummary {
        strategy: strategy_name(kind),
        size,
        games: counts.len() as u32,
        mean,
        std_dev: variance.sqrt(),
        min: sorted[0],
        max: *sorted.last().unwrap_or(&0),
        median: sorted[sorted.len() / 2],
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    anyhow::ensure!(cli.games > 0, "--games must be at least 1");

    let mut rng = if let Some(seed) = cli.seed {
        SmallRng::seed_from_u64(seed)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let kind = StrategyKind::from(cli.strategy);
    let mut player = Player::new("sim");
    let mut counts = Vec::with_capacity(cli.games as usize);
    for _ in 0..cli.games {
        counts.push(player.play(kind, cli.size, &mut rng)?);
    }
    debug!("completed {} games", counts.len());

    if cli.raw {
        for count in &counts {
            println!("{}", count);
        }
    }

    let summary = summarize(kind, cli.size, &counts);
    if cli.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!(
            "strategy: {} | board: {}x{} | games: {}",
            summary.strategy, summary.size, summary.size, summary.games
        );
        println!(
            "shots: mean {:.2}, std dev {:.2}, min {}, max {}, median {}",
            summary.mean, summary.std_dev, summary.min, summary.max, summary.median
        );
    }
    Ok(())
}

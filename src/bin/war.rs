//! Plays War over and over and reports running statistics.

use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use warrs::{GameOptions, Simulation, SimulationOptions};

/// Simulates games of War and reports average length and win rate.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Random seed; defaults to the current time in seconds
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of games to play; runs until interrupted when omitted
    #[arg(short, long)]
    games: Option<u64>,

    /// Completed games between two summary lines
    #[arg(short, long, default_value_t = 100_000)]
    report_every: u64,

    /// Cards dealt to the first player
    #[arg(long, default_value_t = warrs::DECK_SIZE / 2)]
    split_at: usize,

    /// Abandon games that run longer than this many rounds
    #[arg(long)]
    max_rounds: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::ConfigBuilder::new()
            .set_target_level(simplelog::LevelFilter::Off)
            .set_thread_level(simplelog::LevelFilter::Off)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("seed {seed}");

    let options = SimulationOptions::default()
        .with_games(args.games)
        .with_report_every(args.report_every)
        .with_game(
            GameOptions::default()
                .with_split_at(args.split_at)
                .with_max_rounds(args.max_rounds),
        );

    let mut simulation = Simulation::new(options, seed)?;
    let statistics = simulation.run();
    log::info!("{statistics}");
    log::info!(
        "first player {} / second player {} / draws {}",
        statistics.first_player_wins,
        statistics.second_player_wins,
        statistics.draws,
    );

    Ok(())
}

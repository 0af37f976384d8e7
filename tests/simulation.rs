//! Simulation and statistics tests.

#![allow(clippy::float_cmp)]

use warrs::{
    GameOptions, GameResult, GameState, Simulation, SimulationError, SimulationOptions,
    SplitError, Statistics,
};

const fn result(state: GameState, rounds: u64) -> GameResult {
    GameResult { state, rounds }
}

#[test]
fn statistics_track_outcomes() {
    let mut stats = Statistics::new();
    assert_eq!(stats.average_rounds(), 0.0);
    assert_eq!(stats.first_player_win_rate(), 0.0);

    stats.record(&result(GameState::FirstPlayerWon, 100));
    stats.record(&result(GameState::FirstPlayerWon, 300));
    stats.record(&result(GameState::SecondPlayerWon, 200));
    stats.record(&result(GameState::Draw, 400));

    assert_eq!(stats.games, 4);
    assert_eq!(stats.total_rounds, 1000);
    assert_eq!(stats.first_player_wins, 2);
    assert_eq!(stats.second_player_wins, 1);
    assert_eq!(stats.draws, 1);
    assert_eq!(stats.average_rounds(), 250.0);
    assert_eq!(stats.first_player_win_rate(), 0.5);

    let line = stats.to_string();
    assert!(line.starts_with("game 4 is done"));
    assert!(line.contains("250.0000"));
    assert!(!line.contains("abandoned"));

    stats.record(&result(GameState::RoundLimitReached, 0));
    assert_eq!(stats.round_limit_reached, 1);
    assert!(stats.to_string().contains("1 abandoned"));
}

#[test]
fn invalid_options_are_rejected() {
    let options = SimulationOptions::default().with_report_every(0);
    assert_eq!(
        Simulation::new(options, 1).unwrap_err(),
        SimulationError::ZeroReportInterval
    );

    let options = SimulationOptions::default().with_game(GameOptions::default().with_split_at(53));
    assert_eq!(
        Simulation::new(options, 1).unwrap_err(),
        SimulationError::Split(SplitError::OutOfRange { at: 53, len: 52 })
    );
}

#[test]
fn run_plays_the_requested_number_of_games() {
    let options = SimulationOptions::default()
        .with_games(Some(200))
        .with_report_every(50);
    let mut simulation = Simulation::new(options, 2024).unwrap();
    let stats = simulation.run();

    assert_eq!(stats.games, 200);
    assert!(simulation.is_finished());
    assert_eq!(
        stats.first_player_wins + stats.second_player_wins + stats.draws,
        200
    );
    assert!(stats.average_rounds() > 0.0);
    assert!(stats.first_player_win_rate() > 0.0 && stats.first_player_win_rate() < 1.0);
}

#[test]
fn same_seed_gives_same_statistics() {
    let options = SimulationOptions::default().with_games(Some(50));
    let a = Simulation::new(options, 77).unwrap().run();
    let b = Simulation::new(options, 77).unwrap().run();
    assert_eq!(a, b);
}

#[test]
fn play_game_records_each_result() {
    let mut simulation = Simulation::new(SimulationOptions::default(), 5).unwrap();
    let first = simulation.play_game();
    let second = simulation.play_game();

    assert!(first.state.is_terminal());
    assert!(second.state.is_terminal());
    assert_eq!(simulation.statistics().games, 2);
    assert_eq!(
        simulation.statistics().total_rounds,
        first.rounds + second.rounds
    );
    assert!(!simulation.is_finished());
}

#[test]
fn round_cap_is_applied_to_every_game() {
    let options = SimulationOptions::default()
        .with_games(Some(20))
        .with_game(GameOptions::default().with_max_rounds(Some(5)));
    let stats = Simulation::new(options, 3).unwrap().run();

    assert_eq!(stats.games, 20);
    assert_eq!(stats.round_limit_reached, 20);
    assert_eq!(stats.total_rounds, 100);
}

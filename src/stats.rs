//! Aggregate statistics across simulated games.

use core::fmt;

use crate::game::GameState;
use crate::result::GameResult;

/// Running totals over many games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    /// Games played.
    pub games: u64,
    /// Rounds played across all games.
    pub total_rounds: u64,
    /// Games won by the first player.
    pub first_player_wins: u64,
    /// Games won by the second player.
    pub second_player_wins: u64,
    /// Games ending with both hands empty.
    pub draws: u64,
    /// Games abandoned at the round cap.
    pub round_limit_reached: u64,
}

impl Statistics {
    /// Creates empty statistics.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            games: 0,
            total_rounds: 0,
            first_player_wins: 0,
            second_player_wins: 0,
            draws: 0,
            round_limit_reached: 0,
        }
    }

    /// Adds a finished game to the totals.
    ///
    /// Results still marked in progress are counted as games but credit no
    /// outcome.
    pub const fn record(&mut self, result: &GameResult) {
        self.games += 1;
        self.total_rounds += result.rounds;
        match result.state {
            GameState::FirstPlayerWon => self.first_player_wins += 1,
            GameState::SecondPlayerWon => self.second_player_wins += 1,
            GameState::Draw => self.draws += 1,
            GameState::RoundLimitReached => self.round_limit_reached += 1,
            GameState::InProgress => {}
        }
    }

    /// Average rounds per game, or 0 before any game is recorded.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for round counts"
    )]
    pub fn average_rounds(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_rounds as f64 / self.games as f64
    }

    /// Fraction of games won by the first player, or 0 before any game is recorded.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for game counts"
    )]
    pub fn first_player_win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.first_player_wins as f64 / self.games as f64
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "game {} is done: {:.4} rounds per game, first player wins {:.6}",
            self.games,
            self.average_rounds(),
            self.first_player_win_rate(),
        )?;
        if self.round_limit_reached > 0 {
            write!(f, ", {} abandoned", self.round_limit_reached)?;
        }
        Ok(())
    }
}

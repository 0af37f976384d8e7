//! Final game results.

use crate::game::{GameState, Player};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameResult {
    /// The terminal state the game ended in.
    pub state: GameState,
    /// Number of rounds in which cards were played.
    pub rounds: u64,
}

impl GameResult {
    /// Returns the winning player, if any.
    #[must_use]
    pub const fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Returns whether both players ran out of cards in the same round.
    #[must_use]
    pub const fn is_draw(&self) -> bool {
        matches!(self.state, GameState::Draw)
    }
}

//! Game state types.

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// The player holding the first part of the split deck.
    First,
    /// The player holding the rest of the deck.
    Second,
}

impl Player {
    /// Index of the player's hand.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Rounds are still being played.
    InProgress,
    /// The second player ran out of cards.
    FirstPlayerWon,
    /// The first player ran out of cards.
    SecondPlayerWon,
    /// Both players ran out of cards at once.
    Draw,
    /// The configured round cap was hit before either player ran out.
    RoundLimitReached,
}

impl GameState {
    /// Returns whether no further rounds will be played.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    /// Returns the winning player, if any.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::FirstPlayerWon => Some(Player::First),
            Self::SecondPlayerWon => Some(Player::Second),
            _ => None,
        }
    }
}

/// What a single call to the round resolver did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// A hand was empty; the game has just ended with the given state.
    Finished(GameState),
    /// The game had already ended; nothing changed.
    AlreadyFinished(GameState),
    /// The player won the round and took the table pile.
    Won(Player),
    /// Both cards had the same value; the next round is a tie-breaker.
    Tie,
    /// Tie-breaker round: cards went to the table without comparison.
    TieBreaker,
}

//! Game and simulation configuration options.

use crate::card::DECK_SIZE;

/// Configuration options for a single game of War.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use warrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_split_at(20)
///     .with_max_rounds(Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Number of cards dealt to the first player; the rest go to the second.
    pub split_at: usize,
    /// Rounds after which an unfinished game is abandoned.
    /// `None` lets games run until a player runs out of cards.
    pub max_rounds: Option<u64>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            split_at: DECK_SIZE / 2,
            max_rounds: None,
        }
    }
}

impl GameOptions {
    /// Sets the split point of the shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_split_at(10);
    /// assert_eq!(options.split_at, 10);
    /// ```
    #[must_use]
    pub const fn with_split_at(mut self, split_at: usize) -> Self {
        self.split_at = split_at;
        self
    }

    /// Sets the round cap.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_rounds(Some(500));
    /// assert_eq!(options.max_rounds, Some(500));
    /// ```
    #[must_use]
    pub const fn with_max_rounds(mut self, max_rounds: Option<u64>) -> Self {
        self.max_rounds = max_rounds;
        self
    }
}

/// Configuration options for a simulation run.
///
/// ```
/// use warrs::{GameOptions, SimulationOptions};
///
/// let options = SimulationOptions::default()
///     .with_games(Some(1_000))
///     .with_report_every(100)
///     .with_game(GameOptions::default().with_max_rounds(Some(5_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimulationOptions {
    /// Options applied to every simulated game.
    pub game: GameOptions,
    /// Number of games to play. `None` runs until interrupted.
    pub games: Option<u64>,
    /// Completed games between two summary reports.
    pub report_every: u64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            game: GameOptions::default(),
            games: None,
            report_every: 100_000,
        }
    }
}

impl SimulationOptions {
    /// Sets the per-game options.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{GameOptions, SimulationOptions};
    ///
    /// let game = GameOptions::default().with_split_at(30);
    /// let options = SimulationOptions::default().with_game(game);
    /// assert_eq!(options.game.split_at, 30);
    /// ```
    #[must_use]
    pub const fn with_game(mut self, game: GameOptions) -> Self {
        self.game = game;
        self
    }

    /// Sets the number of games to play.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_games(Some(42));
    /// assert_eq!(options.games, Some(42));
    /// ```
    #[must_use]
    pub const fn with_games(mut self, games: Option<u64>) -> Self {
        self.games = games;
        self
    }

    /// Sets the report interval.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_report_every(10);
    /// assert_eq!(options.report_every, 10);
    /// ```
    #[must_use]
    pub const fn with_report_every(mut self, report_every: u64) -> Self {
        self.report_every = report_every;
        self
    }
}

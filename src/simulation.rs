//! Repeated game simulation.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::DECK_SIZE;
use crate::error::{SimulationError, SplitError};
use crate::game::Game;
use crate::options::SimulationOptions;
use crate::result::GameResult;
use crate::stats::Statistics;

/// Deals and plays games one after another, keeping running statistics.
///
/// Each simulation owns its random number generator, so independent
/// simulations never share random state.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Simulation options.
    options: SimulationOptions,
    /// Totals so far.
    statistics: Statistics,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Simulation {
    /// Creates a simulation with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use warrs::{Simulation, SimulationOptions};
    ///
    /// let options = SimulationOptions::default().with_games(Some(10));
    /// let mut simulation = Simulation::new(options, 42).unwrap();
    /// let statistics = simulation.run();
    /// assert_eq!(statistics.games, 10);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the report interval is zero or the split point
    /// does not fit in a deck.
    pub fn new(options: SimulationOptions, seed: u64) -> Result<Self, SimulationError> {
        if options.report_every == 0 {
            return Err(SimulationError::ZeroReportInterval);
        }
        if options.game.split_at > DECK_SIZE {
            return Err(SplitError::OutOfRange {
                at: options.game.split_at,
                len: DECK_SIZE,
            }
            .into());
        }

        Ok(Self {
            options,
            statistics: Statistics::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Returns the simulation options.
    #[must_use]
    pub const fn options(&self) -> &SimulationOptions {
        &self.options
    }

    /// Returns the totals so far.
    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Returns whether the configured number of games has been played.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.options
            .games
            .is_some_and(|games| self.statistics.games >= games)
    }

    /// Deals, plays, and records one game.
    ///
    /// Draws are reported as soon as they happen; a summary is reported
    /// every `report_every` games.
    #[expect(
        clippy::missing_panics_doc,
        reason = "split point is validated in Simulation::new"
    )]
    pub fn play_game(&mut self) -> GameResult {
        let mut game = Game::deal(self.options.game, &mut self.rng)
            .expect("split point was validated when the simulation was created");
        let result = game.play(&mut self.rng);

        self.statistics.record(&result);
        let games = self.statistics.games;
        log::debug!("game {games}: {:?} after {} rounds", result.state, result.rounds);

        if result.is_draw() {
            log::warn!("game {games} ended in a draw");
        }
        if games % self.options.report_every == 0 {
            log::info!("{}", self.statistics);
        }

        result
    }

    /// Plays games until the configured count is reached and returns the
    /// final totals.
    ///
    /// With no game count this never returns.
    pub fn run(&mut self) -> Statistics {
        log::info!("starting simulation: {:?}", self.options);
        while !self.is_finished() {
            self.play_game();
        }
        self.statistics
    }
}

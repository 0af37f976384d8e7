//! Game engine and state management.

use rand::Rng;

use crate::deck::{shuffled_deck, split};
use crate::error::SplitError;
use crate::hand::{Hand, TablePile};
use crate::options::GameOptions;
use crate::result::GameResult;

mod play;
mod round;
pub mod state;

pub use state::{GameState, Player, RoundOutcome};

/// A game of War between two players.
///
/// The game owns both hands and the table pile. It does not own a random
/// source: every operation that shuffles takes the caller's generator, so a
/// simulation worker can drive many games from one seeded RNG.
#[derive(Debug, Clone)]
pub struct Game {
    /// Game options.
    pub options: GameOptions,
    /// Player hands, indexed by [`Player::index`].
    hands: [Hand; 2],
    /// Cards in contention.
    table: TablePile,
    /// Next round is a tie-breaker: cards are played but not compared.
    tie_breaker_pending: bool,
    /// Rounds in which cards were played.
    rounds: u64,
    /// Current game state.
    state: GameState,
    /// Cards in play when the game was created.
    total_cards: usize,
}

impl Game {
    /// Deals a new game from a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use warrs::{Game, GameOptions, GameState};
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let game = Game::deal(GameOptions::default(), &mut rng).unwrap();
    /// assert_eq!(game.hand(warrs::Player::First).len(), 26);
    /// assert_eq!(game.state(), GameState::InProgress);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if `options.split_at` is larger than the deck.
    pub fn deal<R: Rng + ?Sized>(options: GameOptions, rng: &mut R) -> Result<Self, SplitError> {
        let deck = shuffled_deck(rng);
        let (first, second) = split(&deck, options.split_at)?;
        Ok(Self::from_hands(first, second, options))
    }

    /// Creates a game from explicit hands with an empty table.
    #[must_use]
    pub fn from_hands(first: Hand, second: Hand, options: GameOptions) -> Self {
        let total_cards = first.len() + second.len();
        Self {
            options,
            hands: [first, second],
            table: TablePile::new(),
            tie_breaker_pending: false,
            rounds: 0,
            state: GameState::InProgress,
            total_cards,
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of rounds played so far.
    #[must_use]
    pub const fn rounds(&self) -> u64 {
        self.rounds
    }

    /// Returns whether the next round is a tie-breaker.
    #[must_use]
    pub const fn is_tie_breaker_pending(&self) -> bool {
        self.tie_breaker_pending
    }

    /// Returns a player's hand.
    #[must_use]
    pub const fn hand(&self, player: Player) -> &Hand {
        &self.hands[player.index()]
    }

    /// Returns the table pile.
    #[must_use]
    pub const fn table(&self) -> &TablePile {
        &self.table
    }

    /// Returns the number of cards across both hands and the table.
    ///
    /// This never changes over the course of a game.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hands.iter().map(Hand::len).sum::<usize>() + self.table.len()
    }

    /// Returns the final state and round count.
    #[must_use]
    pub const fn result(&self) -> GameResult {
        GameResult {
            state: self.state,
            rounds: self.rounds,
        }
    }
}

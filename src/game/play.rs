use rand::Rng;

use crate::hand::Hand;
use crate::result::GameResult;

use super::{Game, GameState};

impl Game {
    /// Returns whether the round cap stops the game before the next round.
    ///
    /// A game whose hand just ran out still ends normally at the cap.
    fn round_limit_reached(&self) -> bool {
        self.options
            .max_rounds
            .is_some_and(|limit| self.rounds >= limit)
            && !self.hands.iter().any(Hand::is_empty)
    }

    /// Plays rounds until the game ends and returns the result.
    ///
    /// Without a round cap this has no upper bound; shuffling won cards makes
    /// termination certain in practice but not provably bounded.
    ///
    /// # Example
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    /// use warrs::{Game, GameOptions};
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(42);
    /// let mut game = Game::deal(GameOptions::default(), &mut rng).unwrap();
    /// let result = game.play(&mut rng);
    /// assert!(result.state.is_terminal());
    /// ```
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GameResult {
        while !self.state.is_terminal() {
            if self.round_limit_reached() {
                self.state = GameState::RoundLimitReached;
                log::warn!("game abandoned after {} rounds", self.rounds);
                break;
            }
            self.play_round(rng);
        }

        self.result()
    }
}

use core::cmp::Ordering;

use rand::Rng;

use crate::card::Card;

use super::{Game, GameState, Player, RoundOutcome};

impl Game {
    /// Takes the top card of each hand.
    ///
    /// Fails with the terminal state when either hand is empty, leaving both
    /// hands untouched.
    fn draw_top_cards(&mut self) -> Result<(Card, Card), GameState> {
        let [first, second] = &mut self.hands;
        match (first.is_empty(), second.is_empty()) {
            (true, true) => Err(GameState::Draw),
            (true, false) => Err(GameState::SecondPlayerWon),
            (false, true) => Err(GameState::FirstPlayerWon),
            (false, false) => first.draw().zip(second.draw()).ok_or(GameState::Draw),
        }
    }

    /// Shuffles the table pile and moves it to the back of the winner's hand.
    fn award_table<R: Rng + ?Sized>(&mut self, winner: Player, rng: &mut R) {
        self.table.shuffle(rng);
        self.hands[winner.index()].award(self.table.drain());
    }

    /// Plays a single round.
    ///
    /// 1. If either hand is empty the game ends: both empty is a draw,
    ///    otherwise the player still holding cards wins.
    /// 2. Both top cards go onto the table, first player's card first.
    /// 3. If a tie-breaker is pending it is cleared and the round ends with
    ///    the cards left on the table.
    /// 4. Otherwise the higher card takes the whole table, shuffled. Equal
    ///    cards leave the table in place and make the next round a
    ///    tie-breaker.
    ///
    /// Calling this on a finished game does nothing.
    pub fn play_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RoundOutcome {
        if self.state.is_terminal() {
            return RoundOutcome::AlreadyFinished(self.state);
        }

        let (first, second) = match self.draw_top_cards() {
            Ok(cards) => cards,
            Err(state) => {
                self.state = state;
                log::debug!("game finished after {} rounds: {state:?}", self.rounds);
                return RoundOutcome::Finished(state);
            }
        };

        self.table.push(first);
        self.table.push(second);
        self.rounds += 1;

        let outcome = if self.tie_breaker_pending {
            self.tie_breaker_pending = false;
            RoundOutcome::TieBreaker
        } else {
            match first.value().cmp(&second.value()) {
                Ordering::Greater => {
                    self.award_table(Player::First, rng);
                    RoundOutcome::Won(Player::First)
                }
                Ordering::Less => {
                    self.award_table(Player::Second, rng);
                    RoundOutcome::Won(Player::Second)
                }
                Ordering::Equal => {
                    self.tie_breaker_pending = true;
                    RoundOutcome::Tie
                }
            }
        };

        log::trace!("round {}: {first} vs {second}: {outcome:?}", self.rounds);
        debug_assert_eq!(self.card_count(), self.total_cards);

        outcome
    }
}

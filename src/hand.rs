//! Player hands and the table pile.

extern crate alloc;

use alloc::collections::VecDeque;
use alloc::vec::{Drain, Vec};

use rand::Rng;

use crate::card::{Card, DECK_SIZE};
use crate::deck::shuffle;

/// A player's hand.
///
/// The front of the hand is the next card to play. Won cards go to the back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in the hand.
    cards: VecDeque<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: VecDeque::new(),
        }
    }

    /// Removes and returns the card at the front of the hand.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Returns the card that would be drawn next.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Appends won cards to the back of the hand, preserving their order.
    pub fn award<I: IntoIterator<Item = Card>>(&mut self, cards: I) {
        self.cards.extend(cards);
    }

    /// Returns the cards in play order.
    pub fn cards(&self) -> impl ExactSizeIterator<Item = &Card> {
        self.cards.iter()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        let mut hand = VecDeque::with_capacity(DECK_SIZE);
        hand.extend(cards.iter().copied());
        Self { cards: hand }
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self {
            cards: VecDeque::from(cards),
        }
    }
}

/// Cards in contention on the table.
///
/// The pile grows while rounds tie and is handed over as a whole when a round
/// has a winner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TablePile {
    /// Cards on the table, in the order they were played.
    cards: Vec<Card>,
}

impl TablePile {
    /// Creates a new empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(DECK_SIZE),
        }
    }

    /// Puts a card on the table.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Shuffles the cards on the table.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.cards, rng);
    }

    /// Removes every card from the table, yielding them in pile order.
    pub fn drain(&mut self) -> Drain<'_, Card> {
        self.cards.drain(..)
    }

    /// Returns the cards on the table.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

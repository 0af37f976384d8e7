//! Deck generation, shuffling, and splitting.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, MIN_VALUE, RANK_LABELS, Suit};
use crate::error::SplitError;
use crate::hand::Hand;

/// Generates a sorted deck: one card per suit and rank, suit-major.
///
/// ```
/// use warrs::deck::generate_sorted_deck;
///
/// let deck = generate_sorted_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(deck[0].to_string(), "2H");
/// assert_eq!(deck[51].to_string(), "AD");
/// ```
#[must_use]
pub fn generate_sorted_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for index in 0..RANK_LABELS.len() {
            deck.push(Card::new(suit, index as u8 + MIN_VALUE));
        }
    }
    deck
}

/// Shuffles cards in place.
///
/// Walks from the last index down, swapping each element with a uniformly
/// chosen element at or before it. Empty and single-card slices are left
/// untouched.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Generates a sorted deck and shuffles it.
#[must_use]
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = generate_sorted_deck();
    shuffle(&mut deck, rng);
    deck
}

/// Splits a deck into two hands.
///
/// The first `at` cards, in order, form the first hand; the rest form the
/// second.
///
/// # Errors
///
/// Returns an error if `at` is greater than the deck length.
pub fn split(deck: &[Card], at: usize) -> Result<(Hand, Hand), SplitError> {
    if at > deck.len() {
        return Err(SplitError::OutOfRange {
            at,
            len: deck.len(),
        });
    }

    let (first, second) = deck.split_at(at);
    Ok((Hand::from(first), Hand::from(second)))
}

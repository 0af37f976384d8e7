//! Card types and rank labels.

use core::fmt;

/// Card suit.
///
/// Suits never take part in comparisons; they only distinguish the four
/// copies of each rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Spades, Self::Clubs, Self::Diamonds];

    /// Single-letter label used in card names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hearts => "H",
            Self::Spades => "S",
            Self::Clubs => "C",
            Self::Diamonds => "D",
        }
    }
}

/// Rank labels from lowest to highest. A label's index plus two is its value.
pub const RANK_LABELS: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

/// Lowest card value (a two).
pub const MIN_VALUE: u8 = 2;

/// Highest card value (an ace).
pub const MAX_VALUE: u8 = 14;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2..=10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 2..=14
    /// are accepted and compare by their numeric value, but render as `?`.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns the comparison value of the card.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank
    }

    /// Returns whether two cards tie, ignoring suits.
    #[must_use]
    pub const fn same_strength(&self, other: &Self) -> bool {
        self.rank == other.rank
    }

    /// Returns the rank part of the card name, e.g. `"Q"` for a queen.
    #[must_use]
    pub fn rank_label(&self) -> &'static str {
        self.rank
            .checked_sub(MIN_VALUE)
            .and_then(|index| RANK_LABELS.get(index as usize))
            .copied()
            .unwrap_or("?")
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_label(), self.suit.label())
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = Suit::ALL.len() * RANK_LABELS.len();

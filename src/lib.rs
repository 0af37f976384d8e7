//! A War card game engine and simulator with optional `no_std` support.
//!
//! The crate provides a [`Game`] type that plays two-player War to
//! completion, including tie-breaker rounds, and a [`Simulation`] that plays
//! many games in a row and keeps running statistics.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use warrs::{Game, GameOptions};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut game = Game::deal(GameOptions::default(), &mut rng).unwrap();
//! let result = game.play(&mut rng);
//! assert!(result.state.is_terminal());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod simulation;
pub mod stats;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use error::{SimulationError, SplitError};
pub use game::{Game, GameState, Player, RoundOutcome};
pub use hand::{Hand, TablePile};
pub use options::{GameOptions, SimulationOptions};
pub use result::GameResult;
pub use simulation::Simulation;
pub use stats::Statistics;

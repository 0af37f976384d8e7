//! Error types for dealing and simulation setup.

use thiserror::Error;

/// Errors that can occur when splitting a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SplitError {
    /// Split point lies past the end of the deck.
    #[error("split point {at} is out of range for a deck of {len} cards")]
    OutOfRange {
        /// Requested split point.
        at: usize,
        /// Length of the deck.
        len: usize,
    },
}

/// Errors that can occur when setting up a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// Report interval is zero.
    #[error("report interval is zero")]
    ZeroReportInterval,
    /// Configured split point cannot be used on a full deck.
    #[error(transparent)]
    Split(#[from] SplitError),
}

//! Typed errors for picking and strip landing.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PickError {
    /// Nothing to pick from.
    #[error("cannot pick from an empty catalogue")]
    EmptyCatalogue,

    /// A pick is already resetting or spinning.
    #[error("a pick is already in progress")]
    Busy,

    #[error("index {index} is out of range for a catalogue of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("strip needs at least 3 repetitions, got {0}")]
    TooFewRepetitions(usize),

    #[error("strip allows at most {max} repetitions, got {found}")]
    TooManyRepetitions { found: usize, max: usize },

    /// Tile count does not fit in `usize`.
    #[error("a strip of {repetitions} repetitions of {len} markers is too long")]
    StripTooLong { repetitions: usize, len: usize },

    /// The landing repetition must be neither the first nor the last.
    #[error("target repetition {target} is at the edge of a {repetitions}-repetition strip")]
    EdgeRepetition { target: usize, repetitions: usize },

    #[error("card width must be positive, got {0}")]
    InvalidCardWidth(f32),

    #[error("spin length must be a non-negative number of catalogue lengths, got {0}")]
    InvalidSpinLength(f32),
}

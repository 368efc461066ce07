//! Error types for card parsing, deck draws, and dice construction.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while parsing a weight or suit symbol.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// The symbol is not one of `123456789TJQKA`.
    #[error("invalid card weight symbol {0:?}")]
    Weight(String),
    /// The symbol is not one of `cdhs`.
    #[error("invalid card suit symbol {0:?}")]
    Suit(String),
}

impl SymbolError {
    /// Returns the rejected symbol text.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match self {
            Self::Weight(symbol) | Self::Suit(symbol) => symbol,
        }
    }
}

/// Errors that can occur while drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The requested count is zero or exceeds the cards left in the deck.
    #[error("{count} is out of current deck cards count ({size})")]
    CountOutOfRange {
        /// The requested number of cards.
        count: usize,
        /// The number of cards left in the deck.
        size: usize,
    },
}

/// Errors that can occur while building a die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiceError {
    /// Neither a face count nor face items were supplied.
    #[error("either a faces count or faces items must be supplied")]
    EmptyConfiguration,
    /// The face count is below the minimum.
    #[error("faces count {count} is below the minimum of {min}")]
    FacesCountTooSmall {
        /// The minimum number of faces.
        min: usize,
        /// The supplied face count.
        count: usize,
    },
    /// Fewer face items than the minimum were supplied.
    #[error("{count} faces items supplied, at least {min} required")]
    FacesItemsTooFew {
        /// The minimum number of faces.
        min: usize,
        /// The number of items supplied.
        count: usize,
    },
}

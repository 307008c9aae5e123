//! Error types for hand and classifier operations.

use thiserror::Error;

use crate::card::Card;

/// Errors that can occur when querying a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandError {
    /// The hand holds no cards.
    #[error("hand holds no cards")]
    EmptyCollection,
}

/// Errors that can occur during validated classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The hand holds no cards.
    #[error("cannot rank an empty hand")]
    EmptyHand,
    /// The hand does not hold the required number of cards.
    #[error("hand holds {actual} cards, expected {expected}")]
    WrongHandSize {
        /// Required number of cards.
        expected: usize,
        /// Number of cards in the hand.
        actual: usize,
    },
    /// The same card was drawn more than once.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// Errors that can occur when parsing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("empty card text")]
    Empty,
    /// The value part is not a known card value.
    #[error("unknown card value")]
    UnknownValue,
    /// The suit part is not a known card suit.
    #[error("unknown card suit")]
    UnknownSuit,
    /// Input matches neither the long nor the short card form.
    #[error("malformed card text")]
    Malformed,
}

//! A poker hand classifier with optional `no_std` support.
//!
//! Draw [`Card`]s into a [`Hand`] and ask a [`HandClassifier`] for its
//! [`HandRank`].
//!
//! # Example
//!
//! ```
//! use pokerhand::{Card, CardSuit, CardValue, Hand, HandClassifier, HandRank};
//!
//! let mut hand = Hand::new();
//! hand.draw(Card::new(CardValue::Two, CardSuit::Hearts));
//! hand.draw(Card::new(CardValue::Two, CardSuit::Diamonds));
//! hand.draw(Card::new(CardValue::Two, CardSuit::Spades));
//! hand.draw(Card::new(CardValue::Nine, CardSuit::Clubs));
//! hand.draw(Card::new(CardValue::Nine, CardSuit::Diamonds));
//!
//! let classifier = HandClassifier::default();
//! assert_eq!(classifier.rank(&hand), HandRank::FullHouse);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod classifier;
pub mod error;
pub mod hand;
pub mod options;
pub mod rank;

// Re-export main types
pub use card::{Card, CardSuit, CardValue};
pub use classifier::HandClassifier;
pub use error::{ClassifyError, HandError, ParseCardError};
pub use hand::Hand;
pub use options::ClassifierOptions;
pub use rank::HandRank;

//! Hand representation.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Card, CardValue};
use crate::classifier::HandClassifier;
use crate::error::{HandError, ParseCardError};
use crate::rank::HandRank;

/// A hand of cards, built up by successive draws.
///
/// Cards keep the order they were drawn in. The hand never shrinks and does
/// not check for duplicates or a maximum size; dealing a sensible hand is up
/// to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in draw order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn draw(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
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

    /// Returns the card with the highest value.
    ///
    /// When several cards share the highest value the earliest drawn one
    /// wins; suits never break ties.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::EmptyCollection`] if the hand holds no cards.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerhand::{Card, CardSuit, CardValue, Hand};
    ///
    /// let mut hand = Hand::new();
    /// hand.draw(Card::new(CardValue::Nine, CardSuit::Diamonds));
    /// hand.draw(Card::new(CardValue::Nine, CardSuit::Spades));
    ///
    /// let high = hand.high_card().unwrap();
    /// assert_eq!(high.suit(), CardSuit::Diamonds);
    /// ```
    pub fn high_card(&self) -> Result<Card, HandError> {
        self.cards
            .iter()
            .copied()
            .reduce(|high, next| if next.value() > high.value() { next } else { high })
            .ok_or(HandError::EmptyCollection)
    }

    /// Groups the cards by value and returns how many cards share each value.
    #[must_use]
    pub fn value_counts(&self) -> HashMap<CardValue, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(card.value()).or_insert(0) += 1;
        }
        counts
    }

    /// Ranks the hand with a default [`HandClassifier`].
    #[must_use]
    pub fn rank(&self) -> HandRank {
        HandClassifier::default().rank(self)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Hand {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}

impl FromStr for Hand {
    type Err = ParseCardError;

    /// Parses cards separated by commas or whitespace. Each card is either
    /// the long form (`"Ace of Spades"`) or the short form (`"As"`).
    ///
    /// ```
    /// use pokerhand::{Hand, HandRank};
    ///
    /// let hand: Hand = "Ten of Hearts Jh Qh, Kh Ace of Hearts".parse().unwrap();
    /// assert_eq!(hand.len(), 5);
    /// assert_eq!(hand.rank(), HandRank::RoyalFlush);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|word| !word.is_empty())
            .collect();

        let mut hand = Self::new();
        let mut rest = words.as_slice();
        while let Some((&word, tail)) = rest.split_first() {
            rest = match tail {
                [of, suit, tail @ ..] if of.eq_ignore_ascii_case("of") => {
                    hand.draw(Card::new(word.parse()?, suit.parse()?));
                    tail
                }
                _ => {
                    hand.draw(word.parse()?);
                    tail
                }
            };
        }
        Ok(hand)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

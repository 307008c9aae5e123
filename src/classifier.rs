//! Hand classification.
//!
//! [`HandClassifier::rank`] checks the predicates from the strongest category
//! down and returns the first one that holds. Several predicates can hold at
//! once (every straight flush is also a straight and a flush), so the order
//! of the checks decides the result.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::card::{Card, CardValue};
use crate::error::ClassifyError;
use crate::hand::Hand;
use crate::options::ClassifierOptions;
use crate::rank::HandRank;

/// Compares each element of `items` with the one after it.
///
/// Yields `items.len() - 1` results lazily, or nothing for fewer than two
/// items.
///
/// ```
/// use pokerhand::classifier::consecutive;
///
/// let steps: Vec<bool> = consecutive(&[1, 2, 4], |a, b| a + 1 == *b).collect();
/// assert_eq!(steps, [true, false]);
/// ```
pub fn consecutive<'a, T, F>(items: &'a [T], mut compare: F) -> impl Iterator<Item = bool> + 'a
where
    F: FnMut(&T, &T) -> bool + 'a,
{
    items.windows(2).map(move |pair| compare(&pair[0], &pair[1]))
}

/// Assigns a [`HandRank`] to a hand.
///
/// The classifier is stateless apart from its options, so one instance can
/// rank any number of hands.
///
/// # Example
///
/// ```
/// use pokerhand::{Card, CardSuit, CardValue, Hand, HandClassifier, HandRank};
///
/// let hand: Hand = [
///     CardValue::Ace,
///     CardValue::King,
///     CardValue::Queen,
///     CardValue::Jack,
///     CardValue::Ten,
/// ]
/// .into_iter()
/// .map(|value| Card::new(value, CardSuit::Clubs))
/// .collect();
///
/// assert_eq!(HandClassifier::default().rank(&hand), HandRank::RoyalFlush);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandClassifier {
    options: ClassifierOptions,
}

impl HandClassifier {
    /// Creates a classifier with the given options.
    #[must_use]
    pub const fn new(options: ClassifierOptions) -> Self {
        Self { options }
    }

    /// Returns the classifier options.
    #[must_use]
    pub const fn options(&self) -> &ClassifierOptions {
        &self.options
    }

    /// Ranks a hand.
    ///
    /// Never fails. Hands of any size are ranked by the literal predicates,
    /// so for example a single Ace is a royal flush. An empty hand satisfies
    /// every predicate vacuously but ranks as [`HandRank::HighCard`]. Use
    /// [`HandClassifier::try_rank`] to reject hands that are not valid poker
    /// hands.
    #[must_use]
    pub fn rank(&self, hand: &Hand) -> HandRank {
        if hand.is_empty() {
            return HandRank::HighCard;
        }

        let rank = if Self::has_royal_flush(hand) {
            HandRank::RoyalFlush
        } else if Self::has_straight_flush(hand) {
            HandRank::StraightFlush
        } else if Self::has_straight(hand) {
            HandRank::Straight
        } else if Self::has_flush(hand) {
            HandRank::Flush
        } else if Self::has_full_house(hand) {
            HandRank::FullHouse
        } else if Self::has_four_of_a_kind(hand) {
            HandRank::FourOfAKind
        } else if Self::has_three_of_a_kind(hand) {
            HandRank::ThreeOfAKind
        } else if self.options.two_pair && Self::has_two_pair(hand) {
            HandRank::TwoPair
        } else if Self::has_pair(hand) {
            HandRank::Pair
        } else {
            HandRank::HighCard
        };

        trace!("ranked [{hand}] as {rank}");
        rank
    }

    /// Validates a hand against the options, then ranks it.
    ///
    /// # Errors
    ///
    /// - [`ClassifyError::EmptyHand`] if the hand holds no cards.
    /// - [`ClassifyError::WrongHandSize`] if a hand size is configured and
    ///   the hand holds a different number of cards.
    /// - [`ClassifyError::DuplicateCard`] if duplicates are rejected and a
    ///   card appears more than once. The first repeated card in draw order
    ///   is reported.
    pub fn try_rank(&self, hand: &Hand) -> Result<HandRank, ClassifyError> {
        self.validate(hand)
            .inspect_err(|err| debug!("rejected hand [{hand}]: {err}"))?;
        Ok(self.rank(hand))
    }

    fn validate(&self, hand: &Hand) -> Result<(), ClassifyError> {
        if hand.is_empty() {
            return Err(ClassifyError::EmptyHand);
        }

        if let Some(expected) = self.options.hand_size {
            if hand.len() != expected {
                return Err(ClassifyError::WrongHandSize {
                    expected,
                    actual: hand.len(),
                });
            }
        }

        if self.options.reject_duplicates {
            if let Some(card) = first_duplicate(hand.cards()) {
                return Err(ClassifyError::DuplicateCard(card));
            }
        }

        Ok(())
    }

    /// A flush where every value is above Nine.
    #[must_use]
    pub fn has_royal_flush(hand: &Hand) -> bool {
        Self::has_flush(hand) && hand.cards().iter().all(|card| card.value() > CardValue::Nine)
    }

    /// A straight that is also a flush.
    #[must_use]
    pub fn has_straight_flush(hand: &Hand) -> bool {
        Self::has_straight(hand) && Self::has_flush(hand)
    }

    /// Sorted values increase by exactly one from each card to the next.
    ///
    /// Aces are only high, so A-2-3-4-5 is not a straight. Holds trivially
    /// for hands of zero or one card.
    #[must_use]
    pub fn has_straight(hand: &Hand) -> bool {
        let mut values: Vec<CardValue> = hand.cards().iter().map(Card::value).collect();
        values.sort_unstable();

        consecutive(&values, |current, next| current.successor() == Some(*next)).all(|step| step)
    }

    /// Every card has the suit of the first drawn card.
    ///
    /// Holds trivially for hands of zero or one card.
    #[must_use]
    pub fn has_flush(hand: &Hand) -> bool {
        let cards = hand.cards();
        cards
            .first()
            .is_none_or(|first| cards.iter().all(|card| card.suit() == first.suit()))
    }

    /// Three of a kind and a pair, checked independently.
    #[must_use]
    pub fn has_full_house(hand: &Hand) -> bool {
        Self::has_three_of_a_kind(hand) && Self::has_pair(hand)
    }

    /// Some value appears exactly four times.
    #[must_use]
    pub fn has_four_of_a_kind(hand: &Hand) -> bool {
        Self::has_of_a_kind(hand, 4)
    }

    /// Some value appears exactly three times.
    #[must_use]
    pub fn has_three_of_a_kind(hand: &Hand) -> bool {
        Self::has_of_a_kind(hand, 3)
    }

    /// At least two distinct values appear exactly twice.
    #[must_use]
    pub fn has_two_pair(hand: &Hand) -> bool {
        hand.value_counts().values().filter(|&&count| count == 2).count() >= 2
    }

    /// Some value appears exactly twice.
    #[must_use]
    pub fn has_pair(hand: &Hand) -> bool {
        Self::has_of_a_kind(hand, 2)
    }

    /// Some value appears exactly `count` times.
    #[must_use]
    pub fn has_of_a_kind(hand: &Hand, count: usize) -> bool {
        hand.value_counts().values().any(|&n| n == count)
    }
}

fn first_duplicate(cards: &[Card]) -> Option<Card> {
    cards
        .iter()
        .enumerate()
        .find(|(i, card)| cards[..*i].contains(card))
        .map(|(_, card)| *card)
}

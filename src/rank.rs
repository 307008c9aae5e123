//! Hand rank categories.

use core::fmt;

/// Strength category of a poker hand, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// No other category applies.
    HighCard,
    /// Two cards share a value.
    Pair,
    /// Two different values each appear twice.
    ///
    /// Only reported when enabled with
    /// [`ClassifierOptions::with_two_pair`](crate::ClassifierOptions::with_two_pair).
    TwoPair,
    /// Three cards share a value.
    ThreeOfAKind,
    /// Values form a contiguous run.
    Straight,
    /// All cards share a suit.
    Flush,
    /// Three of one value and two of another.
    FullHouse,
    /// Four cards share a value.
    FourOfAKind,
    /// A straight that is also a flush.
    StraightFlush,
    /// A flush of Ten through Ace.
    RoyalFlush,
}

impl HandRank {
    /// All ranks from weakest to strongest.
    pub const ALL: [Self; 10] = [
        Self::HighCard,
        Self::Pair,
        Self::TwoPair,
        Self::ThreeOfAKind,
        Self::Straight,
        Self::Flush,
        Self::FullHouse,
        Self::FourOfAKind,
        Self::StraightFlush,
        Self::RoyalFlush,
    ];
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::HighCard => "High Card",
            Self::Pair => "Pair",
            Self::TwoPair => "Two Pair",
            Self::ThreeOfAKind => "Three of a Kind",
            Self::Straight => "Straight",
            Self::Flush => "Flush",
            Self::FullHouse => "Full House",
            Self::FourOfAKind => "Four of a Kind",
            Self::StraightFlush => "Straight Flush",
            Self::RoyalFlush => "Royal Flush",
        };

        f.write_str(name)
    }
}

//! Card types and parsing.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::ParseCardError;

/// Card value, ordered from Two (lowest) to Ace (highest).
///
/// Aces are always high: there is no wraparound from Ace back to Two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardValue {
    /// Two.
    Two = 2,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl CardValue {
    /// All values in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Returns the next higher value, or `None` for an Ace.
    ///
    /// ```
    /// use pokerhand::CardValue;
    ///
    /// assert_eq!(CardValue::Nine.successor(), Some(CardValue::Ten));
    /// assert_eq!(CardValue::Ace.successor(), None);
    /// ```
    #[must_use]
    pub fn successor(self) -> Option<Self> {
        Self::ALL.get(self as usize - Self::Two as usize + 1).copied()
    }

    /// Returns the display name of the value (`"Two"` .. `"Ace"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Ace => "Ace",
        }
    }

    /// Returns the short symbol of the value (`"2"` .. `"9"`, `"T"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "T",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }

    /// Parses a short symbol only; names such as `"Ace"` are rejected.
    fn from_symbol(s: &str) -> Result<Self, ParseCardError> {
        if s == "10" {
            return Ok(Self::Ten);
        }

        Self::ALL
            .into_iter()
            .find(|value| value.symbol().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::UnknownValue)
    }
}

impl fmt::Display for CardValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardValue {
    type Err = ParseCardError;

    /// Parses a value from its name (case-insensitive) or its short symbol.
    /// `"10"` is accepted as well as `"T"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }
        Self::from_symbol(s).or_else(|_| {
            Self::ALL
                .into_iter()
                .find(|value| value.name().eq_ignore_ascii_case(s))
                .ok_or(ParseCardError::UnknownValue)
        })
    }
}

/// Card suit.
///
/// Suits have no ranking, so this type only implements equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardSuit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl CardSuit {
    /// All suits.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the display name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
        }
    }

    /// Returns the lowercase initial of the suit.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Self::Clubs => 'c',
            Self::Diamonds => 'd',
            Self::Hearts => 'h',
            Self::Spades => 's',
        }
    }
}

impl fmt::Display for CardSuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardSuit {
    type Err = ParseCardError;

    /// Parses a suit from its name or its initial, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|suit| {
                let initial = suit.initial();
                suit.name().eq_ignore_ascii_case(s)
                    || (s.len() == 1 && s.starts_with(|c: char| c.eq_ignore_ascii_case(&initial)))
            })
            .ok_or(ParseCardError::UnknownSuit)
    }
}

/// A playing card.
///
/// Cards are immutable once created. Two cards are equal when both their
/// value and suit are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    value: CardValue,
    suit: CardSuit,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(value: CardValue, suit: CardSuit) -> Self {
        Self { value, suit }
    }

    /// Returns the value of the card.
    #[must_use]
    pub const fn value(&self) -> CardValue {
        self.value
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> CardSuit {
        self.suit
    }

    /// Describes the card as `"{value} of {suit}"`.
    ///
    /// ```
    /// use pokerhand::{Card, CardSuit, CardValue};
    ///
    /// let card = Card::new(CardValue::Ace, CardSuit::Spades);
    /// assert_eq!(card.describe(), "Ace of Spades");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.value, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses either the long form produced by [`Card::describe`]
    /// (`"Ace of Spades"`) or the short form (`"As"`, `"Td"`, `"10h"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCardError::Empty);
        }

        let mut words = s.split_whitespace();
        match (words.next(), words.next(), words.next(), words.next()) {
            (Some(value), Some(of), Some(suit), None) if of.eq_ignore_ascii_case("of") => {
                Ok(Self::new(value.parse()?, suit.parse()?))
            }
            (Some(short), None, None, None) => {
                let Some((split, _)) = short.char_indices().last() else {
                    return Err(ParseCardError::Malformed);
                };
                if split == 0 {
                    return Err(ParseCardError::Malformed);
                }
                let (value, suit) = short.split_at(split);
                Ok(Self::new(CardValue::from_symbol(value)?, suit.parse()?))
            }
            _ => Err(ParseCardError::Malformed),
        }
    }
}

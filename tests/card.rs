//! Card integration tests.

use pokerhand::{Card, CardSuit, CardValue, ParseCardError};

#[test]
fn card_keeps_value_and_suit() {
    let card = Card::new(CardValue::Ace, CardSuit::Clubs);
    assert_eq!(card.value(), CardValue::Ace);
    assert_eq!(card.suit(), CardSuit::Clubs);
}

#[test]
fn describe_uses_value_and_suit_names() {
    assert_eq!(
        Card::new(CardValue::Ace, CardSuit::Spades).describe(),
        "Ace of Spades"
    );
    assert_eq!(
        Card::new(CardValue::Ten, CardSuit::Hearts).describe(),
        "Ten of Hearts"
    );

    for value in CardValue::ALL {
        for suit in CardSuit::ALL {
            let card = Card::new(value, suit);
            assert_eq!(card.describe(), format!("{value} of {suit}"));
            assert_eq!(card.describe(), card.to_string());
        }
    }
}

#[test]
fn cards_are_equal_only_when_both_fields_match() {
    let ace = Card::new(CardValue::Ace, CardSuit::Spades);
    assert_eq!(ace, Card::new(CardValue::Ace, CardSuit::Spades));
    assert_ne!(ace, Card::new(CardValue::Ace, CardSuit::Hearts));
    assert_ne!(ace, Card::new(CardValue::King, CardSuit::Spades));
}

#[test]
fn values_are_ordered_two_to_ace() {
    assert!(CardValue::Two < CardValue::Three);
    assert!(CardValue::King < CardValue::Ace);
    assert!(CardValue::ALL.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(CardValue::ALL.first(), Some(&CardValue::Two));
    assert_eq!(CardValue::ALL.last(), Some(&CardValue::Ace));
}

#[test]
fn successor_stops_at_ace() {
    assert_eq!(CardValue::Two.successor(), Some(CardValue::Three));
    assert_eq!(CardValue::Nine.successor(), Some(CardValue::Ten));
    assert_eq!(CardValue::King.successor(), Some(CardValue::Ace));
    assert_eq!(CardValue::Ace.successor(), None);
}

#[test]
fn parse_long_form() {
    assert_eq!(
        "Ace of Spades".parse::<Card>(),
        Ok(Card::new(CardValue::Ace, CardSuit::Spades))
    );
    assert_eq!(
        "  seven OF diamonds ".parse::<Card>(),
        Ok(Card::new(CardValue::Seven, CardSuit::Diamonds))
    );

    for value in CardValue::ALL {
        for suit in CardSuit::ALL {
            let card = Card::new(value, suit);
            assert_eq!(card.describe().parse::<Card>(), Ok(card));
        }
    }
}

#[test]
fn parse_short_form() {
    assert_eq!(
        "As".parse::<Card>(),
        Ok(Card::new(CardValue::Ace, CardSuit::Spades))
    );
    assert_eq!(
        "Td".parse::<Card>(),
        Ok(Card::new(CardValue::Ten, CardSuit::Diamonds))
    );
    assert_eq!(
        "10h".parse::<Card>(),
        Ok(Card::new(CardValue::Ten, CardSuit::Hearts))
    );
    assert_eq!(
        "2C".parse::<Card>(),
        Ok(Card::new(CardValue::Two, CardSuit::Clubs))
    );
}

#[test]
fn parse_errors() {
    assert_eq!("".parse::<Card>(), Err(ParseCardError::Empty));
    assert_eq!("   ".parse::<Card>(), Err(ParseCardError::Empty));
    assert_eq!("A".parse::<Card>(), Err(ParseCardError::Malformed));
    assert_eq!("Ace Spades".parse::<Card>(), Err(ParseCardError::Malformed));
    assert_eq!(
        "Ace of the Spades".parse::<Card>(),
        Err(ParseCardError::Malformed)
    );
    assert_eq!("1s".parse::<Card>(), Err(ParseCardError::UnknownValue));
    assert_eq!(
        "Eleven of Spades".parse::<Card>(),
        Err(ParseCardError::UnknownValue)
    );
    assert_eq!("Aces".parse::<Card>(), Err(ParseCardError::UnknownValue));
    assert_eq!("Tens".parse::<Card>(), Err(ParseCardError::UnknownValue));
    assert_eq!("Twoh".parse::<Card>(), Err(ParseCardError::UnknownValue));
    assert_eq!("Ax".parse::<Card>(), Err(ParseCardError::UnknownSuit));
    assert_eq!(
        "Ace of Stars".parse::<Card>(),
        Err(ParseCardError::UnknownSuit)
    );
}

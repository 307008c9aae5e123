//! Hand integration tests.

use pokerhand::{Card, CardSuit, CardValue, Hand, HandError, ParseCardError};

const fn card(value: CardValue, suit: CardSuit) -> Card {
    Card::new(value, suit)
}

#[test]
fn new_hand_is_empty() {
    let hand = Hand::new();
    assert!(hand.is_empty());
    assert_eq!(hand.len(), 0);
    assert!(hand.cards().is_empty());
    assert_eq!(hand, Hand::default());
}

#[test]
fn draw_appends_in_order() {
    let ace = card(CardValue::Ace, CardSuit::Spades);
    let two = card(CardValue::Two, CardSuit::Hearts);

    let mut hand = Hand::new();
    hand.draw(ace);
    assert_eq!(hand.cards().first(), Some(&ace));

    hand.draw(two);
    hand.draw(ace);
    assert_eq!(hand.cards(), &[ace, two, ace]);
    assert_eq!(hand.len(), 3);
}

#[test]
fn collect_and_extend_draw_cards() {
    let first = card(CardValue::Four, CardSuit::Clubs);
    let second = card(CardValue::Five, CardSuit::Diamonds);
    let third = card(CardValue::Six, CardSuit::Spades);

    let mut hand: Hand = [first, second].into_iter().collect();
    hand.extend([third]);
    assert_eq!(hand.cards(), &[first, second, third]);
}

#[test]
fn high_card_prefers_earliest_of_equal_values() {
    let mut hand = Hand::new();
    hand.draw(card(CardValue::Two, CardSuit::Clubs));
    hand.draw(card(CardValue::Nine, CardSuit::Diamonds));
    hand.draw(card(CardValue::Nine, CardSuit::Spades));
    hand.draw(card(CardValue::Five, CardSuit::Hearts));

    assert_eq!(
        hand.high_card(),
        Ok(card(CardValue::Nine, CardSuit::Diamonds))
    );
}

#[test]
fn high_card_finds_maximum_anywhere() {
    let hand: Hand = [
        card(CardValue::Three, CardSuit::Clubs),
        card(CardValue::Jack, CardSuit::Hearts),
        card(CardValue::Four, CardSuit::Spades),
        card(CardValue::Ace, CardSuit::Diamonds),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        hand.high_card(),
        Ok(card(CardValue::Ace, CardSuit::Diamonds))
    );
}

#[test]
fn high_card_on_empty_hand_fails() {
    assert_eq!(Hand::new().high_card(), Err(HandError::EmptyCollection));
}

#[test]
fn value_counts_groups_by_value() {
    let hand: Hand = [
        card(CardValue::Three, CardSuit::Clubs),
        card(CardValue::Seven, CardSuit::Diamonds),
        card(CardValue::Three, CardSuit::Spades),
        card(CardValue::Three, CardSuit::Diamonds),
    ]
    .into_iter()
    .collect();

    let counts = hand.value_counts();
    assert_eq!(counts.len(), 2);
    assert_eq!(counts.get(&CardValue::Three), Some(&3));
    assert_eq!(counts.get(&CardValue::Seven), Some(&1));
    assert_eq!(counts.get(&CardValue::Ace), None);
}

#[test]
fn display_lists_cards() {
    let hand: Hand = [
        card(CardValue::Ace, CardSuit::Spades),
        card(CardValue::Ten, CardSuit::Hearts),
    ]
    .into_iter()
    .collect();

    assert_eq!(hand.to_string(), "Ace of Spades, Ten of Hearts");
    assert_eq!(Hand::new().to_string(), "");
}

#[test]
fn parse_hand_from_words() {
    let expected = [
        card(CardValue::Ace, CardSuit::Spades),
        card(CardValue::King, CardSuit::Hearts),
        card(CardValue::Ten, CardSuit::Diamonds),
    ];

    for text in [
        "Ace of Spades, King of Hearts, Ten of Diamonds",
        "Ace of Spades King of Hearts Ten of Diamonds",
        "As Kh 10d",
        "As, King of Hearts Td",
    ] {
        let hand: Hand = text.parse().unwrap();
        assert_eq!(hand.cards(), &expected, "{text}");
    }

    assert_eq!("".parse::<Hand>(), Ok(Hand::new()));
}

#[test]
fn parse_hand_errors() {
    assert_eq!("As Kx".parse::<Hand>(), Err(ParseCardError::UnknownSuit));
    assert_eq!("Aces Kh".parse::<Hand>(), Err(ParseCardError::UnknownValue));
    assert_eq!(
        "Ace of Stars".parse::<Hand>(),
        Err(ParseCardError::UnknownSuit)
    );
}

use pokerhand::{Card, ClassifierOptions, Hand, HandClassifier, HandRank};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmHand {
    hand: Hand,
    classifier: HandClassifier,
}

#[wasm_bindgen]
impl WasmHand {
    #[wasm_bindgen(constructor)]
    pub fn new(five_card: bool) -> Self {
        Self {
            hand: Hand::new(),
            classifier: HandClassifier::new(options(five_card)),
        }
    }

    pub fn reset(&mut self, five_card: bool) {
        self.hand = Hand::new();
        self.classifier = HandClassifier::new(options(five_card));
    }

    pub fn draw(&mut self, card: &str) -> Result<(), JsValue> {
        let card: Card = card.parse().map_err(js_err)?;
        self.hand.draw(card);
        Ok(())
    }

    pub fn len(&self) -> u32 {
        self.hand.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    pub fn cards(&self) -> Result<JsValue, JsValue> {
        let cards: Vec<JsCard> = self.hand.cards().iter().copied().map(card_to_js).collect();
        to_js_value(&cards)
    }

    pub fn high_card(&self) -> Result<JsValue, JsValue> {
        let card = self.hand.high_card().map_err(js_err)?;
        to_js_value(&card_to_js(card))
    }

    pub fn rank(&self) -> Result<String, JsValue> {
        let rank = self.classifier.try_rank(&self.hand).map_err(js_err)?;
        Ok(rank_to_str(rank).to_string())
    }

    pub fn describe_rank(&self) -> Result<String, JsValue> {
        let rank = self.classifier.try_rank(&self.hand).map_err(js_err)?;
        Ok(rank.to_string())
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            cards: self.hand.cards().iter().copied().map(card_to_js).collect(),
            high_card: self.hand.high_card().ok().map(card_to_js),
            rank: self.classifier.try_rank(&self.hand).ok().map(rank_to_str),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    cards: Vec<JsCard>,
    high_card: Option<JsCard>,
    rank: Option<&'static str>,
}

#[derive(Serialize)]
struct JsCard {
    value: &'static str,
    suit: &'static str,
    label: String,
}

fn options(five_card: bool) -> ClassifierOptions {
    if five_card {
        ClassifierOptions::five_card()
    } else {
        ClassifierOptions::default()
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        value: card.value().name(),
        suit: card.suit().name(),
        label: card.describe(),
    }
}

fn rank_to_str(rank: HandRank) -> &'static str {
    match rank {
        HandRank::HighCard => "HighCard",
        HandRank::Pair => "Pair",
        HandRank::TwoPair => "TwoPair",
        HandRank::ThreeOfAKind => "ThreeOfAKind",
        HandRank::Straight => "Straight",
        HandRank::Flush => "Flush",
        HandRank::FullHouse => "FullHouse",
        HandRank::FourOfAKind => "FourOfAKind",
        HandRank::StraightFlush => "StraightFlush",
        HandRank::RoyalFlush => "RoyalFlush",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

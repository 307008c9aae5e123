//! CLI hand classification example.
//!
//! ```text
//! cargo run --example classify -- As Ks Qs Js Ts
//! cargo run --example classify -- Ace of Spades King of Spades
//! cargo run --example classify -- --random 10 --seed 42
//! cargo run --example classify
//! ```
//!
//! Set `RUST_LOG=trace` to see the classifier's log output.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use pokerhand::{Card, CardSuit, CardValue, ClassifierOptions, Hand, HandClassifier};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::init();

    let classifier = HandClassifier::new(ClassifierOptions::default().with_two_pair(true));
    let args: Vec<String> = std::env::args().skip(1).collect();

    if args.first().map(String::as_str) == Some("--random") {
        let count = args.get(1).and_then(|n| n.parse().ok()).unwrap_or(5);
        let seed = match (args.get(2).map(String::as_str), args.get(3)) {
            (Some("--seed"), Some(seed)) => seed.parse().unwrap_or_default(),
            _ => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
        };
        print_random_hands(&classifier, count, seed);
        return;
    }

    if !args.is_empty() {
        match args.join(" ").parse::<Hand>() {
            Ok(hand) => print_rank(&classifier, &hand),
            Err(err) => println!("Invalid card: {err}"),
        }
        return;
    }

    println!("Poker hand classifier (type 'q' to quit)");
    println!("Enter cards as 'As Kd 10h' or 'Ace of Spades, King of Diamonds'.");

    loop {
        let line = prompt_line("Cards: ");
        if line.is_empty() {
            continue;
        }
        if line == "q" || line == "quit" {
            break;
        }

        match line.parse::<Hand>() {
            Ok(hand) => print_rank(&classifier, &hand),
            Err(err) => println!("Invalid card: {err}"),
        }
    }
}

/// Deals `count` hands of five distinct cards from a freshly shuffled deck.
fn print_random_hands(classifier: &HandClassifier, count: usize, seed: u64) {
    println!("Seed: {seed}");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut deck: Vec<Card> = CardValue::ALL
        .into_iter()
        .flat_map(|value| CardSuit::ALL.map(|suit| Card::new(value, suit)))
        .collect();

    for _ in 0..count {
        deck.shuffle(&mut rng);
        let hand: Hand = deck.iter().copied().take(5).collect();
        print_rank(classifier, &hand);
    }
}

fn print_rank(classifier: &HandClassifier, hand: &Hand) {
    let high = hand
        .high_card()
        .map_or_else(|err| err.to_string(), |card| card.describe());

    match classifier.try_rank(hand) {
        Ok(rank) => println!("{} => {rank} (high card: {high})", format_hand(hand)),
        Err(err) => println!("{} => {err}", format_hand(hand)),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return "q".to_string();
    }
    if input.is_empty() {
        // EOF
        return "q".to_string();
    }
    input.trim().to_lowercase()
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        CardSuit::Hearts | CardSuit::Diamonds => "31",
        CardSuit::Clubs => "32",
        CardSuit::Spades => "34",
    };

    colorize(
        &format!("{}{}", card.value().symbol(), card.suit().initial()),
        color_code,
    )
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

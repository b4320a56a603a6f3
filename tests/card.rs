//! Card integration tests.

use deckrs::{Card, DECK_SIZE, Suit, Value};

#[test]
fn joker_from_either_sentinel() {
    let cases = [
        (Card::new(Value::Two, Suit::Hearts), false),
        (Card::new(Value::Joker, Suit::Hearts), true),
        (Card::new(Value::Joker, Suit::Joker), true),
        (Card::new(Value::Two, Suit::Joker), true),
    ];

    for (card, want) in cases {
        assert_eq!(card.is_joker(), want, "{card:?}.is_joker()");
    }
}

#[test]
fn joker_constructor_uses_both_sentinels() {
    let joker = Card::joker();
    assert_eq!(joker.value(), Value::Joker);
    assert_eq!(joker.suit(), Suit::Joker);
    assert_eq!(joker, Card::new(Value::Joker, Suit::Joker));
}

#[test]
fn display_names_value_and_suit() {
    assert_eq!(Card::new(Value::Two, Suit::Hearts).to_string(), "Two of Hearts");
    assert_eq!(Card::new(Value::Ace, Suit::Spades).to_string(), "Ace of Spades");
    assert_eq!(Card::new(Value::Ten, Suit::Clubs).to_string(), "Ten of Clubs");
    assert_eq!(
        Card::new(Value::Queen, Suit::Diamonds).to_string(),
        "Queen of Diamonds"
    );
}

#[test]
fn display_joker_dominates() {
    assert_eq!(Card::joker().to_string(), "Joker");
    assert_eq!(Card::new(Value::Two, Suit::Joker).to_string(), "Joker");
    assert_eq!(Card::new(Value::King, Suit::Joker).to_string(), "Joker");
    assert_eq!(Card::new(Value::Joker, Suit::Hearts).to_string(), "Joker");
}

#[test]
fn standard_tables() {
    assert_eq!(Value::ALL.len(), 13);
    assert_eq!(Value::ALL.first(), Some(&Value::Two));
    assert_eq!(Value::ALL.last(), Some(&Value::Ace));
    assert!(!Value::ALL.contains(&Value::Joker));
    assert_eq!(
        Suit::ALL,
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades]
    );
    assert_eq!(DECK_SIZE, 52);
}

#[test]
fn value_discriminants_start_at_two() {
    assert_eq!(Value::Two as u8, 2);
    assert_eq!(Value::Ten as u8, 10);
    assert_eq!(Value::Ace as u8, 14);
    assert!(Value::Jack < Value::Queen);
}

#[test]
fn equal_tags_are_interchangeable() {
    let a = Card::new(Value::Seven, Suit::Diamonds);
    let b = Card::new(Value::Seven, Suit::Diamonds);
    assert_eq!(a, b);
    assert_ne!(a, Card::new(Value::Seven, Suit::Clubs));
}

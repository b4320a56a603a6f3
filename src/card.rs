//! Card types and standard deck tables.

use core::fmt;

/// Card value.
///
/// [`Value::Joker`] is the joker sentinel; any card carrying it is a joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Value {
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
    /// Joker sentinel.
    Joker,
}

impl Value {
    /// The thirteen standard values, lowest first.
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

    /// Returns the English name of the value.
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
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit.
///
/// [`Suit::Joker`] is the joker sentinel; any card carrying it is a joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
    /// Joker sentinel.
    Joker,
}

impl Suit {
    /// The four standard suits in deck construction order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the English name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clubs => "Clubs",
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card.
///
/// Cards have no identity beyond their value and suit; two cards with the
/// same tags are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    value: Value,
    suit: Suit,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the combination. Mixing a joker
    /// sentinel with a standard tag is accepted and yields a joker.
    #[must_use]
    pub const fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Creates a joker.
    ///
    /// ```
    /// use deckrs::Card;
    ///
    /// assert!(Card::joker().is_joker());
    /// ```
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Value::Joker, Suit::Joker)
    }

    /// Returns the value of the card.
    #[must_use]
    pub const fn value(&self) -> Value {
        self.value
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether this card is a joker.
    ///
    /// Either sentinel is enough, so `Card::new(Value::Two, Suit::Joker)` is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.value, Value::Joker) || matches!(self.suit, Suit::Joker)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str("Joker");
        }

        write!(f, "{} of {}", self.value, self.suit)
    }
}

/// Number of cards in a standard deck without jokers.
pub const DECK_SIZE: usize = Suit::ALL.len() * Value::ALL.len();

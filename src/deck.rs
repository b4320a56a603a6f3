//! The deck and its draw/discard/shuffle state machine.

use alloc::vec::Vec;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit, Value};
use crate::error::DeckError;
use crate::options::DeckOptions;

/// A deck of playing cards split into undrawn and drawn cards.
///
/// Every card belongs to exactly one of the two piles. Drawing or discarding
/// moves cards from the top of the undrawn pile onto the drawn pile; only
/// [`Deck::full_shuffle`] moves them back. [`Deck::count`] never changes.
///
/// The deck owns its random number generator, so shuffles are reproducible
/// for a given seed. Mutation needs `&mut self`; share a deck between threads
/// only behind your own lock.
#[derive(Debug, Clone)]
pub struct Deck<R = ChaCha8Rng> {
    /// Cards available to draw, top first.
    undrawn: Vec<Card>,
    /// Cards already drawn or discarded, in the order they left the deck.
    drawn: Vec<Card>,
    /// Deck options.
    options: DeckOptions,
    /// Random number generator.
    rng: R,
}

impl Deck<ChaCha8Rng> {
    /// Creates a new unshuffled deck with the given number of jokers and seed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    ///
    /// let deck = Deck::new(2, 42);
    /// assert_eq!(deck.count(), 54);
    /// ```
    #[must_use]
    pub fn new(jokers: usize, seed: u64) -> Self {
        Self::with_options(DeckOptions::default().with_jokers(jokers), seed)
    }

    /// Creates a new unshuffled deck from options and a seed.
    #[must_use]
    pub fn with_options(options: DeckOptions, seed: u64) -> Self {
        Self::with_rng(options, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a new unshuffled deck seeded from the operating system.
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn from_os_rng(jokers: usize) -> Self {
        Self::with_rng(
            DeckOptions::default().with_jokers(jokers),
            ChaCha8Rng::from_os_rng(),
        )
    }
}

impl<R: Rng> Deck<R> {
    /// Creates a new unshuffled deck that shuffles with the given generator.
    ///
    /// Cards are laid out suit by suit (clubs, diamonds, hearts, spades), two
    /// through ace within each suit, followed by the jokers. The first card
    /// is the top of the deck.
    #[must_use]
    pub fn with_rng(options: DeckOptions, rng: R) -> Self {
        let mut undrawn = Vec::with_capacity(options.card_count());

        for suit in Suit::ALL {
            for value in Value::ALL {
                undrawn.push(Card::new(value, suit));
            }
        }
        debug_assert_eq!(undrawn.len(), DECK_SIZE);

        undrawn.extend((0..options.jokers).map(|_| Card::joker()));

        Self {
            undrawn,
            drawn: Vec::with_capacity(options.card_count()),
            options,
            rng,
        }
    }

    /// Returns the total number of cards in the deck, drawn or not.
    #[must_use]
    pub fn count(&self) -> usize {
        self.undrawn.len() + self.drawn.len()
    }

    /// Returns the number of undrawn cards.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.undrawn.len()
    }

    /// Returns the number of drawn or discarded cards.
    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    /// Returns whether no undrawn cards are left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.undrawn.is_empty()
    }

    /// Returns the undrawn cards, top first.
    #[must_use]
    pub fn undrawn(&self) -> &[Card] {
        &self.undrawn
    }

    /// Returns the drawn cards in the order they left the deck.
    #[must_use]
    pub fn drawn(&self) -> &[Card] {
        &self.drawn
    }

    /// Returns the top card without drawing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.undrawn.first()
    }

    /// Returns the deck options.
    #[must_use]
    pub const fn options(&self) -> &DeckOptions {
        &self.options
    }

    /// Draws the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no undrawn cards are left.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.undrawn.is_empty() {
            return Err(DeckError::EmptyDeck);
        }

        let card = self.undrawn.remove(0);
        self.drawn.push(card);
        Ok(card)
    }

    /// Draws `amount` cards from the top, top card first.
    ///
    /// Drawing zero cards succeeds and returns an empty vector.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if fewer than `amount` cards
    /// are left. No cards are drawn in that case.
    pub fn draw_x(&mut self, amount: usize) -> Result<Vec<Card>, DeckError> {
        self.check_remaining(amount)?;

        let cards: Vec<Card> = self.undrawn.drain(..amount).collect();
        self.drawn.extend_from_slice(&cards);
        Ok(cards)
    }

    /// Moves the top card to the drawn pile without returning it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no undrawn cards are left.
    pub fn discard(&mut self) -> Result<(), DeckError> {
        self.draw().map(|_| ())
    }

    /// Moves `amount` cards from the top to the drawn pile.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::InsufficientCards`] if fewer than `amount` cards
    /// are left. No cards are moved in that case.
    pub fn discard_x(&mut self, amount: usize) -> Result<(), DeckError> {
        self.check_remaining(amount)?;

        self.drawn.extend(self.undrawn.drain(..amount));
        Ok(())
    }

    /// Randomizes the order of the undrawn cards `passes` times.
    ///
    /// Each pass is an independent uniform permutation. Drawn cards are not
    /// touched, and zero passes leave the order as it was.
    pub fn shuffle(&mut self, passes: usize) {
        for _ in 0..passes {
            self.undrawn.shuffle(&mut self.rng);
        }
    }

    /// Returns every drawn card to the bottom of the deck, then shuffles.
    ///
    /// Uses [`DeckOptions::full_shuffle_passes`] passes. Afterwards
    /// [`Deck::remaining_count`] equals [`Deck::count`].
    pub fn full_shuffle(&mut self) {
        self.undrawn.append(&mut self.drawn);
        self.shuffle(self.options.full_shuffle_passes);
    }

    fn check_remaining(&self, requested: usize) -> Result<(), DeckError> {
        let remaining = self.undrawn.len();
        if remaining < requested {
            return Err(DeckError::InsufficientCards {
                requested,
                remaining,
            });
        }
        Ok(())
    }
}

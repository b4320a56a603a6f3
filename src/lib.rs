//! A standard playing-card deck with optional `no_std` support.
//!
//! The crate provides a [`Card`] value type and a [`Deck`] that tracks which
//! cards are still undrawn, supports drawing and discarding from the top, and
//! shuffles with an injected, seedable random number generator.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DeckError};
//!
//! let mut deck = Deck::new(2, 42);
//! deck.shuffle(1);
//!
//! let hand = deck.draw_x(5)?;
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.remaining_count(), 49);
//!
//! deck.full_shuffle();
//! assert_eq!(deck.remaining_count(), deck.count());
//! # Ok::<(), DeckError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit, Value};
pub use deck::Deck;
pub use error::DeckError;
pub use options::{DEFAULT_FULL_SHUFFLE_PASSES, DeckOptions};

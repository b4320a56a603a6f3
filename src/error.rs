//! Error types for deck operations.

use thiserror::Error;

/// Errors that can occur when taking cards from a deck.
///
/// A failed operation never changes the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No undrawn cards are left.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// Fewer undrawn cards are left than requested.
    #[error("requested {requested} cards but only {remaining} remain")]
    InsufficientCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of undrawn cards at the time of the request.
        remaining: usize,
    },
}

//! Deck configuration options.

/// Number of shuffle passes performed by [`Deck::full_shuffle`](crate::Deck::full_shuffle)
/// unless configured otherwise.
pub const DEFAULT_FULL_SHUFFLE_PASSES: usize = 10;

/// Configuration options for a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckrs::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_jokers(2)
///     .with_full_shuffle_passes(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of jokers appended after the standard cards.
    pub jokers: usize,
    /// Shuffle passes used when the drawn cards are returned to the deck.
    pub full_shuffle_passes: usize,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            jokers: 0,
            full_shuffle_passes: DEFAULT_FULL_SHUFFLE_PASSES,
        }
    }
}

impl DeckOptions {
    /// Sets the number of jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(2);
    /// assert_eq!(options.jokers, 2);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: usize) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets the number of passes performed by a full shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_full_shuffle_passes(1);
    /// assert_eq!(options.full_shuffle_passes, 1);
    /// ```
    #[must_use]
    pub const fn with_full_shuffle_passes(mut self, passes: usize) -> Self {
        self.full_shuffle_passes = passes;
        self
    }

    /// Returns the total number of cards a deck built from these options holds.
    #[must_use]
    pub const fn card_count(&self) -> usize {
        crate::card::DECK_SIZE + self.jokers
    }
}

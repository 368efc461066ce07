//! The standard 52-card deck and random draws without replacement.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::card::{Card, Suit, Weight};
use crate::error::DeckError;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Writes `items` as `[a, b, c]`.
pub(crate) fn write_list<'a>(
    f: &mut fmt::Formatter<'_>,
    items: impl IntoIterator<Item = &'a Card>,
) -> fmt::Result {
    f.write_str("[")?;
    for (index, card) in items.into_iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    f.write_str("]")
}

/// A standard deck of 52 concrete cards.
///
/// Cards leave the deck one at a time through [`Deck::push_cards`], each
/// picked uniformly at random from the cards still in it. A drawn card
/// cannot come up again until [`Deck::refresh`] is called.
///
/// The deck is a plain owned container with no internal locking.
///
/// ```
/// use cardice::Deck;
///
/// let mut deck = Deck::with_seed(7);
/// let hand: Vec<_> = deck.push_cards(5).unwrap().collect();
/// assert_eq!(hand.len(), 5);
/// assert_eq!(deck.size(), 47);
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards left in the deck, in enumeration order.
    cards: Vec<Card>,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full deck with an entropy-seeded random source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_os_rng())
    }

    /// Creates a full deck whose draws are reproducible for `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha8Rng) -> Self {
        let mut deck = Self {
            cards: Vec::new(),
            rng,
        };
        deck.refresh();
        deck
    }

    /// Creates the 52 cards, weight-major and suit-minor (`2c 2d 2h 2s 3c ...`).
    fn full_deck() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for weight in Weight::REAL {
            for suit in Suit::ALL {
                cards.push(Card::new(weight, suit));
            }
        }

        cards
    }

    /// Puts every card back, discarding the current contents.
    pub fn refresh(&mut self) {
        self.cards = Self::full_deck();
        debug!(size = self.cards.len(), "deck refreshed");
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the cards left, in enumeration order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Draws `count` random cards.
    ///
    /// The count is checked before anything is removed. The returned
    /// iterator is lazy: each call to `next` removes one card, so cards the
    /// caller never pulls from it stay in the deck.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::CountOutOfRange`] if `count` is zero or larger
    /// than the number of cards left.
    pub fn push_cards(&mut self, count: usize) -> Result<Draw<'_>, DeckError> {
        let size = self.cards.len();
        if !(1..=size).contains(&count) {
            return Err(DeckError::CountOutOfRange { count, size });
        }

        Ok(Draw {
            deck: self,
            remaining: count,
        })
    }

    /// Removes and returns a uniformly random card.
    fn take_random(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            return None;
        }

        let index = self.rng.random_range(0..self.cards.len());
        let card = self.cards.remove(index);
        trace!(%card, remaining = self.cards.len(), "card drawn");
        Some(card)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.cards)
    }
}

/// Lazy draw of a fixed number of cards from a [`Deck`].
///
/// Created by [`Deck::push_cards`].
#[derive(Debug)]
#[must_use = "cards are only removed from the deck as the iterator is consumed"]
pub struct Draw<'a> {
    deck: &'a mut Deck,
    remaining: usize,
}

impl Iterator for Draw<'_> {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.deck.take_random()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Draw<'_> {}

impl FusedIterator for Draw<'_> {}

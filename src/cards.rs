//! Bounded card collections filled from signs, cards, or a [`Deck`].

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use std::collections::HashSet;

use tracing::debug;

use crate::card::Card;
use crate::deck::{Deck, write_list};
use crate::error::{DeckError, SymbolError};

/// Default capacity of a [`Cards`] collection.
pub const DEFAULT_MAX_COUNT: usize = 52;

/// A collection of at most `max_count` cards.
///
/// ```
/// use cardice::{Card, Cards, Deck};
///
/// let royal: Cards = "As/Ks/Qs/Js/Ts".parse().unwrap();
/// assert!(royal.contains(&Card::parse("K").unwrap()));
///
/// let mut deck = Deck::with_seed(3);
/// let mut hand = Cards::with_max_count(2);
/// assert_eq!(hand.pull(&mut deck, 5).unwrap(), 2);
/// assert_eq!(deck.size(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Cards {
    /// Cards in the collection.
    items: Vec<Card>,
    /// Maximum number of cards the collection holds.
    max_count: usize,
}

impl Cards {
    /// Creates an empty collection with the default capacity.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_max_count(DEFAULT_MAX_COUNT)
    }

    /// Creates an empty collection holding at most `max_count` cards.
    #[must_use]
    pub const fn with_max_count(max_count: usize) -> Self {
        Self {
            items: Vec::new(),
            max_count,
        }
    }

    /// Parses `/`-separated card signs, e.g. `"3d/Tc/As"`.
    ///
    /// Only the first `max_count` signs are parsed. An empty string gives an
    /// empty collection.
    ///
    /// # Errors
    ///
    /// Returns the [`SymbolError`] of the first sign that fails to parse.
    pub fn from_signs(signs: &str, max_count: usize) -> Result<Self, SymbolError> {
        if signs.is_empty() {
            return Ok(Self::with_max_count(max_count));
        }

        let items = signs
            .split('/')
            .take(max_count)
            .map(Card::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { items, max_count })
    }

    /// Collects `cards`, dropping repeats of the same sign and keeping at
    /// most `max_count` of what is left.
    ///
    /// Repeats are identified by sign, not by [`PartialEq`]: `Ks` and `Kc`
    /// are both kept.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>, max_count: usize) -> Self {
        let mut seen = HashSet::new();
        let items = cards
            .into_iter()
            .filter(|card| seen.insert(card.hash_code()))
            .take(max_count)
            .collect();

        Self { items, max_count }
    }

    /// Draws cards from `deck` until `count` cards were added or the
    /// collection is full.
    ///
    /// Returns the number of cards moved. A full collection makes this a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::CountOutOfRange`] if the deck holds fewer cards
    /// than would be drawn. Neither the deck nor the collection changes in
    /// that case.
    pub fn pull(&mut self, deck: &mut Deck, count: usize) -> Result<usize, DeckError> {
        let room = self.max_count.saturating_sub(self.items.len());
        let count_to_add = count.min(room);
        if count_to_add == 0 {
            debug!(requested = count, size = self.items.len(), "no room to pull cards");
            return Ok(0);
        }

        self.items.extend(deck.push_cards(count_to_add)?);
        debug!(
            added = count_to_add,
            size = self.items.len(),
            deck_size = deck.size(),
            "cards pulled from deck"
        );
        Ok(count_to_add)
    }

    /// Removes every card, keeping the capacity.
    pub fn clean(&mut self) {
        self.items.clear();
    }

    /// Returns whether a card equal to `card` is in the collection.
    ///
    /// Uses [`Card`] equality, so an abstract `"8"` matches any Eight.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.items.iter().any(|item| item == card)
    }

    /// Returns the cards.
    #[must_use]
    pub fn items(&self) -> &[Card] {
        &self.items
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the maximum number of cards.
    #[must_use]
    pub const fn max_count(&self) -> usize {
        self.max_count
    }
}

impl Default for Cards {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Cards {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_signs(s, DEFAULT_MAX_COUNT)
    }
}

impl<'a> IntoIterator for &'a Cards {
    type Item = &'a Card;
    type IntoIter = core::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for Cards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.items)
    }
}

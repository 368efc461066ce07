//! A 52-card deck and dice toolkit.
//!
//! The crate models two random drawing processes:
//!
//! - [`Deck`] holds the 52 standard cards and hands them out at random
//!   without replacement, into plain iterators or a bounded [`Cards`]
//!   collection.
//! - [`Dice`] rolls one of its faces with replacement, and a [`DiceBox`]
//!   sums the rolls of several dice.
//!
//! # Example
//!
//! ```
//! use cardice::{Cards, Deck, Dice, DiceBox};
//!
//! let mut deck = Deck::with_seed(42);
//! let mut hand = Cards::with_max_count(5);
//! hand.pull(&mut deck, 5).unwrap();
//! assert_eq!(deck.size(), 47);
//!
//! let mut dice_box: DiceBox = [Dice::new(6).unwrap(), Dice::new(6).unwrap()]
//!     .into_iter()
//!     .collect();
//! let total = dice_box.rolling().unwrap();
//! assert!((2..=12).contains(&total));
//! ```
//!
//! None of the types lock internally; share them across threads only
//! behind your own synchronization.
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

pub mod card;
pub mod cards;
pub mod deck;
pub mod dice;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, Suit, Weight};
pub use cards::{Cards, DEFAULT_MAX_COUNT};
pub use deck::{DECK_SIZE, Deck, Draw};
pub use dice::{Dice, DiceBox, MIN_FACES_COUNT};
pub use error::{DeckError, DiceError, SymbolError};
pub use options::DiceOptions;

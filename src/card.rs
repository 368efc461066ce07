//! Card types: weights, suits, and concrete or abstract cards.
//!
//! A [`Card`] is built from a short sign such as `"As"` (Ace of spades).
//! A one-character sign builds an *abstract* card carrying only a weight
//! (`"A"`, any Ace) or only a suit (`"s"`, any spade).

use alloc::format;
use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use crate::error::SymbolError;

const WEIGHT_SYMBOLS: [char; 14] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

const WEIGHT_NAMES: [&str; 14] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King", "Ace",
];

const SUIT_SYMBOLS: [char; 4] = ['c', 'd', 'h', 's'];

const SUIT_GLYPHS: [char; 4] = ['\u{2663}', '\u{2666}', '\u{2665}', '\u{2660}'];

const SUIT_NAMES: [&str; 4] = ["clubs", "diamonds", "hearts", "spades"];

/// Splits `text` into its only character, or `None` if it is not exactly one.
fn single_char(text: &str) -> Option<char> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Card weight (rank).
///
/// Weights compare by their position in `123456789TJQKA`, so the low Ace
/// (`'1'`) is below [`Weight::Two`] while the high Ace (`'A'`) is above
/// [`Weight::King`]. Both are named "Ace" but they are not equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weight {
    /// Ace counted below Two (`'1'`).
    LowAce,
    /// Two.
    Two,
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
    /// Ten (`'T'`).
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace counted above King (`'A'`).
    Ace,
}

impl Weight {
    /// Every weight in symbol order, low Ace first.
    pub const ALL: [Self; 14] = [
        Self::LowAce,
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

    /// The thirteen weights found in a standard deck (Two through high Ace).
    pub const REAL: [Self; 13] = [
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

    /// Parses a single weight symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Weight`] if `symbol` is not one of `123456789TJQKA`.
    pub fn from_symbol(symbol: char) -> Result<Self, SymbolError> {
        WEIGHT_SYMBOLS
            .iter()
            .position(|&s| s == symbol)
            .map(|index| Self::ALL[index])
            .ok_or_else(|| SymbolError::Weight(symbol.to_string()))
    }

    /// Returns the ordinal number of the weight (0 for the low Ace, 13 for the high Ace).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the weight symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        WEIGHT_SYMBOLS[self as usize]
    }

    /// Returns the display name, e.g. "Queen".
    #[must_use]
    pub const fn name(self) -> &'static str {
        WEIGHT_NAMES[self as usize]
    }
}

impl TryFrom<char> for Weight {
    type Error = SymbolError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}

impl FromStr for Weight {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        single_char(s)
            .ok_or_else(|| SymbolError::Weight(s.into()))
            .and_then(Self::from_symbol)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Clubs (`'c'`).
    Clubs,
    /// Diamonds (`'d'`).
    Diamonds,
    /// Hearts (`'h'`).
    Hearts,
    /// Spades (`'s'`).
    Spades,
}

impl Suit {
    /// Every suit in symbol order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Parses a single suit symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Suit`] if `symbol` is not one of `cdhs`.
    pub fn from_symbol(symbol: char) -> Result<Self, SymbolError> {
        SUIT_SYMBOLS
            .iter()
            .position(|&s| s == symbol)
            .map(|index| Self::ALL[index])
            .ok_or_else(|| SymbolError::Suit(symbol.to_string()))
    }

    /// Looks up a suit by its display glyph (`♣`, `♦`, `♥`, `♠`).
    #[must_use]
    pub fn from_glyph(glyph: char) -> Option<Self> {
        SUIT_GLYPHS
            .iter()
            .position(|&g| g == glyph)
            .map(|index| Self::ALL[index])
    }

    /// Returns the ordinal number of the suit.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        SUIT_SYMBOLS[self as usize]
    }

    /// Returns the display glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        SUIT_GLYPHS[self as usize]
    }

    /// Returns the display name, e.g. "hearts".
    #[must_use]
    pub const fn name(self) -> &'static str {
        SUIT_NAMES[self as usize]
    }
}

impl TryFrom<char> for Suit {
    type Error = SymbolError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_symbol(symbol)
    }
}

impl FromStr for Suit {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        single_char(s)
            .ok_or_else(|| SymbolError::Suit(s.into()))
            .and_then(Self::from_symbol)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A playing card, either concrete (weight and suit) or abstract (one of them).
///
/// Equality is deliberately asymmetric: when both cards carry a weight they
/// compare by weight alone, otherwise they compare by suit. Two concrete
/// cards of the same weight are therefore equal whatever their suits, and an
/// abstract `"K"` equals every King.
///
/// ```
/// use cardice::Card;
///
/// let king: Card = "Ks".parse().unwrap();
/// assert_eq!(king, "Kc".parse::<Card>().unwrap());
/// assert_eq!(king.name(), "King of spades");
/// assert_eq!(king.to_string(), "K\u{2660}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Card {
    weight: Option<Weight>,
    suit: Option<Suit>,
}

impl Card {
    /// Creates a concrete card.
    #[must_use]
    pub const fn new(weight: Weight, suit: Suit) -> Self {
        Self {
            weight: Some(weight),
            suit: Some(suit),
        }
    }

    /// Creates an abstract card standing for any card of `weight`.
    #[must_use]
    pub const fn of_weight(weight: Weight) -> Self {
        Self {
            weight: Some(weight),
            suit: None,
        }
    }

    /// Creates an abstract card standing for any card of `suit`.
    #[must_use]
    pub const fn of_suit(suit: Suit) -> Self {
        Self {
            weight: None,
            suit: Some(suit),
        }
    }

    /// Parses a card sign.
    ///
    /// A sign of two or more characters is read as weight then suit; extra
    /// characters are ignored. A shorter sign is tried as a weight first and
    /// then as a suit, so an empty or unknown one-character sign reports a
    /// suit error.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError`] naming the alphabet that rejected the sign.
    pub fn parse(sign: &str) -> Result<Self, SymbolError> {
        let mut chars = sign.chars();
        match (chars.next(), chars.next()) {
            (Some(weight), Some(suit)) => Ok(Self::new(
                Weight::from_symbol(weight)?,
                Suit::from_symbol(suit)?,
            )),
            _ => match sign.parse::<Weight>() {
                Ok(weight) => Ok(Self::of_weight(weight)),
                Err(_) => sign.parse::<Suit>().map(Self::of_suit),
            },
        }
    }

    /// Returns the weight, if any.
    #[must_use]
    pub const fn weight(&self) -> Option<Weight> {
        self.weight
    }

    /// Returns the suit, if any.
    #[must_use]
    pub const fn suit(&self) -> Option<Suit> {
        self.suit
    }

    /// Returns whether the card has both a weight and a suit.
    #[must_use]
    pub const fn is_concrete(&self) -> bool {
        self.weight.is_some() && self.suit.is_some()
    }

    /// Returns the display name, e.g. "Ten of diamonds", "Seven" or "clubs".
    #[must_use]
    pub fn name(&self) -> String {
        match (self.weight, self.suit) {
            (Some(weight), Some(suit)) => format!("{} of {}", weight.name(), suit.name()),
            (Some(weight), None) => weight.name().into(),
            (None, Some(suit)) => suit.name().into(),
            (None, None) => String::new(),
        }
    }

    /// Returns the ASCII sign the card parses from, e.g. `"Td"`, `"7"` or `"c"`.
    #[must_use]
    pub fn sign(&self) -> String {
        self.weight
            .map(Weight::symbol)
            .into_iter()
            .chain(self.suit.map(Suit::symbol))
            .collect()
    }

    /// Returns the numeric hash `10 * (weight + 1) + (suit + 1)`, with an
    /// absent part counting as 0.
    ///
    /// The number identifies a card by its sign. It is not consistent with
    /// [`PartialEq`] (`Ks` and `Kc` are equal but get different numbers), so
    /// `Card` does not implement [`Hash`](core::hash::Hash).
    #[must_use]
    pub fn hash_code(&self) -> u32 {
        let weight = self.weight.map_or(0, |w| u32::from(w.number()) + 1);
        let suit = self.suit.map_or(0, |s| u32::from(s.number()) + 1);
        10 * weight + suit
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        match (self.weight, other.weight) {
            (Some(a), Some(b)) => a == b,
            _ => self.suit == other.suit,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.weight, other.weight) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            _ if self.suit.is_some() && self.suit == other.suit => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl FromStr for Card {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = self.weight.map_or('X', Weight::symbol);
        let suit = self.suit.map_or('x', Suit::glyph);
        write!(f, "{weight}{suit}")
    }
}

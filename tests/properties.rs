//! Property tests for card parsing, equality, and draws.

use std::collections::HashSet;

use cardice::{Card, Cards, DECK_SIZE, Deck, Dice, Suit, Weight};
use proptest::prelude::*;

fn weight() -> impl Strategy<Value = Weight> {
    proptest::sample::select(Weight::ALL.to_vec())
}

fn suit() -> impl Strategy<Value = Suit> {
    proptest::sample::select(Suit::ALL.to_vec())
}

proptest! {
    /// Every two-symbol sign parses to a concrete card named "<weight> of <suit>".
    #[test]
    fn prop_concrete_card_names(w in weight(), s in suit()) {
        let card = Card::parse(&format!("{}{}", w.symbol(), s.symbol())).unwrap();
        prop_assert_eq!(card.name(), format!("{} of {}", w.name(), s.name()));
    }

    /// Weight-only cards equal themselves and no other weight.
    #[test]
    fn prop_weight_only_equality(a in weight(), b in weight()) {
        let left = Card::parse(&a.symbol().to_string()).unwrap();
        let right = Card::parse(&b.symbol().to_string()).unwrap();
        prop_assert_eq!(left, Card::of_weight(a));
        prop_assert_eq!(left == right, a == b);
    }

    /// Concrete cards sharing a weight are equal whatever their suits.
    #[test]
    fn prop_rank_only_equality(w in weight(), s1 in suit(), s2 in suit()) {
        prop_assert_eq!(Card::new(w, s1), Card::new(w, s2));
    }

    /// Rendering a concrete card and reading it back gives an equal card.
    #[test]
    fn prop_display_round_trip(w in weight(), s in suit()) {
        let card = Card::new(w, s);
        let shown = card.to_string();
        let mut chars = shown.chars();
        let weight_symbol = chars.next().unwrap();
        let suit = Suit::from_glyph(chars.next().unwrap()).unwrap();
        let parsed = Card::parse(&format!("{weight_symbol}{}", suit.symbol())).unwrap();
        prop_assert_eq!(parsed, card);
        prop_assert_eq!(parsed.suit(), Some(s));
    }

    /// Drawing k cards shrinks the deck by k and yields distinct deck cards.
    #[test]
    fn prop_draw_without_replacement(count in 1usize..=DECK_SIZE, seed in any::<u64>()) {
        let mut deck = Deck::with_seed(seed);
        let before: HashSet<String> = deck.cards().iter().map(Card::sign).collect();

        let drawn: Vec<String> = deck.push_cards(count).unwrap().map(|c| c.sign()).collect();
        let unique: HashSet<&String> = drawn.iter().collect();

        prop_assert_eq!(deck.size(), DECK_SIZE - count);
        prop_assert_eq!(unique.len(), count);
        prop_assert!(drawn.iter().all(|sign| before.contains(sign)));
    }

    /// Pulling never overfills a collection and moves cards one for one.
    #[test]
    fn prop_pull_moves_cards_in_lock_step(
        max_count in 0usize..=20,
        pulls in proptest::collection::vec(0usize..=10, 1..6),
        seed in any::<u64>(),
    ) {
        let mut deck = Deck::with_seed(seed);
        let mut cards = Cards::with_max_count(max_count);
        for count in pulls {
            let added = cards.pull(&mut deck, count).unwrap();
            prop_assert!(added <= count);
            prop_assert!(cards.size() <= max_count);
            prop_assert_eq!(cards.size() + deck.size(), DECK_SIZE);
        }
    }

    /// A rolled value is always one of the faces.
    #[test]
    fn prop_rolling_stays_on_faces(faces in 2u32..=100, seed in any::<u64>()) {
        let mut dice = Dice::with_seed(faces, seed).unwrap();
        let value = dice.rolling();
        prop_assert!((1..=faces).contains(&value));
        prop_assert_eq!(*dice.value(), value);
    }
}

use alloc::vec::Vec;
use core::ops::Add;

use tracing::debug;

use super::Dice;

/// Several dice rolled together.
///
/// ```
/// use cardice::{Dice, DiceBox};
///
/// let mut dice_box = DiceBox::new();
/// dice_box.add(Dice::from_faces([5, 5]).unwrap());
/// dice_box.add(Dice::from_faces([2, 2]).unwrap());
/// assert_eq!(dice_box.rolling(), Some(7));
/// ```
#[derive(Debug, Clone)]
pub struct DiceBox<T = u32> {
    /// Dice in insertion order.
    items: Vec<Dice<T>>,
}

impl<T> DiceBox<T> {
    /// Creates an empty box.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a die to the box.
    pub fn add(&mut self, dice: Dice<T>) {
        self.items.push(dice);
    }

    /// Returns the dice.
    #[must_use]
    pub fn items(&self) -> &[Dice<T>] {
        &self.items
    }

    /// Returns the number of dice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the box is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone + Add<Output = T>> DiceBox<T> {
    /// Rolls every die in insertion order and returns the sum of the new values.
    ///
    /// Returns `None` for an empty box.
    pub fn rolling(&mut self) -> Option<T> {
        let mut result = None;
        for dice in &mut self.items {
            dice.rolling();
            result = Some(dice.add_to(result));
        }
        debug!(dice = self.items.len(), "dice box rolled");
        result
    }
}

impl<T> Default for DiceBox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<Dice<T>> for DiceBox<T> {
    fn extend<I: IntoIterator<Item = Dice<T>>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<Dice<T>> for DiceBox<T> {
    fn from_iter<I: IntoIterator<Item = Dice<T>>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

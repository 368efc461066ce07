//! Dice configuration options.

use alloc::vec::Vec;

use crate::dice::{MIN_FACES_COUNT, validate_items};
use crate::error::DiceError;

/// Configuration for building a [`Dice`](crate::Dice).
///
/// Set either a face count or explicit face items. When both are set the
/// face count wins. A zero face count or an empty item list counts as not
/// set.
///
/// ```
/// use cardice::{Dice, DiceOptions};
///
/// let options = DiceOptions::default().with_faces_count(6).with_seed(9);
/// let dice: Dice = Dice::from_options(options).unwrap();
/// assert_eq!(dice.faces(), &[1, 2, 3, 4, 5, 6]);
///
/// let letters = DiceOptions::default().with_faces_items("QWERTY".chars());
/// let dice = Dice::from_options(letters).unwrap();
/// assert!("QWERTY".contains(*dice.value()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceOptions<T = u32> {
    /// Number of faces, numbered from 1.
    faces_count: Option<u32>,
    /// Faces `1..=faces_count`, built when the count is set.
    numbered_faces: Vec<T>,
    /// Explicit faces, used when no face count is set.
    faces_items: Option<Vec<T>>,
    /// Seed for the die's random source. Entropy is used when unset.
    seed: Option<u64>,
}

impl<T> Default for DiceOptions<T> {
    fn default() -> Self {
        Self {
            faces_count: None,
            numbered_faces: Vec::new(),
            faces_items: None,
            seed: None,
        }
    }
}

impl<T: From<u32>> DiceOptions<T> {
    /// Sets the number of faces.
    ///
    /// # Example
    ///
    /// ```
    /// use cardice::DiceOptions;
    ///
    /// let options: DiceOptions = DiceOptions::default().with_faces_count(20);
    /// assert_eq!(options.faces_count(), Some(20));
    /// ```
    #[must_use]
    pub fn with_faces_count(mut self, faces_count: u32) -> Self {
        self.faces_count = Some(faces_count);
        self.numbered_faces = (1..=faces_count).map(T::from).collect();
        self
    }
}

impl<T> DiceOptions<T> {
    /// Sets explicit faces.
    ///
    /// # Example
    ///
    /// ```
    /// use cardice::DiceOptions;
    ///
    /// let options = DiceOptions::default().with_faces_items([2, 4, 8]);
    /// assert_eq!(options.faces_items(), Some(&[2, 4, 8][..]));
    /// ```
    #[must_use]
    pub fn with_faces_items(mut self, faces_items: impl IntoIterator<Item = T>) -> Self {
        self.faces_items = Some(faces_items.into_iter().collect());
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the face count, if set.
    #[must_use]
    pub const fn faces_count(&self) -> Option<u32> {
        self.faces_count
    }

    /// Returns the explicit faces, if set.
    #[must_use]
    pub fn faces_items(&self) -> Option<&[T]> {
        self.faces_items.as_deref()
    }

    /// Returns the seed, if set.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Resolves the faces to build a die from: the numbered faces if a
    /// non-zero count is set, else the explicit items.
    pub(crate) fn into_faces(self) -> Result<Vec<T>, DiceError> {
        match (self.faces_count, self.faces_items) {
            (Some(count), _) if count > 0 => {
                if (count as usize) < MIN_FACES_COUNT {
                    return Err(DiceError::FacesCountTooSmall {
                        min: MIN_FACES_COUNT,
                        count: count as usize,
                    });
                }
                Ok(self.numbered_faces)
            }
            (_, Some(items)) => validate_items(items),
            _ => Err(DiceError::EmptyConfiguration),
        }
    }
}

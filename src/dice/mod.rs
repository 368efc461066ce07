//! Dice with arbitrary faces and boxes of dice rolled together.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::ops::Add;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use crate::error::DiceError;
use crate::options::DiceOptions;

mod dice_box;

pub use dice_box::DiceBox;

/// Minimum number of faces a die must have.
pub const MIN_FACES_COUNT: usize = 2;

fn rng_for(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(ChaCha8Rng::from_os_rng, ChaCha8Rng::seed_from_u64)
}

/// Picks a uniformly random face.
fn pick<T: Clone>(faces: &[T], rng: &mut ChaCha8Rng) -> T {
    let index = rng.random_range(0..faces.len());
    trace!(face = index, faces = faces.len(), "dice rolled");
    faces[index].clone()
}

/// A die holding its faces and the value of its last roll.
///
/// A die is rolled once on construction, so it always has a value.
/// Dice compare by their current values, and adding two dice adds their
/// values.
///
/// ```
/// use cardice::Dice;
///
/// let mut dice = Dice::new(6).unwrap();
/// let value = dice.rolling();
/// assert!((1..=6).contains(&value));
/// assert_eq!(*dice.value(), value);
/// ```
#[derive(Debug, Clone)]
pub struct Dice<T = u32> {
    /// Faces, in the order given.
    faces: Vec<T>,
    /// Value of the last roll.
    value: T,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Dice<u32> {
    /// Creates a die with faces `1..=faces_count`.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::EmptyConfiguration`] for a zero count and
    /// [`DiceError::FacesCountTooSmall`] for a count below [`MIN_FACES_COUNT`].
    pub fn new(faces_count: u32) -> Result<Self, DiceError> {
        Self::from_options(DiceOptions::default().with_faces_count(faces_count))
    }

    /// Creates a seeded die with faces `1..=faces_count`.
    ///
    /// # Errors
    ///
    /// Same as [`Dice::new`].
    pub fn with_seed(faces_count: u32, seed: u64) -> Result<Self, DiceError> {
        Self::from_options(
            DiceOptions::default()
                .with_faces_count(faces_count)
                .with_seed(seed),
        )
    }
}

pub(crate) fn validate_items<T>(items: Vec<T>) -> Result<Vec<T>, DiceError> {
    match items.len() {
        0 => Err(DiceError::EmptyConfiguration),
        count if count < MIN_FACES_COUNT => Err(DiceError::FacesItemsTooFew {
            min: MIN_FACES_COUNT,
            count,
        }),
        _ => Ok(items),
    }
}

impl<T: Clone> Dice<T> {
    /// Creates a die from options.
    ///
    /// The face count takes precedence over face items.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::EmptyConfiguration`] if neither a non-zero face
    /// count nor a non-empty item list is set, and the matching minimum
    /// error if there are fewer than [`MIN_FACES_COUNT`] faces.
    pub fn from_options(options: DiceOptions<T>) -> Result<Self, DiceError> {
        let rng = rng_for(options.seed());
        let faces = options.into_faces()?;
        Ok(Self::with_faces(faces, rng))
    }

    /// Creates a die with the given faces.
    ///
    /// # Errors
    ///
    /// Returns [`DiceError::EmptyConfiguration`] if `faces` is empty and
    /// [`DiceError::FacesItemsTooFew`] if it has fewer than
    /// [`MIN_FACES_COUNT`] items.
    pub fn from_faces(faces: impl IntoIterator<Item = T>) -> Result<Self, DiceError> {
        let faces = validate_items(faces.into_iter().collect())?;
        Ok(Self::with_faces(faces, rng_for(None)))
    }

    /// Creates a seeded die with the given faces.
    ///
    /// # Errors
    ///
    /// Same as [`Dice::from_faces`].
    pub fn from_faces_with_seed(
        faces: impl IntoIterator<Item = T>,
        seed: u64,
    ) -> Result<Self, DiceError> {
        let faces = validate_items(faces.into_iter().collect())?;
        Ok(Self::with_faces(faces, rng_for(Some(seed))))
    }

    fn with_faces(faces: Vec<T>, mut rng: ChaCha8Rng) -> Self {
        let value = pick(&faces, &mut rng);
        Self { faces, value, rng }
    }

    /// Rolls the die and returns the new value.
    pub fn rolling(&mut self) -> T {
        self.value = pick(&self.faces, &mut self.rng);
        self.value.clone()
    }

    /// Returns the faces.
    #[must_use]
    pub fn faces(&self) -> &[T] {
        &self.faces
    }

    /// Returns the value of the last roll.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Adds the die's value to `other`.
    ///
    /// `None` yields the die's own value, which lets a running total start
    /// from nothing.
    ///
    /// ```
    /// use cardice::Dice;
    ///
    /// let dice = Dice::from_faces([4, 4]).unwrap();
    /// assert_eq!(dice.add_to(None), 4);
    /// assert_eq!(dice.add_to(Some(3)), 7);
    /// ```
    #[must_use]
    pub fn add_to(&self, other: Option<T>) -> T
    where
        T: Add<Output = T>,
    {
        match other {
            None => self.value.clone(),
            Some(other) => self.value.clone() + other,
        }
    }
}

impl<T: PartialEq> PartialEq for Dice<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: PartialOrd> PartialOrd for Dice<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Clone + Add<Output = T>> Add for &Dice<T> {
    type Output = T;

    fn add(self, rhs: Self) -> T {
        self.value.clone() + rhs.value.clone()
    }
}

impl<T: fmt::Display> fmt::Display for Dice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of [", self.value)?;
        for (index, face) in self.faces.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{face}")?;
        }
        f.write_str("]")
    }
}

//! The fixed taxonomy of seventeen interest categories.
//!
//! Categories are numbered `1..=17`. The newtype keeps out-of-range numbers
//! from reaching the scoring engine, so every category map can be indexed
//! without a fallible lookup.
//!
//! # Examples
//! ```
//! use compass_core::Category;
//!
//! let category = Category::new(13)?;
//! assert_eq!(category.get(), 13);
//! assert_eq!(category.to_string(), "13");
//! assert_eq!(Category::all().count(), 17);
//! # Ok::<(), compass_core::CategoryError>(())
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the seventeen thematic categories.
///
/// Serialised as a bare integer. When used as a JSON map key the number is
/// written as a string, giving the `"1".."17"` keys of the result contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Category(u8);

/// Errors returned when constructing a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryError {
    /// The number lies outside `1..=17`.
    #[error("category {0} is outside the range 1..=17")]
    OutOfRange(i64),
    /// The text could not be parsed as a category number.
    #[error("'{0}' is not a category number")]
    NotANumber(String),
}

impl Category {
    /// Lowest category number.
    pub const MIN: u8 = 1;
    /// Highest category number.
    pub const MAX: u8 = 17;
    /// Number of categories in the taxonomy.
    pub const COUNT: usize = 17;

    /// Validate and construct a category.
    ///
    /// # Errors
    /// Returns [`CategoryError::OutOfRange`] for numbers outside `1..=17`.
    pub const fn new(number: u8) -> Result<Self, CategoryError> {
        if number < Self::MIN || number > Self::MAX {
            return Err(CategoryError::OutOfRange(number as i64));
        }
        Ok(Self(number))
    }

    /// Return the category number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Iterate over every category in ascending order.
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator + Clone {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for Category {
    type Error = CategoryError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl TryFrom<i64> for Category {
    type Error = CategoryError;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        u8::try_from(number)
            .map_err(|_| CategoryError::OutOfRange(number))
            .and_then(Self::new)
    }
}

impl From<Category> for u8 {
    fn from(category: Category) -> Self {
        category.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: i64 = s
            .trim()
            .parse()
            .map_err(|_| CategoryError::NotANumber(s.to_owned()))?;
        Self::try_from(number)
    }
}

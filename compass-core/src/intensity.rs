//! Answer intensity on the quiz slider.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How strongly a respondent agrees with the option they picked, `0..=3`.
///
/// # Examples
/// ```
/// use compass_core::Intensity;
///
/// assert_eq!(Intensity::new(2).map(Intensity::get), Ok(2));
/// assert!(Intensity::new(4).is_err());
/// assert_eq!(Intensity::MAX.get(), 3);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

/// Errors returned by [`Intensity::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntensityError {
    /// The value lies above [`Intensity::MAX`].
    #[error("intensity {0} is outside the range 0..=3")]
    OutOfRange(u8),
}

impl Intensity {
    /// No interest at all.
    pub const MIN: Self = Self(0);
    /// The slider maximum; also the per-question exposure increment.
    pub const MAX: Self = Self(3);

    /// Validate and construct an intensity.
    ///
    /// # Errors
    /// Returns [`IntensityError::OutOfRange`] for values above 3.
    pub const fn new(value: u8) -> Result<Self, IntensityError> {
        if value > Self::MAX.0 {
            return Err(IntensityError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Return the numeric value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Intensity {
    type Error = IntensityError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}

impl From<Intensity> for u32 {
    fn from(intensity: Intensity) -> Self {
        Self::from(intensity.0)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

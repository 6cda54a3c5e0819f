//! Tunable scoring behaviour.
#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default and maximum number of recommendations in a quiz result.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 15;

/// How responses that do not resolve to a catalog option affect overall
/// interest.
///
/// Unresolved responses never contribute to raw or exposure scores; this
/// policy only governs the overall interest average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnresolvedPolicy {
    /// Average over every supplied response, resolved or not.
    #[default]
    Count,
    /// Average over resolvable responses only.
    Exclude,
}

impl UnresolvedPolicy {
    /// Return the policy name as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Exclude => "exclude",
        }
    }
}

impl fmt::Display for UnresolvedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UnresolvedPolicy {
    type Err = ScoringOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "count" => Ok(Self::Count),
            "exclude" => Ok(Self::Exclude),
            _ => Err(ScoringOptionsError::UnknownPolicy(s.to_owned())),
        }
    }
}

/// Options applied by [`ScoringEngine`](crate::ScoringEngine).
///
/// # Examples
/// ```
/// use compass_scorer::{ScoringOptions, UnresolvedPolicy};
///
/// let options = ScoringOptions::default()
///     .with_unresolved(UnresolvedPolicy::Exclude)
///     .with_recommendation_limit(6)
///     .validate()?;
/// assert_eq!(options.recommendation_limit, 6);
/// # Ok::<(), compass_scorer::ScoringOptionsError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringOptions {
    /// Treatment of unresolved responses in overall interest.
    pub unresolved: UnresolvedPolicy,
    /// Maximum number of recommendations returned, `1..=15`.
    pub recommendation_limit: usize,
}

/// Errors raised while building [`ScoringOptions`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringOptionsError {
    /// A zero limit would always produce an empty recommendation list.
    #[error("recommendation limit must be at least 1")]
    ZeroRecommendationLimit,
    /// The limit exceeds the documented recommendation cap.
    #[error("recommendation limit {limit} exceeds the maximum of {max}")]
    RecommendationLimitTooLarge {
        /// Requested limit.
        limit: usize,
        /// Largest accepted limit.
        max: usize,
    },
    /// The unresolved-response policy name was not recognised.
    #[error("unknown unresolved-response policy '{0}' (expected 'count' or 'exclude')")]
    UnknownPolicy(String),
}

impl ScoringOptions {
    /// Replace the unresolved-response policy.
    #[must_use]
    pub const fn with_unresolved(mut self, unresolved: UnresolvedPolicy) -> Self {
        self.unresolved = unresolved;
        self
    }

    /// Replace the recommendation limit.
    #[must_use]
    pub const fn with_recommendation_limit(mut self, limit: usize) -> Self {
        self.recommendation_limit = limit;
        self
    }

    /// Validate the options and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoringOptionsError::ZeroRecommendationLimit`] when the limit
    /// is zero and [`ScoringOptionsError::RecommendationLimitTooLarge`] when
    /// it exceeds [`DEFAULT_RECOMMENDATION_LIMIT`].
    pub const fn validate(self) -> Result<Self, ScoringOptionsError> {
        if self.recommendation_limit == 0 {
            return Err(ScoringOptionsError::ZeroRecommendationLimit);
        }
        if self.recommendation_limit > DEFAULT_RECOMMENDATION_LIMIT {
            return Err(ScoringOptionsError::RecommendationLimitTooLarge {
                limit: self.recommendation_limit,
                max: DEFAULT_RECOMMENDATION_LIMIT,
            });
        }
        Ok(self)
    }
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            unresolved: UnresolvedPolicy::Count,
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

//! Pre-authored actions suggested for a category, and the lookup seam the
//! engine reads them through.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Category, LocalizedText};

/// Effort level of a suggested action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// A few minutes, no preparation.
    Easy,
    /// Some planning or an hour or two.
    Medium,
    /// Sustained commitment.
    Hard,
}

impl Difficulty {
    /// Return the difficulty as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A static, pre-authored suggested action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Stable identifier, e.g. `"climate-1"`.
    pub id: String,
    /// Short title.
    pub title: LocalizedText,
    /// One-sentence description.
    pub description: LocalizedText,
    /// Categories the action contributes to.
    #[serde(alias = "sdgTags")]
    pub category_tags: Vec<Category>,
    /// Effort level.
    pub difficulty: Difficulty,
    /// Free-form time estimate, e.g. `"10分"`.
    pub estimated_time: String,
}

/// Read-only lookup from a category to its ordered recommendations.
///
/// The scoring engine depends on this trait rather than a concrete catalog
/// so callers can substitute their own content. Implementations must be
/// `Send + Sync`; the engine may be driven from many threads at once.
///
/// # Examples
///
/// ```rust
/// use compass_core::{Category, Recommendation, RecommendationSource};
///
/// struct Empty;
///
/// impl RecommendationSource for Empty {
///     fn recommendations_for(&self, _category: Category) -> &[Recommendation] {
///         &[]
///     }
/// }
///
/// # fn main() -> Result<(), compass_core::CategoryError> {
/// assert!(Empty.recommendations_for(Category::new(1)?).is_empty());
/// # Ok(())
/// # }
/// ```
pub trait RecommendationSource: Send + Sync {
    /// Return the recommendations for `category` in catalog order.
    ///
    /// Categories without an entry yield an empty slice.
    fn recommendations_for(&self, category: Category) -> &[Recommendation];
}

//! Scoring outputs: per-category score maps, the score snapshot, and the
//! quiz result contract.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Category, Recommendation};

/// A score for every category.
///
/// Always holds all seventeen categories; a category that received nothing
/// reports an explicit `0`. Serialises as a JSON object keyed `"1".."17"`.
/// Deserialising a partial object fills the missing categories with `0`.
///
/// # Examples
/// ```
/// use compass_core::{Category, CategoryScores};
///
/// # fn main() -> Result<(), compass_core::CategoryError> {
/// let mut scores = CategoryScores::zeroed();
/// scores.add(Category::new(5)?, 3);
/// assert_eq!(scores.get(Category::new(5)?), 3);
/// assert_eq!(scores.iter().count(), 17);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Category, u32>")]
pub struct CategoryScores(BTreeMap<Category, u32>);

impl CategoryScores {
    /// A map with every category set to zero.
    #[must_use]
    pub fn zeroed() -> Self {
        Self::from_fn(|_| 0)
    }

    /// Build a map by evaluating `score` for every category.
    #[must_use]
    pub fn from_fn(mut score: impl FnMut(Category) -> u32) -> Self {
        Self(
            Category::all()
                .map(|category| (category, score(category)))
                .collect(),
        )
    }

    /// Return the score for `category`.
    #[must_use]
    pub fn get(&self, category: Category) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    /// Add `amount` to the score for `category`, saturating at `u32::MAX`.
    pub fn add(&mut self, category: Category, amount: u32) {
        let entry = self.0.entry(category).or_insert(0);
        *entry = entry.saturating_add(amount);
    }

    /// Iterate over `(category, score)` pairs in ascending category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.0.iter().map(|(&category, &score)| (category, score))
    }
}

impl From<BTreeMap<Category, u32>> for CategoryScores {
    fn from(scores: BTreeMap<Category, u32>) -> Self {
        Self::from_fn(|category| scores.get(&category).copied().unwrap_or(0))
    }
}

impl Default for CategoryScores {
    fn default() -> Self {
        Self::zeroed()
    }
}

/// Everything the engine computes for one set of responses.
///
/// Built fresh on every scoring call and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    overall: u8,
    raw_scores: CategoryScores,
    normalized_scores: CategoryScores,
    top3: Vec<Category>,
    bottom3: Vec<Category>,
    computed_at: DateTime<Utc>,
}

impl ScoreSnapshot {
    /// Assemble a snapshot from computed parts.
    #[must_use]
    pub const fn new(
        overall: u8,
        raw_scores: CategoryScores,
        normalized_scores: CategoryScores,
        top3: Vec<Category>,
        bottom3: Vec<Category>,
        computed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            overall,
            raw_scores,
            normalized_scores,
            top3,
            bottom3,
            computed_at,
        }
    }

    /// Overall interest, `0..=100`.
    #[must_use]
    pub const fn overall(&self) -> u8 {
        self.overall
    }

    /// Accumulated intensity per category.
    #[must_use]
    pub const fn raw_scores(&self) -> &CategoryScores {
        &self.raw_scores
    }

    /// Raw scores as a percentage of exposure, `0..=100`.
    #[must_use]
    pub const fn normalized_scores(&self) -> &CategoryScores {
        &self.normalized_scores
    }

    /// Up to three highest-ranked exposed categories, best first.
    #[must_use]
    pub fn top3(&self) -> &[Category] {
        &self.top3
    }

    /// Up to three lowest-ranked exposed categories, still in descending
    /// rank order.
    #[must_use]
    pub fn bottom3(&self) -> &[Category] {
        &self.bottom3
    }

    /// When the snapshot was computed.
    #[must_use]
    pub const fn computed_at(&self) -> DateTime<Utc> {
        self.computed_at
    }
}

/// The result returned to a quiz taker: the snapshot's scores plus
/// recommendations for their top categories.
///
/// Field names follow the external contract (`overall_interest`,
/// `category_scores_raw`, ...). The computation timestamp is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    overall_interest: u8,
    category_scores_raw: CategoryScores,
    category_scores_norm: CategoryScores,
    top3: Vec<Category>,
    bottom3: Vec<Category>,
    recommendations: Vec<Recommendation>,
}

impl QuizResult {
    /// Wrap a snapshot with its recommendations.
    #[must_use]
    pub fn new(snapshot: ScoreSnapshot, recommendations: Vec<Recommendation>) -> Self {
        let ScoreSnapshot {
            overall,
            raw_scores,
            normalized_scores,
            top3,
            bottom3,
            computed_at: _,
        } = snapshot;
        Self {
            overall_interest: overall,
            category_scores_raw: raw_scores,
            category_scores_norm: normalized_scores,
            top3,
            bottom3,
            recommendations,
        }
    }

    /// Overall interest, `0..=100`.
    #[must_use]
    pub const fn overall_interest(&self) -> u8 {
        self.overall_interest
    }

    /// Accumulated intensity per category.
    #[must_use]
    pub const fn category_scores_raw(&self) -> &CategoryScores {
        &self.category_scores_raw
    }

    /// Normalised scores per category.
    #[must_use]
    pub const fn category_scores_norm(&self) -> &CategoryScores {
        &self.category_scores_norm
    }

    /// Highest-ranked categories, best first.
    #[must_use]
    pub fn top3(&self) -> &[Category] {
        &self.top3
    }

    /// Lowest-ranked categories in descending rank order.
    #[must_use]
    pub fn bottom3(&self) -> &[Category] {
        &self.bottom3
    }

    /// Suggested actions for the top categories.
    #[must_use]
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }
}

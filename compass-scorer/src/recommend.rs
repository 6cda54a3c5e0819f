//! Recommendation selection for the top-ranked categories.
#![forbid(unsafe_code)]

use compass_core::{Category, Recommendation, RecommendationSource};

use crate::DEFAULT_RECOMMENDATION_LIMIT;

/// Concatenate the catalog entries of `categories`, in order, and keep at
/// most `limit` of them.
///
/// `limit` is capped at [`DEFAULT_RECOMMENDATION_LIMIT`].
///
/// Each category's entries keep their catalog order. Categories without an
/// entry contribute nothing.
///
/// # Examples
/// ```
/// use compass_core::Category;
/// use compass_scorer::{RecommendationCatalog, generate_recommendations};
///
/// # fn main() -> Result<(), compass_core::CategoryError> {
/// let top = [Category::new(13)?, Category::new(7)?];
/// let picked = generate_recommendations(&top, RecommendationCatalog::builtin(), 3);
/// let ids: Vec<&str> = picked.iter().map(|r| r.id.as_str()).collect();
/// assert_eq!(ids, ["climate-1", "climate-2", "energy-1"]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn generate_recommendations<S>(
    categories: &[Category],
    source: &S,
    limit: usize,
) -> Vec<Recommendation>
where
    S: RecommendationSource + ?Sized,
{
    categories
        .iter()
        .flat_map(|&category| source.recommendations_for(category))
        .take(limit.min(DEFAULT_RECOMMENDATION_LIMIT))
        .cloned()
        .collect()
}

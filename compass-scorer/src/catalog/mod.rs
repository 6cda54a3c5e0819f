//! The recommendation catalog: category to ordered list of suggested actions.
//!
//! The catalog is data, not logic. [`RecommendationCatalog::builtin`] serves
//! the content shipped with the engine and is built once per process;
//! [`RecommendationCatalog::from_reader`] loads a replacement from JSON.

use std::collections::BTreeMap;
use std::io::Read;
use std::sync::LazyLock;

use compass_core::{Category, LocalizedText, Recommendation, RecommendationSource};
use thiserror::Error;

mod builtin;

use builtin::{BUILTIN, Seed};

static BUILTIN_CATALOG: LazyLock<RecommendationCatalog> =
    LazyLock::new(RecommendationCatalog::from_builtin_rows);

/// Immutable mapping from category to recommendations.
///
/// # Examples
/// ```
/// use compass_core::{Category, RecommendationSource};
/// use compass_scorer::RecommendationCatalog;
///
/// # fn main() -> Result<(), compass_core::CategoryError> {
/// let catalog = RecommendationCatalog::builtin();
/// let climate = catalog.recommendations_for(Category::new(13)?);
/// assert_eq!(climate.first().map(|r| r.id.as_str()), Some("climate-1"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecommendationCatalog {
    entries: BTreeMap<Category, Vec<Recommendation>>,
}

/// Errors raised while loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The payload was not valid catalog JSON.
    #[error("failed to parse recommendation catalog JSON")]
    Parse(#[source] serde_json::Error),
    /// Two records share an identifier within one category.
    #[error("recommendation id '{id}' appears more than once under category {category}")]
    DuplicateId {
        /// Category holding the duplicate.
        category: Category,
        /// The repeated identifier.
        id: String,
    },
}

impl RecommendationCatalog {
    /// Return the catalog shipped with the engine.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN_CATALOG
    }

    /// Build a catalog from pre-assembled entries.
    #[must_use]
    pub const fn new(entries: BTreeMap<Category, Vec<Recommendation>>) -> Self {
        Self { entries }
    }

    /// Load a catalog from JSON shaped `{"<category>": [Recommendation, ...]}`.
    ///
    /// Keys outside `1..=17` are rejected as parse errors.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed JSON and
    /// [`CatalogError::DuplicateId`] when a category lists an id twice.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let entries: BTreeMap<Category, Vec<Recommendation>> =
            serde_json::from_reader(reader).map_err(CatalogError::Parse)?;
        for (&category, items) in &entries {
            if let Some(id) = first_duplicate_id(items) {
                return Err(CatalogError::DuplicateId {
                    category,
                    id: id.to_owned(),
                });
            }
        }
        log::debug!(
            "loaded recommendation catalog with {} categories",
            entries.len()
        );
        Ok(Self::new(entries))
    }

    /// Number of categories with at least one entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .values()
            .filter(|items| !items.is_empty())
            .count()
    }

    /// Report whether the catalog holds no recommendations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn from_builtin_rows() -> Self {
        let entries = BUILTIN
            .iter()
            .filter_map(|(number, seeds)| {
                let category = Category::new(*number).ok()?;
                let items = seeds.iter().map(Seed::to_recommendation).collect();
                Some((category, items))
            })
            .collect();
        Self::new(entries)
    }
}

impl RecommendationSource for RecommendationCatalog {
    fn recommendations_for(&self, category: Category) -> &[Recommendation] {
        self.entries.get(&category).map_or(&[], Vec::as_slice)
    }
}

impl Seed {
    fn to_recommendation(&self) -> Recommendation {
        let (title_ja, title_en) = self.title;
        let (description_ja, description_en) = self.description;
        Recommendation {
            id: self.id.to_owned(),
            title: LocalizedText::new(title_ja, title_en),
            description: LocalizedText::new(description_ja, description_en),
            category_tags: self
                .tags
                .iter()
                .filter_map(|&number| Category::new(number).ok())
                .collect(),
            difficulty: self.difficulty,
            estimated_time: self.estimated_time.to_owned(),
        }
    }
}

fn first_duplicate_id(items: &[Recommendation]) -> Option<&str> {
    items.iter().enumerate().find_map(|(position, item)| {
        items
            .iter()
            .take(position)
            .any(|earlier| earlier.id == item.id)
            .then_some(item.id.as_str())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use compass_core::Difficulty;
    use compass_core::test_support::category;
    use rstest::rstest;

    #[rstest]
    fn builtin_covers_every_category_with_two_entries() {
        let catalog = RecommendationCatalog::builtin();
        assert_eq!(catalog.len(), Category::COUNT);
        for category in Category::all() {
            assert_eq!(catalog.recommendations_for(category).len(), 2, "{category}");
        }
    }

    #[rstest]
    fn builtin_rows_keep_every_tag() {
        for (number, seeds) in BUILTIN {
            for seed in *seeds {
                let converted = seed.to_recommendation();
                assert_eq!(
                    converted.category_tags.len(),
                    seed.tags.len(),
                    "{}",
                    seed.id
                );
                assert!(
                    seed.tags.contains(number),
                    "{} should be tagged with its own category",
                    seed.id
                );
            }
        }
    }

    #[rstest]
    fn builtin_preserves_catalog_order() {
        let ids: Vec<&str> = RecommendationCatalog::builtin()
            .recommendations_for(category(15))
            .iter()
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["land-1", "land-2"]);
    }

    #[rstest]
    fn builtin_is_shared() {
        assert!(std::ptr::eq(
            RecommendationCatalog::builtin(),
            RecommendationCatalog::builtin()
        ));
    }

    #[rstest]
    fn loads_json_catalog() {
        let json = r#"{
            "3": [{
                "id": "walk",
                "title": {"ja": "散歩", "en": "Walk"},
                "description": {"ja": "", "en": ""},
                "categoryTags": [3],
                "difficulty": "hard",
                "estimatedTime": "1h"
            }]
        }"#;
        let catalog = RecommendationCatalog::from_reader(json.as_bytes()).expect("valid catalog");
        let items = catalog.recommendations_for(category(3));
        assert_eq!(items.len(), 1);
        assert_eq!(items.first().map(|r| r.difficulty), Some(Difficulty::Hard));
        assert!(catalog.recommendations_for(category(4)).is_empty());
    }

    #[rstest]
    #[case(r#"{"18": []}"#)]
    #[case(r#"{"x": []}"#)]
    #[case("[]")]
    fn rejects_malformed_catalogs(#[case] json: &str) {
        let err = RecommendationCatalog::from_reader(json.as_bytes()).expect_err("invalid");
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[rstest]
    fn rejects_duplicate_ids() {
        let record = r#"{"id": "a", "title": {"ja": "", "en": ""}, "description": {"ja": "", "en": ""},
            "categoryTags": [1], "difficulty": "easy", "estimatedTime": ""}"#;
        let json = format!(r#"{{"1": [{record}, {record}]}}"#);
        match RecommendationCatalog::from_reader(json.as_bytes()) {
            Err(CatalogError::DuplicateId { category: c, id }) => {
                assert_eq!((c, id.as_str()), (category(1), "a"));
            }
            other => panic!("expected DuplicateId, found {other:?}"),
        }
    }

    #[rstest]
    fn empty_catalog_reports_empty() {
        assert!(RecommendationCatalog::default().is_empty());
    }
}

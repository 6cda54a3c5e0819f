//! Test-only builders and an in-memory [`RecommendationSource`] used by unit,
//! behaviour and property tests across the workspace.

use std::collections::BTreeMap;

use crate::{
    Category, Difficulty, Intensity, LocalizedText, Question, QuizOption, Recommendation,
    RecommendationSource, Response,
};

/// Build a category, panicking on numbers outside `1..=17`.
///
/// # Panics
/// Panics when `number` is not a valid category.
#[expect(clippy::expect_used, reason = "test helpers fail fast on bad fixtures")]
#[must_use]
pub fn category(number: u8) -> Category {
    Category::new(number).expect("test category must be within 1..=17")
}

/// Build a question from `(option id, category numbers)` pairs.
///
/// # Panics
/// Panics when a category number is out of range.
#[must_use]
pub fn question(id: &str, options: &[(&str, &[u8])]) -> Question {
    let options = options
        .iter()
        .map(|&(option_id, tags)| QuizOption::new(option_id, tags.iter().map(|&n| category(n))))
        .collect();
    Question::new(id, options)
}

/// Build a response, panicking on intensities above 3.
///
/// # Panics
/// Panics when `intensity` is out of range.
#[expect(clippy::expect_used, reason = "test helpers fail fast on bad fixtures")]
#[must_use]
pub fn response(question_id: &str, option_id: &str, intensity: u8) -> Response {
    Response::new(
        question_id,
        option_id,
        Intensity::new(intensity).expect("test intensity must be within 0..=3"),
    )
}

/// Build a recommendation whose text is derived from its identifier.
#[must_use]
pub fn recommendation(id: &str, tags: &[Category]) -> Recommendation {
    Recommendation {
        id: id.to_owned(),
        title: LocalizedText::new(id, id),
        description: LocalizedText::default(),
        category_tags: tags.to_vec(),
        difficulty: Difficulty::Easy,
        estimated_time: "5m".to_owned(),
    }
}

/// In-memory `RecommendationSource` used in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryCatalog {
    entries: BTreeMap<Category, Vec<Recommendation>>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `category` `count` recommendations named `"<category>-<n>"`.
    #[must_use]
    pub fn with_generated(mut self, category: Category, count: usize) -> Self {
        let items = (1..=count)
            .map(|n| recommendation(&format!("{category}-{n}"), &[category]))
            .collect();
        self.entries.insert(category, items);
        self
    }
}

impl RecommendationSource for MemoryCatalog {
    fn recommendations_for(&self, category: Category) -> &[Recommendation] {
        self.entries.get(&category).map_or(&[], Vec::as_slice)
    }
}

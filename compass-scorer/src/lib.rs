//! Deterministic interest scoring for Compass quizzes.
//!
//! The crate turns a question catalog and a respondent's answers into
//! per-category scores, an overall interest figure, top and bottom rankings,
//! and recommendations drawn from a static catalog:
//! - [`ScoringEngine`] performs the pure computation. It borrows its inputs,
//!   never mutates them, and never fails on unresolvable references.
//! - [`RecommendationCatalog`] holds the recommendation content, either the
//!   built-in table or a JSON replacement.
//! - [`ScoringOptions`] tunes the few behaviours that are policy rather than
//!   arithmetic.
//!
//! # Examples
//!
//! ```
//! use compass_core::{Category, Intensity, Question, QuizOption, Response};
//! use compass_scorer::calculate_quiz_scores;
//!
//! # fn main() -> Result<(), compass_core::CategoryError> {
//! let questions = vec![Question::new(
//!     "commute",
//!     vec![
//!         QuizOption::new("bike", [Category::new(11)?, Category::new(13)?]),
//!         QuizOption::new("car", [Category::new(9)?]),
//!     ],
//! )];
//! let responses = vec![Response::new("commute", "bike", Intensity::MAX)];
//!
//! let result = calculate_quiz_scores(&questions, &responses);
//! assert_eq!(result.overall_interest(), 100);
//! assert_eq!(result.top3().first(), Some(&Category::new(11)?));
//! assert_eq!(result.recommendations().len(), 6);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use compass_core::{Question, QuizResult, Response};

mod catalog;
mod engine;
mod options;
mod recommend;

pub use catalog::{CatalogError, RecommendationCatalog};
pub use engine::{RANK_WINDOW, RankedCategory, ScoringEngine};
pub use options::{
    DEFAULT_RECOMMENDATION_LIMIT, ScoringOptions, ScoringOptionsError, UnresolvedPolicy,
};
pub use recommend::generate_recommendations;

/// Score `responses` with default options against the built-in catalog.
#[must_use]
pub fn calculate_quiz_scores(questions: &[Question], responses: &[Response]) -> QuizResult {
    ScoringEngine::new(questions, responses).quiz_result(RecommendationCatalog::builtin())
}

//! Facade crate for the Compass category interest engine.
//!
//! This crate re-exports the core domain types and, behind the `scorer`
//! feature, the scoring engine and recommendation catalog.

#![forbid(unsafe_code)]

pub use compass_core::{
    Category, CategoryError, CategoryScores, Difficulty, Intensity, IntensityError, Locale,
    LocaleError, LocalizedText, Question, QuestionSet, QuestionSetError, QuizOption, QuizResult,
    QuizSubmission, Recommendation, RecommendationSource, Response, ScoreSnapshot,
};

#[cfg(feature = "scorer")]
pub use compass_scorer::{
    CatalogError, DEFAULT_RECOMMENDATION_LIMIT, RANK_WINDOW, RankedCategory,
    RecommendationCatalog, ScoringEngine, ScoringOptions, ScoringOptionsError, UnresolvedPolicy,
    calculate_quiz_scores, generate_recommendations,
};

//! Core domain types for the Compass interest engine.
//!
//! A quiz is a catalog of [`Question`]s whose options are tagged with one or
//! more of seventeen fixed [`Category`] values. Respondents submit
//! [`Response`]s carrying an [`Intensity`]; the scorer turns those into a
//! [`ScoreSnapshot`] and a [`QuizResult`]. Constructors and deserialisers
//! validate ranges so that downstream scoring never has to.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod intensity;
pub mod locale;
pub mod question;
pub mod recommendation;
pub mod response;
pub mod score;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use category::{Category, CategoryError};
pub use intensity::{Intensity, IntensityError};
pub use locale::{Locale, LocaleError, LocalizedText};
pub use question::{Question, QuestionSet, QuestionSetError, QuizOption};
pub use recommendation::{Difficulty, Recommendation, RecommendationSource};
pub use response::{QuizSubmission, Response};
pub use score::{CategoryScores, QuizResult, ScoreSnapshot};

//! Question catalog entries and the on-disk question set.
//!
//! Questions are immutable once loaded. Each option carries the categories it
//! speaks to; the union across a question's options is the question's
//! exposure, i.e. every category an answer to it could have moved.

use std::collections::{BTreeSet, HashSet};
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Category, Locale, LocalizedText};

/// A selectable answer within a [`Question`].
///
/// # Examples
/// ```
/// use compass_core::{Category, QuizOption};
///
/// # fn main() -> Result<(), compass_core::CategoryError> {
/// let option = QuizOption::new("bike", [Category::new(11)?, Category::new(13)?]);
/// assert!(option.category_tags.contains(&Category::new(13)?));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    /// Identifier, unique within the owning question.
    pub id: String,
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LocalizedText>,
    /// Categories this choice is associated with. May be empty.
    #[serde(default, alias = "sdgTags")]
    pub category_tags: BTreeSet<Category>,
}

impl QuizOption {
    /// Build an unlabelled option.
    #[must_use]
    pub fn new(id: impl Into<String>, tags: impl IntoIterator<Item = Category>) -> Self {
        Self {
            id: id.into(),
            label: None,
            category_tags: tags.into_iter().collect(),
        }
    }

    /// Attach a display label while returning `self` for chaining.
    #[must_use]
    pub fn with_label(mut self, label: LocalizedText) -> Self {
        self.label = Some(label);
        self
    }
}

/// A quiz question and its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within the question set.
    pub id: String,
    /// Display title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<LocalizedText>,
    /// Available answers.
    pub options: Vec<QuizOption>,
}

impl Question {
    /// Build an untitled question.
    #[must_use]
    pub fn new(id: impl Into<String>, options: Vec<QuizOption>) -> Self {
        Self {
            id: id.into(),
            title: None,
            options,
        }
    }

    /// Attach a display title while returning `self` for chaining.
    #[must_use]
    pub fn with_title(mut self, title: LocalizedText) -> Self {
        self.title = Some(title);
        self
    }

    /// Look up an option by identifier.
    #[must_use]
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|option| option.id == option_id)
    }

    /// Union of the category tags across every option.
    ///
    /// # Examples
    /// ```
    /// use compass_core::{Category, Question, QuizOption};
    ///
    /// # fn main() -> Result<(), compass_core::CategoryError> {
    /// let question = Question::new(
    ///     "q1",
    ///     vec![
    ///         QuizOption::new("a", [Category::new(1)?]),
    ///         QuizOption::new("b", [Category::new(2)?, Category::new(1)?]),
    ///     ],
    /// );
    /// assert_eq!(question.exposure_tags().len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn exposure_tags(&self) -> BTreeSet<Category> {
        self.options
            .iter()
            .flat_map(|option| option.category_tags.iter().copied())
            .collect()
    }
}

/// Versioned collection of questions as shipped on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSet {
    /// Content version, e.g. `"1.0"`.
    pub version: String,
    /// Locales the titles and labels are provided in.
    #[serde(default)]
    pub locales: Vec<Locale>,
    /// The questions, in presentation order.
    pub questions: Vec<Question>,
}

/// Errors raised while loading or validating a [`QuestionSet`].
#[derive(Debug, Error)]
pub enum QuestionSetError {
    /// The payload was not valid question set JSON.
    #[error("failed to parse question set JSON")]
    Parse(#[source] serde_json::Error),
    /// The set contains no questions.
    #[error("question set must contain at least one question")]
    Empty,
    /// Two questions share an identifier.
    #[error("question id '{id}' appears more than once")]
    DuplicateQuestion {
        /// The repeated identifier.
        id: String,
    },
    /// Two options of one question share an identifier.
    #[error("option id '{option}' appears more than once in question '{question}'")]
    DuplicateOption {
        /// Owning question identifier.
        question: String,
        /// The repeated option identifier.
        option: String,
    },
}

impl QuestionSet {
    /// Parse a question set from JSON and validate it.
    ///
    /// # Errors
    /// Returns [`QuestionSetError::Parse`] when the JSON is malformed (which
    /// includes category tags outside `1..=17`) and the validation errors of
    /// [`QuestionSet::validate`] otherwise.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, QuestionSetError> {
        let set: Self = serde_json::from_reader(reader).map_err(QuestionSetError::Parse)?;
        set.validate()?;
        Ok(set)
    }

    /// Check identifier uniqueness.
    ///
    /// # Errors
    /// Returns [`QuestionSetError::Empty`], [`QuestionSetError::DuplicateQuestion`]
    /// or [`QuestionSetError::DuplicateOption`].
    pub fn validate(&self) -> Result<(), QuestionSetError> {
        if self.questions.is_empty() {
            return Err(QuestionSetError::Empty);
        }
        let mut question_ids = HashSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(QuestionSetError::DuplicateQuestion {
                    id: question.id.clone(),
                });
            }
            let mut option_ids = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(QuestionSetError::DuplicateOption {
                        question: question.id.clone(),
                        option: option.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

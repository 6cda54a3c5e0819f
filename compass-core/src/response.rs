//! Quiz answers as submitted by a respondent.

use serde::{Deserialize, Serialize};

use crate::Intensity;

/// A single answer: which option was picked for which question, and how
/// strongly.
///
/// The identifiers are not checked against a catalog here. A response that
/// points at an unknown question or option is carried through and simply
/// contributes nothing when scored.
///
/// # Examples
/// ```
/// use compass_core::{Intensity, Response};
///
/// let response = Response::new("q1", "a", Intensity::MAX);
/// assert_eq!(response.intensity.get(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Identifier of the answered question.
    pub question_id: String,
    /// Identifier of the chosen option within that question.
    pub option_id: String,
    /// Slider value, `0..=3`.
    pub intensity: Intensity,
}

impl Response {
    /// Build a response.
    #[must_use]
    pub fn new(
        question_id: impl Into<String>,
        option_id: impl Into<String>,
        intensity: Intensity,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            option_id: option_id.into(),
            intensity,
        }
    }
}

/// Request body for a quiz submission.
///
/// # Examples
/// ```
/// use compass_core::QuizSubmission;
///
/// let body = r#"{"submissions": [{"questionId": "q1", "optionId": "a", "intensity": 2}]}"#;
/// let submission: QuizSubmission = serde_json::from_str(body)?;
/// assert_eq!(submission.submissions.len(), 1);
/// assert!(submission.session_id.is_none());
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSubmission {
    /// Answers in the order they were given.
    pub submissions: Vec<Response>,
    /// Optional anonymous session identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

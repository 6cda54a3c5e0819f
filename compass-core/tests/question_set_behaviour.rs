#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for loading question sets and submissions.

use std::cell::RefCell;

use compass_core::{Category, Intensity, QuestionSet, QuestionSetError, QuizSubmission};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const TWO_QUESTIONS: &str = r#"{
    "version": "1.0",
    "locales": ["ja", "en"],
    "questions": [
        {"id": "q1", "options": [
            {"id": "a", "categoryTags": [7, 13]},
            {"id": "b", "categoryTags": [1]}
        ]},
        {"id": "q2", "options": [{"id": "a", "categoryTags": []}]}
    ]
}"#;

const REPEATED_QUESTION: &str = r#"{
    "version": "1.0",
    "questions": [
        {"id": "q1", "options": [{"id": "a", "categoryTags": [1]}]},
        {"id": "q1", "options": [{"id": "a", "categoryTags": [2]}]}
    ]
}"#;

const OUT_OF_RANGE_TAG: &str = r#"{
    "version": "1.0",
    "questions": [{"id": "q1", "options": [{"id": "a", "categoryTags": [18]}]}]
}"#;

/// Aggregate fixtures shared across the BDD scenarios.
pub struct TestContext {
    payload: RefCell<&'static str>,
    loaded: RefCell<Option<Result<QuestionSet, QuestionSetError>>>,
    submission: RefCell<Option<Result<QuizSubmission, serde_json::Error>>>,
}

#[fixture]
/// Build a fresh `TestContext` for each scenario run.
pub fn context() -> TestContext {
    TestContext {
        payload: RefCell::new(""),
        loaded: RefCell::new(None),
        submission: RefCell::new(None),
    }
}

#[given("a question set with two questions")]
fn two_questions(context: &TestContext) {
    *context.payload.borrow_mut() = TWO_QUESTIONS;
}

#[given("a question set that repeats a question id")]
fn repeated_question(context: &TestContext) {
    *context.payload.borrow_mut() = REPEATED_QUESTION;
}

#[given("a question set tagging an option with category 18")]
fn out_of_range_tag(context: &TestContext) {
    *context.payload.borrow_mut() = OUT_OF_RANGE_TAG;
}

#[given("a submission answering with intensity 4")]
fn too_intense(context: &TestContext) {
    *context.payload.borrow_mut() =
        r#"{"submissions": [{"questionId": "q1", "optionId": "a", "intensity": 4}]}"#;
}

#[given("a submission answering with intensity 2")]
fn moderate(context: &TestContext) {
    *context.payload.borrow_mut() = r#"{
        "submissions": [{"questionId": "q1", "optionId": "a", "intensity": 2}],
        "sessionId": "abc"
    }"#;
}

#[when("the question set is loaded")]
fn load_question_set(context: &TestContext) {
    let payload = *context.payload.borrow();
    *context.loaded.borrow_mut() = Some(QuestionSet::from_reader(payload.as_bytes()));
}

#[when("the submission is parsed")]
fn parse_submission(context: &TestContext) {
    let payload = *context.payload.borrow();
    *context.submission.borrow_mut() = Some(serde_json::from_str(payload));
}

#[then("the question set has 2 questions")]
fn has_two_questions(context: &TestContext) {
    let loaded = context.loaded.borrow();
    let set = loaded
        .as_ref()
        .expect("question set should be loaded")
        .as_ref()
        .expect("question set should be valid");
    assert_eq!(set.questions.len(), 2);
}

#[then("the first question exposes categories 1, 7 and 13")]
fn first_question_exposure(context: &TestContext) {
    let loaded = context.loaded.borrow();
    let set = loaded
        .as_ref()
        .expect("question set should be loaded")
        .as_ref()
        .expect("question set should be valid");
    let exposed: Vec<u8> = set
        .questions
        .first()
        .expect("first question")
        .exposure_tags()
        .into_iter()
        .map(Category::get)
        .collect();
    assert_eq!(exposed, vec![1, 7, 13]);
}

#[then("loading fails because of a duplicate question")]
fn duplicate_question(context: &TestContext) {
    let loaded = context.loaded.borrow();
    assert!(matches!(
        loaded.as_ref(),
        Some(Err(QuestionSetError::DuplicateQuestion { id })) if id == "q1"
    ));
}

#[then("loading fails with a parse error")]
fn parse_error(context: &TestContext) {
    let loaded = context.loaded.borrow();
    assert!(matches!(
        loaded.as_ref(),
        Some(Err(QuestionSetError::Parse(_)))
    ));
}

#[then("the submission is rejected")]
fn submission_rejected(context: &TestContext) {
    let submission = context.submission.borrow();
    assert!(matches!(submission.as_ref(), Some(Err(_))));
}

#[then("the submission holds one response with intensity 2")]
fn submission_accepted(context: &TestContext) {
    let submission = context.submission.borrow();
    let parsed = submission
        .as_ref()
        .expect("submission should be parsed")
        .as_ref()
        .expect("submission should be valid");
    let intensities: Vec<Intensity> = parsed.submissions.iter().map(|r| r.intensity).collect();
    let expected = Intensity::new(2).expect("valid intensity");
    assert_eq!(intensities, vec![expected]);
    assert_eq!(parsed.session_id.as_deref(), Some("abc"));
}

#[scenario(path = "tests/features/question_set.feature", index = 0)]
fn well_formed_question_set(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/question_set.feature", index = 1)]
fn repeated_question_ids(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/question_set.feature", index = 2)]
fn category_out_of_range(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/question_set.feature", index = 3)]
fn intensity_out_of_range(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/question_set.feature", index = 4)]
fn documented_submission_fields(context: TestContext) {
    let _ = context;
}

//! The scoring engine: quiz responses in, category scores and rankings out.
//!
//! Each response adds its intensity to every category tagged on the option
//! it picked (the raw score). Each answered question adds the slider maximum
//! to every category tagged on any of its options (the exposure). The
//! normalised score is raw as a rounded percentage of exposure, so a category
//! is judged only against the questions that could have moved it.
//!
//! Lookups that fail (unknown question, option not in that question) are not
//! errors: the response contributes nothing to raw or exposure scores.

#![forbid(unsafe_code)]

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use compass_core::{
    Category, CategoryScores, Intensity, Question, QuizOption, QuizResult, Recommendation,
    RecommendationSource, Response, ScoreSnapshot,
};

use crate::{ScoringOptions, ScoringOptionsError, UnresolvedPolicy, generate_recommendations};

/// How many categories the top and bottom rankings hold.
pub const RANK_WINDOW: usize = 3;

/// An exposed category and its position inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankedCategory {
    /// The category.
    pub category: Category,
    /// Normalised score, `0..=100`.
    pub score: u32,
    /// Exposure, always positive for ranked categories.
    pub exposure: u32,
}

/// Stateless scorer over a borrowed question catalog and response list.
///
/// The engine never mutates its inputs and holds no state beyond them, so
/// separate engines can run concurrently without coordination. Every
/// operation recomputes from the inputs; [`ScoringEngine::snapshot_at`]
/// computes each intermediate once.
///
/// # Examples
/// ```
/// use compass_core::{Category, Intensity, Question, QuizOption, Response};
/// use compass_scorer::ScoringEngine;
///
/// # fn main() -> Result<(), compass_core::CategoryError> {
/// let questions = vec![Question::new(
///     "q1",
///     vec![
///         QuizOption::new("a", [Category::new(1)?]),
///         QuizOption::new("b", [Category::new(2)?]),
///     ],
/// )];
/// let responses = vec![Response::new("q1", "a", Intensity::MAX)];
///
/// let engine = ScoringEngine::new(&questions, &responses);
/// assert_eq!(engine.normalized_scores().get(Category::new(1)?), 100);
/// assert_eq!(engine.normalized_scores().get(Category::new(2)?), 0);
/// assert_eq!(engine.overall_interest(), 100);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ScoringEngine<'a> {
    questions: HashMap<&'a str, &'a Question>,
    question_count: usize,
    responses: &'a [Response],
    options: ScoringOptions,
}

/// Raw, exposure and normalised maps computed together.
struct Breakdown {
    raw: CategoryScores,
    exposure: CategoryScores,
    normalized: CategoryScores,
}

impl<'a> ScoringEngine<'a> {
    /// Build an engine with default [`ScoringOptions`].
    ///
    /// When the catalog repeats a question id the first question wins.
    #[must_use]
    pub fn new(questions: &'a [Question], responses: &'a [Response]) -> Self {
        let mut index = HashMap::with_capacity(questions.len());
        for question in questions {
            index.entry(question.id.as_str()).or_insert(question);
        }
        Self {
            questions: index,
            question_count: questions.len(),
            responses,
            options: ScoringOptions::default(),
        }
    }

    /// Replace the scoring options.
    ///
    /// # Errors
    /// Returns [`ScoringOptionsError`] when the options fail validation.
    pub fn with_options(mut self, options: ScoringOptions) -> Result<Self, ScoringOptionsError> {
        self.options = options.validate()?;
        Ok(self)
    }

    /// The options in effect.
    #[must_use]
    pub const fn options(&self) -> ScoringOptions {
        self.options
    }

    /// Resolve a response to its question and chosen option.
    #[must_use]
    pub fn resolve(&self, response: &Response) -> Option<(&'a Question, &'a QuizOption)> {
        let question = *self.questions.get(response.question_id.as_str())?;
        let option = question.option(&response.option_id)?;
        Some((question, option))
    }

    fn resolved(
        &self,
    ) -> impl Iterator<Item = (&'a Response, &'a Question, &'a QuizOption)> + '_ {
        self.responses.iter().filter_map(|response| {
            self.resolve(response)
                .map(|(question, option)| (response, question, option))
        })
    }

    fn log_unresolved(&self) {
        for (position, response) in self.responses.iter().enumerate() {
            if self.resolve(response).is_none() {
                log::debug!(
                    "response {position} (question '{}', option '{}') does not resolve; skipping",
                    response.question_id,
                    response.option_id
                );
            }
        }
    }

    /// Accumulated intensity per category.
    ///
    /// `raw[c]` sums the intensity of every resolved response whose chosen
    /// option is tagged with `c`. Duplicate responses to one question each
    /// contribute.
    #[must_use]
    pub fn raw_scores(&self) -> CategoryScores {
        let mut raw = CategoryScores::zeroed();
        for (response, _, option) in self.resolved() {
            for &category in &option.category_tags {
                raw.add(category, u32::from(response.intensity));
            }
        }
        raw
    }

    /// Maximum attainable raw score per category given the answered
    /// questions.
    ///
    /// Every distinct question with at least one resolved response adds
    /// [`Intensity::MAX`] to each category in the union of its options' tags.
    #[must_use]
    pub fn exposure_scores(&self) -> CategoryScores {
        let answered: BTreeSet<&str> = self
            .resolved()
            .map(|(_, question, _)| question.id.as_str())
            .collect();
        let mut exposure = CategoryScores::zeroed();
        for question in answered.iter().filter_map(|id| self.questions.get(id)) {
            for category in question.exposure_tags() {
                exposure.add(category, u32::from(Intensity::MAX));
            }
        }
        exposure
    }

    /// Raw scores as a round-half-up percentage of exposure.
    ///
    /// Categories with zero exposure report `0`.
    #[must_use]
    pub fn normalized_scores(&self) -> CategoryScores {
        normalize(&self.raw_scores(), &self.exposure_scores())
    }

    /// Average intensity as a round-half-up percentage of the slider maximum.
    ///
    /// Returns `0` when no responses are counted. Which responses count is
    /// set by [`ScoringOptions::unresolved`].
    #[must_use]
    pub fn overall_interest(&self) -> u8 {
        let (total, count) = match self.options.unresolved {
            UnresolvedPolicy::Count => sum_intensities(self.responses.iter()),
            UnresolvedPolicy::Exclude => {
                sum_intensities(self.resolved().map(|(response, _, _)| response))
            }
        };
        let ceiling = count.saturating_mul(u64::from(u8::from(Intensity::MAX)));
        rounded_percentage(total, ceiling)
    }

    /// Exposed categories ordered best first.
    ///
    /// Order: normalised score descending, then exposure descending, then
    /// category number ascending.
    #[must_use]
    pub fn rank_categories(&self) -> Vec<RankedCategory> {
        rank(&self.breakdown())
    }

    /// Up to [`RANK_WINDOW`] best-ranked categories, best first.
    #[must_use]
    pub fn top3(&self) -> Vec<Category> {
        head(&self.rank_categories())
    }

    /// Up to [`RANK_WINDOW`] worst-ranked categories.
    ///
    /// This is the tail of the same descending ranking; the last element is
    /// the lowest-ranked category.
    #[must_use]
    pub fn bottom3(&self) -> Vec<Category> {
        tail(&self.rank_categories())
    }

    /// Recommendations for `top`, truncated to the configured limit.
    #[must_use]
    pub fn recommendations<S>(&self, top: &[Category], source: &S) -> Vec<Recommendation>
    where
        S: RecommendationSource + ?Sized,
    {
        generate_recommendations(top, source, self.options.recommendation_limit)
    }

    /// Compute a snapshot stamped with the current time.
    #[must_use]
    pub fn snapshot(&self) -> ScoreSnapshot {
        self.snapshot_at(Utc::now())
    }

    /// Compute a snapshot stamped with `computed_at`.
    ///
    /// Identical inputs and timestamps give identical snapshots.
    #[must_use]
    pub fn snapshot_at(&self, computed_at: DateTime<Utc>) -> ScoreSnapshot {
        self.log_unresolved();
        let breakdown = self.breakdown();
        let ranking = rank(&breakdown);
        let top = head(&ranking);
        let bottom = tail(&ranking);
        let overall = self.overall_interest();

        log::debug!(
            "scored {} responses against {} questions: overall={overall}, top={top:?}, bottom={bottom:?}",
            self.responses.len(),
            self.question_count
        );
        for entry in &ranking {
            log::debug!(
                "category {}: raw={} exposure={} normalized={}",
                entry.category,
                breakdown.raw.get(entry.category),
                entry.exposure,
                entry.score
            );
        }

        ScoreSnapshot::new(
            overall,
            breakdown.raw,
            breakdown.normalized,
            top,
            bottom,
            computed_at,
        )
    }

    /// Score the responses and attach recommendations for the top
    /// categories.
    #[must_use]
    pub fn quiz_result<S>(&self, source: &S) -> QuizResult
    where
        S: RecommendationSource + ?Sized,
    {
        self.quiz_result_at(source, Utc::now())
    }

    /// Like [`ScoringEngine::quiz_result`] with an explicit timestamp.
    #[must_use]
    pub fn quiz_result_at<S>(&self, source: &S, computed_at: DateTime<Utc>) -> QuizResult
    where
        S: RecommendationSource + ?Sized,
    {
        let snapshot = self.snapshot_at(computed_at);
        let recommendations = self.recommendations(snapshot.top3(), source);
        QuizResult::new(snapshot, recommendations)
    }

    fn breakdown(&self) -> Breakdown {
        let raw = self.raw_scores();
        let exposure = self.exposure_scores();
        let normalized = normalize(&raw, &exposure);
        Breakdown {
            raw,
            exposure,
            normalized,
        }
    }
}

fn normalize(raw: &CategoryScores, exposure: &CategoryScores) -> CategoryScores {
    CategoryScores::from_fn(|category| {
        u32::from(rounded_percentage(
            u64::from(raw.get(category)),
            u64::from(exposure.get(category)),
        ))
    })
}

fn sum_intensities<'r>(responses: impl Iterator<Item = &'r Response>) -> (u64, u64) {
    responses.fold((0_u64, 0_u64), |(total, count), response| {
        (
            total.saturating_add(u64::from(u8::from(response.intensity))),
            count.saturating_add(1),
        )
    })
}

/// `floor(100 * numerator / denominator + 0.5)`, capped at 100; `0` when
/// the denominator is zero.
#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "exact round-half-up percentage: floor((200n + d) / 2d)"
)]
fn rounded_percentage(numerator: u64, denominator: u64) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let doubled = numerator.saturating_mul(200).saturating_add(denominator);
    let percentage = doubled / denominator.saturating_mul(2);
    u8::try_from(percentage.min(100)).unwrap_or(100)
}

fn rank(breakdown: &Breakdown) -> Vec<RankedCategory> {
    let mut ranking: Vec<RankedCategory> = Category::all()
        .filter_map(|category| {
            let exposure = breakdown.exposure.get(category);
            (exposure > 0).then(|| RankedCategory {
                category,
                score: breakdown.normalized.get(category),
                exposure,
            })
        })
        .collect();
    ranking.sort_by(compare_rank);
    ranking
}

fn compare_rank(a: &RankedCategory, b: &RankedCategory) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.exposure.cmp(&a.exposure))
        .then_with(|| a.category.cmp(&b.category))
}

fn head(ranking: &[RankedCategory]) -> Vec<Category> {
    ranking
        .iter()
        .take(RANK_WINDOW)
        .map(|entry| entry.category)
        .collect()
}

fn tail(ranking: &[RankedCategory]) -> Vec<Category> {
    ranking
        .iter()
        .skip(ranking.len().saturating_sub(RANK_WINDOW))
        .map(|entry| entry.category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0)]
    #[case(3, 3, 100)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(1, 2, 50)]
    #[case(1, 200, 1)]
    #[case(1, 201, 0)]
    #[case(0, 9, 0)]
    #[case(7, 6, 100)]
    fn rounds_half_up(#[case] numerator: u64, #[case] denominator: u64, #[case] expected: u8) {
        assert_eq!(rounded_percentage(numerator, denominator), expected);
    }
}

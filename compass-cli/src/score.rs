//! `score` command: score a quiz submission against a question set.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use compass_core::{Locale, QuestionSet, QuizResult, QuizSubmission};
use compass_scorer::{RecommendationCatalog, ScoringEngine, ScoringOptions, UnresolvedPolicy};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::{open_input, require_existing};
use crate::report::{OutputFormat, write_result};
use crate::{
    ARG_CATALOG, ARG_FORMAT, ARG_LOCALE, ARG_QUESTIONS, ARG_RECOMMENDATION_LIMIT, ARG_SUBMISSION,
    ARG_UNRESOLVED, CliError, ENV_SCORE_QUESTIONS, ENV_SCORE_SUBMISSION,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score a quiz submission against a question set and print \
                 per-category scores, the overall interest, the top and \
                 bottom categories and recommended actions. Options can come \
                 from CLI flags, configuration files, or environment \
                 variables.",
    about = "Score a quiz submission"
)]
#[ortho_config(prefix = "COMPASS")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file holding the quiz submission.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) submission: Option<Utf8PathBuf>,
    /// Path to the question set JSON file.
    #[arg(long = ARG_QUESTIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) questions: Option<Utf8PathBuf>,
    /// Replace the built-in recommendation catalog with a JSON file.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Whether unresolved answers count toward overall interest.
    #[arg(long = ARG_UNRESOLVED, value_name = "count|exclude")]
    #[serde(default)]
    pub(crate) unresolved: Option<UnresolvedPolicy>,
    /// Maximum number of recommendations to print.
    #[arg(long = ARG_RECOMMENDATION_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) recommendation_limit: Option<usize>,
    /// Output format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
    /// Language of the text summary.
    #[arg(long = ARG_LOCALE, value_name = "ja|en")]
    #[serde(default)]
    pub(crate) locale: Option<Locale>,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    /// Path to the submission JSON.
    pub(crate) submission: Utf8PathBuf,
    /// Path to the question set JSON.
    pub(crate) questions: Utf8PathBuf,
    /// Optional catalog override.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Validated scoring options.
    pub(crate) options: ScoringOptions,
    /// Output format.
    pub(crate) format: OutputFormat,
    /// Locale for text output.
    pub(crate) locale: Locale,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.submission, ARG_SUBMISSION)?;
        require_existing(&self.questions, ARG_QUESTIONS)?;
        if let Some(catalog) = &self.catalog {
            require_existing(catalog, ARG_CATALOG)?;
        }
        Ok(())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let submission = args.submission.ok_or(CliError::MissingArgument {
            field: ARG_SUBMISSION,
            env: ENV_SCORE_SUBMISSION,
        })?;
        let questions = args.questions.ok_or(CliError::MissingArgument {
            field: ARG_QUESTIONS,
            env: ENV_SCORE_QUESTIONS,
        })?;

        let defaults = ScoringOptions::default();
        let options = defaults
            .with_unresolved(args.unresolved.unwrap_or(defaults.unresolved))
            .with_recommendation_limit(
                args.recommendation_limit
                    .unwrap_or(defaults.recommendation_limit),
            )
            .validate()?;

        Ok(Self {
            submission,
            questions,
            catalog: args.catalog,
            options,
            format: args.format.unwrap_or_default(),
            locale: args.locale.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_score_with(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let result = execute_score(&config)?;
    write_result(writer, &result, config.format, config.locale)
}

/// Load every input named by `config` and score the submission.
pub(crate) fn execute_score(config: &ScoreConfig) -> Result<QuizResult, CliError> {
    let question_set = load_question_set(&config.questions)?;
    let submission = load_submission(&config.submission)?;
    let custom_catalog = config.catalog.as_deref().map(load_catalog).transpose()?;
    let catalog = custom_catalog
        .as_ref()
        .unwrap_or_else(|| RecommendationCatalog::builtin());

    log::debug!(
        "scoring {} responses against question set {} ({} questions)",
        submission.submissions.len(),
        question_set.version,
        question_set.questions.len()
    );

    let engine = ScoringEngine::new(&question_set.questions, &submission.submissions)
        .with_options(config.options)?;
    Ok(engine.quiz_result(catalog))
}

/// Load and validate a question set from disk.
pub(crate) fn load_question_set(path: &Utf8Path) -> Result<QuestionSet, CliError> {
    let reader = open_input(path, ARG_QUESTIONS)?;
    QuestionSet::from_reader(reader).map_err(|source| CliError::InvalidQuestionSet {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a JSON-encoded [`QuizSubmission`] from disk.
pub(crate) fn load_submission(path: &Utf8Path) -> Result<QuizSubmission, CliError> {
    let reader = open_input(path, ARG_SUBMISSION)?;
    serde_json::from_reader(reader).map_err(|source| CliError::ParseSubmission {
        path: path.to_path_buf(),
        source,
    })
}

fn load_catalog(path: &Utf8Path) -> Result<RecommendationCatalog, CliError> {
    let reader = open_input(path, ARG_CATALOG)?;
    let catalog =
        RecommendationCatalog::from_reader(reader).map_err(|source| CliError::InvalidCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    log::debug!("loaded {} catalog categories from {path}", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}

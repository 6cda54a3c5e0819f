//! Command-line interface for scoring Compass quizzes offline.
//!
//! `compass score` reads a question set and a submission, scores them with
//! [`compass_scorer::ScoringEngine`] and prints the result. `compass questions`
//! validates a question set and prints it back. Every option can also come
//! from a configuration file or `COMPASS_CMDS_<SUBCOMMAND>_<FIELD>`
//! environment variables.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};

mod error;
mod input;
mod questions;
mod report;
mod score;

pub use error::CliError;

use questions::{QuestionsArgs, run_questions_with};
use score::{ScoreArgs, run_score_with};

const ARG_SUBMISSION: &str = "submission";
const ARG_QUESTIONS: &str = "questions";
const ARG_CATALOG: &str = "catalog";
const ARG_UNRESOLVED: &str = "unresolved";
const ARG_RECOMMENDATION_LIMIT: &str = "recommendation-limit";
const ARG_FORMAT: &str = "format";
const ARG_LOCALE: &str = "locale";
const ENV_SCORE_SUBMISSION: &str = "COMPASS_CMDS_SCORE_SUBMISSION";
const ENV_SCORE_QUESTIONS: &str = "COMPASS_CMDS_SCORE_QUESTIONS";
const ENV_QUESTIONS_QUESTIONS: &str = "COMPASS_CMDS_QUESTIONS_QUESTIONS";

/// Run the Compass CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments, configuration or inputs are invalid,
/// or when output cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    dispatch(cli.command, &mut stdout)
}

fn dispatch(command: Command, writer: &mut dyn Write) -> Result<(), CliError> {
    match command {
        Command::Score(args) => run_score_with(args, writer),
        Command::Questions(args) => run_questions_with(args, writer),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "compass",
    about = "Score interest quizzes across seventeen categories",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a quiz submission against a question set.
    Score(ScoreArgs),
    /// Validate a question set and print it as JSON.
    Questions(QuestionsArgs),
}

#[cfg(test)]
mod tests;

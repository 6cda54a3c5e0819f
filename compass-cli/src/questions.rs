//! `questions` command: validate a question set and print it.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::input::require_existing;
use crate::report::write_json;
use crate::score::load_question_set;
use crate::{ARG_QUESTIONS, CliError, ENV_QUESTIONS_QUESTIONS};

/// CLI arguments for the `questions` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "questions",
    long_about = "Load a question set, check that question and option \
                 identifiers are unique and category tags are in range, \
                 then print it as JSON.",
    about = "Validate and print a question set"
)]
#[ortho_config(prefix = "COMPASS")]
pub(crate) struct QuestionsArgs {
    /// Path to the question set JSON file.
    #[arg(long = ARG_QUESTIONS, value_name = "path")]
    #[serde(default)]
    pub(crate) questions: Option<Utf8PathBuf>,
}

impl QuestionsArgs {
    fn into_path(self) -> Result<Utf8PathBuf, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        merged.questions.ok_or(CliError::MissingArgument {
            field: ARG_QUESTIONS,
            env: ENV_QUESTIONS_QUESTIONS,
        })
    }
}

pub(crate) fn run_questions_with(
    args: QuestionsArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let path = args.into_path()?;
    require_existing(&path, ARG_QUESTIONS)?;
    let question_set = load_question_set(&path)?;
    log::debug!(
        "question set {} holds {} questions",
        question_set.version,
        question_set.questions.len()
    );
    write_json(writer, &question_set)
}

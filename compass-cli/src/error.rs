//! Error types emitted by the Compass CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use compass_core::QuestionSetError;
use compass_scorer::{CatalogError, ScoringOptionsError};
use thiserror::Error;

/// Errors emitted by the Compass CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without leading dashes.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Option naming the path.
        field: &'static str,
        /// The missing path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Option naming the path.
        field: &'static str,
        /// The offending path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Option naming the path.
        field: &'static str,
        /// The path being inspected.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {field} file {path:?}: {source}")]
    OpenInput {
        /// Option naming the path.
        field: &'static str,
        /// The path being opened.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// The question set could not be parsed or failed validation.
    #[error("question set at {path:?} is invalid: {source}")]
    InvalidQuestionSet {
        /// Question set path.
        path: Utf8PathBuf,
        /// Parse or validation failure.
        #[source]
        source: QuestionSetError,
    },
    /// The submission JSON could not be decoded.
    #[error("failed to parse submission JSON at {path:?}: {source}")]
    ParseSubmission {
        /// Submission path.
        path: Utf8PathBuf,
        /// Decoder failure.
        #[source]
        source: serde_json::Error,
    },
    /// The recommendation catalog could not be loaded.
    #[error("recommendation catalog at {path:?} is invalid: {source}")]
    InvalidCatalog {
        /// Catalog path.
        path: Utf8PathBuf,
        /// Parse or validation failure.
        #[source]
        source: CatalogError,
    },
    /// The merged scoring options were rejected.
    #[error("invalid scoring options: {0}")]
    InvalidOptions(#[from] ScoringOptionsError),
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    Serialise(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}

//! Error types emitted by the carer ranking CLI.
//!
//! Keep this error type reasonably small, as CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use carer_data::DataError;
use thiserror::Error;

/// Errors emitted by the carer ranking CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Reading or parsing the carer file failed.
    #[error("failed to read carers from {path:?}: {source}")]
    ReadCarers {
        path: Utf8PathBuf,
        #[source]
        source: DataError,
    },
    /// Writing the ranked export failed.
    #[error("failed to write ranking to {path:?}: {source}")]
    WriteRanking {
        path: Utf8PathBuf,
        #[source]
        source: DataError,
    },
}

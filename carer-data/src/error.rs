//! Error types raised while reading carers or writing rankings.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while reading carer files or writing ranking exports.
#[derive(Debug, Error)]
pub enum DataError {
    /// Opening the carer file failed.
    #[error("failed to open carer file at {path}")]
    Open {
        /// Requested input path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// A row of the carer file could not be decoded.
    #[error("failed to parse carer data")]
    Parse {
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// Creating the ranking file failed.
    #[error("failed to create ranking file at {path}")]
    Create {
        /// Target output path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// Encoding a ranking row failed.
    #[error("failed to write ranking row")]
    Write {
        /// Source error from `csv`.
        #[source]
        source: csv::Error,
    },
    /// Flushing buffered ranking rows failed.
    #[error("failed to flush ranking output")]
    Flush {
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
}

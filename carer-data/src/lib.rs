//! Delimited-file ingestion and export for carer rankings.
//!
//! Input files are comma-separated with a header row; every header becomes a
//! column of the resulting [`CarerRecord`]s. Exports always use the fixed
//! column order of [`Field::EXPORT_ORDER`] followed by the `score` column.
//!
//! # Examples
//!
//! ```
//! use carer_core::{CarerRecord, ScoredCarer};
//! use carer_data::{read_carers, write_ranking};
//!
//! let input = "id,avg_review\n7,4.5\n";
//! let carers = read_carers(input.as_bytes()).expect("parse carers");
//! assert_eq!(carers[0].id(), Some("7"));
//!
//! let ranked = vec![ScoredCarer { record: carers[0].clone(), score: 4.2 }];
//! let mut output = Vec::new();
//! write_ranking(&mut output, &ranked).expect("write ranking");
//! assert!(String::from_utf8(output).expect("utf-8").ends_with("7,,,,4.5,,,,,,,4.2\r\n"));
//! ```

#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::io::{Read, Write};

use camino::Utf8Path;
use carer_core::{CarerRecord, Field, SCORE_COLUMN, ScoredCarer};
use carer_fs::{create_utf8_file, open_utf8_file};
use log::debug;

mod error;

pub use error::DataError;

/// Parse carers from a comma-separated stream with a header row.
///
/// Blank lines are skipped. A file holding only the header yields no carers.
///
/// # Errors
/// Returns [`DataError::Parse`] when the stream is not valid UTF-8 or a row's
/// column count differs from the header's.
pub fn read_carers<R: Read>(reader: R) -> Result<Vec<CarerRecord>, DataError> {
    let mut rows = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    rows.deserialize::<BTreeMap<String, String>>()
        .map(|row| {
            row.map(CarerRecord::from)
                .map_err(|source| DataError::Parse { source })
        })
        .collect()
}

/// Read carers from a file on disk.
///
/// # Errors
/// Returns [`DataError::Open`] when the file cannot be opened and propagates
/// parse failures from [`read_carers`].
pub fn read_carers_file(path: &Utf8Path) -> Result<Vec<CarerRecord>, DataError> {
    let file = open_utf8_file(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let carers = read_carers(file)?;
    debug!("read {} carers from {path}", carers.len());
    Ok(carers)
}

/// Write a ranking as comma-separated rows in the fixed export order.
///
/// Known columns absent from a record are written empty and unknown columns
/// are dropped. Rows end with CRLF and fields are quoted only when needed.
///
/// # Errors
/// Returns [`DataError::Write`] or [`DataError::Flush`] when the writer fails.
pub fn write_ranking<W: Write>(writer: W, carers: &[ScoredCarer]) -> Result<(), DataError> {
    let mut rows = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);
    rows.write_record(export_header())
        .map_err(|source| DataError::Write { source })?;
    for carer in carers {
        let score = carer.score.to_string();
        let cells = Field::EXPORT_ORDER
            .iter()
            .map(|field| carer.record.field(*field).unwrap_or_default())
            .chain(std::iter::once(score.as_str()));
        rows.write_record(cells)
            .map_err(|source| DataError::Write { source })?;
    }
    rows.flush().map_err(|source| DataError::Flush { source })
}

/// Write a ranking to a file, creating parent directories as needed.
///
/// # Errors
/// Returns [`DataError::Create`] when the file cannot be created and
/// propagates failures from [`write_ranking`].
pub fn write_ranking_file(path: &Utf8Path, carers: &[ScoredCarer]) -> Result<(), DataError> {
    let file = create_utf8_file(path).map_err(|source| DataError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_ranking(file, carers)?;
    debug!("wrote {} ranked carers to {path}", carers.len());
    Ok(())
}

fn export_header() -> impl Iterator<Item = &'static str> {
    Field::EXPORT_ORDER
        .iter()
        .map(|field| field.as_str())
        .chain(std::iter::once(SCORE_COLUMN))
}

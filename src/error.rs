//! Errors raised while loading and reconciling station data.

use std::path::PathBuf;

use thiserror::Error;

use crate::reading::Station;

/// Why a station-year's rows could not be turned into a grid.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MalformedInput {
    #[error("row {row} ({}): rainfall field '{field}' is neither empty nor a non-negative number", .date.as_deref().unwrap_or("undated"))]
    UnparseableField {
        row: usize,
        date: Option<String>,
        field: String,
    },

    #[error("expected {expected} daily rows, found {found}")]
    RowCount { expected: usize, found: usize },
}

/// A merge was asked to reconcile a day-slot that does not exist in the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("merge called with a not-applicable day-slot")]
pub struct PrecondMergeError;

#[derive(Debug, Error)]
pub enum RainfallError {
    #[error("malformed input for {station} {year}: {kind}")]
    MalformedInput {
        station: Station,
        year: i32,
        #[source]
        kind: MalformedInput,
    },

    #[error("cannot reconcile {year}/{month} day {day}")]
    PrecondMerge {
        year: i32,
        month: usize,
        day: usize,
        #[source]
        source: PrecondMergeError,
    },

    #[error("station histories cover different years ({first:?} vs {second:?})")]
    MismatchedYears {
        first: Option<(i32, i32)>,
        second: Option<(i32, i32)>,
    },

    #[error("{station} history is not a consecutive run of years (found {found} after {previous})")]
    NonContiguousYears {
        station: Station,
        previous: i32,
        found: i32,
    },

    #[error("station file '{0}' not found")]
    MissingFile(PathBuf),

    #[error("I/O error reading '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error reading '{path}'")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

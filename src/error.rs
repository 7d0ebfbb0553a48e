use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Errors produced while reading profile data or matching a sequence.
///
/// A sequence that matches no profile is not an error; see
/// [`find_match`](crate::matcher::find_match).
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error - {0}")]
    Io(#[from] io::Error),

    #[error("csv error - {0}")]
    Csv(#[from] csv::Error),

    #[error("STR pattern must not be empty")]
    EmptyPattern,

    #[error("profile database has no header row")]
    MissingHeader,

    #[error("invalid STR name in header: {0:?}")]
    InvalidLocus(String),

    /// `record` is the 1-based data row, or `None` when the column itself is absent.
    #[error("{}", missing_field_message(.record, .field))]
    MissingField {
        record: Option<usize>,
        field: String,
    },

    #[error("record {record}: field {field:?} has non-numeric count {value:?} - {source}")]
    InvalidCount {
        record: usize,
        field: String,
        value: String,
        source: ParseIntError,
    },

    #[error("record {record}: found {found} fields but the header has {expected}")]
    TooManyFields {
        record: usize,
        expected: usize,
        found: usize,
    },
}

fn missing_field_message(record: &Option<usize>, field: &str) -> String {
    match *record {
        Some(record) => format!("record {}: missing field {:?}", record, field),
        None => format!("profile database has no field {:?}", field),
    }
}

/// A type alias for `Result<T, strprofile::Error>`.
pub type Result<T, E = Error> = std::result::Result<T, E>;

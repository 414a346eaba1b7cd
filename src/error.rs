use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected DD/MM/YYYY, YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Unknown acquirer \"{input}\" (expected one of: {known})")]
    UnknownAcquirer { input: String, known: String },

    #[error("Not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("{0}")]
    Period(#[from] PeriodError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure converting one raw field substring into a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum CodecError {
    #[error("not supported field type: {0}")]
    UnsupportedType(String),

    #[error("invalid datetime tag value \"{0}\" (should be for ex yyyymmdd)")]
    MissingPattern(String),

    #[error("parsing integer error: \"{raw}\" is not a valid i{bits}")]
    NumericFormat { raw: String, bits: u8 },

    #[error("parsing date error: \"{raw}\" does not match {token}")]
    DateFormat {
        raw: String,
        token: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("unexpected end of text for parsing this field")]
    UnexpectedEnd,
}

/// First field failure of a line decode, attributed to the field name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {source}")]
pub(crate) struct DecodeError {
    pub(crate) field: &'static str,
    #[source]
    pub(crate) source: CodecError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum PeriodError {
    #[error("period is empty")]
    EmptyPeriod,

    #[error("initial period after final period")]
    InvertedPeriod,
}

#[derive(Debug, Error)]
pub(crate) enum StoreError {
    #[error("{name} is a directory")]
    Directory { name: String },

    #[error("error scanning {name}")]
    Empty { name: String },

    #[error("{name} already exists")]
    Exists { name: String },

    #[error("first line of {name} exceeds {limit} bytes")]
    LineTooLong { name: String, limit: u64 },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid file pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

/// Why a single file of a batch was left out. Never aborts the batch.
#[derive(Debug, Error)]
pub(crate) enum SkipReason {
    #[error("error parsing")]
    Parse(#[from] DecodeError),

    #[error("invalid file")]
    Invalid,

    #[error("{0}")]
    Store(#[from] StoreError),
}

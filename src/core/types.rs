//! Result types produced by batch operations

use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use crate::header::Header;

use super::naming::target_name;

/// Outcome of renaming one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RenameOutcome {
    Renamed { from: String, to: String },
    Skipped { file: String, reason: String },
}

impl fmt::Display for RenameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenameOutcome::Renamed { from, to } => write!(f, "Yes: {from} - {to}"),
            RenameOutcome::Skipped { file, reason } => write!(f, "No: {file} - {reason}"),
        }
    }
}

/// Everything `inspect` reports about one file
#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct HeaderSummary {
    pub(crate) file: String,
    /// "valid", or the reason the file would be skipped
    pub(crate) status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) detail: Option<String>,
    pub(crate) acquirer: Option<String>,
    pub(crate) headquarter: Option<i64>,
    pub(crate) statement_id: Option<String>,
    pub(crate) period_init: Option<NaiveDate>,
    pub(crate) period_end: Option<NaiveDate>,
    pub(crate) processing_date: Option<NaiveDate>,
    pub(crate) reprocessed: Option<bool>,
    pub(crate) layout_version: Option<i8>,
    pub(crate) target_name: Option<String>,
}

pub(crate) const STATUS_VALID: &str = "valid";

impl HeaderSummary {
    pub(crate) fn failed(file: &str, status: String, detail: Option<String>) -> Self {
        HeaderSummary {
            file: file.to_string(),
            status,
            detail,
            ..HeaderSummary::default()
        }
    }

    pub(crate) fn decoded(file: &str, header: &dyn Header, status: String) -> Self {
        HeaderSummary {
            file: file.to_string(),
            status,
            detail: None,
            acquirer: Some(header.acquirer()),
            headquarter: Some(header.headquarter()),
            statement_id: Some(header.statement_id()),
            period_init: header.period_init(),
            period_end: header.period_end(),
            processing_date: header.processing_date(),
            reprocessed: Some(header.is_reprocessed()),
            layout_version: Some(header.layout_version()),
            target_name: Some(target_name(header)),
        }
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.status == STATUS_VALID
    }
}

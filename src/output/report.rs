//! Report sink
//!
//! Batch commands produce ordered report lines (rename outcomes, date
//! ranges). The sink decides how they reach the user.

use crate::error::AppError;

pub(crate) trait ReportSink {
    fn emit(&mut self, lines: &[String]) -> Result<(), AppError>;
}

/// Writes report lines to stdout, one per line or as a JSON array
pub(crate) struct StdoutSink {
    json: bool,
}

impl StdoutSink {
    pub(crate) fn new(json: bool) -> Self {
        StdoutSink { json }
    }
}

impl ReportSink for StdoutSink {
    fn emit(&mut self, lines: &[String]) -> Result<(), AppError> {
        print!("{}", render(lines, self.json)?);
        Ok(())
    }
}

pub(crate) fn render(lines: &[String], json: bool) -> Result<String, serde_json::Error> {
    if json {
        let mut s = serde_json::to_string_pretty(lines)?;
        s.push('\n');
        Ok(s)
    } else {
        Ok(lines.iter().map(|l| format!("{l}\n")).collect())
    }
}

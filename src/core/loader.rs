//! Directory batch pipeline
//!
//! file store -> first line -> variant decode -> validity, one file at a
//! time in name order. A file that fails any step is reported and skipped;
//! only a failure to list the directory aborts the batch.

use std::path::Path;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::error::{AppError, SkipReason, StoreError};
use crate::header::{BoxedHeader, Variant};
use crate::store::{FileRef, FileStore};

use super::coverage::{CoverageMap, DateRange, build_coverage_map, gap_grouped, period_grouped};
use super::naming::target_name;
use super::types::{HeaderSummary, RenameOutcome, STATUS_VALID};

pub(crate) struct HeaderLoader<'a> {
    store: &'a dyn FileStore,
    variant: &'a dyn Variant,
}

impl<'a> HeaderLoader<'a> {
    pub(crate) fn new(store: &'a dyn FileStore, variant: &'a dyn Variant) -> Self {
        HeaderLoader { store, variant }
    }

    /// Read, decode and validate one file
    pub(crate) fn load(&self, dir: &Path, file: &FileRef) -> Result<BoxedHeader, SkipReason> {
        let line = self.store.first_line(dir, file)?;
        let header = self.variant.decode(&line)?;
        if !header.is_valid() {
            return Err(SkipReason::Invalid);
        }
        Ok(header)
    }

    /// Every valid header of `dir`
    pub(crate) fn valid_headers(&self, dir: &Path) -> Result<Vec<BoxedHeader>, StoreError> {
        let files = self.store.list_files(dir)?;
        let mut headers = Vec::with_capacity(files.len());
        for file in &files {
            match self.load(dir, file) {
                Ok(header) => headers.push(header),
                Err(reason) => log_skip(file, &reason),
            }
        }
        debug!(
            variant = self.variant.name(),
            total = files.len(),
            valid = headers.len(),
            "loaded headers"
        );
        Ok(headers)
    }

    pub(crate) fn coverage(&self, dir: &Path) -> Result<CoverageMap, StoreError> {
        let headers = self.valid_headers(dir)?;
        Ok(build_coverage_map(&headers))
    }

    /// Processed periods of the files in `dir`
    pub(crate) fn period_grouped(&self, dir: &Path) -> Result<Vec<DateRange>, StoreError> {
        Ok(period_grouped(&self.coverage(dir)?))
    }

    /// Periods of `[init, end]` no file in `dir` covers
    pub(crate) fn gap_grouped(
        &self,
        dir: &Path,
        init: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DateRange>, AppError> {
        let coverage = self.coverage(dir)?;
        Ok(gap_grouped(&coverage, Some(init), Some(end))?)
    }

    /// Rename every valid file to its canonical name
    pub(crate) fn rename_all(&self, dir: &Path) -> Result<Vec<RenameOutcome>, StoreError> {
        info!("start renaming {}", dir.display());
        let files = self.store.list_files(dir)?;
        let mut outcomes = Vec::with_capacity(files.len());
        for file in &files {
            let outcome = match self.rename_one(dir, file) {
                Ok(to) => RenameOutcome::Renamed {
                    from: file.name.clone(),
                    to,
                },
                Err(reason) => {
                    log_skip(file, &reason);
                    RenameOutcome::Skipped {
                        file: file.name.clone(),
                        reason: reason.to_string(),
                    }
                }
            };
            outcomes.push(outcome);
        }
        info!("finish renaming {}", dir.display());
        Ok(outcomes)
    }

    fn rename_one(&self, dir: &Path, file: &FileRef) -> Result<String, SkipReason> {
        let header = self.load(dir, file)?;
        let to = target_name(header.as_ref());
        self.store.rename(dir, &file.name, &to)?;
        Ok(to)
    }

    /// Decoded view of every file, valid or not
    pub(crate) fn inspect(&self, dir: &Path) -> Result<Vec<HeaderSummary>, StoreError> {
        let files = self.store.list_files(dir)?;
        Ok(files.iter().map(|file| self.summarize(dir, file)).collect())
    }

    fn summarize(&self, dir: &Path, file: &FileRef) -> HeaderSummary {
        let line = match self.store.first_line(dir, file) {
            Ok(line) => line,
            Err(e) => return HeaderSummary::failed(&file.name, e.to_string(), None),
        };
        match self.variant.decode(&line) {
            Ok(header) => {
                let status = if header.is_valid() {
                    STATUS_VALID.to_string()
                } else {
                    SkipReason::Invalid.to_string()
                };
                HeaderSummary::decoded(&file.name, header.as_ref(), status)
            }
            Err(e) => {
                let detail = e.to_string();
                HeaderSummary::failed(&file.name, SkipReason::from(e).to_string(), Some(detail))
            }
        }
    }
}

fn log_skip(file: &FileRef, reason: &SkipReason) {
    match reason {
        SkipReason::Parse(e) => debug!(file = %file.name, "skipped: {e}"),
        _ => debug!(file = %file.name, "skipped: {reason}"),
    }
}

//! Calendar coverage of a batch of headers
//!
//! Counts how many files cover each day, then folds days into contiguous
//! ranges: the processed periods, or the gaps inside a requested window.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;

use crate::consts::RANGE_DATE_FORMAT;
use crate::error::PeriodError;
use crate::header::BoxedHeader;
use crate::utils::expand_days;

/// Files covering each day, ordered by day
pub(crate) type CoverageMap = BTreeMap<NaiveDate, usize>;

/// Inclusive run of consecutive days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateRange {
    pub(crate) start: NaiveDate,
    pub(crate) end: NaiveDate,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format(RANGE_DATE_FORMAT),
            self.end.format(RANGE_DATE_FORMAT)
        )
    }
}

/// Count covered days over every valid header.
///
/// Invalid headers and headers without a usable period are left out.
pub(crate) fn build_coverage_map(headers: &[BoxedHeader]) -> CoverageMap {
    let mut coverage = CoverageMap::new();
    for header in headers.iter().filter(|h| h.is_valid()) {
        match header.period_dates() {
            Ok(dates) => {
                for date in dates {
                    *coverage.entry(date).or_insert(0) += 1;
                }
            }
            Err(e) => tracing::debug!(headquarter = header.headquarter(), "skipping period: {e}"),
        }
    }
    coverage
}

/// Fold days into chronological ranges of consecutive days.
///
/// A day exactly one after the open range's end extends it; any larger jump
/// closes it. Duplicates are absorbed.
pub(crate) fn group_contiguous(dates: &[NaiveDate]) -> Vec<DateRange> {
    let mut sorted = dates.to_vec();
    sorted.sort_unstable();

    let mut ranges = Vec::new();
    let mut days = sorted.into_iter();
    let Some(first) = days.next() else {
        return ranges;
    };
    let mut open = DateRange {
        start: first,
        end: first,
    };
    for day in days {
        match open.end.succ_opt() {
            Some(next) if day > next => {
                ranges.push(open);
                open = DateRange {
                    start: day,
                    end: day,
                };
            }
            _ => open.end = open.end.max(day),
        }
    }
    ranges.push(open);
    ranges
}

/// Days of `[init, end]` no header covers, in order
pub(crate) fn compute_gaps(
    coverage: &CoverageMap,
    init: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Vec<NaiveDate>, PeriodError> {
    let days = expand_days(init, end)?;
    Ok(days
        .into_iter()
        .filter(|day| !coverage.contains_key(day))
        .collect())
}

/// Processed periods: every covered day grouped into ranges
pub(crate) fn period_grouped(coverage: &CoverageMap) -> Vec<DateRange> {
    let days: Vec<NaiveDate> = coverage.keys().copied().collect();
    group_contiguous(&days)
}

/// Missing periods inside `[init, end]`, grouped into ranges
pub(crate) fn gap_grouped(
    coverage: &CoverageMap,
    init: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Vec<DateRange>, PeriodError> {
    let gaps = compute_gaps(coverage, init, end)?;
    Ok(group_contiguous(&gaps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Header;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct Stub {
        dates: Result<Vec<NaiveDate>, PeriodError>,
        valid: bool,
    }

    impl Header for Stub {
        fn headquarter(&self) -> i64 {
            1
        }
        fn processing_date(&self) -> Option<NaiveDate> {
            None
        }
        fn period_init(&self) -> Option<NaiveDate> {
            None
        }
        fn period_end(&self) -> Option<NaiveDate> {
            None
        }
        fn statement_id(&self) -> String {
            String::new()
        }
        fn layout_version(&self) -> i8 {
            0
        }
        fn acquirer(&self) -> String {
            String::new()
        }
        fn is_reprocessed(&self) -> bool {
            false
        }
        fn period_dates(&self) -> Result<Vec<NaiveDate>, PeriodError> {
            self.dates.clone()
        }
        fn is_valid(&self) -> bool {
            self.valid
        }
    }

    fn stub(dates: Result<Vec<NaiveDate>, PeriodError>, valid: bool) -> BoxedHeader {
        Box::new(Stub { dates, valid })
    }

    fn range(start: NaiveDate, end: NaiveDate) -> DateRange {
        DateRange { start, end }
    }

    #[test]
    fn coverage_counts_valid_headers_only() {
        let headers = vec![
            stub(Ok(vec![ymd(2021, 3, 10), ymd(2021, 3, 11)]), true),
            stub(Ok(vec![ymd(2021, 3, 11)]), true),
            stub(Ok(vec![ymd(2021, 3, 12)]), false),
            stub(Err(PeriodError::InvertedPeriod), true),
        ];
        let coverage = build_coverage_map(&headers);
        assert_eq!(coverage.len(), 2);
        assert_eq!(coverage[&ymd(2021, 3, 10)], 1);
        assert_eq!(coverage[&ymd(2021, 3, 11)], 2);
    }

    #[test]
    fn group_contiguous_empty() {
        assert!(group_contiguous(&[]).is_empty());
    }

    #[test]
    fn group_contiguous_splits_on_jumps() {
        let dates = [
            ymd(2021, 3, 14),
            ymd(2021, 3, 10),
            ymd(2021, 3, 11),
            ymd(2021, 3, 13),
            ymd(2021, 3, 20),
        ];
        assert_eq!(
            group_contiguous(&dates),
            vec![
                range(ymd(2021, 3, 10), ymd(2021, 3, 11)),
                range(ymd(2021, 3, 13), ymd(2021, 3, 14)),
                range(ymd(2021, 3, 20), ymd(2021, 3, 20)),
            ]
        );
    }

    #[test]
    fn group_contiguous_absorbs_duplicates_and_month_ends() {
        let dates = [
            ymd(2021, 2, 28),
            ymd(2021, 2, 28),
            ymd(2021, 3, 1),
            ymd(2021, 3, 1),
        ];
        assert_eq!(
            group_contiguous(&dates),
            vec![range(ymd(2021, 2, 28), ymd(2021, 3, 1))]
        );
    }

    #[test]
    fn group_contiguous_is_idempotent() {
        let dates = [
            ymd(2020, 12, 30),
            ymd(2020, 12, 31),
            ymd(2021, 1, 1),
            ymd(2021, 1, 5),
        ];
        let ranges = group_contiguous(&dates);
        let expanded: Vec<NaiveDate> = ranges
            .iter()
            .flat_map(|r| expand_days(Some(r.start), Some(r.end)).unwrap())
            .collect();
        assert_eq!(group_contiguous(&expanded), ranges);
    }

    #[test]
    fn date_range_display() {
        let r = range(ymd(2021, 3, 1), ymd(2021, 3, 9));
        assert_eq!(r.to_string(), "01/03/2021 - 09/03/2021");
    }

    #[test]
    fn gaps_around_single_day() {
        let coverage = CoverageMap::from([(ymd(2021, 3, 10), 1)]);
        let gaps = gap_grouped(&coverage, Some(ymd(2021, 3, 1)), Some(ymd(2021, 3, 30))).unwrap();
        let text: Vec<String> = gaps.iter().map(ToString::to_string).collect();
        assert_eq!(
            text,
            vec!["01/03/2021 - 09/03/2021", "11/03/2021 - 30/03/2021"]
        );
        let periods: Vec<String> = period_grouped(&coverage)
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(periods, vec!["10/03/2021 - 10/03/2021"]);
    }

    #[test]
    fn gaps_and_coverage_partition_the_window() {
        let coverage = CoverageMap::from([
            (ymd(2021, 1, 2), 1),
            (ymd(2021, 1, 3), 3),
            (ymd(2021, 1, 7), 1),
            (ymd(2021, 2, 1), 1),
        ]);
        let init = ymd(2021, 1, 1);
        let end = ymd(2021, 1, 10);
        let gaps = compute_gaps(&coverage, Some(init), Some(end)).unwrap();
        let window = expand_days(Some(init), Some(end)).unwrap();

        for day in &window {
            assert_ne!(gaps.contains(day), coverage.contains_key(day), "{day}");
        }
        let covered = coverage.keys().filter(|d| **d >= init && **d <= end).count();
        assert_eq!(gaps.len() + covered, window.len());
    }

    #[test]
    fn gaps_without_coverage_is_whole_window() {
        let gaps = gap_grouped(
            &CoverageMap::new(),
            Some(ymd(2021, 1, 1)),
            Some(ymd(2021, 12, 31)),
        )
        .unwrap();
        assert_eq!(gaps, vec![range(ymd(2021, 1, 1), ymd(2021, 12, 31))]);
    }

    #[test]
    fn gaps_reject_bad_windows() {
        let coverage = CoverageMap::new();
        assert_eq!(
            compute_gaps(&coverage, None, Some(ymd(2021, 1, 1))),
            Err(PeriodError::EmptyPeriod)
        );
        assert_eq!(
            compute_gaps(&coverage, Some(ymd(2021, 1, 2)), Some(ymd(2021, 1, 1))),
            Err(PeriodError::InvertedPeriod)
        );
    }
}

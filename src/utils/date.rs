use chrono::NaiveDate;

use crate::consts::{NAME_DATE_FORMAT, NAME_EMPTY_DATE};
use crate::error::{AppError, PeriodError};

/// Parse a date given on the command line.
///
/// Accepts DD/MM/YYYY, YYYYMMDD and YYYY-MM-DD.
pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%d/%m/%Y") {
        return Ok(d);
    }
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Every calendar day of the inclusive range `[init, end]`.
pub(crate) fn expand_days(
    init: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Result<Vec<NaiveDate>, PeriodError> {
    let (Some(init), Some(end)) = (init, end) else {
        return Err(PeriodError::EmptyPeriod);
    };
    if init > end {
        return Err(PeriodError::InvertedPeriod);
    }
    Ok(init.iter_days().take_while(|day| *day <= end).collect())
}

/// Format a date for a canonical file name ("2021_03_10")
pub(crate) fn name_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(
        || NAME_EMPTY_DATE.to_string(),
        |d| d.format(NAME_DATE_FORMAT).to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_date_formats() {
        assert_eq!(parse_date("01/03/2021").unwrap(), ymd(2021, 3, 1));
        assert_eq!(parse_date("20210301").unwrap(), ymd(2021, 3, 1));
        assert_eq!(parse_date("2021-03-01").unwrap(), ymd(2021, 3, 1));
        assert_eq!(parse_date(" 30/03/2021 ").unwrap(), ymd(2021, 3, 30));
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("31/02/2021").is_err());
        assert!(parse_date("tomorrow").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn expand_days_is_inclusive() {
        let days = expand_days(Some(ymd(2021, 2, 26)), Some(ymd(2021, 3, 2))).unwrap();
        assert_eq!(
            days,
            vec![
                ymd(2021, 2, 26),
                ymd(2021, 2, 27),
                ymd(2021, 2, 28),
                ymd(2021, 3, 1),
                ymd(2021, 3, 2),
            ]
        );
    }

    #[test]
    fn expand_days_length_matches_span() {
        let init = ymd(2020, 1, 1);
        let end = ymd(2020, 12, 31);
        let days = expand_days(Some(init), Some(end)).unwrap();
        assert_eq!(days.len() as i64, (end - init).num_days() + 1);
        assert_eq!(expand_days(Some(init), Some(init)).unwrap(), vec![init]);
    }

    #[test]
    fn expand_days_errors() {
        let d = ymd(2021, 3, 10);
        assert_eq!(expand_days(None, Some(d)), Err(PeriodError::EmptyPeriod));
        assert_eq!(expand_days(Some(d), None), Err(PeriodError::EmptyPeriod));
        assert_eq!(
            expand_days(Some(d), Some(ymd(2021, 3, 9))),
            Err(PeriodError::InvertedPeriod)
        );
    }

    #[test]
    fn name_date_format() {
        assert_eq!(name_date(Some(ymd(2021, 3, 10))), "2021_03_10");
        assert_eq!(name_date(None), "0000_00_00");
    }
}

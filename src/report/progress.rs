use chrono::{Datelike, NaiveDate};

use crate::utils::percentage::Percentage;

/// How far a calendar year has gone at a specific date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearProgress {
    /// Days elapsed since Jan 1. Jan 1 itself counts as 0.
    pub pass_day: u32,
    /// 365 or 366.
    pub total_day: u32,
    pub current_year: i32,
}

impl YearProgress {
    pub fn percent(&self) -> Percentage {
        Percentage::from_ratio(self.pass_day as f64, self.total_day as f64)
    }

    /// Percentage with exactly 2 decimals, e.g. `99.73`.
    pub fn percent_text(&self) -> String {
        format!("{:.2}", *self.percent().rounded(2))
    }
}

/// Number of days in a month, `month` being 1 based.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map_or(31, |last| last.day())
}

/// Walks every month of the date's year, summing the whole year and the part of it that already
/// passed.
pub fn year_progress(date: impl Datelike) -> YearProgress {
    let current_year = date.year();
    let current_month = date.month();

    let mut total_day = 0;
    let mut pass_day = 0;

    for month in 1..=12 {
        let length = days_in_month(current_year, month);
        total_day += length;
        if month < current_month {
            pass_day += length;
        } else if month == current_month {
            pass_day += date.day();
        }
    }

    // Day of month is at least 1, so this never underflows.
    pass_day -= 1;

    YearProgress {
        pass_day,
        total_day,
        current_year,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeZone, Utc};

    use super::{days_in_month, year_progress};

    #[test]
    fn test_last_day_of_regular_year() {
        let progress = year_progress(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        assert_eq!(progress.total_day, 365);
        assert_eq!(progress.pass_day, 364);
        assert_eq!(progress.percent_text(), "99.73");
        assert_eq!(progress.current_year, 2023);
    }

    #[test]
    fn test_leap_day() {
        let progress = year_progress(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(progress.total_day, 366);
        assert_eq!(progress.pass_day, 59);
    }

    #[test]
    fn test_first_day_is_zero() {
        let progress = year_progress(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(progress.pass_day, 0);
        assert_eq!(progress.percent_text(), "0.00");
    }

    #[test]
    fn test_accepts_date_times() {
        let moment = Utc.with_ymd_and_hms(2021, 7, 4, 23, 59, 0).unwrap();
        let progress = year_progress(moment);
        assert_eq!(progress.pass_day, 184);
        assert_eq!(progress.percent_text(), "50.41");
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }
}

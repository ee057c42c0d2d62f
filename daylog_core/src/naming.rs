//! File-naming policy: which file a given day writes to, and what a stale
//! weekend file is archived as.
//!
//! Everything here is a pure function of calendar dates.

use chrono::{Datelike, NaiveDate, Weekday};

/// Shared log file for Saturday and Sunday.
pub const WEEKEND_FILE_NAME: &str = "weekend.txt";

/// A weekend file whose last write is more than this many days old is archived.
pub const STALE_AFTER_DAYS: i64 = 2;

const DATE_STAMP: &str = "%Y%m%d";

#[inline]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// `log` + YYYYMMDD + `.txt`, e.g. `log20210607.txt`.
pub fn weekday_file_name(date: NaiveDate) -> String {
    format!("log{}.txt", date.format(DATE_STAMP))
}

/// `weekend-` + YYYYMMDD of the last write + `.txt`, e.g. `weekend-20210605.txt`.
pub fn archive_file_name(last_write: NaiveDate) -> String {
    format!("weekend-{}.txt", last_write.format(DATE_STAMP))
}

/// The single file a log call made on `today` writes to.
pub fn target_file_name(today: NaiveDate) -> String {
    if is_weekend(today) {
        WEEKEND_FILE_NAME.to_string()
    } else {
        weekday_file_name(today)
    }
}

/// Whole calendar days from `earlier` to `later`; negative when `later` comes first.
#[inline]
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

/// Strictly more than `STALE_AFTER_DAYS` since the last write.
#[inline]
pub fn is_stale(today: NaiveDate, last_write: NaiveDate) -> bool {
    days_between(last_write, today) > STALE_AFTER_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[rstest]
    #[case(d(2021, 6, 5), true)] // Saturday
    #[case(d(2021, 6, 6), true)] // Sunday
    #[case(d(2021, 6, 7), false)] // Monday
    #[case(d(2021, 6, 11), false)] // Friday
    fn classifies_weekend_by_day_of_week(#[case] date: NaiveDate, #[case] weekend: bool) {
        assert_eq!(is_weekend(date), weekend);
    }

    #[test]
    fn weekday_name_is_zero_padded() {
        assert_eq!(weekday_file_name(d(2021, 6, 7)), "log20210607.txt");
        assert_eq!(weekday_file_name(d(2021, 1, 1)), "log20210101.txt");
        assert_eq!(weekday_file_name(d(987, 3, 4)), "log09870304.txt");
    }

    #[test]
    fn archive_name_uses_given_date() {
        assert_eq!(archive_file_name(d(2021, 6, 5)), "weekend-20210605.txt");
    }

    #[test]
    fn target_switches_on_weekend() {
        assert_eq!(target_file_name(d(2021, 6, 7)), "log20210607.txt");
        assert_eq!(target_file_name(d(2021, 6, 5)), WEEKEND_FILE_NAME);
        assert_eq!(target_file_name(d(2021, 6, 6)), WEEKEND_FILE_NAME);
    }

    #[test]
    fn days_between_is_signed() {
        assert_eq!(days_between(d(2021, 6, 5), d(2021, 6, 12)), 7);
        assert_eq!(days_between(d(2021, 6, 12), d(2021, 6, 5)), -7);
        assert_eq!(days_between(d(2020, 2, 28), d(2020, 3, 1)), 2); // leap day
    }

    #[rstest]
    #[case(d(2021, 6, 5), false)] // same day
    #[case(d(2021, 6, 6), false)] // 1 day
    #[case(d(2021, 6, 7), false)] // 2 days: not stale
    #[case(d(2021, 6, 8), true)] // 3 days
    #[case(d(2021, 6, 12), true)] // 7 days
    #[case(d(2021, 6, 1), false)] // last write in the future
    fn stale_threshold_is_strictly_more_than_two_days(
        #[case] today: NaiveDate,
        #[case] stale: bool,
    ) {
        assert_eq!(is_stale(today, d(2021, 6, 5)), stale);
    }
}

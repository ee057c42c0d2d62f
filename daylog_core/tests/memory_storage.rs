//! Multi-day runs against the in-memory backend, where files really appear,
//! grow and get archived.

use chrono::NaiveDate;
use daylog_core::FileLogger;
use daylog_core::mocks::FixedClock;
use daylog_storage::{DiskError, MemoryStorage};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

/// Log `message` as if it were `date`, keeping the backend's write stamps in step.
fn log_on(mut storage: MemoryStorage, date: NaiveDate, message: &str) -> MemoryStorage {
    storage.set_today(date);
    let mut logger = FileLogger::new(storage, FixedClock::new(date));
    logger.log(message).unwrap();
    logger.into_parts().0
}

#[test]
fn two_weekends_and_a_week_in_between() {
    let mut st = MemoryStorage::new(d(2021, 6, 5));

    st = log_on(st, d(2021, 6, 5), "sat 1"); // Saturday
    st = log_on(st, d(2021, 6, 6), "sun 1"); // Sunday, 1 day later: same file
    st = log_on(st, d(2021, 6, 7), "mon");
    st = log_on(st, d(2021, 6, 7), "mon again");
    st = log_on(st, d(2021, 6, 8), "tue"); // weekday never archives
    st = log_on(st, d(2021, 6, 12), "sat 2"); // 6 days since last write: archive

    assert_eq!(st.contents("weekend-20210606.txt"), Some("sat 1\nsun 1\n"));
    assert_eq!(st.contents("weekend.txt"), Some("sat 2\n"));
    assert_eq!(st.contents("log20210607.txt"), Some("mon\nmon again\n"));
    assert_eq!(st.contents("log20210608.txt"), Some("tue\n"));
    assert_eq!(
        st.names().collect::<Vec<_>>(),
        vec![
            "log20210607.txt",
            "log20210608.txt",
            "weekend-20210606.txt",
            "weekend.txt",
        ]
    );
}

#[test]
fn stale_weekend_file_survives_weekdays_until_next_weekend() {
    let mut st =
        MemoryStorage::new(d(2021, 6, 8)).with_file("weekend.txt", "old\n", d(2021, 6, 5));

    st = log_on(st, d(2021, 6, 8), "tuesday");
    assert_eq!(st.contents("weekend.txt"), Some("old\n"));

    st = log_on(st, d(2021, 6, 12), "saturday");
    assert_eq!(st.contents("weekend-20210605.txt"), Some("old\n"));
    assert_eq!(st.contents("weekend.txt"), Some("saturday\n"));
}

#[test]
fn archive_name_collision_keeps_both_weekends() {
    // Write stamps stay on 2021-06-05 while the pinned clock moves on, so
    // both stale weekend files map to the same archive name.
    let stamp = d(2021, 6, 5);
    let st = MemoryStorage::new(stamp).with_file("weekend.txt", "first\n", stamp);

    let mut logger = FileLogger::new(st, FixedClock::new(d(2021, 6, 12)));
    logger.log("second").unwrap();
    let st = logger.into_parts().0;
    assert_eq!(st.contents("weekend-20210605.txt"), Some("first\n"));
    assert_eq!(st.contents("weekend.txt"), Some("second\n"));

    let mut logger = FileLogger::new(st, FixedClock::new(d(2021, 6, 19)));
    let err = logger.log("third").unwrap_err();
    assert!(matches!(
        err.downcast_ref::<DiskError>(),
        Some(DiskError::AlreadyExists(n)) if n == "weekend-20210605.txt"
    ));

    let st = logger.into_parts().0;
    assert_eq!(st.contents("weekend-20210605.txt"), Some("first\n"));
    assert_eq!(st.contents("weekend.txt"), Some("second\nthird\n"));
}

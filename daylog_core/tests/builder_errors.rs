use chrono::NaiveDate;
use daylog_core::error::BuildError;
use daylog_core::mocks::FixedClock;
use daylog_core::{DynFileLogger, Logger};
use daylog_storage::MemoryStorage;
use daylog_traits::{Clock, Storage};
use rstest::rstest;

#[rstest]
fn builder_missing_storage_yields_typed_build_error() {
    let err = DynFileLogger::builder()
        // missing with_storage()
        .with_clock(FixedClock::new(NaiveDate::from_ymd_opt(2021, 6, 7).unwrap()))
        .try_build()
        .err()
        .expect("should fail with MissingStorage");

    match err.downcast_ref::<BuildError>() {
        Some(BuildError::MissingStorage) => {}
        other => panic!("expected MissingStorage, got: {other:?}"),
    }
}

#[rstest]
fn boxed_logger_writes_through_backend() {
    let today = NaiveDate::from_ymd_opt(2021, 6, 7).unwrap();
    let mut logger = DynFileLogger::builder()
        .with_storage(MemoryStorage::new(today))
        .with_clock(FixedClock::new(today))
        .try_build()
        .expect("build logger");

    assert_eq!(logger.target_file_name(), "log20210607.txt");
    Logger::log(&mut logger, "through the trait").expect("log ok");
    assert!(logger.storage_mut().exists("log20210607.txt").unwrap());
}

#[rstest]
fn clock_defaults_to_system_clock() {
    let logger = DynFileLogger::builder()
        .with_storage(MemoryStorage::new(NaiveDate::from_ymd_opt(2021, 6, 7).unwrap()))
        .try_build()
        .expect("build logger");
    let before = chrono::Local::now().date_naive();
    let got = logger.clock().today();
    let after = chrono::Local::now().date_naive();
    assert!(got == before || got == after);
}

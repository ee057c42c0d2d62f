use daylog_config::{load_file, load_toml};
use rstest::rstest;
use std::fs;
use tempfile::tempdir;

#[test]
fn accepts_full_config() {
    let toml = r#"
[logging]
level = "debug"
json = true
file = "daylog-diag.log"
rotation = "daily"

[clock]
date = "2021-06-07"
"#;

    let cfg = load_toml(toml).expect("parse TOML");
    cfg.validate().expect("valid config should pass");
    assert_eq!(cfg.logging.level.as_deref(), Some("debug"));
    assert!(cfg.logging.json);
    assert_eq!(
        cfg.fixed_date().unwrap(),
        chrono::NaiveDate::from_ymd_opt(2021, 6, 7)
    );
}

#[rstest]
#[case("[logging]\nlevel = \"loud\"\n", "logging.level: log level must be one of")]
#[case("[logging]\nfile = \"d.log\"\nrotation = \"weekly\"\n", "logging.rotation must be one of")]
#[case("[logging]\nrotation = \"daily\"\n", "requires logging.file")]
#[case("[logging]\nfile = \"  \"\n", "logging.file must not be empty")]
#[case("[clock]\ndate = \"2021-13-01\"\n", "clock.date")]
fn rejects_invalid_values(#[case] toml: &str, #[case] needle: &str) {
    let cfg = load_toml(toml).expect("parse TOML");
    let err = cfg.validate().expect_err("should be rejected");
    assert!(format!("{err}").contains(needle), "got: {err}");
}

#[test]
fn level_is_case_insensitive() {
    let cfg = load_toml("[logging]\nlevel = \"WARN\"\n").unwrap();
    cfg.validate().expect("upper-case level accepted");
}

#[test]
fn unknown_sections_fail_to_parse() {
    // Log paths are fixed; a [paths] table is a mistake worth surfacing.
    assert!(load_toml("[paths]\nroot = \"/var/log\"\n").is_err());
}

#[test]
fn load_file_reports_path_on_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = load_file(&missing).unwrap_err();
    assert!(format!("{err}").contains("nope.toml"));

    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "[logging\n").unwrap();
    let err = load_file(&bad).unwrap_err();
    assert!(format!("{err}").contains("parse config"));
}

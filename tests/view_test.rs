mod common;

use predicates::prelude::*;

use common::{auditlog, setup_query_logs, write_config, write_log};

/// Run `view` and parse the JSON array it prints.
fn view_lines(dir: &assert_fs::TempDir, args: &[&str]) -> Vec<String> {
    let output = auditlog()
        .current_dir(dir.path())
        .args(["--as", "admin", "view"])
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "view failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn view_returns_latest_hundred_lines_newest_file_first() {
    let dir = assert_fs::TempDir::new().unwrap();
    write_config(&dir, None, &[]);
    setup_query_logs(&dir);

    let lines = view_lines(&dir, &["query"]);

    assert_eq!(lines.len(), 100);
    assert!(lines[0].starts_with("INFO#alice#2024-01-03.log line 0"));
    assert!(lines[59].starts_with("INFO#alice#2024-01-03.log line 59"));
    assert!(lines[60].starts_with("WARN#bob#2024-01-02.log line 0"));
    assert!(lines[99].starts_with("WARN#bob#2024-01-02.log line 39"));
    assert!(lines.iter().all(|l| !l.contains("2024-01-01")));
    assert!(lines.iter().all(|l| l.ends_with('\n')));
}

#[test]
fn view_filters_by_user_and_level() {
    let dir = assert_fs::TempDir::new().unwrap();
    write_config(&dir, None, &[]);
    setup_query_logs(&dir);

    let lines = view_lines(&dir, &["query", "--user", "bob", "--level", "WARN"]);
    assert_eq!(lines.len(), 60);
    assert!(lines.iter().all(|l| l.starts_with("WARN#bob#")));
}

#[test]
fn view_filters_by_time_range() {
    let dir = assert_fs::TempDir::new().unwrap();
    write_config(&dir, None, &[]);
    setup_query_logs(&dir);

    let lines = view_lines(
        &dir,
        &[
            "query",
            "--begin-time",
            "2024-01-02",
            "--end-time",
            "2024-01-02",
        ],
    );
    assert_eq!(lines.len(), 60);
    assert!(lines.iter().all(|l| l.contains("2024-01-02")));
}

#[test]
fn view_treats_empty_flags_as_unset() {
    let dir = assert_fs::TempDir::new().unwrap();
    write_config(&dir, None, &[]);
    write_log(&dir, "query", "INFO#alice#2024-01-01.log", 3, 1_000);

    let lines = view_lines(&dir, &["query", "--user", "", "--level", "", "--compact"]);
    assert_eq!(lines.len(), 3);
}

#[test]
fn view_hourly_begin_excludes_daily_file_of_same_day() {
    let dir = assert_fs::TempDir::new().unwrap();
    write_config(&dir, Some("yyyy-MM-dd.HH"), &[]);
    write_log(&dir, "query", "INFO#alice#2024-01-02.log", 2, 1_000);
    write_log(&dir, "query", "INFO#alice#2024-01-02.06.log", 2, 2_000);

    let lines = view_lines(&dir, &["query", "--begin-time", "2024-01-02.05"]);
    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.contains("2024-01-02.06")));
}

#[test]
fn view_no_match_is_not_found() {
    let dir = assert_fs::TempDir::new().unwrap();
    write_config(&dir, None, &[]);
    setup_query_logs(&dir);

    auditlog()
        .current_dir(dir.path())
        .args(["--as", "admin", "view", "query", "--user", "carol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No audit log files found"));
}

#[test]
fn view_missing_category_is_not_found() {
    let dir = assert_fs::TempDir::new().unwrap();
    write_config(&dir, None, &[]);

    auditlog()
        .current_dir(dir.path())
        .args(["--as", "admin", "view", "access"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("category 'access'"));
}

#[test]
fn view_denied_for_non_admin() {
    let dir = assert_fs::TempDir::new().unwrap();
    write_config(&dir, None, &["admin"]);
    setup_query_logs(&dir);

    auditlog()
        .current_dir(dir.path())
        .env("AUDITLOG_USER", "alice")
        .args(["view", "query"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Access denied for user 'alice'"));
}

#[test]
fn view_allowed_for_listed_admin() {
    let dir = assert_fs::TempDir::new().unwrap();
    write_config(&dir, None, &["admin"]);
    setup_query_logs(&dir);

    let lines = view_lines(&dir, &["query", "--user", "alice"]);
    assert_eq!(lines.len(), 100);
}

#[test]
fn view_rejects_path_traversal_category() {
    let dir = assert_fs::TempDir::new().unwrap();
    write_config(&dir, None, &[]);

    auditlog()
        .current_dir(dir.path())
        .args(["--as", "admin", "view", ".."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log category"));
}

#[test]
fn view_rejects_malformed_time_bound() {
    let dir = assert_fs::TempDir::new().unwrap();
    write_config(&dir, None, &[]);
    setup_query_logs(&dir);

    auditlog()
        .current_dir(dir.path())
        .args(["--as", "admin", "view", "query", "--begin-time", "2024-1-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid begin time"));
}

#[test]
fn view_without_config_fails() {
    let dir = assert_fs::TempDir::new().unwrap();

    auditlog()
        .current_dir(dir.path())
        .args(["--config", "missing.toml", "view", "query"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use filetime::{FileTime, set_file_mtime};

/// Run auditlog with given args.
pub fn auditlog() -> Command {
    let mut cmd = cargo_bin_cmd!("auditlog");
    cmd.env_remove("AUDITLOG_USER").env_remove("RUST_LOG");
    cmd
}

/// Write `auditlog.toml` pointing at `<dir>/logs`.
pub fn write_config(dir: &assert_fs::TempDir, pattern: Option<&str>, admins: &[&str]) {
    let mut config = String::from("[event_listener]\nlog_output = \"logs\"\n");
    if let Some(p) = pattern {
        config.push_str(&format!("log_conversion_pattern = \"{p}\"\n"));
    }
    if !admins.is_empty() {
        let list = admins
            .iter()
            .map(|a| format!("\"{a}\""))
            .collect::<Vec<_>>()
            .join(", ");
        config.push_str(&format!("\n[access]\nadmins = [{list}]\n"));
    }
    dir.child("auditlog.toml").write_str(&config).unwrap();
}

/// Write a log file of `lines` numbered lines with a fixed mtime.
#[allow(dead_code)]
pub fn write_log(
    dir: &assert_fs::TempDir,
    category: &str,
    name: &str,
    lines: usize,
    secs: i64,
) -> PathBuf {
    let child = dir.child(format!("logs/{category}/{name}"));
    let content: String = (0..lines).map(|i| format!("{name} line {i}\n")).collect();
    child.write_str(&content).unwrap();
    set_file_mtime(child.path(), FileTime::from_unix_time(secs, 0)).unwrap();
    child.path().to_path_buf()
}

/// Three query logs, one per day, oldest first by mtime.
#[allow(dead_code)]
pub fn setup_query_logs(dir: &assert_fs::TempDir) {
    write_log(dir, "query", "INFO#alice#2024-01-01.log", 60, 1_000);
    write_log(dir, "query", "WARN#bob#2024-01-02.log", 60, 2_000);
    write_log(dir, "query", "INFO#alice#2024-01-03.log", 60, 3_000);
}

/// The single archive auditlog wrote into `dir`, if any.
#[allow(dead_code)]
pub fn find_archive(dir: &Path) -> Option<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .find(|p| p.extension().is_some_and(|ext| ext == "zip"))
}

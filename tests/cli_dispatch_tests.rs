use std::path::PathBuf;
use std::process::Command;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_salary-insights")
}

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/salaries.csv")
}

#[test]
fn summary_command_dispatches_and_emits_json() {
    let output = Command::new(bin())
        .arg("summary")
        .arg("--data")
        .arg(fixture_path())
        .args(["--year", "2023", "--level", "SE", "--level", "EN", "--no-svg"])
        .args(["--country", "United States", "--country", "Germany"])
        .output()
        .expect("summary should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("summary should emit json");
    assert_eq!(payload["highest_paid"]["job_title"], "Data Scientist");
    assert_eq!(payload["aggregates"]["top_jobs"].as_array().map(Vec::len), Some(2));
    assert!(payload["trend_chart"].get("svg").is_none());
}

#[test]
fn summary_reads_dataset_path_from_environment() {
    let output = Command::new(bin())
        .args(["summary", "--no-svg"])
        .env("SALARY_INSIGHTS_DATA", fixture_path())
        .output()
        .expect("summary should run");

    assert_eq!(output.status.code(), Some(0));
    let payload: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("summary should emit json");
    assert_eq!(payload["selection"]["year"], 2021);
}

#[test]
fn summary_fails_loudly_on_missing_dataset() {
    let output = Command::new(bin())
        .args(["summary", "--data", "no/such/file.csv"])
        .output()
        .expect("summary should run");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no/such/file.csv"));
}

#[test]
fn validate_command_reports_dataset_contents() {
    let output = Command::new(bin())
        .arg("validate")
        .arg(fixture_path())
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("validation passed"));
    assert!(stdout.contains("records: 16"));
    assert!(stdout.contains("years: 2021, 2022, 2023"));
    assert!(stdout.contains("unresolved country codes: XK"));
}

#[test]
fn validate_command_rejects_malformed_dataset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.csv");
    std::fs::write(&path, "work_year,job_title\n2023,Data Scientist\n").expect("write csv");

    let output = Command::new(bin())
        .arg("validate")
        .arg(&path)
        .output()
        .expect("validate should run");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing required column"));
}

#[test]
fn unknown_command_is_a_usage_error() {
    let output = Command::new(bin())
        .arg("simulate")
        .output()
        .expect("binary should run");
    assert_eq!(output.status.code(), Some(2));
}

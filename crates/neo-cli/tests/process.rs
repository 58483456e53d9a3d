//! Integration tests for the `process` command.

use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;

use neo_cli::cli::ProcessArgs;
use neo_cli::commands::run_process;

fn write_input(dir: &std::path::Path, values: &[&str]) -> std::path::PathBuf {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (row, value) in values.iter().enumerate() {
        worksheet.write_string(row as u32, 0, *value).unwrap();
    }
    let path = dir.join("input.xlsx");
    workbook.save(&path).unwrap();
    path
}

fn base_args(input: std::path::PathBuf) -> ProcessArgs {
    ProcessArgs {
        input,
        output_dir: None,
        as_of: NaiveDate::from_ymd_opt(2025, 1, 13),
        dry_run: false,
        summary_json: None,
    }
}

#[test]
fn process_writes_reports_and_counts() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), &["uNID", "00123456", "bogus", "00999999"]);

    let summary = run_process(&base_args(input)).unwrap();

    assert_eq!(summary.accepted_count, 2);
    assert_eq!(summary.rejected_count, 1);
    assert!(dir.path().join("NEO011325.xlsx").exists());
    assert!(dir.path().join("NEO011325_errors.xlsx").exists());
}

#[test]
fn summary_json_is_written_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), &["00123456", "012345"]);
    let summary_path = dir.path().join("summary.json");
    let mut args = base_args(input);
    args.summary_json = Some(summary_path.clone());

    run_process(&args).unwrap();

    let raw = std::fs::read_to_string(&summary_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed["accepted_count"], 1);
    assert_eq!(parsed["rejected_count"], 1);
    assert_eq!(parsed["rejections"][0]["raw"], "012345");
}

#[test]
fn process_fails_on_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let args = base_args(dir.path().join("missing.xlsx"));

    assert!(run_process(&args).is_err());
}

use crate::analyser::logic::{
    Cleaner, ColumnKind, ReadOptions, clean_data, clean_file, default_output_path, summarize_file,
};
use crate::error::CleanError;
use anyhow::Result;
use std::path::{Path, PathBuf};

const PAIRED_CSV: &str = "a,b\n1,2\n1,2\n3,\n3,\n";

#[test]
fn test_clean_data_writes_output() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("paired.csv");
    let output = dir.path().join("paired_out.csv");
    std::fs::write(&input, PAIRED_CSV)?;

    let cleaned = clean_data(&input, Some(&output), true, true)?;

    assert_eq!(cleaned.height(), 1);
    let written = std::fs::read_to_string(&output)?;
    assert_eq!(written.lines().collect::<Vec<_>>(), ["a,b", "1,2"]);
    assert_eq!(std::fs::read_to_string(&input)?, PAIRED_CSV);
    Ok(())
}

#[test]
fn test_clean_data_without_output_only_returns() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("paired.csv");
    std::fs::write(&input, PAIRED_CSV)?;

    let cleaned = clean_data(&input, None, true, false)?;

    assert_eq!(cleaned.height(), 2);
    assert_eq!(std::fs::read_dir(dir.path())?.count(), 1);
    Ok(())
}

#[test]
fn test_clean_data_missing_input() {
    let result = clean_data(Path::new("no/such/file.csv"), None, true, true);
    assert!(matches!(result, Err(CleanError::InvalidPath(_))));
}

#[test]
fn test_clean_file_uses_read_options() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("codes.csv");
    let output = dir.path().join("codes_out.csv");
    std::fs::write(&input, "code|label\n007|a\n007|a\n010|-\n")?;

    let options = ReadOptions::default()
        .with_separator(b'|')
        .with_null_values(["-"])
        .with_column_kind("code", ColumnKind::Text);
    let cleaned = clean_file(&input, Some(&output), &Cleaner::default(), &options)?;

    assert_eq!(cleaned.height(), 1);
    let written = std::fs::read_to_string(&output)?;
    assert_eq!(written.lines().collect::<Vec<_>>(), ["code|label", "007|a"]);
    Ok(())
}

#[test]
fn test_summarize_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("paired.csv");
    std::fs::write(&input, PAIRED_CSV)?;

    let summary = summarize_file(&input, &ReadOptions::default())?;

    assert_eq!(summary.total_rows, 4);
    assert_eq!(summary.duplicate_rows, 2);
    assert_eq!(summary.rows_with_nulls, 2);
    Ok(())
}

#[test]
fn test_default_output_path() {
    assert_eq!(
        default_output_path(Path::new("data/sales.csv")),
        PathBuf::from("data/sales_cleaned.csv")
    );
    assert_eq!(
        default_output_path(Path::new("export")),
        PathBuf::from("export_cleaned")
    );
}

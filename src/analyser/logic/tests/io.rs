use super::column_names;
use crate::analyser::logic::{ColumnKind, ReadOptions, load_df, save_df};
use crate::error::CleanError;
use anyhow::Result;
use polars::prelude::*;
use std::path::Path;

fn write_csv(dir: &Path, name: &str, contents: &str) -> Result<std::path::PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn test_missing_tokens_read_as_null() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_csv(
        dir.path(),
        "tokens.csv",
        "name,score\nAlice,1.5\n,2.0\nNA,NaN\nBob,\n",
    )?;

    let df = load_df(&path, &ReadOptions::default())?;

    assert_eq!(df.height(), 4);
    assert_eq!(df.column("name")?.null_count(), 2);
    assert_eq!(df.column("score")?.null_count(), 2);
    assert!(df.column("score")?.dtype().is_float());
    Ok(())
}

#[test]
fn test_custom_null_tokens() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_csv(dir.path(), "dash.csv", "a,b\n-,x\n1,NA\n")?;

    let options = ReadOptions::default().with_null_values(["-"]);
    let df = load_df(&path, &options)?;

    assert_eq!(df.column("a")?.null_count(), 1);
    assert_eq!(df.column("b")?.null_count(), 0, "NA is data once tokens are replaced");
    Ok(())
}

#[test]
fn test_pinned_kind_overrides_inference() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_csv(dir.path(), "zips.csv", "zip,count\n00123,4\n04567,5\n")?;

    let inferred = load_df(&path, &ReadOptions::default())?;
    assert!(inferred.column("zip")?.dtype().is_integer());

    let options = ReadOptions::default().with_column_kind("zip", ColumnKind::Text);
    let pinned = load_df(&path, &options)?;

    let zips = pinned.column("zip")?.as_materialized_series().clone();
    assert_eq!(zips.dtype(), &DataType::String);
    assert_eq!(zips.str()?.get(0), Some("00123"));
    assert!(pinned.column("count")?.dtype().is_integer());
    Ok(())
}

#[test]
fn test_separator_option() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_csv(dir.path(), "semi.csv", "a;b\n1;2\n3;4\n")?;

    let df = load_df(&path, &ReadOptions::default().with_separator(b';'))?;

    assert_eq!(column_names(&df), ["a", "b"]);
    assert_eq!(df.height(), 2);
    Ok(())
}

#[test]
fn test_missing_file_is_invalid_path() {
    let result = load_df(
        Path::new("definitely/not/here.csv"),
        &ReadOptions::default(),
    );
    assert!(matches!(result, Err(CleanError::InvalidPath(_))));
}

#[test]
fn test_ragged_rows_are_rejected() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = write_csv(dir.path(), "ragged.csv", "a,b\n1,2\n3,4,5\n")?;

    let result = load_df(&path, &ReadOptions::default());

    assert!(matches!(result, Err(CleanError::DataProcessing(_))));
    Ok(())
}

#[test]
fn test_save_writes_header_without_index() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("out.csv");
    let mut df = df!(
        "name" => &[Some("Alice"), None],
        "age" => &[Some(25), Some(30)]
    )?;

    save_df(&mut df, &path, b',')?;

    let written = std::fs::read_to_string(&path)?;
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines, ["name,age", "Alice,25", ",30"]);
    Ok(())
}

#[test]
fn test_save_into_missing_directory_fails() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut df = df!("a" => &[1])?;

    let result = save_df(&mut df, &dir.path().join("nope").join("out.csv"), b',');

    assert!(matches!(result, Err(CleanError::Io(_))));
    Ok(())
}

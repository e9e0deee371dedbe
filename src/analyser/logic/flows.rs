use super::cleaning::Cleaner;
use super::io::{ReadOptions, load_df, save_df};
use super::types::CleaningSummary;
use crate::error::{Result, ResultExt as _};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// Loads a CSV file, cleans it and optionally writes the result.
///
/// The cleaned table is returned whether or not it was also saved.
///
/// # Errors
///
/// Fails if the input file is missing or unparseable, or if the output file
/// cannot be written.
pub fn clean_data(
    filepath: &Path,
    output_filepath: Option<&Path>,
    remove_duplicates: bool,
    remove_nulls: bool,
) -> Result<DataFrame> {
    clean_file(
        filepath,
        output_filepath,
        &Cleaner::new(remove_duplicates, remove_nulls),
        &ReadOptions::default(),
    )
}

/// [`clean_data`] with an explicit cleaner and read options.
///
/// # Errors
///
/// Fails if the input file is missing or unparseable, or if the output file
/// cannot be written.
pub fn clean_file(
    filepath: &Path,
    output_filepath: Option<&Path>,
    cleaner: &Cleaner,
    options: &ReadOptions,
) -> Result<DataFrame> {
    let df = load_df(filepath, options).context("Failed to load data")?;
    let mut cleaned = cleaner.clean(&df).context("Cleaning failed")?;

    if let Some(output) = output_filepath {
        save_df(&mut cleaned, output, options.separator)?;
        tracing::info!(path = %output.display(), "Cleaned data saved");
    }

    Ok(cleaned)
}

/// Loads a CSV file and reports duplicates and missing values in it.
///
/// # Errors
///
/// Fails if the input file is missing or unparseable.
pub fn summarize_file(filepath: &Path, options: &ReadOptions) -> Result<CleaningSummary> {
    let df = load_df(filepath, options).context("Failed to load data")?;
    super::summary::summarize(&df)
}

/// `data.csv` becomes `data_cleaned.csv` in the same directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_owned());
    let file_name = match input.extension() {
        Some(ext) => format!("{stem}_cleaned.{}", ext.to_string_lossy()),
        None => format!("{stem}_cleaned"),
    };
    input.with_file_name(file_name)
}

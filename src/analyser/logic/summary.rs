use super::cleaning::{drop_duplicate_rows, drop_null_rows};
use super::types::CleaningSummary;
use crate::error::Result;
use polars::prelude::*;

/// Builds the cleaning report for `df`.
///
/// Duplicate and null counts are computed independently against the
/// unmodified table.
///
/// # Errors
///
/// Propagates any error Polars reports while counting rows.
pub fn summarize(df: &DataFrame) -> Result<CleaningSummary> {
    let total_rows = df.height();
    let duplicate_rows = total_rows - drop_duplicate_rows(df)?.height();
    let rows_with_nulls = total_rows - drop_null_rows(df)?.height();

    let null_counts_per_column = df
        .get_columns()
        .iter()
        .map(|c| (c.name().to_string(), c.null_count()))
        .collect();

    Ok(CleaningSummary {
        total_rows,
        duplicate_rows,
        rows_with_nulls,
        null_counts_per_column,
    })
}

use super::summary::summarize;
use super::types::{CleanStats, CleaningSummary};
use crate::error::Result;
use polars::prelude::*;

/// Removes duplicate rows and rows with missing values from a [`DataFrame`].
///
/// Both switches are fixed at construction. When both are on, duplicates
/// are dropped first and the null filter runs on the deduplicated rows.
///
/// ```
/// use autoclean::analyser::logic::Cleaner;
/// use polars::prelude::*;
///
/// let df = df!(
///     "a" => &[Some(1), Some(1), Some(3), Some(3)],
///     "b" => &[Some(2), Some(2), None, None]
/// )?;
///
/// let cleaned = Cleaner::default().clean(&df)?;
/// assert_eq!(cleaned.height(), 1);
/// assert_eq!(df.height(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cleaner {
    remove_duplicates: bool,
    remove_nulls: bool,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl Cleaner {
    pub const fn new(remove_duplicates: bool, remove_nulls: bool) -> Self {
        Self {
            remove_duplicates,
            remove_nulls,
        }
    }

    pub const fn remove_duplicates(&self) -> bool {
        self.remove_duplicates
    }

    pub const fn remove_nulls(&self) -> bool {
        self.remove_nulls
    }

    /// Returns a cleaned copy of `df`, leaving the input untouched.
    ///
    /// # Errors
    ///
    /// Propagates any error Polars reports while filtering the table.
    pub fn clean(&self, df: &DataFrame) -> Result<DataFrame> {
        self.clean_with_stats(df).map(|(cleaned, _)| cleaned)
    }

    /// Like [`Cleaner::clean`], also returning how many rows each step dropped.
    ///
    /// # Errors
    ///
    /// Propagates any error Polars reports while filtering the table.
    pub fn clean_with_stats(&self, df: &DataFrame) -> Result<(DataFrame, CleanStats)> {
        let mut cleaned = df.clone();
        let stats = self.clean_in_place(&mut cleaned)?;
        Ok((cleaned, stats))
    }

    /// Cleans the caller's table through its handle.
    ///
    /// `df` is only replaced once every enabled step has succeeded; on error
    /// it still holds the original rows.
    ///
    /// # Errors
    ///
    /// Propagates any error Polars reports while filtering the table.
    pub fn clean_in_place(&self, df: &mut DataFrame) -> Result<CleanStats> {
        let original_rows = df.height();

        let deduped = if self.remove_duplicates {
            let deduped = drop_duplicate_rows(df)?;
            tracing::debug!(
                removed = original_rows - deduped.height(),
                "Removed duplicate rows"
            );
            deduped
        } else {
            df.clone()
        };
        let duplicates_removed = original_rows - deduped.height();

        let before_nulls = deduped.height();
        let cleaned = if self.remove_nulls {
            let filtered = drop_null_rows(&deduped)?;
            tracing::debug!(
                removed = before_nulls - filtered.height(),
                "Removed rows with null values"
            );
            filtered
        } else {
            deduped
        };

        let stats = CleanStats {
            original_rows,
            duplicates_removed,
            nulls_removed: before_nulls - cleaned.height(),
            final_rows: cleaned.height(),
        };
        *df = cleaned;

        tracing::info!(
            original_rows = stats.original_rows,
            duplicates_removed = stats.duplicates_removed,
            nulls_removed = stats.nulls_removed,
            final_rows = stats.final_rows,
            "Cleaning complete"
        );

        Ok(stats)
    }

    /// Reports what cleaning would find in `df` without modifying it.
    ///
    /// The report does not depend on this cleaner's switches.
    ///
    /// # Errors
    ///
    /// Propagates any error Polars reports while counting rows.
    pub fn get_summary(&self, df: &DataFrame) -> Result<CleaningSummary> {
        summarize(df)
    }
}

/// Keeps the first occurrence of every distinct row, in original order.
///
/// Missing cells compare equal to each other.
pub(crate) fn drop_duplicate_rows(df: &DataFrame) -> Result<DataFrame> {
    if df.width() == 0 || df.height() < 2 {
        return Ok(df.clone());
    }

    let deduped = df
        .clone()
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()?;
    Ok(deduped)
}

/// Drops every row that has a missing value in any column.
pub(crate) fn drop_null_rows(df: &DataFrame) -> Result<DataFrame> {
    if df.width() == 0 || !has_nulls(df) {
        return Ok(df.clone());
    }

    let filtered = df.clone().lazy().drop_nulls(None).collect()?;
    Ok(filtered)
}

fn has_nulls(df: &DataFrame) -> bool {
    df.get_columns().iter().any(|c| c.null_count() > 0)
}

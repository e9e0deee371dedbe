use super::types::ColumnKind;
use crate::error::{CleanError, Result, ResultExt as _};
use polars::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Cell contents read as missing unless configured otherwise.
pub const DEFAULT_NULL_VALUES: &[&str] = &["", "NA", "N/A", "NaN", "nan", "null", "NULL"];

/// Rows sampled to infer the type of columns without an explicit kind.
pub const DEFAULT_INFER_SCHEMA_LENGTH: usize = 10_000;

/// How a delimited file is turned into a table.
///
/// Column types are taken from `schema` where present; the rest are
/// inferred from the first `infer_schema_length` rows (`None` scans the
/// whole file, `Some(0)` reads everything as text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    pub has_header: bool,
    pub separator: u8,
    pub null_values: Vec<String>,
    pub infer_schema_length: Option<usize>,
    pub schema: BTreeMap<String, ColumnKind>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            separator: b',',
            null_values: DEFAULT_NULL_VALUES.iter().map(|v| (*v).to_owned()).collect(),
            infer_schema_length: Some(DEFAULT_INFER_SCHEMA_LENGTH),
            schema: BTreeMap::new(),
        }
    }
}

impl ReadOptions {
    #[must_use]
    pub fn with_column_kind(mut self, name: impl Into<String>, kind: ColumnKind) -> Self {
        self.schema.insert(name.into(), kind);
        self
    }

    #[must_use]
    pub fn with_null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = values.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }

    #[must_use]
    pub fn with_infer_schema_length(mut self, rows: Option<usize>) -> Self {
        self.infer_schema_length = rows;
        self
    }

    fn schema_overwrite(&self) -> Option<SchemaRef> {
        if self.schema.is_empty() {
            return None;
        }
        let schema: Schema = self
            .schema
            .iter()
            .map(|(name, kind)| (PlSmallStr::from_str(name), kind.dtype()))
            .collect();
        Some(Arc::new(schema))
    }

    fn polars_null_values(&self) -> Option<NullValues> {
        if self.null_values.is_empty() {
            return None;
        }
        Some(NullValues::AllColumns(
            self.null_values
                .iter()
                .map(|v| PlSmallStr::from_str(v))
                .collect(),
        ))
    }
}

/// Reads a delimited file into a table.
///
/// # Errors
///
/// Returns [`CleanError::InvalidPath`] if `path` is not an existing file and
/// [`CleanError::DataProcessing`] if the contents cannot be parsed (ragged
/// rows, values that do not fit a pinned column kind).
pub fn load_df(path: &Path, options: &ReadOptions) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(CleanError::InvalidPath(format!(
            "{} does not exist or is not a file",
            path.display()
        )));
    }

    let null_values = options.polars_null_values();
    let separator = options.separator;

    let df = CsvReadOptions::default()
        .with_has_header(options.has_header)
        .with_infer_schema_length(options.infer_schema_length)
        .with_schema_overwrite(options.schema_overwrite())
        .map_parse_options(|parse| {
            parse
                .with_separator(separator)
                .with_null_values(null_values.clone())
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to open CSV {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to read CSV {}", path.display()))?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "Loaded table"
    );

    Ok(df)
}

/// Writes a table as delimited text with a header row and no index column.
///
/// # Errors
///
/// Returns [`CleanError::Io`] if the file cannot be created and
/// [`CleanError::DataProcessing`] if serialization fails.
pub fn save_df(df: &mut DataFrame, path: &Path, separator: u8) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create CSV file {}", path.display()))?;

    CsvWriter::new(file)
        .include_header(true)
        .with_separator(separator)
        .finish(df)
        .with_context(|| format!("Failed to write CSV file {}", path.display()))?;

    tracing::debug!(path = %path.display(), rows = df.height(), "Saved table");

    Ok(())
}

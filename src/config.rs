//! Cleaning settings file
//!
//! Settings are read from a JSON file; any field left out takes its default.
//!
//! ```json
//! {
//!   "remove_duplicates": true,
//!   "remove_nulls": false,
//!   "null_values": ["", "NA"],
//!   "schema": { "id": "integer", "name": "text" }
//! }
//! ```

use crate::analyser::logic::{
    Cleaner, ColumnKind, DEFAULT_INFER_SCHEMA_LENGTH, DEFAULT_NULL_VALUES, ReadOptions,
};
use crate::error::{CleanError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Cleaning settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanSettings {
    /// Drop rows that repeat an earlier row
    pub remove_duplicates: bool,
    /// Drop rows with any missing value
    pub remove_nulls: bool,
    /// Cell contents read as missing
    pub null_values: Vec<String>,
    /// Rows used to infer column types; `null` scans the whole file
    pub infer_schema_length: Option<usize>,
    /// Field separator, a single ASCII character
    pub delimiter: char,
    /// Column types that bypass inference
    pub schema: BTreeMap<String, ColumnKind>,
}

impl Default for CleanSettings {
    fn default() -> Self {
        Self {
            remove_duplicates: true,
            remove_nulls: true,
            null_values: DEFAULT_NULL_VALUES.iter().map(|v| (*v).to_owned()).collect(),
            infer_schema_length: Some(DEFAULT_INFER_SCHEMA_LENGTH),
            delimiter: ',',
            schema: BTreeMap::new(),
        }
    }
}

impl CleanSettings {
    /// Load settings from a JSON file
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read, is not valid JSON, or names a
    /// delimiter that is not a single ASCII character.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        let settings: Self =
            serde_json::from_str(&contents).context("Failed to parse settings JSON")?;
        settings.separator()?;

        tracing::debug!(path = %path.display(), "Loaded cleaning settings");
        Ok(settings)
    }

    /// Save settings to a JSON file
    ///
    /// # Errors
    ///
    /// Fails if the settings cannot be serialized or written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;

        std::fs::write(path, json)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;

        Ok(())
    }

    pub fn cleaner(&self) -> Cleaner {
        Cleaner::new(self.remove_duplicates, self.remove_nulls)
    }

    /// # Errors
    ///
    /// Fails if the delimiter is not a single ASCII character.
    pub fn read_options(&self) -> Result<ReadOptions> {
        Ok(ReadOptions {
            has_header: true,
            separator: self.separator()?,
            null_values: self.null_values.clone(),
            infer_schema_length: self.infer_schema_length,
            schema: self.schema.clone(),
        })
    }

    fn separator(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| {
                CleanError::Config(format!(
                    "Delimiter {:?} is not a single ASCII character",
                    self.delimiter
                ))
            })
    }
}

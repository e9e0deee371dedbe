use polars::prelude::DataType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column type that can be pinned when reading a file instead of inferring it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
    Boolean,
}

impl ColumnKind {
    pub fn dtype(self) -> DataType {
        match self {
            Self::Integer => DataType::Int64,
            Self::Float => DataType::Float64,
            Self::Text => DataType::String,
            Self::Boolean => DataType::Boolean,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "text",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Row counts recorded while a [`Cleaner`](super::Cleaner) runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    pub original_rows: usize,
    pub duplicates_removed: usize,
    pub nulls_removed: usize,
    pub final_rows: usize,
}

impl CleanStats {
    pub fn rows_removed(&self) -> usize {
        self.original_rows - self.final_rows
    }
}

/// Read-only report of what cleaning would remove from a table.
///
/// The duplicate and null counts are both taken against the same,
/// unmodified table, so a row can be counted in each.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleaningSummary {
    /// Number of rows in the table
    pub total_rows: usize,
    /// Rows that repeat an earlier row exactly
    pub duplicate_rows: usize,
    /// Rows holding at least one missing value
    pub rows_with_nulls: usize,
    /// Missing values per column, in table column order
    #[serde(with = "ordered_counts")]
    pub null_counts_per_column: Vec<(String, usize)>,
}

impl CleaningSummary {
    pub fn null_count(&self, column: &str) -> Option<usize> {
        self.null_counts_per_column
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, nulls)| *nulls)
    }

    pub fn total_nulls(&self) -> usize {
        self.null_counts_per_column.iter().map(|(_, nulls)| nulls).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.duplicate_rows == 0 && self.rows_with_nulls == 0
    }
}

/// Column counts as a JSON object whose keys keep table order.
mod ordered_counts {
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap as _;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(counts: &[(String, usize)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(counts.len()))?;
        for (name, count) in counts {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, usize)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = Vec<(String, usize)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of column names to counts")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut counts = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry()? {
                    counts.push(entry);
                }
                Ok(counts)
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

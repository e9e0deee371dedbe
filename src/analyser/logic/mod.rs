pub mod cleaning;
pub mod flows;
pub mod io;
pub mod summary;
pub mod types;

pub use cleaning::Cleaner;
pub use flows::{clean_data, clean_file, default_output_path, summarize_file};
pub use io::{DEFAULT_INFER_SCHEMA_LENGTH, DEFAULT_NULL_VALUES, ReadOptions, load_df, save_df};
pub use summary::summarize;
pub use types::{CleanStats, CleaningSummary, ColumnKind};

//! # autoclean - duplicate and missing-value cleaning for tabular data
//!
//! autoclean removes duplicate rows and rows containing missing values from
//! a Polars [`DataFrame`](polars::prelude::DataFrame), and reports how many
//! of each a table holds before anything is changed.
//!
//! ## Quick Start
//!
//! ```no_run
//! use autoclean::analyser::logic::{Cleaner, ReadOptions, load_df};
//! use std::path::Path;
//!
//! # fn example() -> autoclean::error::Result<()> {
//! let df = load_df(Path::new("data.csv"), &ReadOptions::default())?;
//!
//! let cleaner = Cleaner::default();
//! let summary = cleaner.get_summary(&df)?;
//! println!("{} duplicate rows, {} rows with nulls", summary.duplicate_rows, summary.rows_with_nulls);
//!
//! let cleaned = cleaner.clean(&df)?;
//! println!("{} rows left", cleaned.height());
//! # Ok(())
//! # }
//! ```
//!
//! Or in one call, straight from a file:
//!
//! ```no_run
//! use autoclean::analyser::logic::clean_data;
//! use std::path::Path;
//!
//! let cleaned = clean_data(
//!     Path::new("data.csv"),
//!     Some(Path::new("data_cleaned.csv")),
//!     true,
//!     true,
//! )?;
//! # Ok::<(), autoclean::error::CleanError>(())
//! ```
//!
//! ## Core Modules
//!
//! - [`analyser`]: the cleaner, the summary report and CSV I/O
//!   - [`analyser::logic`]: cleaning, summary, I/O and file-level flows
//! - [`config`]: JSON settings file
//! - [`error`]: Error types and handling utilities
//! - [`logging`]: `tracing` subscriber setup for the binary
//! - [`utils`]: Formatting helpers
//!
//! ## Cleaning Order
//!
//! When both switches are on, duplicates are removed first and the null
//! filter runs on what remains. The summary report, in contrast, counts
//! duplicates and rows with nulls independently on the untouched table.
//!
//! ## Copy or Mutate
//!
//! [`Cleaner::clean`](analyser::logic::Cleaner::clean) borrows the input and
//! returns a new table. [`Cleaner::clean_in_place`](analyser::logic::Cleaner::clean_in_place)
//! takes `&mut DataFrame` and replaces its contents.

#![warn(clippy::all, rust_2018_idioms)]

pub mod analyser;
pub mod config;
pub mod error;
pub mod logging;
pub mod utils;

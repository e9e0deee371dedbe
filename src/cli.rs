use anyhow::{Context as _, Result};
use autoclean::analyser::logic::{
    CleaningSummary, default_output_path, load_df, save_df, summarize_file,
};
use autoclean::config::CleanSettings;
use autoclean::utils::fmt_pct;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "autoclean",
    about = "Remove duplicate rows and rows with missing values from CSV files"
)]
pub struct Cli {
    /// Also write logs to files in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    /// Write log files to the platform data directory
    #[arg(long, global = true, conflicts_with = "log_dir")]
    pub log_to_file: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a CSV file and save the result
    Clean {
        /// Path to the CSV file to clean
        #[arg(short, long)]
        file: PathBuf,

        /// Output file path. Defaults to `<name>_cleaned.csv` next to the input.
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        switches: Switches,

        /// Path to a JSON settings file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Report duplicates and missing values without changing anything
    Summary {
        /// Path to the CSV file to inspect
        #[arg(short, long)]
        file: PathBuf,

        /// Path to a JSON settings file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Flags that override the settings file.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct Switches {
    /// Keep duplicate rows
    #[arg(long)]
    pub keep_duplicates: bool,

    /// Keep rows that contain missing values
    #[arg(long)]
    pub keep_nulls: bool,
}

impl Switches {
    fn apply(self, settings: &mut CleanSettings) {
        if self.keep_duplicates {
            settings.remove_duplicates = false;
        }
        if self.keep_nulls {
            settings.remove_nulls = false;
        }
    }
}

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Clean {
            file,
            output,
            switches,
            config,
        } => handle_clean(&file, output, switches, config.as_deref()),
        Commands::Summary { file, config, json } => handle_summary(&file, config.as_deref(), json),
    }
}

fn handle_clean(
    file: &Path,
    output: Option<PathBuf>,
    switches: Switches,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut settings = load_settings(config_path)?;
    switches.apply(&mut settings);

    let output = output.unwrap_or_else(|| default_output_path(file));
    let options = settings.read_options()?;
    let cleaner = settings.cleaner();

    println!(
        "Cleaning {0} (duplicates: {1}, nulls: {2})...",
        file.display(),
        on_off(cleaner.remove_duplicates()),
        on_off(cleaner.remove_nulls()),
    );

    let df = load_df(file, &options).context("Failed to load input file")?;
    let (mut cleaned, stats) = cleaner.clean_with_stats(&df).context("Cleaning failed")?;

    if cleaner.remove_duplicates() {
        println!("Removed {} duplicate rows.", stats.duplicates_removed);
    }
    if cleaner.remove_nulls() {
        println!("Removed {} rows with null values.", stats.nulls_removed);
    }
    println!(
        "Cleaning complete. Original rows: {0}, Final rows: {1}",
        stats.original_rows, stats.final_rows
    );

    save_df(&mut cleaned, &output, options.separator).context("Failed to save cleaned file")?;
    println!("Cleaned data saved to: {}", output.display());
    Ok(())
}

fn handle_summary(file: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let settings = load_settings(config_path)?;
    let summary = summarize_file(file, &settings.read_options()?)
        .with_context(|| format!("Failed to summarise {}", file.display()))?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
        );
    } else {
        print_summary(file, &summary);
    }
    Ok(())
}

fn print_summary(file: &Path, summary: &CleaningSummary) {
    println!("Data summary for {}:", file.display());
    println!("  Total rows: {}", summary.total_rows);
    println!(
        "  Duplicate rows: {} ({})",
        summary.duplicate_rows,
        fmt_pct(summary.duplicate_rows, summary.total_rows)
    );
    println!(
        "  Rows with nulls: {} ({})",
        summary.rows_with_nulls,
        fmt_pct(summary.rows_with_nulls, summary.total_rows)
    );
    println!("  Null counts per column:");
    for (column, nulls) in &summary.null_counts_per_column {
        println!("    {column}: {nulls}");
    }
}

fn load_settings(path: Option<&Path>) -> Result<CleanSettings> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading settings");
            CleanSettings::load(path).context("Failed to load settings")
        }
        None => Ok(CleanSettings::default()),
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

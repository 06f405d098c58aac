//! Command line interface.

pub mod command;

use std::{path::PathBuf, time::Duration};

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Contains the commands
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile both stations and report rainfall extremes
    Analyse {
        /// Directory holding the station-year CSV files
        #[arg(long, env = "RAINFALL_DATA_DIR", default_value = "weather")]
        data_dir: PathBuf,
        /// Where to write the chart series (defaults to the home directory)
        #[arg(long, env = "RAINFALL_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,
        /// Print the report without writing parquet files
        #[arg(long)]
        no_export: bool,
    },
    /// Download the station-year CSV files
    Fetch {
        /// Environment Canada station ID of University of Victoria (climate ID 1018598)
        #[arg(long)]
        victoria_station_id: u32,
        /// Environment Canada station ID of Victoria Gonzales (climate ID 1018611)
        #[arg(long)]
        gonzales_station_id: u32,
        /// Directory to save the CSV files to
        #[arg(long, env = "RAINFALL_DATA_DIR", default_value = "weather")]
        data_dir: PathBuf,
    },
}

/// Creates a spinner.
pub fn create_spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));

    bar
}

/// Creates a progress bar.
pub fn create_progress_bar(size: u64, message: String) -> ProgressBar {
    let bar = ProgressBar::new(size).with_message(message);
    if let Ok(style) = ProgressStyle::with_template("[{eta_precise}] {bar:40.cyan/blue} {pos:>3}/{len:3} {msg}") {
        bar.set_style(style.progress_chars("##-"));
    }

    bar
}

// -- Tests -------------------------------------------------------------------

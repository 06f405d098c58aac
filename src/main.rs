mod analysis;
mod calendar;
mod cli;
mod deserialise;
mod download;
mod error;
mod parquet;
mod reading;
mod report;

use std::process::ExitCode;

use clap::Parser;
use cli::{command, Cli, Commands};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Analyse {
            data_dir,
            output_dir,
            no_export,
        } => command::analyse(data_dir, output_dir.as_deref(), !no_export)
            .await
            .map(|files| {
                for file in files {
                    println!("File saved to `{}`", file);
                }
            }),
        Commands::Fetch {
            victoria_station_id,
            gonzales_station_id,
            data_dir,
        } => command::fetch(*victoria_station_id, *gonzales_station_id, data_dir)
            .await
            .map(|dir| println!("Station files saved to `{}`", dir)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use futures::{stream, StreamExt, TryStreamExt};
use tracing::info;

use crate::{
    calendar::{FIRST_YEAR, LAST_YEAR, YEAR_COUNT},
    cli::create_progress_bar,
    deserialise::station_file,
    download::{bulk_csv_url, download_csv},
    reading::Station,
};

const CONCURRENT_DOWNLOADS: usize = 4;

/// Downloads every station-year file into `data_dir`. Returns the directory.
pub async fn fetch(victoria_station_id: u32, gonzales_station_id: u32, data_dir: &Path) -> Result<String> {
    std::fs::create_dir_all(data_dir)
        .with_context(|| format!("failed to create '{}'", data_dir.display()))?;

    let targets = download_targets(victoria_station_id, gonzales_station_id, data_dir);
    info!("downloading {} station files", targets.len());

    let client = reqwest::Client::new();
    let pb = create_progress_bar(targets.len() as u64, "Downloading station files".to_string());

    stream::iter(targets)
        .map(|(url, path)| {
            let client = &client;
            let pb = &pb;
            async move {
                download_csv(client, &url, &path).await?;
                pb.inc(1);
                Ok::<(), anyhow::Error>(())
            }
        })
        .buffer_unordered(CONCURRENT_DOWNLOADS)
        .try_collect::<Vec<()>>()
        .await?;

    pb.finish_with_message("Station files downloaded");

    Ok(data_dir.to_string_lossy().to_string())
}

// One (url, destination) per station and year.
fn download_targets(victoria_station_id: u32, gonzales_station_id: u32, data_dir: &Path) -> Vec<(String, PathBuf)> {
    let mut targets = Vec::with_capacity(Station::ALL.len() * YEAR_COUNT);

    for station in Station::ALL {
        let station_id = match station {
            Station::Victoria => victoria_station_id,
            Station::Gonzales => gonzales_station_id,
        };
        for year in FIRST_YEAR..=LAST_YEAR {
            targets.push((bulk_csv_url(station_id, year), station_file(data_dir, station, year)));
        }
    }

    targets
}

// -- Tests -------------------------------------------------------------------

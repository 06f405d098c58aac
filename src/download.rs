//! Downloads station-year CSV files from Environment Canada.

use std::{fs::File, io::Write, path::Path};

use anyhow::{Error, Result};
use futures::StreamExt;
use tracing::debug;

const BULK_DATA_URL: &str = "https://climate.weather.gc.ca/climate_data/bulk_data_e.html";

/// URL of the daily bulk CSV for one station (by Environment Canada station ID) and year.
pub fn bulk_csv_url(station_id: u32, year: i32) -> String {
    format!(
        "{}?format=csv&stationID={}&Year={}&Month=1&Day=1&timeframe=2&submit=Download+Data",
        BULK_DATA_URL, station_id, year
    )
}

/// Streams the response body at `url` to `file_path`.
pub async fn download_csv(client: &reqwest::Client, url: &str, file_path: &Path) -> Result<(), Error> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::msg(format!("Failed to download {}: {}", url, e)))?;

    if !response.status().is_success() {
        return Err(Error::msg(format!(
            "Failed to download {}: {}",
            url,
            response.status()
        )));
    }

    let mut file = File::create(file_path)?;
    let mut written = 0u64;
    let mut stream = response.bytes_stream();

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| Error::msg(format!("Error reading chunk: {}", e)))?;
        file.write_all(&chunk)?;
        written += chunk.len() as u64;
    }
    debug!(bytes = written, "saved {}", file_path.display());

    Ok(())
}

// -- Tests -------------------------------------------------------------------

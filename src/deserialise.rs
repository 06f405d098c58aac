//! Loads a folder of station-year CSV files into station histories.

use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use futures::future::join_all;
use tracing::{debug, info, instrument};

use crate::{
    cli::create_progress_bar,
    error::RainfallError,
    reading::{RawDay, Station, StationHistory, StationPair, StationYearGrid},
};

/// Loads both stations for `first_year..=last_year`, one blocking task per file.
pub async fn load_pair(data_dir: &Path, first_year: i32, last_year: i32) -> Result<StationPair> {
    let jobs: Vec<(Station, i32)> = Station::ALL
        .iter()
        .flat_map(|station| (first_year..=last_year).map(move |year| (*station, year)))
        .collect();

    let pb = create_progress_bar(jobs.len() as u64, "Reading station files".to_string());

    let tasks: Vec<_> = jobs
        .into_iter()
        .map(|(station, year)| {
            let data_dir = data_dir.to_path_buf();
            let pb = pb.clone();
            tokio::task::spawn_blocking(move || {
                let grid = load_grid(&data_dir, station, year);
                pb.inc(1);
                grid.map(|grid| (station, grid))
            })
        })
        .collect();

    let mut victoria = Vec::new();
    let mut gonzales = Vec::new();
    for result in join_all(tasks).await {
        let (station, grid) = result.context("station file task failed")??;
        match station {
            Station::Victoria => victoria.push(grid),
            Station::Gonzales => gonzales.push(grid),
        }
    }
    pb.finish_with_message("Station files read");

    let pair = StationPair::new(
        StationHistory::new(Station::Victoria, victoria)?,
        StationHistory::new(Station::Gonzales, gonzales)?,
    )?;
    info!(first_year, last_year, "loaded {} station-years", pair.year_count() * 2);

    Ok(pair)
}

/// Reads and grids the file for one station and year.
#[instrument(skip(data_dir))]
pub fn load_grid(data_dir: &Path, station: Station, year: i32) -> Result<StationYearGrid, RainfallError> {
    let path = station_file(data_dir, station, year);
    if !path.exists() {
        return Err(RainfallError::MissingFile(path));
    }

    let file = File::open(&path).map_err(|source| RainfallError::Io {
        path: path.clone(),
        source,
    })?;
    let rows = read_raw_days(file, &path)?;
    debug!(rows = rows.len(), "parsed {}", path.display());

    StationYearGrid::build(year, &rows)
        .map_err(|kind| RainfallError::MalformedInput { station, year, kind })
}

/// Reads every data row of a daily CSV, skipping the header.
pub fn read_raw_days<R: Read>(reader: R, path: &Path) -> Result<Vec<RawDay>, RainfallError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    rdr.deserialize::<RawDay>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| RainfallError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

/// Path of the station file for `year` within `data_dir`.
pub fn station_file(data_dir: &Path, station: Station, year: i32) -> PathBuf {
    data_dir.join(station.file_name(year))
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::{calendar::days_in_year, error::MalformedInput, reading::DailyValue};

    use super::*;

    const HEADER: &str = "\"Longitude (x)\",\"Latitude (y)\",\"Station Name\",\"Climate ID\",\"Date/Time\",\"Year\",\"Month\",\"Day\",\"Data Quality\",\"Max Temp (°C)\",\"Max Temp Flag\",\"Min Temp (°C)\",\"Min Temp Flag\",\"Mean Temp (°C)\",\"Mean Temp Flag\",\"Heat Deg Days (°C)\",\"Heat Deg Days Flag\",\"Cool Deg Days (°C)\",\"Cool Deg Days Flag\",\"Total Rain (mm)\",\"Total Rain Flag\",\"Total Snow (cm)\",\"Total Snow Flag\",\"Total Precip (mm)\",\"Total Precip Flag\",\"Snow on Grnd (cm)\",\"Snow on Grnd Flag\",\"Dir of Max Gust (10s deg)\",\"Dir of Max Gust Flag\",\"Spd of Max Gust (km/h)\",\"Spd of Max Gust Flag\"";

    fn csv_for(year: i32, precip: impl Fn(usize) -> String) -> String {
        let mut body = format!("\u{feff}{}\n", HEADER);
        for day in 0..days_in_year(year) {
            body.push_str(&format!(
                "\"-123.31\",\"48.46\",\"UVIC\",\"1018598\",\"{year}-01-01\",\"{year}\",\"01\",\"01\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"{}\",\"\",\"\",\"\",\"\",\"\",\"\",\"\"\n",
                precip(day)
            ));
        }
        body
    }

    fn write_station(dir: &Path, station: Station, year: i32, precip: impl Fn(usize) -> String) {
        fs::write(station_file(dir, station, year), csv_for(year, precip)).unwrap();
    }

    #[test]
    fn should_read_total_precip_column() {
        let body = csv_for(1997, |day| if day == 0 { "4.2".to_string() } else { String::new() });
        let rows = read_raw_days(body.as_bytes(), Path::new("test.csv")).unwrap();

        assert_eq!(rows.len(), 365);
        assert_eq!(rows[0].total_precip.as_deref(), Some("4.2"));
        assert_eq!(rows[1].total_precip, None);
        assert_eq!(rows[0].date.as_deref(), Some("1997-01-01"));
    }

    #[test]
    fn should_match_first_header_after_byte_order_mark() {
        let body = "\u{feff}\"Date/Time\",\"Total Precip (mm)\"\n\"1997-01-01\",\"4.2\"\n";
        let rows = read_raw_days(body.as_bytes(), Path::new("bom.csv")).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date.as_deref(), Some("1997-01-01"));
        assert_eq!(rows[0].total_precip.as_deref(), Some("4.2"));
    }

    #[test]
    fn should_grid_station_file() {
        let dir = TempDir::new().unwrap();
        write_station(dir.path(), Station::Gonzales, 1996, |_| "1.5".to_string());

        let grid = load_grid(dir.path(), Station::Gonzales, 1996).unwrap();
        assert_eq!(grid.applicable_slots(), 366);
        assert_eq!(grid.get(2, 28), DailyValue::Recorded(1.5));
    }

    #[test]
    fn should_name_station_and_year_on_malformed_file() {
        let dir = TempDir::new().unwrap();
        write_station(dir.path(), Station::Victoria, 1997, |day| {
            if day == 9 { "trace".to_string() } else { "0".to_string() }
        });

        let err = load_grid(dir.path(), Station::Victoria, 1997).unwrap_err();
        match err {
            RainfallError::MalformedInput { station, year, kind } => {
                assert_eq!(station, Station::Victoria);
                assert_eq!(year, 1997);
                assert_eq!(
                    kind,
                    MalformedInput::UnparseableField {
                        row: 10,
                        date: Some("1997-01-01".to_string()),
                        field: "trace".to_string()
                    }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn should_report_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_grid(dir.path(), Station::Victoria, 2001).unwrap_err();
        assert!(matches!(err, RainfallError::MissingFile(_)));
    }

    #[tokio::test]
    async fn should_load_both_stations() {
        let dir = TempDir::new().unwrap();
        for year in 1996..=1997 {
            write_station(dir.path(), Station::Victoria, year, |_| "10".to_string());
            write_station(dir.path(), Station::Gonzales, year, |_| String::new());
        }

        let pair = load_pair(dir.path(), 1996, 1997).await.unwrap();
        assert_eq!(pair.first_year(), Some(1996));
        assert_eq!(pair.year_count(), 2);
    }

    #[tokio::test]
    async fn should_fail_when_a_year_is_missing() {
        let dir = TempDir::new().unwrap();
        write_station(dir.path(), Station::Victoria, 1996, |_| "10".to_string());
        write_station(dir.path(), Station::Gonzales, 1996, |_| "10".to_string());
        write_station(dir.path(), Station::Victoria, 1997, |_| "10".to_string());

        assert!(load_pair(dir.path(), 1996, 1997).await.is_err());
    }
}

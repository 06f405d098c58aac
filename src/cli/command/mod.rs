pub mod analyse;
pub mod fetch;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use chrono::{Datelike, Local};

pub use analyse::analyse;
pub use fetch::fetch;

/// Date-stamped parquet file name under `output_dir`, or the home directory.
pub fn make_parquet_file_name(output_dir: Option<&Path>, series: &str) -> Result<PathBuf> {
    let today = Local::now();
    let file_name = format!(
        "rainfall-{}-{}-{:02}-{:02}.parquet",
        series,
        today.year(),
        today.month(),
        today.day()
    );

    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::home_dir().ok_or_else(|| anyhow!("cannot locate home directory"))?,
    };

    Ok(dir.join(file_name))
}

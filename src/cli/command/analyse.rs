use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::{
    analysis,
    calendar::{FIRST_YEAR, LAST_YEAR},
    cli::create_spinner,
    deserialise::load_pair,
    parquet,
    report::format_report,
};

use super::make_parquet_file_name;

/// Loads the archive, prints the report and optionally exports the chart series.
/// Returns the paths of any files written.
pub async fn analyse(data_dir: &Path, output_dir: Option<&Path>, export: bool) -> Result<Vec<String>> {
    info!("reading station files from {}", data_dir.display());
    let pair = load_pair(data_dir, FIRST_YEAR, LAST_YEAR)
        .await
        .with_context(|| format!("failed to load station files from '{}'", data_dir.display()))?;

    let analysis = analysis::analyse(&pair)?;
    print!("{}", format_report(&analysis));

    if !export {
        return Ok(vec![]);
    }

    let bar = create_spinner("Writing chart series...".to_string());
    let monthly_file = make_parquet_file_name(output_dir, "monthly")?;
    parquet::save_monthly(&analysis.monthly_totals, &analysis.max_two_day, &monthly_file)
        .with_context(|| format!("failed to write '{}'", monthly_file.display()))?;

    let yearly_file = make_parquet_file_name(output_dir, "yearly")?;
    parquet::save_yearly(&analysis.heavy_rain_days, &yearly_file)
        .with_context(|| format!("failed to write '{}'", yearly_file.display()))?;
    bar.finish_with_message("Chart series written");

    Ok(vec![
        monthly_file.to_string_lossy().to_string(),
        yearly_file.to_string_lossy().to_string(),
    ])
}

// -- Tests -------------------------------------------------------------------

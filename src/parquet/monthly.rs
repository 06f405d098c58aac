//! Save the two monthly chart series to a parquet file.

use std::{fs::File, path::Path, sync::Arc};

use anyhow::{anyhow, Result};
use arrow::{
    array::{ArrayRef, Date32Array, Float64Array, Int32Array, RecordBatch},
    datatypes::{DataType, Field, Schema},
};
use chrono::{Datelike, NaiveDate};
use parquet::{arrow::ArrowWriter, file::properties::WriterProperties};

use crate::analysis::MonthlySeries;

/// Writes one row per month with both the monthly total and the 2-day maximum.
pub fn save_monthly(totals: &MonthlySeries, two_day: &MonthlySeries, file_path: &Path) -> Result<()> {
    if totals.len() != two_day.len() {
        return Err(anyhow!(
            "monthly series differ in length ({} vs {})",
            totals.len(),
            two_day.len()
        ));
    }

    let schema = Arc::new(Schema::new(vec![
        Field::new("date", DataType::Date32, true),
        Field::new("year", DataType::Int32, false),
        Field::new("month", DataType::Int32, false),
        Field::new("fractional_year", DataType::Float64, false),
        Field::new("monthly_total_mm", DataType::Float64, false),
        Field::new("max_two_day_mm", DataType::Float64, false),
    ]));

    let epoch_offset = NaiveDate::from_ymd_opt(1970, 1, 1)
        .ok_or_else(|| anyhow!("invalid epoch"))?
        .num_days_from_ce();

    let mut dates = Vec::with_capacity(totals.len());
    let mut years = Vec::with_capacity(totals.len());
    let mut months = Vec::with_capacity(totals.len());
    let mut fractional_years = Vec::with_capacity(totals.len());

    for (year, month, _) in totals.iter() {
        dates.push(NaiveDate::from_ymd_opt(year, month, 1).map(|d| d.num_days_from_ce() - epoch_offset));
        years.push(year);
        months.push(month as i32);
        fractional_years.push(fractional_year(year, month));
    }

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Date32Array::from(dates)),
        Arc::new(Int32Array::from(years)),
        Arc::new(Int32Array::from(months)),
        Arc::new(Float64Array::from(fractional_years)),
        Arc::new(Float64Array::from(totals.values().to_vec())),
        Arc::new(Float64Array::from(two_day.values().to_vec())),
    ];
    let batch = RecordBatch::try_new(schema.clone(), columns)?;

    let props = WriterProperties::builder()
        .set_compression(parquet::basic::Compression::SNAPPY)
        .build();

    let file = File::create(file_path)?;
    let mut writer = ArrowWriter::try_new(file, schema, Some(props))?;
    writer.write(&batch)?;
    writer.close()?;

    Ok(())
}

/// Chart x-coordinate for a month: the year plus elapsed twelfths.
pub fn fractional_year(year: i32, month: u32) -> f64 {
    year as f64 + (month as f64 - 1.0) / 12.0
}

// -- Tests -------------------------------------------------------------------

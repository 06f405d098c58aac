//! Save the yearly heavy-rain-day counts to a parquet file.

use std::{fs::File, path::Path, sync::Arc};

use anyhow::Result;
use arrow::{
    array::{ArrayRef, Int32Array, RecordBatch},
    datatypes::{DataType, Field, Schema},
};
use parquet::{arrow::ArrowWriter, file::properties::WriterProperties};

use crate::analysis::YearlySeries;

pub fn save_yearly(heavy_rain_days: &YearlySeries, file_path: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("year", DataType::Int32, false),
        Field::new("heavy_rain_days", DataType::Int32, false),
    ]));

    let (years, counts): (Vec<i32>, Vec<i32>) = heavy_rain_days
        .iter()
        .map(|(year, count)| (year, count as i32))
        .unzip();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int32Array::from(years)),
        Arc::new(Int32Array::from(counts)),
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

// -- Tests -------------------------------------------------------------------

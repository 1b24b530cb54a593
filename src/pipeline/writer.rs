use std::fs;
use std::path::Path;

use crate::error::{CleanError, Result};
use crate::pipeline::Dataset;

/// Write a cleaned dataset as UTF-8 CSV: canonical headers, missing values
/// as empty fields, no index column.
///
/// The full file is buffered in memory and renamed into place so a crash
/// mid-write never leaves a partial output file.
pub fn write(dataset: &Dataset, output_path: &Path) -> Result<()> {
    let buffer = to_csv_bytes(dataset).map_err(CleanError::Csv)?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(|source| CleanError::OutputWrite {
            path: output_path.to_path_buf(),
            source,
        })?;
    }

    let tmp_path = output_path.with_extension("csv.tmp");
    fs::write(&tmp_path, &buffer).map_err(|source| CleanError::OutputWrite {
        path: output_path.to_path_buf(),
        source,
    })?;
    fs::rename(&tmp_path, output_path).map_err(|source| CleanError::OutputWrite {
        path: output_path.to_path_buf(),
        source,
    })?;

    Ok(())
}

fn to_csv_bytes(dataset: &Dataset) -> std::result::Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&dataset.header)?;
    for row in &dataset.rows {
        writer.write_record(row)?;
    }
    // Flushing into a Vec cannot fail in practice; surface it as an I/O
    // error if it somehow does.
    writer.into_inner().map_err(|e| {
        csv::Error::from(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))
    })
}

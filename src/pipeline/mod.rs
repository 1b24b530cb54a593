use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{error, info, warn};

use crate::constants;
use crate::error::Result;

pub mod columns;
pub mod dates;
pub mod encoding;
pub mod fields;
pub mod numbers;
pub mod reader;
pub mod validate;
pub mod writer;

use validate::ValidationReport;

/// A fully normalized dataset ready to be written: canonical header in
/// first-seen source order, rows of coerced string cells where the empty
/// string means missing.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Result of cleaning a single file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Cleaned output was written.
    Cleaned {
        rows: usize,
        report: ValidationReport,
    },
    /// The file parsed but held no data rows; skipped with a warning.
    Empty,
}

/// Aggregate statistics for one directory run. Appended to by the
/// orchestrator only, after each file completes.
#[derive(Debug, Default, Serialize)]
pub struct PipelineStats {
    pub files_processed: usize,
    pub rows_processed: usize,
    pub errors: Vec<String>,
}

/// Clean one CSV file: read with encoding fallback, map columns, clean
/// cells, coerce dates and numerics, validate, and write the output.
///
/// Field-level coercion failures resolve locally and never fail the file;
/// only an unreadable input or a failed output write returns an error.
pub fn clean_file(input_path: &Path, output_path: &Path) -> Result<FileOutcome> {
    info!("pipeline: starting to clean {}", input_path.display());

    let table = reader::read(input_path)?;
    if table.is_empty() {
        return Ok(FileOutcome::Empty);
    }

    let original_shape = (table.rows.len(), table.headers.len());
    let plan = columns::resolve_columns(&table.headers);
    let header = plan.header();

    let mut rows = Vec::with_capacity(table.rows.len());
    for raw_row in &table.rows {
        let mut row = columns::project(&plan, raw_row);
        fields::clean_row(&mut row);
        for (idx, &canonical) in header.iter().enumerate() {
            if constants::is_date_column(canonical) {
                row[idx] = dates::parse_date(&row[idx]);
            } else if constants::is_numeric_column(canonical) {
                row[idx] = numbers::render_number(numbers::parse_number(&row[idx]));
            }
        }
        rows.push(row);
    }

    let dataset = Dataset { header, rows };

    let report = validate::validate(&dataset);
    if let Ok(json) = serde_json::to_string(&report) {
        info!("validate: {}", json);
    }

    writer::write(&dataset, output_path)?;

    info!(
        "pipeline: cleaned CSV written to {} (shape {}x{} -> {}x{})",
        output_path.display(),
        original_shape.0,
        original_shape.1,
        dataset.rows.len(),
        dataset.header.len()
    );

    Ok(FileOutcome::Cleaned {
        rows: dataset.rows.len(),
        report,
    })
}

/// Clean every file in `input_dir` matching `pattern`, writing
/// `cleaned_<name>` files into `output_dir`.
///
/// One bad file never aborts the run: each failure becomes one entry in the
/// returned stats. A missing input directory or an empty match set ends the
/// run early with a warning and empty stats.
pub fn clean_directory(input_dir: &Path, output_dir: &Path, pattern: &str) -> PipelineStats {
    let mut stats = PipelineStats::default();

    if !input_dir.exists() {
        error!(
            "pipeline: input directory does not exist: {}",
            input_dir.display()
        );
        return stats;
    }

    let mut files = match list_matching_files(input_dir, pattern) {
        Ok(files) => files,
        Err(e) => {
            error!(
                "pipeline: failed to scan {}: {}",
                input_dir.display(),
                e
            );
            return stats;
        }
    };
    files.sort();

    if files.is_empty() {
        warn!(
            "pipeline: no files matching {} found in {}",
            pattern,
            input_dir.display()
        );
        return stats;
    }

    info!("pipeline: found {} files to process", files.len());

    for file in &files {
        let name = match file.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => {
                stats
                    .errors
                    .push(format!("skipping non-UTF-8 file name: {}", file.display()));
                continue;
            }
        };
        let output = output_dir.join(format!("cleaned_{name}"));

        match clean_file(file, &output) {
            Ok(FileOutcome::Cleaned { rows, .. }) => {
                stats.files_processed += 1;
                stats.rows_processed += rows;
            }
            Ok(FileOutcome::Empty) => {
                warn!("pipeline: skipping empty file {}", file.display());
            }
            Err(e) => {
                let message = format!("failed to clean {}: {}", file.display(), e);
                error!("pipeline: {}", message);
                stats.errors.push(message);
            }
        }
    }

    if let Ok(json) = serde_json::to_string(&stats) {
        info!("pipeline: processing complete: {}", json);
    }
    stats
}

fn list_matching_files(dir: &Path, pattern: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| matches_pattern(n, pattern));
        if matches {
            files.push(path);
        }
    }
    Ok(files)
}

/// Minimal glob: a single `*` wildcard with literal prefix/suffix. This is
/// all the directory scan supports.
fn matches_pattern(name: &str, pattern: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            name.len() >= prefix.len() + suffix.len()
                && name.starts_with(prefix)
                && name.ends_with(suffix)
        }
        None => name == pattern,
    }
}

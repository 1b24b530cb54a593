use serde::Serialize;

use crate::pipeline::Dataset;

/// Data-quality metrics for one cleaned dataset. Advisory output: the
/// orchestrator logs it and writes the file regardless.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub total_rows: usize,
    /// Rows where every mapped field is missing.
    pub empty_rows: usize,
    /// Columns whose missing-value share exceeds the flag threshold.
    pub high_null_columns: Vec<HighNullColumn>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HighNullColumn {
    pub column: String,
    pub null_pct: f64,
}

/// Share of missing values above which a column is flagged.
const NULL_PCT_THRESHOLD: f64 = 50.0;

/// Compute quality metrics over a dataset. Pure and infallible.
pub fn validate(dataset: &Dataset) -> ValidationReport {
    let total_rows = dataset.rows.len();

    let empty_rows = dataset
        .rows
        .iter()
        .filter(|row| !row.is_empty() && row.iter().all(|cell| cell.is_empty()))
        .count();

    let mut high_null_columns = Vec::new();
    if total_rows > 0 {
        for (idx, column) in dataset.header.iter().enumerate() {
            let nulls = dataset
                .rows
                .iter()
                .filter(|row| row.get(idx).map_or(true, |cell| cell.is_empty()))
                .count();
            let null_pct = (nulls as f64 / total_rows as f64) * 100.0;
            if null_pct > NULL_PCT_THRESHOLD {
                high_null_columns.push(HighNullColumn {
                    column: column.to_string(),
                    null_pct,
                });
            }
        }
    }

    ValidationReport {
        total_rows,
        empty_rows,
        high_null_columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(header: Vec<&'static str>, rows: Vec<Vec<&str>>) -> Dataset {
        Dataset {
            header,
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|c| c.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn counts_fully_empty_rows() {
        let ds = dataset(
            vec!["material_id", "quantity"],
            vec![vec!["A", "1"], vec!["", ""], vec!["B", ""]],
        );
        let report = validate(&ds);
        assert_eq!(report.total_rows, 3);
        assert_eq!(report.empty_rows, 1);
    }

    #[test]
    fn flags_columns_over_half_null() {
        let ds = dataset(
            vec!["material_id", "quantity"],
            vec![vec!["A", ""], vec!["B", ""], vec!["C", "1"]],
        );
        let report = validate(&ds);
        assert_eq!(report.high_null_columns.len(), 1);
        assert_eq!(report.high_null_columns[0].column, "quantity");
        assert!(report.high_null_columns[0].null_pct > 50.0);
    }

    #[test]
    fn exactly_half_null_is_not_flagged() {
        let ds = dataset(
            vec!["quantity"],
            vec![vec![""], vec!["1"]],
        );
        let report = validate(&ds);
        assert!(report.high_null_columns.is_empty());
    }

    #[test]
    fn empty_dataset_is_all_zeroes() {
        let ds = dataset(vec!["material_id"], vec![]);
        let report = validate(&ds);
        assert_eq!(report.total_rows, 0);
        assert_eq!(report.empty_rows, 0);
        assert!(report.high_null_columns.is_empty());
    }
}

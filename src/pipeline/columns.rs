use tracing::{info, warn};

use crate::constants;

/// Resolution of a source header row against the static column mapping:
/// which source cell positions survive, and under which canonical name.
#[derive(Debug, Clone)]
pub struct ColumnPlan {
    pub columns: Vec<PlannedColumn>,
}

#[derive(Debug, Clone)]
pub struct PlannedColumn {
    /// Position of the cell in the source rows.
    pub source_index: usize,
    /// Canonical field identifier the column is renamed to.
    pub canonical: &'static str,
}

impl ColumnPlan {
    /// Canonical header in first-seen source order.
    pub fn header(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.canonical).collect()
    }
}

/// Resolve source header labels to a projection plan.
///
/// Labels are trimmed; empty labels are discarded; labels in the drop set
/// are removed even when a mapping exists; anything neither mapped nor
/// dropped is schema drift and logged as a warning, never an error.
pub fn resolve_columns(headers: &[String]) -> ColumnPlan {
    let mut columns: Vec<PlannedColumn> = Vec::new();
    let mut unknown = Vec::new();

    for (idx, raw) in headers.iter().enumerate() {
        let label = raw.trim();
        if label.is_empty() {
            continue;
        }
        if constants::is_dropped(label) {
            info!("columns: dropped column: {}", label);
            continue;
        }
        match constants::canonical_name(label) {
            Some(canonical) => {
                if columns.iter().any(|c| c.canonical == canonical) {
                    warn!("columns: duplicate source column ignored: {}", label);
                    continue;
                }
                columns.push(PlannedColumn {
                    source_index: idx,
                    canonical,
                });
            }
            None => unknown.push(label.to_string()),
        }
    }

    if !unknown.is_empty() {
        warn!("columns: unknown columns found: {:?}", unknown);
    }

    ColumnPlan { columns }
}

/// Select the planned cells out of one source row. Short rows yield empty
/// strings for the missing positions.
pub fn project(plan: &ColumnPlan, row: &[String]) -> Vec<String> {
    plan.columns
        .iter()
        .map(|c| row.get(c.source_index).cloned().unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn maps_and_renames_known_columns() {
        let plan = resolve_columns(&labels(&["Material", " Quantity ", "P/O #"]));
        assert_eq!(plan.header(), vec!["material_id", "quantity", "purchase_order"]);
        assert_eq!(plan.columns[1].source_index, 1);
    }

    #[test]
    fn unknown_columns_are_excluded_without_aborting() {
        let plan = resolve_columns(&labels(&["Material", "Mystery Column"]));
        assert_eq!(plan.header(), vec!["material_id"]);
    }

    #[test]
    fn drop_set_wins_over_the_mapping() {
        // "Status" is in the drop set; even if a future mapping adds it, it
        // must stay excluded.
        let plan = resolve_columns(&labels(&["Status", "Material"]));
        assert_eq!(plan.header(), vec!["material_id"]);
    }

    #[test]
    fn empty_labels_are_discarded() {
        let plan = resolve_columns(&labels(&["", "  ", "Material"]));
        assert_eq!(plan.header(), vec!["material_id"]);
        assert_eq!(plan.columns[0].source_index, 2);
    }

    #[test]
    fn projection_tolerates_short_rows() {
        let plan = resolve_columns(&labels(&["Material", "Quantity"]));
        let row = vec!["ABC".to_string()];
        assert_eq!(project(&plan, &row), vec!["ABC".to_string(), String::new()]);
    }

    #[test]
    fn duplicate_source_columns_keep_first_occurrence() {
        let plan = resolve_columns(&labels(&["Material", "Material"]));
        assert_eq!(plan.header(), vec!["material_id"]);
        assert_eq!(plan.columns[0].source_index, 0);
    }
}

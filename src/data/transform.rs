use std::path::Path;

use log::debug;

use super::loader::{read_csv_path, ReadOptions};
use super::model::{CellValue, Table};
use crate::error::Result;

/// Column rewritten by [`process_iris`].
pub const SPECIES_COLUMN: &str = "species";

/// Code → label substitution applied to the `species` column.
///
/// Kept exactly as published with the source data. It does NOT follow the
/// dataset's own target order (see `dataset::iris::TARGET_NAMES`): codes 1 and
/// 2 are swapped relative to it.
pub const SPECIES_LABELS: &[(i64, &str)] = &[(0, "setosa"), (1, "virginica"), (2, "versicolor")];

/// Replace the code cells of `column` that appear in `mapping` with their label.
///
/// * Integer cells (and integral float cells) found in `mapping` → `String(label)`
/// * Every other cell passes through untouched
/// * A missing column is a no-op
///
/// Returns the number of replaced cells.
pub fn replace_values(table: &mut Table, column: &str, mapping: &[(i64, &str)]) -> usize {
    let Some(idx) = table.column_index(column) else {
        debug!("Column '{column}' not present, nothing to replace");
        return 0;
    };

    let mut replaced = 0;
    for cell in table.column_mut(idx) {
        let label = cell
            .as_code()
            .and_then(|code| mapping.iter().find(|(c, _)| *c == code))
            .map(|(_, label)| *label);
        if let Some(label) = label {
            *cell = CellValue::String(label.to_string());
            replaced += 1;
        }
    }
    debug!("Replaced {replaced} of {} cells in '{column}'", table.len());
    replaced
}

/// Read the CSV at `path` and swap its species codes for their labels.
pub fn process_iris(path: impl AsRef<Path>) -> Result<Table> {
    let mut table = read_csv_path(path.as_ref(), &ReadOptions::default())?;
    replace_values(&mut table, SPECIES_COLUMN, SPECIES_LABELS);
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::read_csv_from_reader;
    use crate::data::model::ColumnType;

    fn parse(csv: &str) -> Table {
        read_csv_from_reader(csv.as_bytes(), &ReadOptions::default()).unwrap()
    }

    #[test]
    fn test_known_codes_become_labels() {
        let mut table = parse("petal,species\n1.4,0\n4.7,1\n6.0,2\n");
        let replaced = replace_values(&mut table, SPECIES_COLUMN, SPECIES_LABELS);

        assert_eq!(replaced, 3);
        let species: Vec<_> = table
            .column("species")
            .unwrap()
            .filter_map(|c| c.as_str())
            .collect();
        assert_eq!(species, vec!["setosa", "virginica", "versicolor"]);
        assert_eq!(table.column_type("species"), Some(ColumnType::String));
    }

    #[test]
    fn test_unknown_codes_pass_through() {
        let mut table = parse("species\n0\n7\n");
        let replaced = replace_values(&mut table, SPECIES_COLUMN, SPECIES_LABELS);

        assert_eq!(replaced, 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(1, "species"), Some(&CellValue::Integer(7)));
        assert_eq!(table.column_type("species"), Some(ColumnType::Object));
    }

    #[test]
    fn test_na_rows_do_not_block_relabelling() {
        let mut table = parse("species\n0\nNA\n2\n");
        let replaced = replace_values(&mut table, SPECIES_COLUMN, SPECIES_LABELS);

        assert_eq!(replaced, 2);
        assert_eq!(table.get(0, "species"), Some(&CellValue::String("setosa".into())));
        assert_eq!(table.get(1, "species"), Some(&CellValue::Null));
        assert_eq!(table.get(2, "species"), Some(&CellValue::String("versicolor".into())));
    }

    #[test]
    fn test_integral_floats_match_codes() {
        let mut table = parse("species\n1.0\n2.5\n");
        replace_values(&mut table, SPECIES_COLUMN, SPECIES_LABELS);

        assert_eq!(table.get(0, "species"), Some(&CellValue::String("virginica".into())));
        assert_eq!(table.get(1, "species"), Some(&CellValue::Float(2.5)));
    }

    #[test]
    fn test_text_and_null_cells_untouched() {
        let mut table = parse("species,n\nsetosa,1\n,2\n");
        let before = table.clone();
        assert_eq!(replace_values(&mut table, SPECIES_COLUMN, SPECIES_LABELS), 0);
        assert_eq!(table, before);
    }

    #[test]
    fn test_missing_column_is_noop() {
        let mut table = parse("target\n0\n1\n");
        let before = table.clone();
        assert_eq!(replace_values(&mut table, SPECIES_COLUMN, SPECIES_LABELS), 0);
        assert_eq!(table, before);
    }

    #[test]
    fn test_only_named_column_is_rewritten() {
        let mut table = parse("target,species\n0,0\n");
        replace_values(&mut table, SPECIES_COLUMN, SPECIES_LABELS);
        assert_eq!(table.get(0, "target"), Some(&CellValue::Integer(0)));
    }
}

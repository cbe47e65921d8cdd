// ---------------------------------------------------------------------------
// CellValue – a single cell of a table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value mirroring common Pandas dtypes.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl CellValue {
    /// Text written to a CSV field. Integral floats keep a trailing `.0`
    /// (`5.0`, not `5`) so a float column stays a float column on re-read.
    pub fn to_csv_field(&self) -> String {
        match self {
            CellValue::String(s) => s.clone(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Float(v) => format!("{v:?}"),
            CellValue::Bool(true) => "True".to_string(),
            CellValue::Bool(false) => "False".to_string(),
            CellValue::Null => String::new(),
        }
    }

    /// Integer code carried by this cell, if any. Integral floats count.
    pub fn as_code(&self) -> Option<i64> {
        match self {
            CellValue::Integer(i) => Some(*i),
            CellValue::Float(v) if v.fract() == 0.0 && v.is_finite() => Some(*v as i64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ColumnType – what a column holds once nulls are ignored
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    Float,
    Bool,
    String,
    /// More than one kind of value, e.g. codes left behind by a partial relabel.
    Object,
    /// Only nulls (or no rows at all).
    Empty,
}

impl ColumnType {
    fn of_cell(value: &CellValue) -> Option<Self> {
        match value {
            CellValue::String(_) => Some(ColumnType::String),
            CellValue::Integer(_) => Some(ColumnType::Integer),
            CellValue::Float(_) => Some(ColumnType::Float),
            CellValue::Bool(_) => Some(ColumnType::Bool),
            CellValue::Null => None,
        }
    }

    /// Fold the non-null cells of a column into a single type.
    pub fn of<'a>(cells: impl IntoIterator<Item = &'a CellValue>) -> Self {
        let mut kind = ColumnType::Empty;
        for cell in cells {
            let Some(k) = Self::of_cell(cell) else {
                continue;
            };
            kind = match kind {
                ColumnType::Empty => k,
                current if current == k => current,
                _ => return ColumnType::Object,
            };
        }
        kind
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// An ordered set of named columns and the rows holding their values.
///
/// Every row has exactly one cell per column, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table from column names and rows. Short rows are padded with
    /// `Null` and long rows truncated so the width invariant holds.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, CellValue::Null);
                row
            })
            .collect();
        Table { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cells of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &CellValue> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    /// Mutable cells of the column at `idx`.
    pub(crate) fn column_mut(&mut self, idx: usize) -> impl Iterator<Item = &mut CellValue> + '_ {
        self.rows.iter_mut().map(move |row| &mut row[idx])
    }

    pub fn get(&self, row: usize, column: &str) -> Option<&CellValue> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    pub fn column_type(&self, name: &str) -> Option<ColumnType> {
        self.column(name).map(ColumnType::of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::new(
            vec!["id".into(), "species".into()],
            vec![
                vec![CellValue::Integer(1), CellValue::Integer(0)],
                vec![CellValue::Integer(2), CellValue::String("setosa".into())],
                vec![CellValue::Integer(3), CellValue::Null],
            ],
        )
    }

    #[test]
    fn test_column_access() {
        let table = sample();
        assert_eq!(table.len(), 3);
        assert_eq!(table.width(), 2);
        assert_eq!(table.column_index("species"), Some(1));
        assert!(table.column("missing").is_none());
        assert_eq!(table.get(0, "id"), Some(&CellValue::Integer(1)));
        assert_eq!(table.get(9, "id"), None);
    }

    #[test]
    fn test_column_type_ignores_nulls_and_detects_mixed() {
        let table = sample();
        assert_eq!(table.column_type("id"), Some(ColumnType::Integer));
        assert_eq!(table.column_type("species"), Some(ColumnType::Object));
        assert_eq!(ColumnType::of(&[CellValue::Null]), ColumnType::Empty);
    }

    #[test]
    fn test_rows_are_padded_to_width() {
        let table = Table::new(
            vec!["a".into(), "b".into()],
            vec![vec![CellValue::Integer(1)]],
        );
        assert_eq!(table.get(0, "b"), Some(&CellValue::Null));
    }

    #[test]
    fn test_csv_field_formatting() {
        assert_eq!(CellValue::Float(5.0).to_csv_field(), "5.0");
        assert_eq!(CellValue::Float(0.2).to_csv_field(), "0.2");
        assert_eq!(CellValue::Bool(true).to_csv_field(), "True");
        assert_eq!(CellValue::Null.to_csv_field(), "");
    }

    #[test]
    fn test_as_code() {
        assert_eq!(CellValue::Integer(2).as_code(), Some(2));
        assert_eq!(CellValue::Float(1.0).as_code(), Some(1));
        assert_eq!(CellValue::Float(1.5).as_code(), None);
        assert_eq!(CellValue::String("1".into()).as_code(), None);
    }
}

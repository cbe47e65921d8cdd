use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::{debug, info};

use super::model::{CellValue, Table};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Sources and options
// ---------------------------------------------------------------------------

/// Where a CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Path(PathBuf),
    Url(String),
}

impl Source {
    /// Classify a location string: `http://` and `https://` are URLs,
    /// `file://` is stripped to the path it names, anything else is a
    /// filesystem path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Source::Url(location.to_string())
        } else if lower.starts_with("file://") {
            Source::Path(PathBuf::from(&location["file://".len()..]))
        } else {
            Source::Path(PathBuf::from(location))
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Path(p) => write!(f, "{}", p.display()),
            Source::Url(u) => write!(f, "{u}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Field separator byte.
    pub delimiter: u8,
    /// Infer a type per column; when off every non-empty field stays text.
    pub infer_types: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            infer_types: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read the CSV at `location` (path or URL) and return it as-is.
pub fn download_iris(location: &str) -> Result<Table> {
    read_csv(&Source::parse(location), &ReadOptions::default())
}

/// Read a CSV from any [`Source`].
pub fn read_csv(source: &Source, options: &ReadOptions) -> Result<Table> {
    let table = match source {
        Source::Path(path) => read_csv_path(path, options)?,
        Source::Url(url) => fetch_csv(url, options)?,
    };
    info!(
        "Loaded {} rows x {} columns from {source}",
        table.len(),
        table.width()
    );
    Ok(table)
}

/// Read a CSV file. A missing file is an `io::ErrorKind::NotFound` error.
pub fn read_csv_path(path: &Path, options: &ReadOptions) -> Result<Table> {
    let file = File::open(path)?;
    read_csv_from_reader(file, options)
}

fn fetch_csv(url: &str, options: &ReadOptions) -> Result<Table> {
    debug!("Fetching CSV from {url}");
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    let body = response.bytes()?;
    read_csv_from_reader(&body[..], options)
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, then one record per row.
/// All records must have as many fields as the header.
pub fn read_csv_from_reader<R: Read>(reader: R, options: &ReadOptions) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .from_reader(reader);

    let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if columns.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "no columns to parse from input").into());
    }

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let kinds: Vec<FieldKind> = if options.infer_types {
        (0..columns.len())
            .map(|idx| infer_kind(records.iter().map(|r| r.get(idx).unwrap_or(""))))
            .collect()
    } else {
        vec![FieldKind::Text; columns.len()]
    };

    let rows = records
        .iter()
        .map(|record| {
            kinds
                .iter()
                .enumerate()
                .map(|(idx, kind)| parse_field(record.get(idx).unwrap_or(""), *kind))
                .collect()
        })
        .collect();

    Ok(Table::new(columns, rows))
}

/// Field texts read as missing values, in addition to the empty field.
pub const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(s: &str) -> bool {
    s.is_empty() || NA_VALUES.contains(&s)
}

/// The type shared by every non-missing field of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Integer,
    Float,
    Bool,
    Text,
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "True" | "true" | "TRUE" => Some(true),
        "False" | "false" | "FALSE" => Some(false),
        _ => None,
    }
}

fn infer_kind<'a>(fields: impl Iterator<Item = &'a str>) -> FieldKind {
    let (mut all_int, mut all_float, mut all_bool) = (true, true, true);
    for field in fields.filter(|f| !is_missing(f)) {
        all_int &= field.parse::<i64>().is_ok();
        all_float &= field.parse::<f64>().is_ok();
        all_bool &= parse_bool(field).is_some();
        if !(all_int || all_float || all_bool) {
            return FieldKind::Text;
        }
    }
    if all_int {
        FieldKind::Integer
    } else if all_float {
        FieldKind::Float
    } else if all_bool {
        FieldKind::Bool
    } else {
        FieldKind::Text
    }
}

fn parse_field(s: &str, kind: FieldKind) -> CellValue {
    if is_missing(s) {
        return CellValue::Null;
    }
    let text = || CellValue::String(s.to_string());
    match kind {
        FieldKind::Integer => s.parse().map(CellValue::Integer).unwrap_or_else(|_| text()),
        FieldKind::Float => s.parse().map(CellValue::Float).unwrap_or_else(|_| text()),
        FieldKind::Bool => parse_bool(s).map(CellValue::Bool).unwrap_or_else(text),
        FieldKind::Text => text(),
    }
}

//! # iris-frames
//!
//! Reads CSV files into dynamically-typed tables, relabels Iris species codes,
//! and materializes the bundled Iris dataset to disk.
//!
//! ```rust,ignore
//! use iris_frames::{materialize, process_iris};
//!
//! materialize("iris.csv")?;
//! let table = process_iris("labelled.csv")?;
//! println!("{} rows", table.len());
//! ```

pub mod data;
pub mod dataset;
pub mod error;

pub use data::loader::{download_iris, read_csv, read_csv_from_reader, read_csv_path, ReadOptions, Source};
pub use data::model::{CellValue, ColumnType, Table};
pub use data::transform::{process_iris, replace_values, SPECIES_COLUMN, SPECIES_LABELS};
pub use dataset::{materialize, read_samples, DEFAULT_OUTPUT};
pub use error::{Error, Result};

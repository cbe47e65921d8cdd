//! Bundled reference datasets and their CSV materialization.

pub mod iris;

use std::io::Read;
use std::path::Path;

use log::info;

use crate::error::Result;
use iris::IrisSample;

/// File written by the `generate_iris` binary, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "iris.csv";

/// Write the Iris dataset to `path` as CSV (header row, no index column),
/// truncating any existing file. Returns the number of data rows written.
pub fn materialize(path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let table = iris::frame();
    table.write_csv(path)?;

    info!("Materialized {} iris samples to {}", table.len(), path.display());
    Ok(table.len())
}

/// Read a materialized Iris file back into typed samples.
pub fn read_samples<R: Read>(reader: R) -> Result<Vec<IrisSample>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let samples = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<IrisSample>, _>>()?;
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_materialize_writes_header_and_all_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(DEFAULT_OUTPUT);

        assert_eq!(materialize(&path).unwrap(), iris::N_SAMPLES);

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target")
        );
        assert_eq!(lines.next(), Some("5.1,3.5,1.4,0.2,0"));
        assert_eq!(lines.clone().count(), iris::N_SAMPLES - 1);
        assert_eq!(lines.last(), Some("5.9,3.0,5.1,1.8,2"));
    }

    #[test]
    fn test_integral_floats_keep_decimal_point() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("iris.csv");
        materialize(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().nth(2), Some("4.9,3.0,1.4,0.2,0"));
    }

    #[test]
    fn test_materialized_file_reads_back_identically() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("iris.csv");
        materialize(&path).unwrap();

        let samples = read_samples(File::open(&path).unwrap()).unwrap();
        assert_eq!(samples.as_slice(), iris::samples());
    }

    #[test]
    fn test_out_of_range_target_reads_without_a_name() {
        let csv = "sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target\n\
                   1.0,1.0,1.0,1.0,7\n";
        let samples = read_samples(csv.as_bytes()).unwrap();
        assert_eq!(samples[0].target, 7);
        assert_eq!(samples[0].target_name(), None);
    }

    #[test]
    fn test_materialize_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let err = materialize(dir.path().join("nope").join("iris.csv")).unwrap_err();
        assert!(err.is_not_found());
    }
}

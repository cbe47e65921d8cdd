use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use super::model::Table;
use crate::error::Result;

impl Table {
    /// Write the table as comma-separated text: header row, then one record per
    /// row, no index column. Null cells are empty fields.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.columns())?;
        for row in self.rows() {
            wtr.write_record(row.iter().map(|cell| cell.to_csv_field()))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Write the table to `path`, replacing any existing file.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_writer(File::create(path)?)?;
        info!(
            "Wrote {} rows x {} columns to {}",
            self.len(),
            self.width(),
            path.display()
        );
        Ok(())
    }
}

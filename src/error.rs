//! Error type shared by the loader, the writer and the materializer.
//!
//! Every variant is a transparent wrapper: the message and source chain are the
//! ones produced by the underlying I/O, CSV or HTTP library.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Opening, creating or reading a file failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The CSV reader or writer rejected the data.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Fetching a remote CSV failed (connection or non-success status).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Whether the root cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Io(e) => e.kind() == io::ErrorKind::NotFound,
            Error::Csv(e) => match e.kind() {
                csv::ErrorKind::Io(io_err) => io_err.kind() == io::ErrorKind::NotFound,
                _ => false,
            },
            Error::Http(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

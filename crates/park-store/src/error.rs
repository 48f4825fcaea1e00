//! Store-specific error types.
//!
//! Every variant carries the file path so failures in a session with
//! several candidate data files point at the right one.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from record store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the data file failed.
    #[error("record store I/O failed at {path}: {source}")]
    Io {
        /// Path of the data file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A row could not be encoded or decoded.
    ///
    /// The csv error includes the row position for malformed input.
    #[error("malformed record in {path}: {source}")]
    Csv {
        /// Path of the data file.
        path: PathBuf,
        /// Underlying CSV error.
        source: csv::Error,
    },
}

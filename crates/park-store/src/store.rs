//! # CSV Record Store
//!
//! Reads and writes the one-row-per-ticket schema. Load and save are the
//! only operations; both move whole record sequences, never partial
//! updates.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use park_engine::TicketRecord;

use crate::error::StoreError;

/// A flat record store backed by one CSV file.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a store over the given file path. The file is not touched
    /// until [`load()`](Self::load) or [`save()`](Self::save).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every ticket row from the file.
    ///
    /// A missing file is an empty history, not an error — the first
    /// session starts with no records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] on read failure and
    /// [`StoreError::Csv`] for rows that do not match the schema.
    pub fn load(&self) -> Result<Vec<TicketRecord>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut reader = csv::Reader::from_reader(BufReader::new(file));
        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: TicketRecord = row.map_err(|source| StoreError::Csv {
                path: self.path.clone(),
                source,
            })?;
            records.push(record);
        }
        Ok(records)
    }

    /// Write the full record sequence, replacing the file contents.
    ///
    /// Open tickets serialize with empty `exit_time` and `fee` fields.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] on write failure and
    /// [`StoreError::Csv`] if a record cannot be encoded.
    pub fn save(&self, records: &[TicketRecord]) -> Result<(), StoreError> {
        let file = File::create(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        let mut writer = csv::Writer::from_writer(BufWriter::new(file));
        for record in records {
            writer.serialize(record).map_err(|source| StoreError::Csv {
                path: self.path.clone(),
                source,
            })?;
        }
        writer.flush().map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

//! JSON intake reader.
//!
//! Reads a `ResponseRecord` serialized with the camelCase answer keys the
//! questionnaire produces. Unknown keys are ignored and unknown answer values
//! are kept as unrecognized, so only malformed JSON or a wrong value shape
//! fails here.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::domain::intake::ResponseRecord;

/// Errors reading an intake document.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Failed to read intake: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed intake JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Reads intake answers from JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonIntakeReader;

impl JsonIntakeReader {
    /// Parses a record from a JSON string.
    pub fn parse_str(json: &str) -> Result<ResponseRecord, IntakeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a record from any reader, such as stdin.
    pub fn from_reader<R: Read>(reader: R) -> Result<ResponseRecord, IntakeError> {
        Ok(serde_json::from_reader(BufReader::new(reader))?)
    }

    /// Parses a record from a file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ResponseRecord, IntakeError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }
}

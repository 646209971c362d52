//! Attempt-log persistence using `MessagePack`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tereo_foundation::{Error, ErrorKind, Result};

use crate::attempts::AttemptLog;

/// Serializes an attempt log to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(log: &AttemptLog) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(log).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Deserializes an attempt log from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<AttemptLog> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::new(ErrorKind::Serialization(e.to_string())))
}

/// Saves an attempt log to a file, overwriting it if it exists.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(log: &AttemptLog, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::io(format!("failed to create file '{}': {e}", path.display())))?;

    let mut writer = BufWriter::new(file);
    let bytes = to_bytes(log)?;

    writer
        .write_all(&bytes)
        .and_then(|()| writer.flush())
        .map_err(|e| Error::io(format!("failed to write to file '{}': {e}", path.display())))
}

/// Loads an attempt log from a `MessagePack` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<AttemptLog> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::io(format!("failed to open file '{}': {e}", path.display())))?;

    let mut bytes = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("failed to read file '{}': {e}", path.display())))?;

    from_bytes(&bytes)
}

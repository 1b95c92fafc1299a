//! Whole-list load and save against named files.
//!
//! Each call opens its file once and the handle is closed before the call
//! returns, on success and on error alike. Nothing here touches a
//! [`Registry`](crate::registry::Registry); callers decide what to do with
//! the loaded list.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use crate::codec::Format;
use crate::error::StorageError;
use crate::model::Employee;
use crate::utils::filename::is_valid_base_name;

/// `dir/<base>.<extension>` for a validated base name.
pub fn resolve(dir: &Path, base: &str, format: Format) -> Result<PathBuf, StorageError> {
    if !is_valid_base_name(base) {
        return Err(StorageError::InvalidFileName(base.to_string()));
    }
    Ok(dir.join(format!("{}.{}", base, format.extension())))
}

/// Encodes the list in memory first so a failed encode never leaves a file behind.
pub fn save(
    dir: &Path,
    base: &str,
    format: Format,
    employees: &[Employee],
) -> Result<PathBuf, StorageError> {
    let path = resolve(dir, base, format)?;
    let document = format.encode(employees)?;

    let mut writer = BufWriter::new(File::create(&path)?);
    writer.write_all(document.as_bytes())?;
    writer.flush()?;

    Ok(path)
}

pub fn load(dir: &Path, base: &str, format: Format) -> Result<Vec<Employee>, StorageError> {
    let path = resolve(dir, base, format)?;

    let file = File::open(&path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => StorageError::NotFound(path.clone()),
        _ => StorageError::Io(e),
    })?;

    let mut document = String::new();
    BufReader::new(file).read_to_string(&mut document)?;

    Ok(format.decode(&document)?)
}

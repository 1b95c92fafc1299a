use std::path::PathBuf;

use thiserror::Error;

use crate::codec::Format;

/// Rejections raised while building or inserting an employee.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("expected {expected} fields, got {actual}")]
    MissingFields { expected: usize, actual: usize },

    #[error("unknown position `{0}`")]
    UnknownPosition(String),

    #[error("id must be an integer, got `{0}`")]
    InvalidId(String),

    #[error("id {0} is already taken")]
    DuplicateId(i32),

    #[error("{field} `{value}` has leading or trailing whitespace")]
    PaddedField { field: &'static str, value: String },
}

/// Registry views that cannot be produced for the current contents.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("the registry is empty")]
    Empty,

    #[error("not enough employees: need {needed}, have {available}")]
    InsufficientEmployees { needed: usize, available: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("failed to encode {format}: {message}")]
    Encode { format: Format, message: String },

    #[error("failed to decode {format}: {message}")]
    Decode { format: Format, message: String },

    #[error("unknown employee type `{0}`")]
    UnknownVariant(String),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("file name `{0}` contains invalid characters")]
    InvalidFileName(String),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

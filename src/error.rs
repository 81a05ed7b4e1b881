use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AddressBookError {
    #[error("Contact not found: {name}")]
    NotFound { name: String },

    #[error("No duplicate contacts found for: {name}")]
    NoDuplicates { name: String },

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AddressBookResult<T> = Result<T, AddressBookError>;

//! Errors raised by the persistence layer.
//!
//! Missing snacks and unavailable snacks are not errors; see
//! [`crate::inventory::Outcome`] and [`crate::inventory::SaleOutcome`].

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum StorageError {
    /// The inventory file exists but could not be read or written.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The inventory file is not valid JSON, or a record is missing a field.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// A snack's price cannot be written in a form that loads back.
    InvalidPrice { path: PathBuf, id: i64, price: f64 },
}

impl StorageError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::InvalidPrice { path, .. } => path,
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot access {}: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "invalid inventory data in {}: {source}", path.display())
            }
            Self::InvalidPrice { path, id, price } => write!(
                f,
                "refusing to write {}: snack {id} has price {price}, expected a finite non-negative number",
                path.display()
            ),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::InvalidPrice { .. } => None,
        }
    }
}

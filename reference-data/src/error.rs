//! Reference-data error types.
//!
//! Any fault loading a reference table is fatal at process startup; callers
//! surface these through their own error chain.

use thiserror::Error;

/// Errors that can occur when loading reference tables.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, DataError>;

//! Error taxonomy for the extraction pipeline.
//!
//! Schema problems and an empty result get dedicated process exit codes so
//! that callers can tell a malformed catalog from a misconfigured filter.
//! Network, decompression, and I/O failures are fatal without a reserved
//! code.

use thiserror::Error;

/// Exit code for schema failures (missing header or required columns).
pub const EXIT_SCHEMA: u8 = 1;

/// Exit code for a run that parsed cleanly but kept zero stars.
pub const EXIT_EMPTY: u8 = 2;

/// Errors that can occur during a pipeline run.
#[derive(Error, Debug)]
pub enum StarmapError {
    /// Download failure: connection, timeout, or non-success HTTP status.
    #[error("download failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The downloaded bytes are not a well-formed gzip stream.
    #[error("gzip decompression failed: {0}")]
    Gzip(#[source] std::io::Error),

    /// The decoded catalog text contains no header row.
    #[error("catalog has no header row")]
    NoHeader,

    /// The header row lacks one or more required columns.
    #[error("catalog header is missing required columns: {missing:?}")]
    MissingColumns {
        /// Required column names absent from the header.
        missing: Vec<String>,
        /// Every column name the header did contain, for diagnostics.
        found: Vec<String>,
    },

    /// The pass finished without retaining a single star.
    #[error("no stars passed the filters ({total} rows scanned)")]
    EmptyCatalog { total: u64 },

    /// Output file creation or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StarmapError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            StarmapError::NoHeader | StarmapError::MissingColumns { .. } => EXIT_SCHEMA,
            StarmapError::EmptyCatalog { .. } => EXIT_EMPTY,
            // Network/format/I-O failures carry no reserved code.
            _ => 1,
        }
    }
}

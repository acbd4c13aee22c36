//! Naked-eye star map extraction from the HYG star catalog
//!
//! This crate implements a linear extract-transform-load pipeline:
//! download the gzip-compressed catalog over HTTP, decompress it,
//! filter rows to stars visible to the naked eye, and write a compact
//! fixed-precision CSV for an external rendering engine.

pub mod catalog;
pub mod config;
pub mod error;
pub mod fetch;
pub mod filter;
pub mod gunzip;
pub mod pipeline;
pub mod rows;
pub mod writer;

pub use catalog::{pick_name, StarRecord};
pub use config::{Config, DEFAULT_CATALOG_URL, DEFAULT_TIMEOUT, NAKED_EYE_MAG_LIMIT};
pub use error::StarmapError;
pub use filter::{evaluate, PassCounters, RowOutcome};
pub use pipeline::{run, run_from_bytes};
pub use rows::{parse_float, parse_float_or, parse_string, CatalogRows, Columns, Row};
pub use writer::{CatalogWriter, OUTPUT_COLUMNS};

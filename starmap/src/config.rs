//! Pipeline configuration
//!
//! All knobs are collected into a single [`Config`] built once at startup
//! and passed explicitly to each stage. Nothing in the pipeline reads
//! configuration from ambient state.

use std::path::PathBuf;
use std::time::Duration;

/// HYG v4.2 catalog export, gzip-compressed CSV with a header row.
pub const DEFAULT_CATALOG_URL: &str =
    "https://www.astronexus.com/downloads/catalogs/hygdata_v42.csv.gz";

/// Conventional dark-sky naked-eye visibility threshold in apparent magnitude.
pub const NAKED_EYE_MAG_LIMIT: f64 = 6.0;

/// Default download timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings for one pipeline run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Source URL of the compressed catalog.
    pub url: String,
    /// Output CSV path.
    pub out: PathBuf,
    /// Keep only rows with apparent magnitude at or below this ceiling.
    pub mag_max: f64,
    /// Timeout applied to the whole download request.
    pub timeout: Duration,
    /// Stop scanning once this many input rows were seen (0 = no limit).
    pub max_rows: u64,
}

impl Config {
    /// Config with catalog defaults, writing to the given path.
    pub fn new(out: impl Into<PathBuf>) -> Self {
        Self {
            url: DEFAULT_CATALOG_URL.to_string(),
            out: out.into(),
            mag_max: NAKED_EYE_MAG_LIMIT,
            timeout: DEFAULT_TIMEOUT,
            max_rows: 0,
        }
    }
}

//! Pipeline orchestration: fetch, decompress, filter, write.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::config::Config;
use crate::error::StarmapError;
use crate::fetch;
use crate::filter::{self, PassCounters, RowOutcome};
use crate::gunzip;
use crate::rows::CatalogRows;
use crate::writer::CatalogWriter;

/// Run the full pipeline: download the catalog and write the filtered CSV.
///
/// Returns the pass counters on success. Keeping zero stars is an error
/// (`EmptyCatalog`) even though the output file was written with its header.
pub fn run(config: &Config) -> Result<PassCounters, StarmapError> {
    let compressed = fetch::download(&config.url, config.timeout)?;
    run_from_bytes(&compressed, config)
}

/// Everything after the download: decompress, validate, filter, write.
///
/// The output file is created only once the header has validated, so a
/// schema failure leaves no file behind.
pub fn run_from_bytes(compressed: &[u8], config: &Config) -> Result<PassCounters, StarmapError> {
    let text = gunzip::decompress_text(compressed)?;
    let rows = CatalogRows::parse(&text)?;

    let file = File::create(&config.out)?;
    let counters = process(rows, config, BufWriter::new(file))?;

    log::info!(
        "total={} kept={} dropped_missing={} dropped_mag={}",
        counters.total,
        counters.kept,
        counters.dropped_missing,
        counters.dropped_mag
    );

    if counters.kept == 0 {
        return Err(StarmapError::EmptyCatalog {
            total: counters.total,
        });
    }
    Ok(counters)
}

/// Single pass over the rows, writing retained stars as they are seen.
pub fn process<W: Write>(
    rows: CatalogRows<'_>,
    config: &Config,
    out: W,
) -> Result<PassCounters, StarmapError> {
    let columns = rows.columns().clone();
    let mut writer = CatalogWriter::new(out);
    writer.write_header()?;

    let mut counters = PassCounters::default();
    for row in rows {
        counters.total += 1;
        // Debug cap: the row that crosses the limit still counts as seen.
        if config.max_rows > 0 && counters.total > config.max_rows {
            break;
        }

        match filter::evaluate(&row, &columns, config.mag_max) {
            RowOutcome::Kept(star) => {
                writer.write_record(&star)?;
                counters.kept += 1;
            }
            RowOutcome::MissingField => counters.dropped_missing += 1,
            RowOutcome::TooFaint => counters.dropped_mag += 1,
            RowOutcome::Sun => {}
        }
    }

    writer.finish()?;
    Ok(counters)
}

//! Per-row retain/drop decision and pass counters.

use crate::catalog::{pick_name, StarRecord};
use crate::rows::{parse_float, parse_float_or, parse_string, Columns, Row};

/// Outcome of evaluating one input row.
#[derive(Debug)]
pub enum RowOutcome {
    /// Row passed every filter; write this record.
    Kept(StarRecord),
    /// At least one of ra/dec/mag is absent or not a finite number.
    MissingField,
    /// Magnitude above the configured ceiling.
    TooFaint,
    /// The Sun; dropped without touching any drop counter.
    Sun,
}

/// Running counters for one pass over the catalog.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassCounters {
    /// Rows seen, including ones dropped later.
    pub total: u64,
    /// Rows written to the output.
    pub kept: u64,
    /// Rows dropped for missing/unparsable required fields.
    pub dropped_missing: u64,
    /// Rows dropped for exceeding the magnitude ceiling.
    pub dropped_mag: u64,
}

/// Decide whether to keep one row, building the record if so.
///
/// Check order matters: missing required fields first, then the magnitude
/// ceiling, then the Sun exclusion. A `Sol` row above the ceiling therefore
/// counts as too faint, and only in-range Sun rows are dropped silently.
pub fn evaluate(row: &Row<'_>, columns: &Columns, mag_max: f64) -> RowOutcome {
    let (Some(ra), Some(dec), Some(mag)) = (
        parse_float(row.get(columns.ra)),
        parse_float(row.get(columns.dec)),
        parse_float(row.get(columns.mag)),
    ) else {
        return RowOutcome::MissingField;
    };

    if mag > mag_max {
        return RowOutcome::TooFaint;
    }

    let id = parse_string(row.get(columns.id));
    let proper = parse_string(row.get_opt(columns.proper));
    let bf = parse_string(row.get_opt(columns.bf));
    let name = pick_name(&proper, &bf).to_string();

    let star = StarRecord {
        id,
        name,
        proper,
        bf,
        ra,
        dec,
        mag,
        ci: parse_float_or(row.get_opt(columns.ci), 0.0),
        dist: parse_float_or(row.get_opt(columns.dist), 0.0),
        x: parse_float_or(row.get_opt(columns.x), 0.0),
        y: parse_float_or(row.get_opt(columns.y), 0.0),
        z: parse_float_or(row.get_opt(columns.z), 0.0),
        spect: parse_string(row.get_opt(columns.spect)),
        con: parse_string(row.get_opt(columns.con)),
    };

    if star.is_sun() {
        return RowOutcome::Sun;
    }
    RowOutcome::Kept(star)
}

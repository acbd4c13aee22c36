//! Row parsing and field coercion for the decoded catalog text.
//!
//! The catalog is comma-delimited with a mandatory header row. Parsing is a
//! single forward pass: [`CatalogRows`] yields one [`Row`] per non-blank
//! line and is not restartable. Field values are never validated here
//! beyond coercion; the filter stage decides what to keep.

use std::str::Lines;

use crate::error::StarmapError;

/// Columns that must be present in the header.
pub const REQUIRED_COLUMNS: [&str; 4] = ["id", "ra", "dec", "mag"];

/// Header column positions resolved once per run.
///
/// Required columns are plain indices; optional columns may be absent from
/// the export entirely.
#[derive(Debug, Clone)]
pub struct Columns {
    pub id: usize,
    pub ra: usize,
    pub dec: usize,
    pub mag: usize,
    pub proper: Option<usize>,
    pub bf: Option<usize>,
    pub ci: Option<usize>,
    pub dist: Option<usize>,
    pub x: Option<usize>,
    pub y: Option<usize>,
    pub z: Option<usize>,
    pub spect: Option<usize>,
    pub con: Option<usize>,
}

impl Columns {
    /// Resolve column positions from header names.
    ///
    /// Reports every missing required column at once, along with the names
    /// that were found, so a renamed export is diagnosable in one run.
    fn resolve(names: &[String]) -> Result<Self, StarmapError> {
        let position = |name: &str| names.iter().position(|n| n == name);

        let (Some(id), Some(ra), Some(dec), Some(mag)) = (
            position("id"),
            position("ra"),
            position("dec"),
            position("mag"),
        ) else {
            let mut missing = Vec::new();
            for name in REQUIRED_COLUMNS {
                if position(name).is_none() {
                    missing.push(name.to_string());
                }
            }
            return Err(StarmapError::MissingColumns {
                missing,
                found: names.to_vec(),
            });
        };

        Ok(Columns {
            id,
            ra,
            dec,
            mag,
            proper: position("proper"),
            bf: position("bf"),
            ci: position("ci"),
            dist: position("dist"),
            x: position("x"),
            y: position("y"),
            z: position("z"),
            spect: position("spect"),
            con: position("con"),
        })
    }
}

/// One data row, split into raw fields.
#[derive(Debug)]
pub struct Row<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    /// Raw field at a resolved column, `None` if the line is short.
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    /// Raw field at an optional column.
    pub fn get_opt(&self, index: Option<usize>) -> Option<&'a str> {
        index.and_then(|i| self.get(i))
    }
}

/// Lazy single-pass iterator over catalog data rows.
#[derive(Debug)]
pub struct CatalogRows<'a> {
    columns: Columns,
    lines: Lines<'a>,
}

impl<'a> CatalogRows<'a> {
    /// Read and validate the header row, leaving the iterator positioned at
    /// the first data row.
    pub fn parse(text: &'a str) -> Result<Self, StarmapError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(StarmapError::NoHeader)?;
        let names: Vec<String> = header.split(',').map(str::to_string).collect();
        let columns = Columns::resolve(&names)?;
        Ok(CatalogRows { columns, lines })
    }

    /// Column positions resolved from the header.
    pub fn columns(&self) -> &Columns {
        &self.columns
    }
}

impl<'a> Iterator for CatalogRows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        loop {
            let line = self.lines.next()?;
            if line.trim().is_empty() {
                continue;
            }
            return Some(Row {
                fields: line.split(',').collect(),
            });
        }
    }
}

/// Coerce a raw field to a finite float.
///
/// Whitespace is trimmed; empty, unparsable, and non-finite input all yield
/// `None` so downstream filtering treats them uniformly as absent.
pub fn parse_float(field: Option<&str>) -> Option<f64> {
    let trimmed = field?.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Coerce a raw field to a float, falling back to a default when absent.
pub fn parse_float_or(field: Option<&str>, default: f64) -> f64 {
    parse_float(field).unwrap_or(default)
}

/// Coerce a raw field to a trimmed string, empty when absent.
pub fn parse_string(field: Option<&str>) -> String {
    field.map(str::trim).unwrap_or_default().to_string()
}

//! Star record model.

/// One retained catalog star, ready for serialization.
///
/// Records are transient: built per input row, immediately written or
/// discarded, never stored across the pass. Optional numeric fields default
/// to 0.0 and optional string fields to empty.
#[derive(Debug, Clone, PartialEq)]
pub struct StarRecord {
    /// Catalog-unique identifier.
    pub id: String,
    /// Display name: proper name if present, else Bayer/Flamsteed, else empty.
    pub name: String,
    /// IAU/common name.
    pub proper: String,
    /// Bayer/Flamsteed designation.
    pub bf: String,
    /// Right ascension.
    pub ra: f64,
    /// Declination.
    pub dec: f64,
    /// Apparent magnitude (lower is brighter).
    pub mag: f64,
    /// Color index.
    pub ci: f64,
    /// Distance in parsecs.
    pub dist: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Spectral type.
    pub spect: String,
    /// Constellation code.
    pub con: String,
}

impl StarRecord {
    /// The Sun appears in the catalog as id `"0"` / proper `"Sol"` and is
    /// never part of a night-sky map.
    pub fn is_sun(&self) -> bool {
        self.id == "0" || self.proper == "Sol" || self.name == "Sol"
    }
}

/// Display-name precedence: proper name, then Bayer/Flamsteed designation.
pub fn pick_name<'a>(proper: &'a str, bf: &'a str) -> &'a str {
    if !proper.is_empty() {
        proper
    } else if !bf.is_empty() {
        bf
    } else {
        ""
    }
}

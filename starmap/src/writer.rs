//! Fixed-precision CSV output.
//!
//! Column order and numeric precision are a contract with the downstream
//! renderer: ra/dec carry 8 decimal places, magnitudes and color index 3,
//! distance and cartesian coordinates 6. Identical input must produce
//! byte-identical output.

use std::io::{self, Write};

use crate::catalog::StarRecord;

/// Output column order.
pub const OUTPUT_COLUMNS: [&str; 14] = [
    "id", "name", "proper", "bf", "ra", "dec", "mag", "ci", "dist", "x", "y", "z", "spect", "con",
];

/// Serializes retained stars row-by-row to any writer.
pub struct CatalogWriter<W: Write> {
    out: W,
}

impl<W: Write> CatalogWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write the fixed header row.
    pub fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", OUTPUT_COLUMNS.join(","))
    }

    /// Write one star with the fixed numeric precision.
    pub fn write_record(&mut self, star: &StarRecord) -> io::Result<()> {
        writeln!(
            self.out,
            "{},{},{},{},{:.8},{:.8},{:.3},{:.3},{:.6},{:.6},{:.6},{:.6},{},{}",
            star.id,
            star.name,
            star.proper,
            star.bf,
            star.ra,
            star.dec,
            star.mag,
            star.ci,
            star.dist,
            star.x,
            star.y,
            star.z,
            star.spect,
            star.con,
        )
    }

    /// Flush buffered output at the end of the pass.
    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sirius() -> StarRecord {
        StarRecord {
            id: "32263".to_string(),
            name: "Sirius".to_string(),
            proper: "Sirius".to_string(),
            bf: "9Alp CMa".to_string(),
            ra: 101.28715539,
            dec: -16.71611582,
            mag: -1.46,
            ci: 0.009,
            dist: 2.6371,
            x: -0.494323,
            y: 8.29,
            z: -2.45,
            spect: "A1V".to_string(),
            con: "CMa".to_string(),
        }
    }

    fn written(star: &StarRecord) -> String {
        let mut buf = Vec::new();
        let mut writer = CatalogWriter::new(&mut buf);
        writer.write_record(star).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_matches_column_contract() {
        let mut buf = Vec::new();
        let mut writer = CatalogWriter::new(&mut buf);
        writer.write_header().unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "id,name,proper,bf,ra,dec,mag,ci,dist,x,y,z,spect,con\n"
        );
    }

    #[test]
    fn record_uses_fixed_precision() {
        assert_eq!(
            written(&sirius()),
            "32263,Sirius,Sirius,9Alp CMa,101.28715539,-16.71611582,-1.460,0.009,2.637100,-0.494323,8.290000,-2.450000,A1V,CMa\n"
        );
    }

    #[test]
    fn short_values_are_zero_padded() {
        let star = StarRecord {
            ra: 10.5,
            dec: -8.0,
            mag: 2.0,
            ..sirius()
        };
        let line = written(&star);
        assert!(line.contains("10.50000000"));
        assert!(line.contains("-8.00000000"));
        assert!(line.contains(",2.000,"));
    }

    #[test]
    fn defaulted_fields_render_as_zeros_and_blanks() {
        let star = StarRecord {
            id: "9".to_string(),
            name: String::new(),
            proper: String::new(),
            bf: String::new(),
            ra: 0.0,
            dec: 0.0,
            mag: 0.0,
            ci: 0.0,
            dist: 0.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            spect: String::new(),
            con: String::new(),
        };
        assert_eq!(
            written(&star),
            "9,,,,0.00000000,0.00000000,0.000,0.000,0.000000,0.000000,0.000000,0.000000,,\n"
        );
    }
}

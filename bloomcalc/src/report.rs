use std::{fmt::Display, io::Write};

use crate::{
    storage::{bits_in_mega, entries_in_mega, storage_in_giga},
    utils::ByteSize,
    Error, Sizing,
};

/// Human readable summary of a [Sizing] along with storage estimates
#[derive(Debug, Clone, Copy)]
pub struct Report {
    pub sizing: Sizing,
    /// per entry cost, in bits, of the storage we compare with
    pub entry_bits: u64,
}

impl Report {
    pub fn new(sizing: Sizing, entry_bits: u64) -> Self {
        Self { sizing, entry_bits }
    }

    #[inline]
    pub fn write<W: Write>(&self, w: &mut W) -> Result<(), Error> {
        write!(w, "{self}")?;
        Ok(())
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = &self.sizing;
        let entry_size = ByteSize::from_bits(self.entry_bits);

        writeln!(
            f,
            "Number of entries in Mo: {:?}",
            entries_in_mega(s.capacity)
        )?;
        writeln!(
            f,
            "Total storage in Go ({entry_size} per entry): {}",
            storage_in_giga(s.capacity, self.entry_bits)
        )?;
        writeln!(f, "{}", s.bit_size)?;
        writeln!(f, "m (in Mo) {} k {}", bits_in_mega(s.bit_size), s.k)?;
        writeln!(f, "   proba of false positive {}", s.fpp)?;

        // a NaN or negative size has no meaningful byte representation
        if s.bit_size.is_finite() && s.bit_size >= 0.0 {
            writeln!(
                f,
                "   size of bloom filter {}",
                ByteSize::from_bits(s.bit_size as u64)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::storage::ENTRY_SIZE_64KB;

    use super::*;

    #[test]
    fn test_default_report() {
        let r = Report::new(Sizing::default(), ENTRY_SIZE_64KB);
        let mut out = vec![];
        r.write(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines = out.lines().collect::<Vec<&str>>();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Number of entries in Mo: 1.0");
        assert_eq!(lines[1], "Total storage in Go (64.0KB per entry): 512");
        assert_eq!(lines[2], "120607947");
        assert_eq!(lines[3], "m (in Mo) 14 k 10");
        assert!(lines[4].starts_with("   proba of false positive 0.00100"));
        assert_eq!(lines[5], "   size of bloom filter 14.4MB");
    }

    #[test]
    fn test_report_invalid_fpp() {
        let r = Report::new(Sizing::new(1000.0, -1.0), ENTRY_SIZE_64KB);
        let out = r.to_string();
        let lines = out.lines().collect::<Vec<&str>>();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "Total storage in Go (64.0KB per entry): 0");
        assert_eq!(lines[2], "NaN");
        assert_eq!(lines[3], "m (in Mo) NaN k NaN");
        assert!(lines[4].ends_with("NaN"));
    }

    #[test]
    fn test_report_zero_fpp() {
        let r = Report::new(Sizing::new(1000.0, 0.0), ENTRY_SIZE_64KB);
        let out = r.to_string();
        let lines = out.lines().collect::<Vec<&str>>();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "inf");
        assert_eq!(lines[3], "m (in Mo) inf k inf");
        assert!(lines[4].ends_with("NaN"));
    }

    #[test]
    fn test_report_negative_capacity() {
        let r = Report::new(Sizing::new(-5.0, 0.001), ENTRY_SIZE_64KB);
        let out = r.to_string();
        let lines = out.lines().collect::<Vec<&str>>();

        // negative storage is shown instead of a plausible zero
        assert_eq!(lines[1], "Total storage in Go (64.0KB per entry): -0");
        assert!(lines[2].starts_with('-'));
    }
}

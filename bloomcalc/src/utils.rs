use std::{fmt::Display, str::FromStr};

use crate::Error;

/// A size in bytes tagged with the unit it is best displayed with
#[derive(Debug, Clone, Copy)]
pub enum ByteSize {
    Bytes(u64),
    Kilo(u64),
    Mega(u64),
    Giga(u64),
}

impl Eq for ByteSize {}

impl PartialEq for ByteSize {
    fn eq(&self, other: &Self) -> bool {
        self.in_bytes() == other.in_bytes()
    }
}

impl PartialOrd for ByteSize {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.in_bytes().cmp(&other.in_bytes()))
    }
}

pub const KILO: u64 = 1 << 10;
pub const MEGA: u64 = 1 << 20;
pub const GIGA: u64 = 1 << 30;

impl Display for ByteSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}{}", self.in_unit(), self.unit_str())
    }
}

impl FromStr for ByteSize {
    type Err = Error;

    /// Parses sizes like `512`, `64KB`, `1.5MB` or `2G`. Multiples are
    /// binary ones (1KB = 1024B).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(s.len());
        let (value, unit) = s.split_at(split);

        let value: f64 = value
            .parse()
            .map_err(|_| Error::InvalidByteSize(s.to_string()))?;

        let mult = match unit.trim().to_ascii_uppercase().as_str() {
            "" | "B" => 1,
            "K" | "KB" | "KO" => KILO,
            "M" | "MB" | "MO" => MEGA,
            "G" | "GB" | "GO" => GIGA,
            _ => return Err(Error::InvalidByteSize(s.to_string())),
        };

        // sizes must stay representable in bits
        let bytes = value * mult as f64;
        if !bytes.is_finite() || bytes >= u64::MAX as f64 {
            return Err(Error::InvalidByteSize(s.to_string()));
        }
        let bytes = bytes as u64;
        bytes
            .checked_mul(8)
            .ok_or_else(|| Error::InvalidByteSize(s.to_string()))?;

        Ok(Self::from_bytes(bytes))
    }
}

impl ByteSize {
    #[inline(always)]
    pub fn from_bits(b: u64) -> Self {
        Self::from_bytes(b / 8)
    }

    #[inline(always)]
    pub fn from_bytes(b: u64) -> Self {
        if b < KILO {
            Self::Bytes(b)
        } else if b < MEGA {
            Self::Kilo(b)
        } else if b < GIGA {
            Self::Mega(b)
        } else {
            Self::Giga(b)
        }
    }

    #[inline(always)]
    fn unit_str(&self) -> &'static str {
        match self {
            Self::Bytes(_) => "B",
            Self::Kilo(_) => "KB",
            Self::Mega(_) => "MB",
            Self::Giga(_) => "GB",
        }
    }

    #[inline(always)]
    pub fn in_bytes(&self) -> u64 {
        match self {
            Self::Bytes(b) | Self::Kilo(b) | Self::Mega(b) | Self::Giga(b) => *b,
        }
    }

    #[inline(always)]
    pub fn in_bits(&self) -> u64 {
        self.in_bytes().saturating_mul(8)
    }

    #[inline(always)]
    pub fn in_unit(&self) -> f64 {
        match self {
            Self::Bytes(b) => *b as f64,
            Self::Kilo(b) => *b as f64 / KILO as f64,
            Self::Mega(b) => *b as f64 / MEGA as f64,
            Self::Giga(b) => *b as f64 / GIGA as f64,
        }
    }
}

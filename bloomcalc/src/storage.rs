//! Storage estimates expressed with bit based units.
//!
//! These compare the size of a bloom filter with a scheme storing a fixed
//! amount of data per entry.

/// 64KB in bits, the default per entry cost of the alternative storage
pub const ENTRY_SIZE_64KB: u64 = 8 * (1 << 16);
/// one megabyte in bits
pub const M: u64 = 8 * (1 << 20);
/// one gigabyte in bits
pub const G: u64 = 8 * (1 << 30);

/// Number of entries divided by [M], not truncated
#[inline(always)]
pub fn entries_in_mega(n: f64) -> f64 {
    n / M as f64
}

/// Size in gigabytes, truncated, needed to store `n` entries when each one
/// costs `entry_bits` bits. NaN and infinite values are kept as is.
#[inline(always)]
pub fn storage_in_giga(n: f64, entry_bits: u64) -> f64 {
    ((n * entry_bits as f64) / G as f64).trunc()
}

/// Bit size converted into megabytes, truncated
#[inline(always)]
pub fn bits_in_mega(bit_size: f64) -> f64 {
    (bit_size / M as f64).trunc()
}

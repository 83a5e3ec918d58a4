use std::f64::consts::LN_2;

/// Optimal size in bits of a bloom filter holding `cap` entries with a
/// false positive probability of `proba`.
///
/// Inputs are not checked: a `proba` outside (0, 1) or a non positive `cap`
/// yields NaN or an infinite value.
#[inline(always)]
pub fn bit_size(cap: f64, proba: f64) -> f64 {
    f64::ceil((cap * f64::ln(proba)) / f64::ln(1.0 / f64::powf(2.0, LN_2)))
}

/// Optimal number of hash functions for a filter of `bit_size` bits
/// holding `cap` entries. Halves are rounded away from zero.
#[inline(always)]
pub fn hash_count(bit_size: f64, cap: f64) -> f64 {
    f64::round(LN_2 * bit_size / cap)
}

#[inline(always)]
/// false positive probability of a filter of `bit_size` bits using `k`
/// hash functions once `n` entries are inserted
pub fn false_positive_rate(n: f64, bit_size: f64, k: f64) -> f64 {
    (1.0 - f64::exp(-k * n / bit_size)).powf(k)
}

/// Parameters of a bloom filter derived from a capacity and a target
/// false positive probability
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Sizing {
    /// expected number of entries
    pub capacity: f64,
    /// desired false positive probability
    pub target_fpp: f64,
    /// size of the bit array in bits
    pub bit_size: f64,
    /// number of hash functions
    pub k: f64,
    /// false positive probability reached with `bit_size` and `k`
    pub fpp: f64,
}

impl Sizing {
    pub fn new(capacity: f64, target_fpp: f64) -> Self {
        let bit_size = bit_size(capacity, target_fpp);
        let k = hash_count(bit_size, capacity);
        let fpp = false_positive_rate(capacity, bit_size, k);

        log::debug!(
            "sizing capacity={capacity} target_fpp={target_fpp}: m={bit_size} k={k} fpp={fpp}"
        );

        Self {
            capacity,
            target_fpp,
            bit_size,
            k,
            fpp,
        }
    }

    #[inline(always)]
    pub fn bits_per_entry(&self) -> f64 {
        self.bit_size / self.capacity
    }
}

impl Default for Sizing {
    fn default() -> Self {
        Self::new(crate::DEFAULT_CAPACITY, crate::DEFAULT_FPP)
    }
}

use std::io;
use thiserror::Error;

mod sizing;
pub use sizing::*;

pub mod report;
pub mod storage;
pub mod utils;

/// Expected number of entries used when none is given (2^23)
pub const DEFAULT_CAPACITY: f64 = (1u64 << 23) as f64;
/// Target false positive probability used when none is given
pub const DEFAULT_FPP: f64 = 0.001;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    IoError(#[from] io::Error),
    #[error("invalid byte size: {0}")]
    InvalidByteSize(String),
}

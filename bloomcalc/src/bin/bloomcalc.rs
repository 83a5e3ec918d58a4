use std::io;

use bloomcalc::{
    report::Report, storage::ENTRY_SIZE_64KB, utils::ByteSize, Sizing, DEFAULT_CAPACITY,
    DEFAULT_FPP,
};
use clap::Parser;
use log::LevelFilter;

#[derive(Debug, Parser)]
#[clap(about = "Estimates optimal bloom filter parameters")]
pub struct Args {
    /// Verbose output
    #[clap(short, long)]
    verbose: bool,
    /// Expected number of entries in the filter
    #[clap(short, long, default_value_t = DEFAULT_CAPACITY)]
    capacity: f64,
    /// Target false positive probability. It is not checked, values
    /// outside ]0, 1[ give meaningless (NaN) results.
    #[clap(short, long, default_value_t = DEFAULT_FPP)]
    probability: f64,
    /// Size of an entry in the storage scheme the filter is compared
    /// with (ex: 512, 64KB, 1MB)
    #[clap(short, long, default_value_t = ByteSize::from_bits(ENTRY_SIZE_64KB))]
    entry_size: ByteSize,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    log::debug!(
        "capacity={} probability={} entry_size={}",
        args.capacity,
        args.probability,
        args.entry_size
    );

    let s = Sizing::new(args.capacity, args.probability);
    log::debug!("bits per entry: {}", s.bits_per_entry());

    Report::new(s, args.entry_size.in_bits()).write(&mut io::stdout().lock())?;

    Ok(())
}

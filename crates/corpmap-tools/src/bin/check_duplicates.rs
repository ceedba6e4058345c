//! Report duplicate company names in a companies file.
//!
//! Duplicates are reported, not treated as failure: the exit code is non-zero
//! only when the file is missing or malformed.

use anyhow::Result;
use clap::Parser;
use corpmap_tools::{init_logging, run_check, CheckArgs};

fn main() -> Result<()> {
    let args = CheckArgs::parse();
    init_logging(args.verbose);

    println!("{}", run_check(&args)?);
    Ok(())
}

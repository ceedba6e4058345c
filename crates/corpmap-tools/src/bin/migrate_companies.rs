//! One-time migration of the legacy companies file to the name-keyed schema.
//!
//! Usage:
//!   migrate-companies --input static/companies-legacy.json --output static/companies.json

use anyhow::Result;
use clap::Parser;
use corpmap_tools::{init_logging, run_migrate, MigrateArgs};

fn main() -> Result<()> {
    let args = MigrateArgs::parse();
    init_logging(args.verbose);

    println!("{}", run_migrate(&args)?);
    Ok(())
}

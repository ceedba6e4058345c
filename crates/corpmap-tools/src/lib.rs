//! Shared plumbing for the batch tools.
//!
//! Both tools take their file paths as arguments, log to stderr and print
//! their report to stdout.

use clap::Parser;
use corpmap_core::config::PathsConfig;
use corpmap_core::duplicates::{check_file, DuplicateReport};
use corpmap_core::migration::{migrate_file, CollisionPolicy, MigrationOptions, MigrationSummary};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Directives used when `RUST_LOG` is unset.
pub fn default_log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose { "debug" } else { "info" })
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the level.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_filter(verbose));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[derive(Parser, Debug, Clone)]
#[command(name = "migrate-companies")]
#[command(about = "Convert a legacy companies file to the name-keyed schema")]
pub struct MigrateArgs {
    /// Legacy array-of-companies file
    #[arg(short, long, default_value = PathsConfig::LEGACY_COMPANIES_FILE)]
    pub input: PathBuf,

    /// Output file, replaced if it exists
    #[arg(short, long, default_value = PathsConfig::COMPANIES_FILE)]
    pub output: PathBuf,

    /// Fail instead of keeping the last record when names collide
    #[arg(long)]
    pub strict: bool,

    /// Keep a .json.bak copy of the previous output file
    #[arg(long)]
    pub backup: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl MigrateArgs {
    pub fn options(&self) -> MigrationOptions {
        MigrationOptions {
            policy: if self.strict {
                CollisionPolicy::Reject
            } else {
                CollisionPolicy::LastWins
            },
            keep_backup: self.backup,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "check-duplicates")]
#[command(about = "Report company names that occur more than once")]
pub struct CheckArgs {
    /// Companies file, in either schema
    #[arg(default_value = PathsConfig::COMPANIES_FILE)]
    pub path: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the migration and return the text to print.
pub fn run_migrate(args: &MigrateArgs) -> corpmap_core::Result<String> {
    let summary = migrate_file(&args.input, &args.output, args.options())?;
    Ok(render_summary(&summary))
}

/// Run the duplicate check.
pub fn run_check(args: &CheckArgs) -> corpmap_core::Result<DuplicateReport> {
    check_file(&args.path)
}

fn render_summary(summary: &MigrationSummary) -> String {
    let mut out = format!(
        "Migrated {} legacy records into {} companies\n  {} -> {}",
        summary.records_read,
        summary.companies_written,
        summary.input.display(),
        summary.output.display()
    );
    for collision in &summary.collisions {
        let ids: Vec<String> = collision.record_ids.iter().map(ToString::to_string).collect();
        let _ = write!(
            out,
            "\nWarning: \"{}\" appears {} times (records {}); kept {}",
            collision.name,
            collision.record_ids.len(),
            ids.join(", "),
            collision.kept
        );
    }
    out
}

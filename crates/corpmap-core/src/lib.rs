//! Corpmap Core - company directory data and offline maintenance.
//!
//! The directory is a single JSON file mapping company names to their
//! locations, links and work fields. This crate owns that data contract and
//! the batch operations run against it:
//!
//! - [`migration`] turns the legacy array-of-records file into the current
//!   name-keyed file.
//! - [`duplicates`] reports company names that occur more than once, in
//!   either schema.
//! - [`store`] reads and atomically writes the JSON files.
//!
//! # Example
//!
//! ```rust,ignore
//! use corpmap_core::migration::{migrate_file, MigrationOptions};
//! use corpmap_core::duplicates::check_file;
//! use std::path::Path;
//!
//! fn main() -> corpmap_core::Result<()> {
//!     let summary = migrate_file(
//!         Path::new("static/companies-legacy.json"),
//!         Path::new("static/companies.json"),
//!         MigrationOptions::default(),
//!     )?;
//!     println!("{} companies written", summary.companies_written);
//!
//!     println!("{}", check_file(Path::new("static/companies.json"))?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod duplicates;
pub mod error;
pub mod migration;
pub mod models;
pub mod store;

pub use duplicates::{check_file, find_duplicates, DuplicateReport, NamedRecords};
pub use error::{CorpmapError, Result};
pub use migration::{migrate, migrate_file, CollisionPolicy, MigrationOptions, MigrationSummary};
pub use models::{Company, CompanyDirectory, CompanyLinks, LegacyCompany, LegacyDocument, Location};

//! Legacy to current schema migration.
//!
//! Every legacy record is first staged under a [`RecordId`] (its position in
//! the legacy array), so records sharing a name are still distinct while they
//! are grouped. Only then are they merged into the name-keyed directory,
//! with any name collision either reported or rejected depending on the
//! [`CollisionPolicy`].

use crate::models::{Company, CompanyDirectory, LegacyDocument};
use crate::{store, CorpmapError, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Position of a record in the legacy `companies` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct RecordId(pub usize);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What to do when several legacy records share a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Keep the last record, in the position of the first one, and report the collision.
    #[default]
    LastWins,
    /// Fail the migration without producing any output.
    Reject,
}

/// Legacy records that mapped to the same company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCollision {
    pub name: String,
    /// All records with this name, in legacy order.
    pub record_ids: Vec<RecordId>,
    /// The record whose data ended up in the directory.
    pub kept: RecordId,
}

impl NameCollision {
    /// Records whose data was discarded.
    pub fn dropped(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.record_ids.iter().copied().filter(move |id| *id != self.kept)
    }
}

/// Result of migrating a legacy document in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct Migration {
    pub directory: CompanyDirectory,
    pub collisions: Vec<NameCollision>,
}

/// Migrate a legacy document to the current schema.
///
/// Pure function of its input. Under [`CollisionPolicy::Reject`] a collision
/// fails with [`CorpmapError::DuplicateNames`].
pub fn migrate(legacy: &LegacyDocument, policy: CollisionPolicy) -> Result<Migration> {
    let staged: Vec<(RecordId, &str, Company)> = legacy
        .companies
        .iter()
        .enumerate()
        .map(|(index, record)| (RecordId(index), record.name.as_str(), Company::from_legacy(record)))
        .collect();

    let mut by_name: IndexMap<&str, Vec<RecordId>> = IndexMap::new();
    for (id, name, _) in &staged {
        by_name.entry(*name).or_default().push(*id);
    }

    let collisions: Vec<NameCollision> = by_name
        .iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(name, ids)| NameCollision {
            name: (*name).to_string(),
            record_ids: ids.clone(),
            kept: ids[ids.len() - 1],
        })
        .collect();

    if policy == CollisionPolicy::Reject && !collisions.is_empty() {
        return Err(CorpmapError::DuplicateNames {
            names: collisions.into_iter().map(|c| c.name).collect(),
        });
    }

    for collision in &collisions {
        let dropped: Vec<String> = collision.dropped().map(|id| id.to_string()).collect();
        warn!(
            "Company '{}' appears {} times; keeping record {} and dropping {}",
            collision.name,
            collision.record_ids.len(),
            collision.kept,
            dropped.join(", ")
        );
    }

    // IndexMap::insert on an existing key replaces the value in place.
    let mut directory = CompanyDirectory::default();
    for (_, name, company) in staged {
        directory.companies.insert(name.to_string(), company);
    }

    Ok(Migration {
        directory,
        collisions,
    })
}

/// Options for [`migrate_file`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MigrationOptions {
    pub policy: CollisionPolicy,
    /// Keep a `.json.bak` copy of an existing output file.
    pub keep_backup: bool,
}

/// Outcome of a file-to-file migration.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub records_read: usize,
    pub companies_written: usize,
    pub collisions: Vec<NameCollision>,
}

/// Read a legacy file, migrate it and write the current-schema file.
///
/// The output is fully replaced. Nothing is written if reading, parsing or
/// the collision policy fails.
pub fn migrate_file(
    input: &Path,
    output: &Path,
    options: MigrationOptions,
) -> Result<MigrationSummary> {
    let legacy: LegacyDocument = store::read_json(input)?;
    let migration = migrate(&legacy, options.policy)?;

    store::write_json_atomic(output, &migration.directory, options.keep_backup)?;

    info!(
        "Migrated {} legacy records into {} companies ({} -> {})",
        legacy.companies.len(),
        migration.directory.len(),
        input.display(),
        output.display()
    );

    Ok(MigrationSummary {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        records_read: legacy.companies.len(),
        companies_written: migration.directory.len(),
        collisions: migration.collisions,
    })
}

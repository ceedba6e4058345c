//! Duplicate company detection.
//!
//! Read-only: a file with duplicates is reported, not rejected. Only exact
//! name matches are grouped.

mod records;

pub use records::{
    ArrayEntry, ArrayRecords, CompanyRecords, MappingRecords, NamedRecords, RecordDetail,
    RecordsDocument,
};

use crate::{store, CorpmapError, Result};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Exact text printed when a file has no duplicates.
pub const NO_DUPLICATES_MESSAGE: &str = "No duplicate companies found.";

/// All records sharing one name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    pub name: String,
    /// Rendered location data, one entry per occurrence, in file order.
    pub details: Vec<String>,
}

/// Result of a duplicate check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DuplicateReport {
    pub records_checked: usize,
    pub groups: Vec<DuplicateGroup>,
}

impl DuplicateReport {
    pub fn has_duplicates(&self) -> bool {
        !self.groups.is_empty()
    }

    pub fn group(&self, name: &str) -> Option<&DuplicateGroup> {
        self.groups.iter().find(|group| group.name == name)
    }
}

impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            return f.write_str(NO_DUPLICATES_MESSAGE);
        }

        f.write_str("Duplicate companies found:")?;
        for group in &self.groups {
            write!(f, "\n  {}:", group.name)?;
            for detail in &group.details {
                write!(f, "\n    - {}", detail)?;
            }
        }
        Ok(())
    }
}

/// Group records by exact name and keep the names seen more than once.
///
/// Groups come out in order of each name's first occurrence.
pub fn find_duplicates<R: NamedRecords + ?Sized>(records: &R) -> DuplicateReport {
    let pairs = records.named_records();
    let records_checked = pairs.len();

    let mut by_name: IndexMap<&str, Vec<RecordDetail<'_>>> = IndexMap::new();
    for (name, detail) in pairs {
        by_name.entry(name).or_default().push(detail);
    }

    let groups = by_name
        .into_iter()
        .filter(|(_, details)| details.len() > 1)
        .map(|(name, details)| DuplicateGroup {
            name: name.to_string(),
            details: details.iter().map(ToString::to_string).collect(),
        })
        .collect();

    DuplicateReport {
        records_checked,
        groups,
    }
}

/// Parse a company document from text and check it for duplicates.
pub fn check_str(contents: &str) -> Result<DuplicateReport> {
    let document: RecordsDocument = serde_json::from_str(contents)?;
    debug!(
        "Checking {} records stored as {}",
        document.companies.len(),
        document.companies.shape()
    );
    Ok(find_duplicates(&document.companies))
}

/// Check a company file, in either schema, for duplicate names.
pub fn check_file(path: &Path) -> Result<DuplicateReport> {
    let contents = store::read_to_string(path)?;
    let report = check_str(&contents).map_err(|err| match err {
        CorpmapError::Schema { message, .. } => CorpmapError::Schema {
            message,
            path: Some(path.to_path_buf()),
        },
        CorpmapError::Json { message, source } => CorpmapError::Json {
            message: format!("Failed to parse {}: {}", path.display(), message),
            source,
        },
        other => other,
    })?;

    info!(
        "Checked {} records in {}: {} duplicate names",
        report.records_checked,
        path.display(),
        report.groups.len()
    );
    Ok(report)
}

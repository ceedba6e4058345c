//! Legacy array-of-companies schema.
//!
//! This format predates the name-keyed directory and is only read once, by
//! the migrator.

use super::Coordinates;
use serde::{Deserialize, Deserializer, Serialize};

/// A company record in the legacy array format.
///
/// `name` is not unique across the array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyCompany {
    pub name: String,
    /// Free-text location label, e.g. "Toronto, ON".
    pub location: String,
    pub coordinates: Coordinates,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub website: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub linked_in: String,
    pub work_field: Vec<String>,
}

/// Optional link fields: `null` reads the same as a missing key.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root of a legacy file: `{ "companies": [ ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyDocument {
    pub companies: Vec<LegacyCompany>,
}

//! Current name-keyed directory schema.

use super::legacy::LegacyCompany;
use super::Coordinates;
use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One labelled location of a company.
///
/// On disk this is a single-entry object, `{ "Toronto, ON": [43.65, -79.38] }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub label: String,
    pub coordinates: Coordinates,
}

impl Location {
    pub fn new(label: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            label: label.into(),
            coordinates,
        }
    }
}

impl Serialize for Location {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.label, &self.coordinates)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LocationVisitor;

        impl<'de> Visitor<'de> for LocationVisitor {
            type Value = Location;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with exactly one label mapped to [lat, lon]")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Location, A::Error> {
                let (label, coordinates) = map
                    .next_entry::<String, Coordinates>()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                if map.next_key::<de::IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(2, &self));
                }
                Ok(Location { label, coordinates })
            }
        }

        deserializer.deserialize_map(LocationVisitor)
    }
}

/// External links of a company. Values are copied verbatim, never validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyLinks {
    pub website: String,
    pub linkedin: String,
}

/// A company in the current schema. The name is the key it is stored under.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub description: String,
    pub locations: Vec<Location>,
    pub links: CompanyLinks,
    pub work_fields: Vec<String>,
}

impl Company {
    /// Build the current-schema record for one legacy record.
    ///
    /// The description starts empty and the single legacy location becomes a
    /// one-element `locations` list. Work fields are copied without dedup.
    pub fn from_legacy(legacy: &LegacyCompany) -> Self {
        Self {
            description: String::new(),
            locations: vec![Location::new(legacy.location.clone(), legacy.coordinates)],
            links: CompanyLinks {
                website: legacy.website.clone(),
                linkedin: legacy.linked_in.clone(),
            },
            work_fields: legacy.work_field.clone(),
        }
    }
}

/// Root of a current-schema file: `{ "companies": { name: Company } }`.
///
/// Insertion ordered, so companies keep the order they were written in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyDirectory {
    pub companies: IndexMap<String, Company>,
}

impl CompanyDirectory {
    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Company> {
        self.companies.get(name)
    }
}

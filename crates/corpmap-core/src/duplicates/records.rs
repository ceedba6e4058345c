//! Sources of `(name, detail)` pairs for duplicate detection.
//!
//! A company file stores its records either as an array of objects carrying a
//! `name` field or as an object keyed by name. Both shapes are adapted to
//! [`NamedRecords`] so grouping only has to be written once.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// The location data shown for one record in a duplicate report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordDetail<'a> {
    /// Single free-text location of an array-form record.
    Location(&'a str),
    /// `locations` list of a keyed record; `None` when the record has none.
    Locations(Option<&'a Value>),
}

impl fmt::Display for RecordDetail<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDetail::Location(location) => write!(f, "Location: {}", location),
            RecordDetail::Locations(Some(locations)) => write!(f, "Locations: {}", locations),
            RecordDetail::Locations(None) => f.write_str("Locations: []"),
        }
    }
}

/// Anything that can list its records as `(name, detail)` pairs, in file order.
pub trait NamedRecords {
    fn named_records(&self) -> Vec<(&str, RecordDetail<'_>)>;
}

/// One element of an array-form `companies` list.
///
/// Only `name` is required. Legacy exports carry `location`; list exports of
/// current records carry `locations`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArrayEntry {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub locations: Option<Value>,
}

/// Records stored as `{ "companies": [ {"name": ...}, ... ] }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ArrayRecords {
    pub entries: Vec<ArrayEntry>,
}

impl NamedRecords for ArrayRecords {
    fn named_records(&self) -> Vec<(&str, RecordDetail<'_>)> {
        self.entries
            .iter()
            .map(|entry| {
                let detail = match &entry.location {
                    Some(location) => RecordDetail::Location(location.as_str()),
                    None => RecordDetail::Locations(entry.locations.as_ref()),
                };
                (entry.name.as_str(), detail)
            })
            .collect()
    }
}

/// Records stored as `{ "companies": { name: record, ... } }`.
///
/// Unlike a map type, this keeps every entry of the object, so a hand-edited
/// file that repeats a key still shows both records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingRecords {
    pub entries: Vec<(String, Value)>,
}

impl NamedRecords for MappingRecords {
    fn named_records(&self) -> Vec<(&str, RecordDetail<'_>)> {
        self.entries
            .iter()
            .map(|(name, record)| {
                (name.as_str(), RecordDetail::Locations(record.get("locations")))
            })
            .collect()
    }
}

impl<'de> Deserialize<'de> for MappingRecords {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }
}

struct EntriesVisitor;

impl<'de> Visitor<'de> for EntriesVisitor {
    type Value = MappingRecords;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object of company records keyed by name")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<MappingRecords, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry::<String, Value>()? {
            entries.push(entry);
        }
        Ok(MappingRecords { entries })
    }
}

/// The `companies` collection of a file, in whichever shape it was stored.
#[derive(Debug, Clone, PartialEq)]
pub enum CompanyRecords {
    Array(ArrayRecords),
    Mapping(MappingRecords),
}

impl Default for CompanyRecords {
    fn default() -> Self {
        CompanyRecords::Mapping(MappingRecords::default())
    }
}

impl CompanyRecords {
    pub fn len(&self) -> usize {
        match self {
            CompanyRecords::Array(records) => records.entries.len(),
            CompanyRecords::Mapping(records) => records.entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short name of the detected shape, for logs.
    pub fn shape(&self) -> &'static str {
        match self {
            CompanyRecords::Array(_) => "array",
            CompanyRecords::Mapping(_) => "mapping",
        }
    }
}

impl NamedRecords for CompanyRecords {
    fn named_records(&self) -> Vec<(&str, RecordDetail<'_>)> {
        match self {
            CompanyRecords::Array(records) => records.named_records(),
            CompanyRecords::Mapping(records) => records.named_records(),
        }
    }
}

impl<'de> Deserialize<'de> for CompanyRecords {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ShapeVisitor;

        impl<'de> Visitor<'de> for ShapeVisitor {
            type Value = CompanyRecords;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an array of company records or an object keyed by company name")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<CompanyRecords, A::Error> {
                let mut entries = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(entry) = seq.next_element::<ArrayEntry>()? {
                    entries.push(entry);
                }
                Ok(CompanyRecords::Array(ArrayRecords { entries }))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<CompanyRecords, A::Error> {
                EntriesVisitor.visit_map(map).map(CompanyRecords::Mapping)
            }

            fn visit_unit<E: de::Error>(self) -> Result<CompanyRecords, E> {
                Ok(CompanyRecords::default())
            }
        }

        deserializer.deserialize_any(ShapeVisitor)
    }
}

/// Root of a file checked for duplicates. A missing `companies` key means no records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RecordsDocument {
    #[serde(default)]
    pub companies: CompanyRecords,
}

//! Data models for both on-disk schemas.

mod company;
mod legacy;

pub use company::{Company, CompanyDirectory, CompanyLinks, Location};
pub use legacy::{LegacyCompany, LegacyDocument};

/// Latitude/longitude pair, stored as a two-element JSON array.
pub type Coordinates = [f64; 2];

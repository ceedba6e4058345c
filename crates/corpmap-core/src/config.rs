//! Centralized configuration constants.
//!
//! Binaries take every path as an argument; these are only the defaults used
//! when an argument is omitted.

/// Application-level configuration.
pub struct AppConfig;

impl AppConfig {
    pub const APP_NAME: &'static str = "Corpmap";
}

/// Default file locations, relative to the working directory.
pub struct PathsConfig;

impl PathsConfig {
    pub const STATIC_DIR: &'static str = "static";
    pub const COMPANIES_FILE: &'static str = "static/companies.json";
    pub const LEGACY_COMPANIES_FILE: &'static str = "static/companies-legacy.json";
    pub const BACKUP_EXTENSION: &'static str = "json.bak";
}

/// Directory Service network defaults.
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 5000;
    pub const COMPANIES_ROUTE: &'static str = "/api/companies";
}

//! Corpmap Server - read-only HTTP access to the company directory.
//!
//! The service is built explicitly from its settings and an injected
//! [`DocumentSource`]; there is no process-wide application object.

pub mod config;
pub mod handler;
pub mod server;
pub mod service;
pub mod source;

pub use config::ServerArgs;
pub use server::{build_router, start_server, AppState};
pub use service::DirectoryService;
pub use source::{DocumentSource, FileDocumentSource};

//! Data models for the Bookcode server

pub mod metadata;
pub mod scan;

pub use metadata::BookMetadata;
pub use scan::{LookupResult, ProviderResults, ScanRequest, ScanResult};

//! # Antpath CLI
//!
//! Adapters around the engine: environment configuration, JSON data files,
//! and the run report.

pub mod config;
pub mod data;
pub mod report;

pub use config::AntpathConfig;
pub use data::{DataFile, JsonFileProvider};
pub use report::RunReport;

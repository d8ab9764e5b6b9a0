//! Core types, configuration, and error handling for labelgen.
//!
//! This crate provides the shared foundation used by all other labelgen crates:
//! - [`LabelError`]: unified error type using `thiserror`
//! - [`LabelgenConfig`]: configuration loaded from `.labelgen.toml`
//! - Shared types: [`RevisionId`], [`LabelRecord`]

mod config;
mod error;
mod types;

pub use config::{
    LabelgenConfig, ReportConfig, DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_TRACKED_PATH,
};
pub use error::LabelError;
pub use types::{LabelRecord, RevisionId, SHORT_ID_LEN};

/// A convenience `Result` type for labelgen operations.
pub type Result<T> = std::result::Result<T, LabelError>;

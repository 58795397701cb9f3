//! Template catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where template banks come from
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BankSource {
    /// Banks built in process from the registry
    #[default]
    Memory,
    /// Banks read from JSON files written by `generate-banks`
    Filesystem,
}

/// Catalog configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub bank_source: BankSource,

    /// Root of the bank files; required for the filesystem source
    pub bank_dir: Option<PathBuf>,

    /// Build in-memory banks on first request instead of at startup
    #[serde(default)]
    pub lazy_banks: bool,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.bank_source == BankSource::Filesystem && self.bank_dir.is_none() {
            return Err(ValidationError::MissingRequired("catalog.bank_dir"));
        }
        Ok(())
    }
}

//! Template Bank Loader Port - Interface for fetching precomputed banks.
//!
//! A bank holds all ten templates of one (industry, department). Banks may
//! live in memory, on disk, or nowhere at all; the resolver synthesizes a
//! dashboard whenever a loader has nothing to offer.

use async_trait::async_trait;

use crate::domain::dashboard::{BankKey, TemplateBank};

/// Errors that can occur while loading a template bank
#[derive(Debug, thiserror::Error)]
pub enum BankLoadError {
    #[error("IO error loading bank {key}: {message}")]
    Io { key: BankKey, message: String },

    #[error("Failed to parse bank {key}: {message}")]
    Parse { key: BankKey, message: String },

    #[error("Invalid bank key {key}: {reason}")]
    InvalidKey { key: BankKey, reason: String },
}

impl BankLoadError {
    /// The bank the error refers to.
    pub fn key(&self) -> &BankKey {
        match self {
            BankLoadError::Io { key, .. }
            | BankLoadError::Parse { key, .. }
            | BankLoadError::InvalidKey { key, .. } => key,
        }
    }
}

/// Port for loading precomputed template banks
#[async_trait]
pub trait TemplateBankLoader: Send + Sync {
    /// Load the bank of one (industry, department)
    ///
    /// # Returns
    /// `Ok(None)` when no bank exists for the key
    ///
    /// # Errors
    /// Returns `BankLoadError` if a bank exists but cannot be read
    async fn load(&self, key: &BankKey) -> Result<Option<TemplateBank>, BankLoadError>;
}

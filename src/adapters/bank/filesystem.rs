//! Filesystem template bank loader
//!
//! Reads materialized banks from `{bank_dir}/{industry_id}/{department_id}.json`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::dashboard::{BankKey, TemplateBank};
use crate::ports::{BankLoadError, TemplateBankLoader};

/// Filesystem-backed bank loader and writer
#[derive(Debug, Clone)]
pub struct FsTemplateBankLoader {
    base_dir: PathBuf,
}

impl FsTemplateBankLoader {
    /// Create a loader rooted at `base_dir`
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path of a bank file, rejecting ids that would escape the base directory
    pub fn bank_path(&self, key: &BankKey) -> Result<PathBuf, BankLoadError> {
        check_segment(key, &key.industry_id)?;
        check_segment(key, &key.department_id)?;
        Ok(self
            .base_dir
            .join(&key.industry_id)
            .join(format!("{}.json", key.department_id)))
    }

    /// Write a bank atomically, creating directories as needed
    pub async fn write_bank(&self, key: &BankKey, bank: &TemplateBank) -> Result<PathBuf, BankLoadError> {
        let file_path = self.bank_path(key)?;

        let io_error = |message: String| BankLoadError::Io {
            key: key.clone(),
            message,
        };

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| io_error(format!("Failed to create directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(bank).map_err(|e| BankLoadError::Parse {
            key: key.clone(),
            message: format!("Failed to serialize bank: {}", e),
        })?;

        // Write to a temporary file, then rename into place
        let temp_path = file_path.with_extension("json.tmp");
        fs::write(&temp_path, content)
            .await
            .map_err(|e| io_error(format!("Failed to write temporary file: {}", e)))?;
        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| io_error(format!("Failed to rename file: {}", e)))?;

        Ok(file_path)
    }
}

fn check_segment(key: &BankKey, segment: &str) -> Result<(), BankLoadError> {
    let invalid = |reason: &str| BankLoadError::InvalidKey {
        key: key.clone(),
        reason: reason.to_string(),
    };

    if segment.is_empty() {
        return Err(invalid("empty path segment"));
    }
    if segment.starts_with('.') || segment.contains(['/', '\\']) {
        return Err(invalid("path segment must be a plain file name"));
    }
    Ok(())
}

#[async_trait]
impl TemplateBankLoader for FsTemplateBankLoader {
    async fn load(&self, key: &BankKey) -> Result<Option<TemplateBank>, BankLoadError> {
        let file_path = self.bank_path(key)?;

        let content = match fs::read_to_string(&file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(BankLoadError::Io {
                    key: key.clone(),
                    message: format!("Failed to read {}: {}", file_path.display(), e),
                })
            }
        };

        serde_json::from_str(&content)
            .map(Some)
            .map_err(|e| BankLoadError::Parse {
                key: key.clone(),
                message: e.to_string(),
            })
    }
}

//! Session storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Configuration for local session-token persistence
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Directory where the session token file is kept
    #[serde(default = "default_storage_dir")]
    pub storage_dir: String,
}

impl SessionConfig {
    /// Directory where the token file lives, as a path
    pub fn storage_path(&self) -> PathBuf {
        PathBuf::from(&self.storage_dir)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.storage_dir.trim().is_empty() {
            return Err(ValidationError::EmptyStorageDir);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_dir: default_storage_dir(),
        }
    }
}

fn default_storage_dir() -> String {
    ".zemuria-console".to_string()
}

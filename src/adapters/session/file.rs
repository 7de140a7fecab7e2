//! File-backed session store.
//!
//! Persists the token across process restarts under the fixed file
//! name `auth_token` in the configured storage directory. An absent
//! file is the unauthenticated state.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use secrecy::{ExposeSecret, SecretString};

use crate::ports::SessionStore;

/// Fixed key name the token persists under.
const TOKEN_FILE_NAME: &str = "auth_token";

/// Session store that mirrors its token to disk.
///
/// Reads go through an in-memory copy; disk is only touched on set
/// and clear, so concurrent request interception stays cheap.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    token: RwLock<Option<SecretString>>,
}

impl FileSessionStore {
    /// Opens the store rooted at `storage_dir`, loading any persisted
    /// token. The directory is created if missing.
    pub fn open(storage_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = storage_dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(TOKEN_FILE_NAME);

        let token = match fs::read_to_string(&path) {
            Ok(contents) => {
                let trimmed = contents.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(SecretString::new(trimmed.to_string()))
                }
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => return Err(err),
        };

        Ok(Self {
            path,
            token: RwLock::new(token),
        })
    }

    fn persist(&self, token: &SecretString) {
        if let Err(err) = fs::write(&self.path, token.expose_secret()) {
            tracing::warn!(error = %err, "failed to persist session token");
        }
    }

    fn remove_file(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => tracing::warn!(error = %err, "failed to remove session token file"),
        }
    }
}

impl SessionStore for FileSessionStore {
    fn token(&self) -> Option<SecretString> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_token(&self, token: SecretString) {
        self.persist(&token);
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token);
    }

    fn clear(&self) -> bool {
        let had_token = self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
            .is_some();
        if had_token {
            self.remove_file();
        }
        had_token
    }
}

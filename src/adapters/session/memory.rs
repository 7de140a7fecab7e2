//! In-memory session store.

use std::sync::RwLock;

use secrecy::SecretString;

use crate::ports::SessionStore;

/// Process-local session store with no persistence.
///
/// The default for tests and for shells that keep sessions per-run.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    token: RwLock<Option<SecretString>>,
}

impl InMemorySessionStore {
    /// Creates an empty (unauthenticated) store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(SecretString::new(token.into()))),
        }
    }
}

impl SessionStore for InMemorySessionStore {
    fn token(&self) -> Option<SecretString> {
        self.token
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn set_token(&self, token: SecretString) {
        *self
            .token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(token);
    }

    fn clear(&self) -> bool {
        self.token
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
            .is_some()
    }
}

//! Authentication port.

use async_trait::async_trait;
use secrecy::SecretString;
use thiserror::Error;

use super::ApiError;

/// Staff login credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Port for exchanging credentials for a session token.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Authenticates and returns the opaque session token.
    async fn login(&self, credentials: &Credentials) -> Result<SecretString, AuthError>;
}

/// Errors from the authentication flow.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The backend rejected the credentials; the message is the
    /// server's own, surfaced verbatim to the operator.
    #[error("{0}")]
    InvalidCredentials(String),

    /// Transport or protocol failure outside a credential rejection.
    #[error(transparent)]
    Api(#[from] ApiError),
}

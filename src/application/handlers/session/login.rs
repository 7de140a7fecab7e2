//! Login and logout handlers.

use std::sync::Arc;

use crate::ports::{AuthError, AuthProvider, Credentials, SessionStore};

/// Exchanges credentials for a session and stores the token.
pub struct LoginHandler {
    auth: Arc<dyn AuthProvider>,
    session: Arc<dyn SessionStore>,
}

impl LoginHandler {
    pub fn new(auth: Arc<dyn AuthProvider>, session: Arc<dyn SessionStore>) -> Self {
        Self { auth, session }
    }

    /// Authenticates and, on success, installs the token as the
    /// process-wide session.
    pub async fn handle(&self, credentials: Credentials) -> Result<(), AuthError> {
        let token = self.auth.login(&credentials).await?;
        self.session.set_token(token);
        tracing::info!("staff login succeeded");
        Ok(())
    }
}

/// Explicit logout: one of the two authorities allowed to clear the
/// session (the other is the global 401 handler).
pub struct LogoutHandler {
    session: Arc<dyn SessionStore>,
}

impl LogoutHandler {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }

    /// Drops the session. Navigation back to login is the shell's
    /// choice here, unlike the forced redirect on expiry.
    pub fn handle(&self) {
        if self.session.clear() {
            tracing::info!("staff logged out");
        }
    }
}

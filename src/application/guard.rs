//! Session guard - gate checked before a protected view mounts.
//!
//! A pure predicate over session presence. Token validity is never
//! checked here: that is the server's authority, discovered lazily via
//! the first 401 a request encounters.

use std::sync::Arc;

use crate::ports::SessionStore;

/// What the router should do with a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// A session is held; render the view.
    Proceed,

    /// No session; show the login view instead.
    RedirectToLogin,
}

/// Synchronous gate over protected views.
pub struct SessionGuard {
    session: Arc<dyn SessionStore>,
}

impl SessionGuard {
    pub fn new(session: Arc<dyn SessionStore>) -> Self {
        Self { session }
    }

    /// Decides whether a protected view may render. No network call.
    pub fn check(&self) -> GuardOutcome {
        if self.session.is_authenticated() {
            GuardOutcome::Proceed
        } else {
            GuardOutcome::RedirectToLogin
        }
    }
}

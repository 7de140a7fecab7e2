//! Session store port.
//!
//! The session is a single opaque token or the absence of one. It is
//! read by every in-flight request and mutated by exactly two
//! authorities: explicit login/logout, and the global 401 handler.

use secrecy::SecretString;

/// Holder of the process-wide session token.
pub trait SessionStore: Send + Sync {
    /// The current token, if a session is held.
    fn token(&self) -> Option<SecretString>;

    /// Replaces the held token (successful authentication).
    fn set_token(&self, token: SecretString);

    /// Removes any held token, reporting whether one was present.
    ///
    /// The boolean is the dedup primitive for session-expiry handling:
    /// of several concurrent 401s, only the caller that actually
    /// transitioned the store from held to empty observes `true`.
    fn clear(&self) -> bool;

    /// True when a token is held. Token validity is the server's
    /// authority; this is presence only.
    fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}

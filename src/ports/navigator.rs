//! Navigation port.

/// Sink for forced navigation events.
///
/// The console core never renders; when the session dies it asks the
/// embedding shell to show the login view through this port.
pub trait Navigator: Send + Sync {
    /// Force navigation to the login view.
    fn redirect_to_login(&self);
}

//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `http` - reqwest-backed clients for the analytics backend
//! - `session` - in-memory and file-backed session stores
//! - `navigation` - recording navigator for tests and headless use

pub mod http;
pub mod navigation;
pub mod session;

pub use http::{ApiClient, HttpAnalyticsReader, HttpAuthProvider, HttpProvisioningClient};
pub use navigation::RecordingNavigator;
pub use session::{FileSessionStore, InMemorySessionStore};

//! Navigation adapters.
//!
//! The embedding shell owns real navigation; this crate ships a
//! recording implementation for tests and headless use.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::Navigator;

/// Navigator that counts redirect requests instead of navigating.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: AtomicUsize,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of login redirects requested so far.
    pub fn redirect_count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn redirect_to_login(&self) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

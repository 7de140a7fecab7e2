//! Session handlers.

mod login;

pub use login::{LoginHandler, LogoutHandler};

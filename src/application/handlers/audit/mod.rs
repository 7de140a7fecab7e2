//! Admin override audit log.

mod load_admin_logs;

pub use load_admin_logs::{AdminLogCache, LoadAdminLogsHandler};

//! LoadGrantOptionsHandler - picker options for the grant form.

use std::sync::Arc;

use futures::join;

use crate::domain::provisioning::SelectOption;
use crate::ports::AnalyticsReader;

use super::super::page::{section, PageLoad};

/// User and plan choices backing the grant form selects.
#[derive(Debug, Clone, Default)]
pub struct GrantOptions {
    pub users: Vec<SelectOption>,
    pub plans: Vec<SelectOption>,
}

/// Loads both pickers in one settled batch.
pub struct LoadGrantOptionsHandler {
    reader: Arc<dyn AnalyticsReader>,
}

impl LoadGrantOptionsHandler {
    pub fn new(reader: Arc<dyn AnalyticsReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self) -> PageLoad<GrantOptions> {
        let (users, plans) = join!(self.reader.user_options(), self.reader.plan_options());

        let mut failed = Vec::new();
        let model = GrantOptions {
            users: section("user_options", users, &mut failed),
            plans: section("plan_options", plans, &mut failed),
        };

        PageLoad {
            model,
            section_count: 2,
            failed_sections: failed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::testing::StubAnalyticsReader;

    #[tokio::test]
    async fn loads_both_pickers() {
        let stub = StubAnalyticsReader {
            user_options: Some(vec![SelectOption::new("42", "ops@zemuria.com")]),
            plan_options: Some(vec![SelectOption::new("pro-monthly", "Pro (Monthly)")]),
            ..StubAnalyticsReader::default()
        };

        let handler = LoadGrantOptionsHandler::new(Arc::new(stub));
        let load = handler.handle().await;

        assert!(!load.is_degraded());
        assert_eq!(load.model.users[0].label, "ops@zemuria.com");
        assert_eq!(load.model.plans[0].value, "pro-monthly");
    }

    #[tokio::test]
    async fn a_failed_picker_defaults_to_empty() {
        let stub = StubAnalyticsReader {
            user_options: Some(vec![SelectOption::new("42", "ops@zemuria.com")]),
            plan_options: None,
            ..StubAnalyticsReader::default()
        };

        let handler = LoadGrantOptionsHandler::new(Arc::new(stub));
        let load = handler.handle().await;

        assert_eq!(load.failed_sections, vec!["plan_options"]);
        assert!(load.model.plans.is_empty());
        assert_eq!(load.model.users.len(), 1);
    }
}

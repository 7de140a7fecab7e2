//! Page-load plumbing shared by the dashboard handlers.
//!
//! Pages fan their reads out as one batch and only resolve once every
//! member has settled. A failed member is substituted with its
//! section's typed empty default - explicitly, per field, never by
//! merging partial data - and recorded so the page can show a banner
//! when everything failed.

use crate::ports::ApiError;

/// A settled page load: the model plus which sections were defaulted.
#[derive(Debug, Clone)]
pub struct PageLoad<T> {
    pub model: T,

    /// Number of independent read sections on the page.
    pub section_count: usize,

    /// Names of the sections that failed and carry empty defaults.
    pub failed_sections: Vec<&'static str>,
}

impl<T> PageLoad<T> {
    /// At least one section carries a default instead of live data.
    pub fn is_degraded(&self) -> bool {
        !self.failed_sections.is_empty()
    }

    /// Every section failed; the page should show its error banner.
    pub fn is_total_failure(&self) -> bool {
        self.section_count > 0 && self.failed_sections.len() == self.section_count
    }
}

/// Resolves one section of a batch: the value on success, the typed
/// empty default (recorded by name) on failure.
pub(crate) fn section<T: Default>(
    name: &'static str,
    result: Result<T, ApiError>,
    failed: &mut Vec<&'static str>,
) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(section = name, error = %err, "section fetch failed, rendering empty default");
            failed.push(name);
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successful_section_passes_value_through() {
        let mut failed = Vec::new();
        let value: u64 = section("dau", Ok(42), &mut failed);
        assert_eq!(value, 42);
        assert!(failed.is_empty());
    }

    #[test]
    fn failed_section_defaults_and_records() {
        let mut failed = Vec::new();
        let value: u64 = section("dau", Err(ApiError::Network("down".into())), &mut failed);
        assert_eq!(value, 0);
        assert_eq!(failed, vec!["dau"]);
    }

    #[test]
    fn degraded_and_total_failure_flags() {
        let healthy = PageLoad {
            model: (),
            section_count: 3,
            failed_sections: vec![],
        };
        assert!(!healthy.is_degraded());
        assert!(!healthy.is_total_failure());

        let degraded = PageLoad {
            model: (),
            section_count: 3,
            failed_sections: vec!["revenue"],
        };
        assert!(degraded.is_degraded());
        assert!(!degraded.is_total_failure());

        let dead = PageLoad {
            model: (),
            section_count: 2,
            failed_sections: vec!["a", "b"],
        };
        assert!(dead.is_total_failure());
    }
}

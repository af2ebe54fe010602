//! Series identity for a metric stream

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between tenant and metric name in the rendered locator
pub const LOCATOR_SEPARATOR: char = '.';

/// Identifies a metric series: the tenant that owns it plus the metric name.
///
/// Metrics store and expose the locator but never interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Locator {
    tenant_id: String,
    metric_name: String,
}

impl Locator {
    pub fn new(tenant_id: impl Into<String>, metric_name: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            metric_name: metric_name.into(),
        }
    }

    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    pub fn metric_name(&self) -> &str {
        &self.metric_name
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.tenant_id, LOCATOR_SEPARATOR, self.metric_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let locator = Locator::new("acme", "cpu.idle");
        assert_eq!(locator.to_string(), "acme.cpu.idle");
        assert_eq!(locator.tenant_id(), "acme");
        assert_eq!(locator.metric_name(), "cpu.idle");
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Locator::new("a", "m"), Locator::new("a", "m"));
        assert_ne!(Locator::new("a", "m"), Locator::new("b", "m"));
    }
}

//! Environment-based defaults for metric construction
//!
//! Ingestion paths that do not carry a per-observation TTL or unit fall back
//! to these defaults.

use crate::locator::Locator;
use crate::metric::{is_valid_ttl, Metric, MAX_TTL_SECONDS};
use crate::time_value::TimeValue;
use crate::types::MetricValue;
use crate::{Error, Result};
use tracing::{info, warn};

pub const ENV_DEFAULT_TTL: &str = "METRIC_DEFAULT_TTL";
pub const ENV_DEFAULT_UNIT: &str = "METRIC_DEFAULT_UNIT";

/// Defaults applied when building metrics
#[derive(Debug, Clone, PartialEq)]
pub struct MetricConfig {
    /// TTL used when the observation does not carry one
    pub default_ttl: TimeValue,
    /// Unit used when the observation does not carry one
    pub default_unit: Option<String>,
}

impl Default for MetricConfig {
    fn default() -> Self {
        Self {
            default_ttl: TimeValue::days(1),
            default_unit: None,
        }
    }
}

impl MetricConfig {
    /// Load configuration from environment
    ///
    /// Environment variables:
    /// - METRIC_DEFAULT_TTL: TTL such as "86400", "30s" or "7d" (default: 1 day)
    /// - METRIC_DEFAULT_UNIT: unit string (default: none; empty means none)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_DEFAULT_TTL) {
            let ttl: TimeValue = raw.parse().map_err(|e| {
                Error::Config(format!("{} is not a valid duration: {}", ENV_DEFAULT_TTL, e))
            })?;
            if !is_valid_ttl(ttl.to_seconds()) {
                return Err(Error::Config(format!(
                    "{} must be between 1 and {} seconds, got {}",
                    ENV_DEFAULT_TTL,
                    MAX_TTL_SECONDS - 1,
                    ttl.to_seconds()
                )));
            }
            config.default_ttl = ttl;
        }

        if let Some(unit) = lookup(ENV_DEFAULT_UNIT) {
            let unit = unit.trim();
            if unit.is_empty() {
                warn!("{} is set but empty; metrics will have no default unit", ENV_DEFAULT_UNIT);
            } else {
                config.default_unit = Some(unit.to_string());
            }
        }

        info!(
            default_ttl = %config.default_ttl,
            default_unit = config.default_unit.as_deref().unwrap_or(""),
            "Loaded metric defaults"
        );
        Ok(config)
    }

    /// Build a metric using the configured TTL and unit.
    pub fn build(
        &self,
        locator: Locator,
        value: impl Into<MetricValue>,
        collection_time: i64,
    ) -> Result<Metric> {
        Metric::new(
            locator,
            value,
            collection_time,
            self.default_ttl,
            self.default_unit.clone(),
        )
    }
}

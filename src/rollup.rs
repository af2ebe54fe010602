//! Rollup strategies for aggregating raw observations into coarser buckets

use serde::{Deserialize, Serialize};
use std::fmt;

/// How raw observations of a metric are rolled up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RollupType {
    Counter,
    Timer,
    Set,
    Gauge,
    BfHistograms,
    /// Basic numeric rollup (average, min, max, variance)
    #[default]
    BfBasic,
    Enum,
}

impl RollupType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RollupType::Counter => "counter",
            RollupType::Timer => "timer",
            RollupType::Set => "set",
            RollupType::Gauge => "gauge",
            RollupType::BfHistograms => "bf_histograms",
            RollupType::BfBasic => "bf_basic",
            RollupType::Enum => "enum",
        }
    }
}

impl fmt::Display for RollupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_basic() {
        assert_eq!(RollupType::default(), RollupType::BfBasic);
        assert_eq!(
            serde_json::to_string(&RollupType::BfBasic).unwrap(),
            "\"bf_basic\""
        );
    }
}

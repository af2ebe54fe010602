//! # metric-core
//!
//! The typed value model for a single metric observation in a time-series
//! ingestion pipeline.
//!
//! Ingestion builds a [`Metric`] per observation; rollup and storage writers
//! read it back through its accessors (or the [`MetricRecord`] trait) and use
//! the derived [`DataType`] to decide how to process the value.
//!
//! ## Key Properties
//!
//! - **Closed value kinds**: string, 32/64-bit integer, 64-bit float and
//!   boolean. Typed values classify at compile time; JSON values are
//!   classified at runtime and may be rejected.
//! - **Bounded TTL**: every metric satisfies `0 < ttl_seconds < i32::MAX`,
//!   at construction and after every update.
//! - **Identity without value**: metric equality compares series, collection
//!   time, TTL, data type and unit, but not the observed value.
//!
//! ```
//! use metric_core::prelude::*;
//!
//! let metric = Metric::new(
//!     Locator::new("acme", "requests"),
//!     42i64,
//!     1000,
//!     TimeValue::days(1),
//!     Some("count".to_string()),
//! )?;
//! assert_eq!(metric.data_type(), DataType::Int64);
//! assert_eq!(metric.to_string(), "acme.requests:42:Int64:86400:count");
//! # Ok::<(), metric_core::Error>(())
//! ```

pub mod config;
pub mod locator;
pub mod metric;
pub mod rollup;
pub mod schema;
pub mod telemetry;
pub mod time_value;
pub mod types;

mod error;

pub use error::{Error, Result};
pub use locator::Locator;
pub use metric::{Metric, MetricRecord};
pub use types::{DataType, MetricValue};

/// Re-exports for convenience
pub mod prelude {
    pub use crate::config::MetricConfig;
    pub use crate::locator::Locator;
    pub use crate::metric::{Metric, MetricRecord};
    pub use crate::rollup::RollupType;
    pub use crate::time_value::{TimeUnit, TimeValue};
    pub use crate::types::{classify, classify_json, DataType, MetricValue};
    pub use crate::{Error, Result};
}

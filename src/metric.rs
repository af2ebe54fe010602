//! A single metric observation
//!
//! A [`Metric`] carries a typed value together with the series it belongs to,
//! when it was collected, how long it should be retained, and an optional
//! unit. Its data type is derived from the value once at construction and
//! can never drift from it. The TTL is the only mutable field and is always
//! within `0 < ttl < i32::MAX`.

use crate::locator::Locator;
use crate::rollup::RollupType;
use crate::telemetry;
use crate::time_value::TimeValue;
use crate::types::{DataType, MetricValue};
use crate::{Error, Result};

use chrono::{DateTime, Utc};
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

/// Exclusive upper bound for TTLs, in seconds
pub const MAX_TTL_SECONDS: i64 = i32::MAX as i64;

/// Whether `ttl_seconds` satisfies `0 < ttl < i32::MAX`
pub fn is_valid_ttl(ttl_seconds: i64) -> bool {
    ttl_seconds > 0 && ttl_seconds < MAX_TTL_SECONDS
}

fn validate_ttl(ttl_seconds: i64) -> Result<i32> {
    if !is_valid_ttl(ttl_seconds) {
        debug!(provided = ttl_seconds, "Rejecting out-of-range metric TTL");
        telemetry::record_rejected(telemetry::REASON_INVALID_TTL);
        return Err(Error::InvalidTtl {
            provided: ttl_seconds,
        });
    }
    Ok(ttl_seconds as i32)
}

/// What downstream consumers (rollup, storage writers) read from a metric.
pub trait MetricRecord {
    fn locator(&self) -> &Locator;
    fn value(&self) -> &MetricValue;
    /// Collection time in epoch milliseconds
    fn collection_time(&self) -> i64;
    fn ttl_seconds(&self) -> i32;
    fn data_type(&self) -> DataType;
    fn unit(&self) -> Option<&str>;
    fn rollup_type(&self) -> RollupType;
}

/// A metric observation.
///
/// Equality and hashing consider the locator, collection time, TTL, data type
/// and unit. The value itself is *not* compared: two observations of the same
/// series at the same instant with the same retention, kind and unit are
/// equal even if they observed different values.
#[derive(Debug, Clone)]
pub struct Metric {
    locator: Locator,
    value: MetricValue,
    collection_time: i64,
    ttl_seconds: i32,
    data_type: DataType,
    unit: Option<String>,
}

impl Metric {
    /// Create a metric, validating the TTL.
    pub fn new(
        locator: Locator,
        value: impl Into<MetricValue>,
        collection_time: i64,
        ttl: TimeValue,
        unit: Option<String>,
    ) -> Result<Self> {
        Self::with_ttl_seconds(locator, value, collection_time, ttl.to_seconds(), unit)
    }

    /// Create a metric from a TTL already expressed in seconds.
    pub fn with_ttl_seconds(
        locator: Locator,
        value: impl Into<MetricValue>,
        collection_time: i64,
        ttl_seconds: i64,
        unit: Option<String>,
    ) -> Result<Self> {
        let value = value.into();
        let data_type = value.data_type();
        let ttl_seconds = validate_ttl(ttl_seconds)?;

        telemetry::record_created(data_type);
        Ok(Self {
            locator,
            value,
            collection_time,
            ttl_seconds,
            data_type,
            unit,
        })
    }

    /// Create a metric from a value that arrived untyped (e.g. a JSON payload).
    pub fn from_json(
        locator: Locator,
        value: &serde_json::Value,
        collection_time: i64,
        ttl: TimeValue,
        unit: Option<String>,
    ) -> Result<Self> {
        let value = MetricValue::try_from(value).inspect_err(|_| {
            telemetry::record_rejected(telemetry::REASON_UNSUPPORTED_TYPE);
        })?;
        Self::new(locator, value, collection_time, ttl, unit)
    }

    pub fn locator(&self) -> &Locator {
        &self.locator
    }

    pub fn value(&self) -> &MetricValue {
        &self.value
    }

    /// Collection time in epoch milliseconds, as supplied by the caller
    pub fn collection_time(&self) -> i64 {
        self.collection_time
    }

    /// Collection time as a UTC timestamp, if it is within chrono's range
    pub fn collected_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.collection_time)
    }

    pub fn ttl_seconds(&self) -> i32 {
        self.ttl_seconds
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn is_numeric(&self) -> bool {
        self.data_type.is_numeric()
    }

    pub fn is_string(&self) -> bool {
        self.data_type.is_string()
    }

    pub fn is_boolean(&self) -> bool {
        self.data_type.is_boolean()
    }

    /// Rollup strategy for this metric. Currently the same for every metric.
    pub fn rollup_type(&self) -> RollupType {
        RollupType::BfBasic
    }

    /// Replace the TTL. On error the metric is left unchanged.
    pub fn set_ttl(&mut self, ttl: TimeValue) -> Result<()> {
        self.set_ttl_seconds(ttl.to_seconds())
    }

    /// Replace the TTL with a value in seconds. On error the metric is left
    /// unchanged.
    pub fn set_ttl_seconds(&mut self, ttl_seconds: i64) -> Result<()> {
        self.ttl_seconds = validate_ttl(ttl_seconds)?;
        telemetry::record_ttl_update();
        Ok(())
    }

    /// Copy of this metric with a different TTL; `self` is not modified.
    pub fn with_ttl(&self, ttl: TimeValue) -> Result<Self> {
        let mut updated = self.clone();
        updated.set_ttl(ttl)?;
        Ok(updated)
    }
}

impl MetricRecord for Metric {
    fn locator(&self) -> &Locator {
        Metric::locator(self)
    }

    fn value(&self) -> &MetricValue {
        Metric::value(self)
    }

    fn collection_time(&self) -> i64 {
        Metric::collection_time(self)
    }

    fn ttl_seconds(&self) -> i32 {
        Metric::ttl_seconds(self)
    }

    fn data_type(&self) -> DataType {
        Metric::data_type(self)
    }

    fn unit(&self) -> Option<&str> {
        Metric::unit(self)
    }

    fn rollup_type(&self) -> RollupType {
        Metric::rollup_type(self)
    }
}

impl PartialEq for Metric {
    fn eq(&self, other: &Self) -> bool {
        self.locator == other.locator
            && self.collection_time == other.collection_time
            && self.ttl_seconds == other.ttl_seconds
            && self.data_type == other.data_type
            && self.unit == other.unit
    }
}

impl Eq for Metric {}

impl Hash for Metric {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.locator.hash(state);
        self.collection_time.hash(state);
        self.ttl_seconds.hash(state);
        self.data_type.hash(state);
        self.unit.hash(state);
    }
}

/// Renders `locator:value:data_type:ttl_seconds:unit`, with an empty unit
/// when none is set.
impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.locator,
            self.value,
            self.data_type,
            self.ttl_seconds,
            self.unit.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_value::TimeUnit;
    use serde_json::json;
    use std::collections::HashSet;

    fn locator() -> Locator {
        Locator::new("tenant1", "requests")
    }

    fn count_metric(value: impl Into<MetricValue>) -> Metric {
        Metric::new(
            locator(),
            value,
            1000,
            TimeValue::days(1),
            Some("count".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_int64_example() {
        let metric = count_metric(42i64);
        assert_eq!(metric.data_type(), DataType::Int64);
        assert!(metric.is_numeric());
        assert!(!metric.is_string());
        assert!(!metric.is_boolean());
        assert_eq!(metric.ttl_seconds(), 86400);
        assert_eq!(metric.collection_time(), 1000);
        assert_eq!(metric.unit(), Some("count"));
        assert_eq!(metric.to_string(), "tenant1.requests:42:Int64:86400:count");
    }

    #[test]
    fn test_display_without_unit() {
        let metric =
            Metric::with_ttl_seconds(locator(), "up", 5, 60, None).unwrap();
        assert_eq!(metric.to_string(), "tenant1.requests:up:String:60:");
        assert!(metric.is_string());
    }

    #[test]
    fn test_negative_ttl_rejected() {
        let err = Metric::new(locator(), 1i32, 0, TimeValue::seconds(-5), None).unwrap_err();
        assert_eq!(err, Error::InvalidTtl { provided: -5 });
    }

    #[test]
    fn test_ttl_bounds() {
        assert!(Metric::with_ttl_seconds(locator(), 1i32, 0, 0, None).is_err());
        assert!(Metric::with_ttl_seconds(locator(), 1i32, 0, MAX_TTL_SECONDS, None).is_err());
        assert_eq!(
            Metric::with_ttl_seconds(locator(), 1i32, 0, 1, None)
                .unwrap()
                .ttl_seconds(),
            1
        );
        assert_eq!(
            Metric::with_ttl_seconds(locator(), 1i32, 0, MAX_TTL_SECONDS - 1, None)
                .unwrap()
                .ttl_seconds(),
            i32::MAX - 1
        );
    }

    #[test]
    fn test_ttl_from_larger_units() {
        let metric = Metric::new(locator(), true, 0, TimeValue::new(2, TimeUnit::Hours), None)
            .unwrap();
        assert_eq!(metric.ttl_seconds(), 7200);

        // 30,000 days overflows the i32 seconds range
        assert!(Metric::new(locator(), true, 0, TimeValue::days(30_000), None).is_err());
    }

    #[test]
    fn test_failed_set_ttl_leaves_metric_unchanged() {
        let mut metric = count_metric(1.5);
        assert!(metric.set_ttl_seconds(0).is_err());
        assert!(metric.set_ttl(TimeValue::seconds(MAX_TTL_SECONDS)).is_err());
        assert_eq!(metric.ttl_seconds(), 86400);

        metric.set_ttl(TimeValue::seconds(120)).unwrap();
        assert_eq!(metric.ttl_seconds(), 120);
    }

    #[test]
    fn test_with_ttl_copies() {
        let original = count_metric(7i32);
        let updated = original.with_ttl(TimeValue::seconds(30)).unwrap();
        assert_eq!(original.ttl_seconds(), 86400);
        assert_eq!(updated.ttl_seconds(), 30);
        assert_ne!(original, updated);

        assert!(original.with_ttl(TimeValue::seconds(-1)).is_err());
    }

    #[test]
    fn test_equality_ignores_value() {
        let a = count_metric(1i64);
        let b = count_metric(2i64);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b), "equal metrics must hash the same");
    }

    #[test]
    fn test_equality_compares_data_type_and_unit() {
        assert_ne!(count_metric(1i64), count_metric(1i32));
        let no_unit = Metric::new(locator(), 1i64, 1000, TimeValue::days(1), None).unwrap();
        assert_ne!(count_metric(1i64), no_unit);
    }

    #[test]
    fn test_from_json() {
        let metric = Metric::from_json(
            locator(),
            &json!(0.25),
            1000,
            TimeValue::seconds(10),
            None,
        )
        .unwrap();
        assert_eq!(metric.data_type(), DataType::Float64);
        assert_eq!(metric.value(), &MetricValue::Float64(0.25));

        let err = Metric::from_json(locator(), &json!({"x": 1}), 1000, TimeValue::seconds(10), None)
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedType(_)));
    }

    #[test]
    fn test_rollup_and_record_contract() {
        fn read(record: &dyn MetricRecord) -> (String, RollupType) {
            (record.locator().to_string(), record.rollup_type())
        }
        let metric = count_metric(false);
        assert_eq!(
            read(&metric),
            ("tenant1.requests".to_string(), RollupType::BfBasic)
        );
    }

    #[test]
    fn test_collected_at() {
        let metric = count_metric(1i32);
        assert_eq!(metric.collected_at().unwrap().timestamp_millis(), 1000);
    }

    #[test]
    fn test_metric_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Metric>();
    }
}

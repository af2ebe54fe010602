//! Metric construction telemetry instruments and recording helpers.
//!
//! Instruments are created lazily against the global meter provider. This
//! crate never installs a provider; without one the recordings are no-ops.

use crate::types::DataType;
use opentelemetry::global;
use opentelemetry::metrics::Counter;
use opentelemetry::KeyValue;
use std::sync::OnceLock;

pub const REASON_UNSUPPORTED_TYPE: &str = "unsupported_type";
pub const REASON_INVALID_TTL: &str = "invalid_ttl";

struct MetricInstruments {
    created: Counter<u64>,
    rejected: Counter<u64>,
    ttl_updates: Counter<u64>,
}

fn instruments() -> &'static MetricInstruments {
    static INSTRUMENTS: OnceLock<MetricInstruments> = OnceLock::new();
    INSTRUMENTS.get_or_init(|| {
        let meter = global::meter("metric_core");
        MetricInstruments {
            created: meter
                .u64_counter("metric_core.metric.created")
                .with_description("Metrics constructed, by data type")
                .init(),
            rejected: meter
                .u64_counter("metric_core.metric.rejected")
                .with_description("Metric constructions or TTL updates rejected, by reason")
                .init(),
            ttl_updates: meter
                .u64_counter("metric_core.metric.ttl_updates")
                .with_description("Accepted TTL changes on existing metrics")
                .init(),
        }
    })
}

pub fn record_created(data_type: DataType) {
    instruments()
        .created
        .add(1, &[KeyValue::new("data_type", data_type.name())]);
}

pub fn record_rejected(reason: &'static str) {
    instruments()
        .rejected
        .add(1, &[KeyValue::new("reason", reason)]);
}

pub fn record_ttl_update() {
    instruments().ttl_updates.add(1, &[]);
}

//! Aggregate output consumed by the external rendering layer.

pub mod metrics;

pub use metrics::{write_series, MetricsSink, NullSink, TickMetrics, WealthSeries};

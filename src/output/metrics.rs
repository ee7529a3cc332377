//! Metrics Output
//!
//! Per-tick aggregate series recorded by the engine and handed to an
//! external sink for plotting. The sink is fully decoupled: it receives
//! three ordered sequences (index = tick number) and owns any chart,
//! heatmap, or 3-D projection built from them.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

/// Aggregates for a single tick.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TickMetrics {
    pub tick: u64,
    /// Sum of wealth over agents currently in the employer role.
    pub employer_wealth: f64,
    /// Sum of wealth over agents currently in the employee role.
    pub employee_wealth: f64,
    /// Satisfaction aggregate; formula is configured on the engine.
    pub satisfaction: f64,
}

/// Receiver for per-tick aggregates, for consumers that want the values as
/// they are produced rather than the whole series at the end.
pub trait MetricsSink {
    fn record_tick(&mut self, metrics: &TickMetrics);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl MetricsSink for NullSink {
    fn record_tick(&mut self, _metrics: &TickMetrics) {}
}

/// The three aggregate series, one value per tick.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WealthSeries {
    pub employer_wealth: Vec<f64>,
    pub employee_wealth: Vec<f64>,
    pub satisfaction: Vec<f64>,
}

impl WealthSeries {
    pub fn with_capacity(ticks: usize) -> Self {
        Self {
            employer_wealth: Vec::with_capacity(ticks),
            employee_wealth: Vec::with_capacity(ticks),
            satisfaction: Vec::with_capacity(ticks),
        }
    }

    pub fn push(&mut self, metrics: &TickMetrics) {
        self.employer_wealth.push(metrics.employer_wealth);
        self.employee_wealth.push(metrics.employee_wealth);
        self.satisfaction.push(metrics.satisfaction);
    }

    /// Number of recorded ticks.
    pub fn len(&self) -> usize {
        self.employer_wealth.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employer_wealth.is_empty()
    }
}

impl MetricsSink for WealthSeries {
    fn record_tick(&mut self, metrics: &TickMetrics) {
        self.push(metrics);
    }
}

/// Write the full series as pretty JSON for the rendering layer.
pub fn write_series(series: &WealthSeries, path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(series)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, json)
}

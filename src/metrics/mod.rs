use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

use crate::domain::shipment::ShipmentError;

// ============================================================================
// Metrics Module - Prometheus metrics for the tracker session
// ============================================================================
//
// Provides counters for:
// - Commands applied, by command name
// - Commands rejected, by command name and error kind
// - Exports and exported rows
// - Current number of tracked shipments
//
// Rendered on demand in the text exposition format; there is no HTTP
// endpoint.
// ============================================================================

/// Metrics registry owned by one tracker session
pub struct Metrics {
    registry: Registry,

    // Command Metrics
    pub commands_total: IntCounterVec,
    pub commands_rejected: IntCounterVec,

    // Export Metrics
    pub exports_total: IntCounter,
    pub exported_rows_total: IntCounter,

    // Store Metrics
    pub shipments_tracked: IntGauge,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        // Command Metrics
        let commands_total = IntCounterVec::new(
            Opts::new("shipment_commands_total", "Shipment commands applied"),
            &["command"],
        )?;
        registry.register(Box::new(commands_total.clone()))?;

        let commands_rejected = IntCounterVec::new(
            Opts::new("shipment_commands_rejected_total", "Shipment commands rejected"),
            &["command", "kind"],
        )?;
        registry.register(Box::new(commands_rejected.clone()))?;

        // Export Metrics
        let exports_total = IntCounter::new("shipment_exports_total", "Exports generated")?;
        registry.register(Box::new(exports_total.clone()))?;

        let exported_rows_total = IntCounter::new(
            "shipment_exported_rows_total",
            "Shipment rows written across all exports",
        )?;
        registry.register(Box::new(exported_rows_total.clone()))?;

        // Store Metrics
        let shipments_tracked = IntGauge::new("shipments_tracked", "Shipments currently in the store")?;
        registry.register(Box::new(shipments_tracked.clone()))?;

        Ok(Self {
            registry,
            commands_total,
            commands_rejected,
            exports_total,
            exported_rows_total,
            shipments_tracked,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Helper to record a command outcome
    pub fn record_command<T>(&self, command: &str, result: &Result<T, ShipmentError>) {
        match result {
            Ok(_) => self.commands_total.with_label_values(&[command]).inc(),
            Err(e) => self
                .commands_rejected
                .with_label_values(&[command, e.kind().as_str()])
                .inc(),
        }
    }

    /// Helper to record a generated export
    pub fn record_export(&self, rows: usize) {
        self.exports_total.inc();
        self.exported_rows_total.inc_by(rows as u64);
    }

    pub fn set_shipments_tracked(&self, count: usize) {
        self.shipments_tracked.set(count as i64);
    }

    /// Render every metric in the Prometheus text format
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

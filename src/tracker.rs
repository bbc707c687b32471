use serde::Serialize;

use crate::config::TrackerConfig;
use crate::domain::shipment::{
    Confirmation, Shipment, ShipmentDetails, ShipmentError, ShipmentId, ShipmentStatus, StatusKind,
};
use crate::export::{self, ExportError, ExportFile};
use crate::form::{FieldErrors, ShipmentForm};
use crate::metrics::Metrics;
use crate::query::{ShipmentQuery, StatusFilter};
use crate::stats::ShipmentStats;
use crate::store::{Clock, ShipmentStore};
use crate::workflow::{ConfirmationReceipt, ConfirmationWorkflow, WorkflowState};

// ============================================================================
// Shipment Tracker - Session State Holder
// ============================================================================
//
// Owns everything one session needs: the store, the current query, the
// confirmation prompt and the metrics registry. The view layer reads
// `visible()` / `snapshot()` and calls the command methods.
//
// ============================================================================

/// Outcome of saving the add/edit form
#[derive(Debug)]
pub enum FormOutcome {
    Saved(Shipment),
    /// Field problems to show inline
    Invalid(FieldErrors),
    /// The store refused the change
    Rejected(ShipmentError),
}

/// Read-only view model handed to the presentation layer
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerSnapshot<'a> {
    pub query: &'a ShipmentQuery,
    pub shipments: Vec<&'a Shipment>,
    pub stats: ShipmentStats,
    pub confirmation: &'a WorkflowState,
}

pub struct ShipmentTracker {
    config: TrackerConfig,
    store: ShipmentStore,
    query: ShipmentQuery,
    workflow: ConfirmationWorkflow,
    metrics: Metrics,
}

impl ShipmentTracker {
    pub fn new(config: TrackerConfig) -> anyhow::Result<Self> {
        let store = if config.seed_sample_data {
            ShipmentStore::seeded()
        } else {
            ShipmentStore::new()
        };

        let metrics = Metrics::new()?;
        metrics.set_shipments_tracked(store.len());

        tracing::info!(
            shipments = store.len(),
            seeded = config.seed_sample_data,
            "Shipment tracker session started"
        );

        Ok(Self {
            config,
            store,
            query: ShipmentQuery::default(),
            workflow: ConfirmationWorkflow::new(),
            metrics,
        })
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.store = self.store.with_clock(clock);
        self
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn store(&self) -> &ShipmentStore {
        &self.store
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    // ------------------------------------------------------------------------
    // Query
    // ------------------------------------------------------------------------

    pub fn query(&self) -> &ShipmentQuery {
        &self.query
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        tracing::debug!(search = %self.query.search, "Search changed");
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.query.status = status;
        tracing::debug!(filter = ?status, "Status filter changed");
    }

    /// Shipments matching the current query, in store order
    pub fn visible(&self) -> Vec<&Shipment> {
        self.query.apply(self.store.shipments())
    }

    /// Summary over the whole store, independent of the query
    pub fn stats(&self) -> ShipmentStats {
        ShipmentStats::from_shipments(self.store.shipments())
    }

    pub fn snapshot(&self) -> TrackerSnapshot<'_> {
        TrackerSnapshot {
            query: &self.query,
            shipments: self.visible(),
            stats: self.stats(),
            confirmation: self.workflow.state(),
        }
    }

    pub fn snapshot_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }

    // ------------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------------

    pub fn create(&mut self, details: ShipmentDetails) -> Result<Shipment, ShipmentError> {
        let result = self.store.create(details);
        self.record("create", &result);
        result
    }

    pub fn update(
        &mut self,
        id: ShipmentId,
        details: ShipmentDetails,
        status: Option<ShipmentStatus>,
    ) -> Result<Shipment, ShipmentError> {
        let result = self.store.update(id, details, status);
        self.record("update", &result);
        result
    }

    pub fn delete(&mut self, id: ShipmentId) -> Option<Shipment> {
        let removed = self.store.delete(id);
        if removed.is_some() {
            self.metrics.commands_total.with_label_values(&["delete"]).inc();
            if self.workflow.shipment_id() == Some(id) {
                self.workflow.cancel();
            }
        }
        self.metrics.set_shipments_tracked(self.store.len());
        removed
    }

    pub fn reject(&mut self, id: ShipmentId) -> Result<Shipment, ShipmentError> {
        let result = self.store.reject(id);
        self.record("reject", &result);
        result
    }

    pub fn reopen(&mut self, id: ShipmentId) -> Result<Shipment, ShipmentError> {
        let result = self.store.reopen(id);
        self.record("reopen", &result);
        result
    }

    /// Create when `editing` is `None`, otherwise update that shipment with
    /// the form's status as an override
    pub fn save_form(&mut self, editing: Option<ShipmentId>, form: &ShipmentForm) -> FormOutcome {
        let submission = match form.validate() {
            Ok(submission) => submission,
            Err(errors) => return FormOutcome::Invalid(errors),
        };

        let result = match editing {
            None => self.create(submission.details),
            Some(id) => {
                let status = match (submission.status, submission.confirmation) {
                    (StatusKind::Confirmed, Some((confirmed_by, delivery))) => {
                        // Keep the original date when the record was already confirmed
                        let confirmed_on = self
                            .store
                            .get(id)
                            .and_then(|s| s.confirmation())
                            .map(|c| c.confirmed_on)
                            .unwrap_or_else(|| self.store.today());
                        ShipmentStatus::Confirmed(Confirmation {
                            confirmed_on,
                            confirmed_by,
                            delivery,
                        })
                    }
                    (StatusKind::Rejected, _) => ShipmentStatus::Rejected,
                    _ => ShipmentStatus::Pending,
                };
                self.update(id, submission.details, Some(status))
            }
        };

        match result {
            Ok(shipment) => FormOutcome::Saved(shipment),
            Err(e) => FormOutcome::Rejected(e),
        }
    }

    // ------------------------------------------------------------------------
    // Confirmation Workflow
    // ------------------------------------------------------------------------

    pub fn confirmation(&self) -> &ConfirmationWorkflow {
        &self.workflow
    }

    /// Access to the open prompt's input setters
    pub fn confirmation_mut(&mut self) -> &mut ConfirmationWorkflow {
        &mut self.workflow
    }

    pub fn begin_confirmation(&mut self, id: ShipmentId) -> Result<(), ShipmentError> {
        let result = self.workflow.begin(&self.store, id);
        if let Err(e) = &result {
            tracing::warn!(shipment_id = %id, error = %e, "Cannot start confirmation");
        }
        result
    }

    pub fn submit_confirmation(&mut self) -> Result<ConfirmationReceipt, ShipmentError> {
        let result = self.workflow.submit(&mut self.store);
        self.record("confirm", &result);
        result
    }

    pub fn cancel_confirmation(&mut self) {
        self.workflow.cancel();
    }

    // ------------------------------------------------------------------------
    // Export
    // ------------------------------------------------------------------------

    /// Export the current filtered view, named with today's date
    pub fn export(&self) -> Result<ExportFile, ExportError> {
        let file = export::export_file(&self.config.export, self.visible(), self.store.today())?;
        self.metrics.record_export(file.rows);

        tracing::info!(
            file_name = %file.file_name,
            rows = file.rows,
            bytes = file.bytes.len(),
            "Export generated"
        );
        Ok(file)
    }

    pub fn metrics_text(&self) -> anyhow::Result<String> {
        self.metrics.render()
    }

    fn record<T>(&self, command: &str, result: &Result<T, ShipmentError>) {
        self.metrics.record_command(command, result);
        self.metrics.set_shipments_tracked(self.store.len());
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

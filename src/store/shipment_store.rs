use chrono::{NaiveDate, Utc};

use crate::domain::shipment::{
    ConfirmationRequest, Shipment, ShipmentCommand, ShipmentDetails, ShipmentError, ShipmentEvent,
    ShipmentId, ShipmentStatus,
};
use crate::domain::Aggregate;

use super::seed::sample_shipments;

// ============================================================================
// Shipment Store
// ============================================================================
//
// Orchestrates: Command → Aggregate → Events → replace record in collection
//
// Owns the ordered collection (most recent first). Every command is
// all-or-nothing: the record is only replaced once all of its events
// applied cleanly.
//
// ============================================================================

/// Source of "today" for confirmation stamps
pub type Clock = fn() -> NaiveDate;

fn utc_today() -> NaiveDate {
    Utc::now().date_naive()
}

#[derive(Debug, Clone)]
pub struct ShipmentStore {
    shipments: Vec<Shipment>,
    clock: Clock,
}

impl Default for ShipmentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ShipmentStore {
    pub fn new() -> Self {
        Self {
            shipments: Vec::new(),
            clock: utc_today,
        }
    }

    /// Store preloaded with the two sample shipments
    pub fn seeded() -> Self {
        Self {
            shipments: sample_shipments(),
            clock: utc_today,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    pub fn get(&self, id: ShipmentId) -> Option<&Shipment> {
        self.shipments.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }

    /// Create a pending shipment and put it at the head of the collection
    pub fn create(&mut self, details: ShipmentDetails) -> Result<Shipment, ShipmentError> {
        let command = ShipmentCommand::CreateShipment { details };
        let event = Shipment::initiate(&command).inspect_err(|e| {
            tracing::warn!(command = command.name(), error = %e, "Shipment command rejected");
        })?;

        let mut id = ShipmentId::generate();
        while self.get(id).is_some() {
            id = ShipmentId::generate();
        }

        let shipment = Shipment::apply_first_event(id, &event)?;
        log_events(id, std::slice::from_ref(&event));

        tracing::info!(
            shipment_id = %id,
            po = %shipment.details.purchase_order,
            "Shipment created"
        );

        self.shipments.insert(0, shipment.clone());
        Ok(shipment)
    }

    /// Replace every detail field; `status` optionally overrides the status too
    pub fn update(
        &mut self,
        id: ShipmentId,
        details: ShipmentDetails,
        status: Option<ShipmentStatus>,
    ) -> Result<Shipment, ShipmentError> {
        self.execute(id, ShipmentCommand::ReviseShipment { details, status })
    }

    /// Remove a shipment. Unknown ids are ignored.
    pub fn delete(&mut self, id: ShipmentId) -> Option<Shipment> {
        let index = self.shipments.iter().position(|s| s.id == id)?;
        let removed = self.shipments.remove(index);

        tracing::info!(shipment_id = %id, "Shipment deleted");
        Some(removed)
    }

    /// Confirm a pending shipment, stamping today's date
    pub fn confirm(
        &mut self,
        id: ShipmentId,
        request: ConfirmationRequest,
    ) -> Result<Shipment, ShipmentError> {
        let confirmed_on = self.today();
        self.execute(
            id,
            ShipmentCommand::ConfirmShipment {
                confirmed_by: request.confirmed_by,
                tracking_ref: request.tracking_ref,
                handed_to_user: request.handed_to_user,
                confirmed_on,
            },
        )
    }

    /// Mark as rejected from any status, dropping any confirmation
    pub fn reject(&mut self, id: ShipmentId) -> Result<Shipment, ShipmentError> {
        self.execute(id, ShipmentCommand::RejectShipment)
    }

    /// Put back to pending from any status, dropping any confirmation
    pub fn reopen(&mut self, id: ShipmentId) -> Result<Shipment, ShipmentError> {
        self.execute(id, ShipmentCommand::ReopenShipment)
    }

    /// Handle a command against an existing shipment
    fn execute(
        &mut self,
        id: ShipmentId,
        command: ShipmentCommand,
    ) -> Result<Shipment, ShipmentError> {
        let Some(index) = self.shipments.iter().position(|s| s.id == id) else {
            tracing::warn!(shipment_id = %id, command = command.name(), "Shipment not found");
            return Err(ShipmentError::NotFound(id));
        };

        let (next, events) = self.shipments[index].execute(&command).inspect_err(|e| {
            tracing::warn!(
                shipment_id = %id,
                command = command.name(),
                error = %e,
                "Shipment command rejected"
            );
        })?;

        log_events(id, &events);
        tracing::info!(
            shipment_id = %id,
            command = command.name(),
            status = %next.status_kind(),
            version = next.version(),
            "Shipment command applied"
        );

        self.shipments[index] = next.clone();
        Ok(next)
    }
}

fn log_events(id: ShipmentId, events: &[ShipmentEvent]) {
    for event in events {
        tracing::debug!(shipment_id = %id, event_type = event.event_type(), "Applied event");
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shipment::{Delivery, StatusKind};
    use std::collections::HashSet;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    fn details(description: &str, po: &str) -> ShipmentDetails {
        ShipmentDetails {
            description: description.to_string(),
            qty: 10,
            recipient: "PT. Sumber Rejeki".to_string(),
            purchase_order: po.to_string(),
            ship_date: NaiveDate::from_ymd_opt(2025, 1, 30).unwrap(),
            branch: "Bandung".to_string(),
        }
    }

    fn request(by: &str, tracking: &str, handed_to_user: bool) -> ConfirmationRequest {
        ConfirmationRequest {
            confirmed_by: by.to_string(),
            tracking_ref: tracking.to_string(),
            handed_to_user,
        }
    }

    fn store() -> ShipmentStore {
        ShipmentStore::new().with_clock(fixed_today)
    }

    #[test]
    fn test_create_inserts_at_head_as_pending() {
        let mut store = store();
        let first = store.create(details("Semen", "PO-1")).unwrap();
        let second = store.create(details("Pasir", "PO-2")).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.shipments()[0].id, second.id);
        assert_eq!(store.shipments()[1].id, first.id);
        assert!(store.shipments().iter().all(|s| s.is_pending()));
    }

    #[test]
    fn test_created_ids_are_unique() {
        let mut store = store();
        for i in 0..50 {
            store.create(details("Baut", &format!("PO-{i}"))).unwrap();
        }
        let ids: HashSet<_> = store.shipments().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_invalid_create_leaves_store_unchanged() {
        let mut store = store();
        let mut bad = details("Semen", "PO-1");
        bad.qty = 0;

        assert_eq!(store.create(bad).unwrap_err(), ShipmentError::InvalidQuantity(0));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_preserves_id_and_position() {
        let mut store = store();
        let a = store.create(details("Semen", "PO-1")).unwrap();
        store.create(details("Pasir", "PO-2")).unwrap();

        let updated = store.update(a.id, details("Semen Putih", "PO-1A"), None).unwrap();
        assert_eq!(updated.id, a.id);
        assert_eq!(store.shipments()[1].details.description, "Semen Putih");
        assert_eq!(store.shipments()[1].details.purchase_order, "PO-1A");
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let mut store = store();
        let missing = ShipmentId::generate();
        let result = store.update(missing, details("Semen", "PO-1"), None);
        assert_eq!(result.unwrap_err(), ShipmentError::NotFound(missing));
    }

    #[test]
    fn test_delete_removes_and_ignores_unknown() {
        let mut store = store();
        let a = store.create(details("Semen", "PO-1")).unwrap();

        assert!(store.delete(ShipmentId::generate()).is_none());
        assert_eq!(store.len(), 1);

        assert_eq!(store.delete(a.id).unwrap().id, a.id);
        assert!(store.is_empty());
        assert!(store.delete(a.id).is_none());
    }

    #[test]
    fn test_confirm_stamps_clock_date() {
        let mut store = store();
        let a = store.create(details("Semen", "PO-1")).unwrap();

        let confirmed = store.confirm(a.id, request("Budi", "RSI-001", false)).unwrap();
        let confirmation = confirmed.confirmation().unwrap();
        assert_eq!(confirmation.confirmed_on, fixed_today());
        assert_eq!(confirmation.confirmed_by, "Budi");
        assert_eq!(confirmation.delivery, Delivery::Tracking("RSI-001".to_string()));
        assert_eq!(store.get(a.id).unwrap().status, confirmed.status);
    }

    #[test]
    fn test_confirm_non_pending_reports_and_keeps_state() {
        let mut store = store();
        let a = store.create(details("Semen", "PO-1")).unwrap();
        store.confirm(a.id, request("Budi", "RSI-001", false)).unwrap();
        let before = store.get(a.id).cloned();

        let result = store.confirm(a.id, request("Sari", "RSI-002", false));
        assert_eq!(result.unwrap_err(), ShipmentError::NotPending(StatusKind::Confirmed));
        assert_eq!(store.get(a.id).cloned(), before);
    }

    #[test]
    fn test_confirm_missing_input_keeps_state() {
        let mut store = store();
        let a = store.create(details("Semen", "PO-1")).unwrap();

        assert_eq!(
            store.confirm(a.id, request("", "RSI-001", false)).unwrap_err(),
            ShipmentError::MissingConfirmer
        );
        assert_eq!(
            store.confirm(a.id, request("Budi", "", false)).unwrap_err(),
            ShipmentError::MissingTrackingRef
        );
        assert!(store.get(a.id).unwrap().is_pending());
    }

    #[test]
    fn test_reject_from_any_status() {
        let mut store = store();
        let a = store.create(details("Semen", "PO-1")).unwrap();
        let b = store.create(details("Pasir", "PO-2")).unwrap();
        store.confirm(b.id, request("Budi", "", true)).unwrap();

        for id in [a.id, b.id] {
            let rejected = store.reject(id).unwrap();
            assert_eq!(rejected.status, ShipmentStatus::Rejected);
            assert!(rejected.confirmation().is_none());
        }
        // Rejecting twice is harmless
        assert_eq!(store.reject(a.id).unwrap().status, ShipmentStatus::Rejected);
    }

    #[test]
    fn test_reopen_allows_confirming_again() {
        let mut store = store();
        let a = store.create(details("Semen", "PO-1")).unwrap();
        store.reject(a.id).unwrap();
        store.reopen(a.id).unwrap();

        assert!(store.confirm(a.id, request("Budi", "RSI-3", false)).is_ok());
    }

    #[test]
    fn test_seeded_store_contents() {
        let store = ShipmentStore::seeded();
        assert_eq!(store.len(), 2);
        assert_eq!(store.shipments()[0].details.purchase_order, "PO-2025-001");
        assert!(store.shipments()[0].is_pending());
        assert_eq!(store.shipments()[1].status_kind(), StatusKind::Confirmed);
    }
}

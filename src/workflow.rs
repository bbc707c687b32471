use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::shipment::{ConfirmationRequest, Shipment, ShipmentError, ShipmentId};
use crate::locale;
use crate::store::ShipmentStore;

// ============================================================================
// Confirmation Workflow
// ============================================================================
//
// Idle ──begin──▶ Collecting ──submit ok──▶ Idle
//                    │  ▲
//                    │  └── submit with missing input (stays, re-prompt)
//                    └──cancel──▶ Idle
//
// Input is checked here for the prompt, then again by the store.
//
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WorkflowState {
    #[default]
    Idle,
    Collecting {
        shipment_id: ShipmentId,
        confirmer_name: String,
        tracking_ref: String,
        handed_to_user: bool,
    },
}

/// Summary shown after a successful confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmationReceipt {
    pub shipment_id: ShipmentId,
    pub description: String,
    pub purchase_order: String,
    pub recipient: String,
    pub confirmed_on: NaiveDate,
    /// Long id-ID rendering of `confirmed_on`
    pub confirmed_on_label: String,
    pub confirmed_by: String,
    pub tracking_label: String,
}

impl ConfirmationReceipt {
    /// `None` unless the shipment is confirmed
    pub fn from_shipment(shipment: &Shipment) -> Option<Self> {
        let confirmation = shipment.confirmation()?;
        Some(Self {
            shipment_id: shipment.id,
            description: shipment.details.description.clone(),
            purchase_order: shipment.details.purchase_order.clone(),
            recipient: shipment.details.recipient.clone(),
            confirmed_on: confirmation.confirmed_on,
            confirmed_on_label: locale::format_date_long(confirmation.confirmed_on),
            confirmed_by: confirmation.confirmed_by.clone(),
            tracking_label: confirmation.delivery.label().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmationWorkflow {
    state: WorkflowState,
}

impl ConfirmationWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn is_collecting(&self) -> bool {
        matches!(self.state, WorkflowState::Collecting { .. })
    }

    pub fn shipment_id(&self) -> Option<ShipmentId> {
        match &self.state {
            WorkflowState::Collecting { shipment_id, .. } => Some(*shipment_id),
            WorkflowState::Idle => None,
        }
    }

    /// Open the prompt for a pending shipment with empty input
    pub fn begin(&mut self, store: &ShipmentStore, id: ShipmentId) -> Result<(), ShipmentError> {
        let shipment = store.get(id).ok_or(ShipmentError::NotFound(id))?;
        if !shipment.is_pending() {
            return Err(ShipmentError::NotPending(shipment.status_kind()));
        }

        tracing::debug!(shipment_id = %id, "Confirmation started");
        self.state = WorkflowState::Collecting {
            shipment_id: id,
            confirmer_name: String::new(),
            tracking_ref: String::new(),
            handed_to_user: false,
        };
        Ok(())
    }

    pub fn set_confirmer_name(&mut self, name: impl Into<String>) {
        if let WorkflowState::Collecting { confirmer_name, .. } = &mut self.state {
            *confirmer_name = name.into();
        }
    }

    pub fn set_tracking_ref(&mut self, reference: impl Into<String>) {
        if let WorkflowState::Collecting { tracking_ref, .. } = &mut self.state {
            *tracking_ref = reference.into();
        }
    }

    pub fn set_handed_to_user(&mut self, handed: bool) {
        if let WorkflowState::Collecting { handed_to_user, .. } = &mut self.state {
            *handed_to_user = handed;
        }
    }

    /// Validate the prompt and commit the confirmation.
    ///
    /// Missing input keeps the prompt open. A store-side failure (the
    /// shipment vanished or is no longer pending) closes it.
    pub fn submit(
        &mut self,
        store: &mut ShipmentStore,
    ) -> Result<ConfirmationReceipt, ShipmentError> {
        let WorkflowState::Collecting {
            shipment_id,
            confirmer_name,
            tracking_ref,
            handed_to_user,
        } = &self.state
        else {
            return Err(ShipmentError::NoConfirmationInProgress);
        };

        if confirmer_name.trim().is_empty() {
            return Err(ShipmentError::MissingConfirmer);
        }
        if !*handed_to_user && tracking_ref.trim().is_empty() {
            return Err(ShipmentError::MissingTrackingRef);
        }

        let id = *shipment_id;
        let request = ConfirmationRequest {
            confirmed_by: confirmer_name.clone(),
            tracking_ref: tracking_ref.clone(),
            handed_to_user: *handed_to_user,
        };

        self.state = WorkflowState::Idle;
        let confirmed = store.confirm(id, request)?;

        ConfirmationReceipt::from_shipment(&confirmed).ok_or(ShipmentError::NotInitialized)
    }

    /// Close the prompt without touching the store
    pub fn cancel(&mut self) {
        if let Some(id) = self.shipment_id() {
            tracing::debug!(shipment_id = %id, "Confirmation cancelled");
        }
        self.state = WorkflowState::Idle;
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

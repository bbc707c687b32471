use serde::{Deserialize, Serialize};

use crate::domain::aggregate::Aggregate;
use super::commands::ShipmentCommand;
use super::errors::ShipmentError;
use super::events::*;
use super::value_objects::{
    Confirmation, Delivery, ShipmentDetails, ShipmentId, ShipmentStatus, StatusKind,
};

// ============================================================================
// Shipment Aggregate - Domain Logic
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipment {
    // Identity
    pub id: ShipmentId,
    #[serde(skip)]
    pub version: u64,

    // Current State (derived from events)
    #[serde(flatten)]
    pub details: ShipmentDetails,
    #[serde(flatten)]
    pub status: ShipmentStatus,
}

impl Shipment {
    pub fn status_kind(&self) -> StatusKind {
        self.status.kind()
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, ShipmentStatus::Pending)
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        self.status.confirmation()
    }

    /// Validate the editable fields
    pub fn validate_details(details: &ShipmentDetails) -> Result<(), ShipmentError> {
        if details.description.trim().is_empty() {
            return Err(ShipmentError::EmptyDescription);
        }
        if details.qty <= 0 {
            return Err(ShipmentError::InvalidQuantity(details.qty));
        }
        if details.recipient.trim().is_empty() {
            return Err(ShipmentError::EmptyRecipient);
        }
        if details.purchase_order.trim().is_empty() {
            return Err(ShipmentError::EmptyPurchaseOrder);
        }
        if details.branch.trim().is_empty() {
            return Err(ShipmentError::EmptyBranch);
        }
        Ok(())
    }

    /// A directly supplied status must still satisfy the confirmation invariant
    fn validate_status(status: &ShipmentStatus) -> Result<(), ShipmentError> {
        if let ShipmentStatus::Confirmed(confirmation) = status {
            if confirmation.confirmed_by.trim().is_empty() {
                return Err(ShipmentError::IncompleteConfirmation);
            }
            if let Delivery::Tracking(reference) = &confirmation.delivery {
                if reference.trim().is_empty() {
                    return Err(ShipmentError::IncompleteConfirmation);
                }
            }
        }
        Ok(())
    }
}

// ============================================================================
// Aggregate Trait Implementation
// ============================================================================

impl Aggregate for Shipment {
    type Id = ShipmentId;
    type Event = ShipmentEvent;
    type Command = ShipmentCommand;
    type Error = ShipmentError;

    fn initiate(command: &Self::Command) -> Result<Self::Event, Self::Error> {
        match command {
            ShipmentCommand::CreateShipment { details } => {
                Self::validate_details(details)?;

                Ok(ShipmentEvent::Created(ShipmentCreated {
                    details: details.clone(),
                }))
            }
            _ => Err(ShipmentError::NotInitialized),
        }
    }

    fn apply_first_event(id: Self::Id, event: &Self::Event) -> Result<Self, Self::Error> {
        match event {
            ShipmentEvent::Created(e) => Ok(Self {
                id,
                version: 1,
                details: e.details.clone(),
                status: ShipmentStatus::Pending,
            }),
            _ => Err(ShipmentError::NotInitialized),
        }
    }

    fn apply_event(&mut self, event: &Self::Event) -> Result<(), Self::Error> {
        match event {
            ShipmentEvent::Created(_) => {
                // First event already applied
            }
            ShipmentEvent::DetailsRevised(e) => {
                self.details = e.details.clone();
            }
            ShipmentEvent::StatusOverridden(e) => {
                self.status = e.status.clone();
            }
            ShipmentEvent::Confirmed(e) => {
                self.status = ShipmentStatus::Confirmed(e.confirmation.clone());
            }
            ShipmentEvent::Rejected => {
                self.status = ShipmentStatus::Rejected;
            }
            ShipmentEvent::Reopened => {
                self.status = ShipmentStatus::Pending;
            }
        }

        self.version += 1;
        Ok(())
    }

    fn handle_command(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            ShipmentCommand::CreateShipment { .. } => Err(ShipmentError::NotInitialized),

            ShipmentCommand::ReviseShipment { details, status } => {
                Self::validate_details(details)?;

                let mut events = vec![ShipmentEvent::DetailsRevised(ShipmentDetailsRevised {
                    details: details.clone(),
                })];

                if let Some(status) = status {
                    Self::validate_status(status)?;
                    events.push(ShipmentEvent::StatusOverridden(ShipmentStatusOverridden {
                        status: status.clone(),
                    }));
                }

                Ok(events)
            }

            ShipmentCommand::ConfirmShipment {
                confirmed_by,
                tracking_ref,
                handed_to_user,
                confirmed_on,
            } => {
                if !self.is_pending() {
                    return Err(ShipmentError::NotPending(self.status_kind()));
                }
                if confirmed_by.trim().is_empty() {
                    return Err(ShipmentError::MissingConfirmer);
                }

                let delivery = if *handed_to_user {
                    Delivery::HandedToUser
                } else if tracking_ref.trim().is_empty() {
                    return Err(ShipmentError::MissingTrackingRef);
                } else {
                    Delivery::Tracking(tracking_ref.clone())
                };

                Ok(vec![ShipmentEvent::Confirmed(ShipmentConfirmed {
                    confirmation: Confirmation {
                        confirmed_on: *confirmed_on,
                        confirmed_by: confirmed_by.clone(),
                        delivery,
                    },
                })])
            }

            // Also serves as "undo confirmation", so it is allowed from any status
            ShipmentCommand::RejectShipment => Ok(vec![ShipmentEvent::Rejected]),

            ShipmentCommand::ReopenShipment => Ok(vec![ShipmentEvent::Reopened]),
        }
    }

    fn aggregate_id(&self) -> Self::Id {
        self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

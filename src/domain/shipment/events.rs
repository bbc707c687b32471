use serde::{Deserialize, Serialize};

use super::value_objects::{Confirmation, ShipmentDetails, ShipmentStatus};

// ============================================================================
// Shipment Events - Facts emitted by the Shipment aggregate
// ============================================================================

/// Shipment Event - Union type for all shipment events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ShipmentEvent {
    Created(ShipmentCreated),
    DetailsRevised(ShipmentDetailsRevised),
    StatusOverridden(ShipmentStatusOverridden),
    Confirmed(ShipmentConfirmed),
    Rejected,
    Reopened,
}

impl ShipmentEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            ShipmentEvent::Created(_) => "ShipmentCreated",
            ShipmentEvent::DetailsRevised(_) => "ShipmentDetailsRevised",
            ShipmentEvent::StatusOverridden(_) => "ShipmentStatusOverridden",
            ShipmentEvent::Confirmed(_) => "ShipmentConfirmed",
            ShipmentEvent::Rejected => "ShipmentRejected",
            ShipmentEvent::Reopened => "ShipmentReopened",
        }
    }
}

// ============================================================================
// Individual Event Types
// ============================================================================

/// Shipment Created - Initial event, always pending
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShipmentCreated {
    pub details: ShipmentDetails,
}

/// Shipment Details Revised - All editable fields replaced
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShipmentDetailsRevised {
    pub details: ShipmentDetails,
}

/// Shipment Status Overridden - Status set directly from the edit form
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShipmentStatusOverridden {
    pub status: ShipmentStatus,
}

/// Shipment Confirmed - Pending shipment accepted by the recipient side
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ShipmentConfirmed {
    pub confirmation: Confirmation,
}

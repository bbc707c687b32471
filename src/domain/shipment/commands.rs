use chrono::NaiveDate;

use super::value_objects::{ShipmentDetails, ShipmentStatus};

// ============================================================================
// Shipment Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum ShipmentCommand {
    CreateShipment {
        details: ShipmentDetails,
    },
    /// Replace every detail field, optionally overriding the status as well
    ReviseShipment {
        details: ShipmentDetails,
        status: Option<ShipmentStatus>,
    },
    ConfirmShipment {
        confirmed_by: String,
        tracking_ref: String,
        handed_to_user: bool,
        confirmed_on: NaiveDate,
    },
    RejectShipment,
    ReopenShipment,
}

impl ShipmentCommand {
    /// Short name used in logs and metric labels
    pub fn name(&self) -> &'static str {
        match self {
            ShipmentCommand::CreateShipment { .. } => "create",
            ShipmentCommand::ReviseShipment { .. } => "update",
            ShipmentCommand::ConfirmShipment { .. } => "confirm",
            ShipmentCommand::RejectShipment => "reject",
            ShipmentCommand::ReopenShipment => "reopen",
        }
    }
}

// ============================================================================
// Shipment Domain - Business Logic for the Shipment Aggregate
// ============================================================================
//
// This module contains ALL Shipment-specific code:
// - Value objects (ShipmentId, ShipmentDetails, ShipmentStatus, Delivery)
// - Events (ShipmentCreated, ShipmentConfirmed, etc.)
// - Commands (CreateShipment, ConfirmShipment, etc.)
// - Errors (ShipmentError enum)
// - Aggregate (Shipment with the status state machine)
//
// ============================================================================

pub mod value_objects;
pub mod events;
pub mod commands;
pub mod errors;
pub mod aggregate;

// Re-export for convenience
pub use value_objects::*;
pub use events::*;
pub use commands::*;
pub use errors::*;
pub use aggregate::*;
